//! Character grid: storage, border-relative addressing, and framing

pub mod border;
pub mod buffer;
pub mod coords;

pub use border::BorderOverlay;
pub use buffer::{GridBuffer, BLANK};
pub use coords::{Axis, CoordinateTranslator, Selector};
