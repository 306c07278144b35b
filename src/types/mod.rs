//! Type definitions for termplot

mod error;

pub use error::*;
