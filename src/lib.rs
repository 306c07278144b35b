//! Terminal bar charts rendered into a fixed-size character grid.
//!
//! ```no_run
//! use termplot::{BarChartOptions, Figure};
//!
//! let mut fig = Figure::with_dims(12, 40)?;
//! fig.plot_bar_chart(&[1.0, 2.0, 4.0], &BarChartOptions::default())?;
//! fig.show();
//! # Ok::<(), termplot::PlotError>(())
//! ```

pub mod chart;
pub mod figure;
pub mod grid;
pub mod input;
pub mod types;

pub use chart::{BarChartOptions, BarLayout, OverflowPolicy};
pub use figure::{Dimensions, Figure, FigureConfig, FigureState};
pub use types::{PlotError, Result};
