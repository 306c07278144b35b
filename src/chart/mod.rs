//! Chart renderers

pub mod bar;

pub use bar::{
    format_label, last_occupied_row, BarChart, BarChartOptions, BarLayout, BarRow, OverflowPolicy,
    DEFAULT_LABEL_WIDTH, DEFAULT_SYMBOL,
};
