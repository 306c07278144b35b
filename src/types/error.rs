use thiserror::Error;

/// termplot error types
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlotError {
    /// Buffer or border smaller than the minimum viable size
    #[error("invalid dimensions: {rows}x{cols} (minimum {min_rows}x{min_cols})")]
    InvalidDimensions {
        rows: usize,
        cols: usize,
        min_rows: usize,
        min_cols: usize,
    },

    /// Absolute or translated coordinate outside the buffer
    #[error("index out of bounds: {index} on axis of extent {extent}")]
    IndexOutOfBounds { index: isize, extent: usize },

    /// Slice write whose length differs from the target span
    #[error("length mismatch: expected {expected} cells, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// Chart bounds with zero (or negative) span
    #[error("degenerate bounds: ({lower}, {upper})")]
    DegenerateBounds { lower: f64, upper: f64 },

    /// Label column leaves no room for bars
    #[error("label too wide: {label_width} columns reserved of {drawable_cols} drawable")]
    LabelTooWide {
        label_width: usize,
        drawable_cols: usize,
    },

    /// More data points than drawable rows
    #[error("too many rows: {data_rows} data points for {drawable_rows} drawable rows")]
    TooManyRows {
        data_rows: usize,
        drawable_rows: usize,
    },

    /// Second chart render on an already rendered figure
    #[error("figure already rendered")]
    AlreadyRendered,

    /// Chart data series is empty
    #[error("empty data series")]
    EmptyData,

    /// NaN or infinite value in data or bounds
    #[error("non-finite value at position {index}")]
    NonFiniteValue { index: usize },

    /// Value lies outside the chart bounds
    #[error("value {value} at row {row} outside bounds ({lower}, {upper})")]
    ValueOutOfRange {
        row: usize,
        value: f64,
        lower: f64,
        upper: f64,
    },

    /// Label count differs from data count
    #[error("label count mismatch: {labels} labels for {data} data points")]
    LabelCountMismatch { labels: usize, data: usize },

    /// Control character where a printable glyph is required
    #[error("invalid glyph {glyph:?}{}", label_row_suffix(.row))]
    InvalidGlyph { glyph: char, row: Option<usize> },

    /// Malformed input line
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
}

fn label_row_suffix(row: &Option<usize>) -> String {
    row.map(|r| format!(" in label of row {}", r))
        .unwrap_or_default()
}

/// Result type alias for termplot
pub type Result<T> = std::result::Result<T, PlotError>;
