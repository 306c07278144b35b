//! Figure: the composition root owning one grid and its views

use std::fmt;

use tracing::debug;

use crate::chart::{last_occupied_row, BarChart, BarChartOptions, BarLayout};
use crate::grid::{Axis, BorderOverlay, CoordinateTranslator, GridBuffer, Selector};
use crate::types::{PlotError, Result};

/// Rows kept free below the figure so printing it never scrolls the terminal
pub const TERMINAL_ROW_BUFFER: usize = 3;

/// Size used when the terminal cannot be queried
const FALLBACK_SIZE: (usize, usize) = (24, 80);

/// Requested figure size; non-positive values are taken from the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub rows: i32,
    pub cols: i32,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self { rows: -1, cols: -1 }
    }
}

impl Dimensions {
    pub fn new(rows: i32, cols: i32) -> Self {
        Self { rows, cols }
    }

    /// Resolve against a known terminal size (rows, cols)
    pub fn resolve_with(self, terminal: (usize, usize)) -> (usize, usize) {
        let rows = if self.rows > 0 {
            self.rows as usize
        } else {
            terminal.0.saturating_sub(TERMINAL_ROW_BUFFER)
        };
        let cols = if self.cols > 0 {
            self.cols as usize
        } else {
            terminal.1
        };
        (rows, cols)
    }

    /// Resolve, querying the terminal only when needed
    pub fn resolve(self) -> (usize, usize) {
        if self.rows > 0 && self.cols > 0 {
            return (self.rows as usize, self.cols as usize);
        }
        self.resolve_with(terminal_size())
    }
}

/// Current terminal size as (rows, cols)
fn terminal_size() -> (usize, usize) {
    match crossterm::terminal::size() {
        Ok((cols, rows)) => (rows as usize, cols as usize),
        Err(e) => {
            debug!(error = %e, "terminal size unavailable, using fallback");
            FALLBACK_SIZE
        }
    }
}

/// Figure construction options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FigureConfig {
    pub dims: Dimensions,
    /// Frame the drawable region with a rounded border
    pub border: bool,
    /// Trim output to the rows the chart actually occupies
    pub shrink_to_fit: bool,
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self {
            dims: Dimensions::default(),
            border: true,
            shrink_to_fit: true,
        }
    }
}

/// Render state of a figure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureState {
    Unrendered,
    Rendered,
}

/// A character-grid figure addressed in border-relative coordinates
pub struct Figure {
    buffer: GridBuffer,
    translator: CoordinateTranslator,
    config: FigureConfig,
    state: FigureState,
    last_occupied: Option<usize>,
}

impl Figure {
    pub fn new(config: FigureConfig) -> Result<Self> {
        let (rows, cols) = config.dims.resolve();
        if config.border && (rows < 3 || cols < 3) {
            return Err(PlotError::InvalidDimensions {
                rows,
                cols,
                min_rows: 3,
                min_cols: 3,
            });
        }
        let buffer = GridBuffer::new(rows, cols)?;
        debug!(rows, cols, border = config.border, "figure allocated");

        Ok(Self {
            buffer,
            translator: CoordinateTranslator::new(rows, cols, config.border),
            config,
            state: FigureState::Unrendered,
            last_occupied: None,
        })
    }

    /// Bordered, shrink-to-fit figure of the given size
    pub fn with_dims(rows: i32, cols: i32) -> Result<Self> {
        Self::new(FigureConfig {
            dims: Dimensions::new(rows, cols),
            ..FigureConfig::default()
        })
    }

    /// Full (rows, cols) including any border
    pub fn dims(&self) -> (usize, usize) {
        self.buffer.dims()
    }

    /// (rows, cols) of the drawable interior
    pub fn drawable_dims(&self) -> (usize, usize) {
        (
            self.translator.drawable_extent(Axis::Row),
            self.translator.drawable_extent(Axis::Col),
        )
    }

    pub fn config(&self) -> &FigureConfig {
        &self.config
    }

    pub fn state(&self) -> FigureState {
        self.state
    }

    /// Last drawable row with content, known once rendered
    pub fn last_occupied_row(&self) -> Option<usize> {
        self.last_occupied
    }

    pub fn get(&self, row: isize, col: isize) -> Result<char> {
        let r = self.translator.translate_index(row, Axis::Row)?;
        let c = self.translator.translate_index(col, Axis::Col)?;
        self.buffer.get(r, c)
    }

    pub fn set(&mut self, row: isize, col: isize, ch: char) -> Result<()> {
        check_glyphs(std::iter::once(ch))?;
        let r = self.translator.translate_index(row, Axis::Row)?;
        let c = self.translator.translate_index(col, Axis::Col)?;
        self.buffer.set(r, c, ch)
    }

    /// Selected cells of each selected row
    pub fn read(&self, rows: impl Into<Selector>, cols: impl Into<Selector>) -> Result<Vec<String>> {
        let rows = self.translator.translate(rows.into(), Axis::Row)?;
        let cols = self.translator.translate(cols.into(), Axis::Col)?;
        rows.map(|r| {
            self.buffer
                .row_slice(r, cols.start, cols.end)
                .map(|cells| cells.iter().collect::<String>())
        })
        .collect()
    }

    /// Write `text` into the selected columns of every selected row.
    /// The text must be exactly as wide as the column selection.
    pub fn write(
        &mut self,
        rows: impl Into<Selector>,
        cols: impl Into<Selector>,
        text: &str,
    ) -> Result<()> {
        let rows = self.translator.translate(rows.into(), Axis::Row)?;
        let cols = self.translator.translate(cols.into(), Axis::Col)?;
        check_glyphs(text.chars())?;
        let cells: Vec<char> = text.chars().collect();
        if cells.len() != cols.len() {
            return Err(PlotError::LengthMismatch {
                expected: cols.len(),
                actual: cells.len(),
            });
        }
        for r in rows {
            self.buffer.set_row_slice(r, cols.start, cols.end, &cells)?;
        }
        Ok(())
    }

    /// Render a horizontal bar chart and frame it.
    ///
    /// Either the whole chart lands or nothing changes: on error the figure
    /// stays unrendered with its buffer untouched.
    pub fn plot_bar_chart(&mut self, data: &[f64], options: &BarChartOptions) -> Result<BarLayout> {
        if self.state == FigureState::Rendered {
            return Err(PlotError::AlreadyRendered);
        }

        let layout = BarChart::new(data, options).layout(&self.translator)?;

        let mut next = self.buffer.clone();
        BarChart::render(&layout, &mut next, &self.translator)?;

        let last = if self.config.shrink_to_fit {
            last_occupied_row(&next, &self.translator)?
        } else {
            self.translator.drawable_extent(Axis::Row) - 1
        };
        if self.config.border {
            BorderOverlay::draw_border(&mut next, last)?;
        }

        debug!(rows = layout.rows.len(), last_occupied = last, "bar chart rendered");
        self.buffer = next;
        self.last_occupied = Some(last);
        self.state = FigureState::Rendered;
        Ok(layout)
    }

    /// Rows joined with newlines; trimmed below the chart when shrink-to-fit
    pub fn stitch(&self) -> String {
        let through = match (self.config.shrink_to_fit, self.last_occupied) {
            // bottom edge sits one row below the last drawable row
            (true, Some(last)) if self.config.border => Some(last + 2),
            (true, Some(last)) => Some(last),
            _ => None,
        };
        self.buffer.stitch(through)
    }

    /// Print the figure followed by a blank line
    pub fn show(&self) {
        println!("{}\n", self.stitch());
    }
}

/// Control characters would break the fixed line width of the output
fn check_glyphs(mut chars: impl Iterator<Item = char>) -> Result<()> {
    match chars.find(|c| c.is_control()) {
        Some(glyph) => Err(PlotError::InvalidGlyph { glyph, row: None }),
        None => Ok(()),
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stitch())
    }
}

impl fmt::Debug for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.dims();
        write!(f, "<termplot.Figure, dims=({}, {})>", rows, cols)
    }
}
