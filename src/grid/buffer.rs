//! Fixed-size character buffer with absolute addressing

use crate::types::{PlotError, Result};

/// Character used for empty cells
pub const BLANK: char = ' ';

/// Rectangular grid of single-character cells.
///
/// Every row holds exactly `cols` cells for the lifetime of the buffer;
/// all writes go through length-checked setters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridBuffer {
    cells: Vec<Vec<char>>,
    cols: usize,
}

impl GridBuffer {
    /// Allocate a `rows` x `cols` buffer filled with blanks
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows < 1 || cols < 1 {
            return Err(PlotError::InvalidDimensions {
                rows,
                cols,
                min_rows: 1,
                min_cols: 1,
            });
        }
        Ok(Self {
            cells: vec![vec![BLANK; cols]; rows],
            cols,
        })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// (rows, cols)
    pub fn dims(&self) -> (usize, usize) {
        (self.rows(), self.cols)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<char> {
        self.check_row(row)?;
        self.check_col(col)?;
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, ch: char) -> Result<()> {
        self.check_row(row)?;
        self.check_col(col)?;
        self.cells[row][col] = ch;
        Ok(())
    }

    /// Cells `[start, end)` of `row`
    pub fn row_slice(&self, row: usize, start: usize, end: usize) -> Result<&[char]> {
        self.check_row(row)?;
        self.check_span(start, end)?;
        Ok(&self.cells[row][start..end])
    }

    /// Overwrite cells `[start, end)` of `row`.
    /// `chars` must be exactly `end - start` long.
    pub fn set_row_slice(&mut self, row: usize, start: usize, end: usize, chars: &[char]) -> Result<()> {
        self.check_row(row)?;
        self.check_span(start, end)?;
        if chars.len() != end - start {
            return Err(PlotError::LengthMismatch {
                expected: end - start,
                actual: chars.len(),
            });
        }
        self.cells[row][start..end].copy_from_slice(chars);
        Ok(())
    }

    /// Fill cells `[start, end)` of `row` with `ch`
    pub fn fill_row_slice(&mut self, row: usize, start: usize, end: usize, ch: char) -> Result<()> {
        self.check_row(row)?;
        self.check_span(start, end)?;
        self.cells[row][start..end].fill(ch);
        Ok(())
    }

    /// True if every cell in `[start, end)` of `row` is blank
    pub fn is_blank_span(&self, row: usize, start: usize, end: usize) -> Result<bool> {
        Ok(self.row_slice(row, start, end)?.iter().all(|&c| c == BLANK))
    }

    /// Join rows into newline-delimited text, optionally stopping after
    /// `through_row` (inclusive). No trailing newline.
    pub fn stitch(&self, through_row: Option<usize>) -> String {
        let last = through_row
            .map(|r| r.min(self.rows() - 1))
            .unwrap_or(self.rows() - 1);
        self.cells[..=last]
            .iter()
            .map(|row| row.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn check_row(&self, row: usize) -> Result<()> {
        if row >= self.rows() {
            return Err(PlotError::IndexOutOfBounds {
                index: row as isize,
                extent: self.rows(),
            });
        }
        Ok(())
    }

    fn check_col(&self, col: usize) -> Result<()> {
        if col >= self.cols {
            return Err(PlotError::IndexOutOfBounds {
                index: col as isize,
                extent: self.cols,
            });
        }
        Ok(())
    }

    fn check_span(&self, start: usize, end: usize) -> Result<()> {
        if end > self.cols {
            return Err(PlotError::IndexOutOfBounds {
                index: end as isize,
                extent: self.cols,
            });
        }
        if start > end {
            return Err(PlotError::IndexOutOfBounds {
                index: start as isize,
                extent: end,
            });
        }
        Ok(())
    }
}
