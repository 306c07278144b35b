//! Rounded frame around the drawable region

use super::buffer::GridBuffer;
use crate::types::{PlotError, Result};

/// Box drawing characters for the frame
pub const BOX_TOP_LEFT: char = '╭';
pub const BOX_TOP_RIGHT: char = '╮';
pub const BOX_BOTTOM_LEFT: char = '╰';
pub const BOX_BOTTOM_RIGHT: char = '╯';
pub const BOX_HORIZONTAL: char = '─';
pub const BOX_VERTICAL: char = '│';

/// Smallest grid that can hold a frame around one drawable cell
const MIN_FRAMED: usize = 3;

/// Stamps the frame glyphs onto the outer ring of a buffer
pub struct BorderOverlay;

impl BorderOverlay {
    /// Last drawable row of a full-height frame for a buffer with `rows` rows
    pub fn full_height(rows: usize) -> usize {
        rows.saturating_sub(MIN_FRAMED)
    }

    /// Draw a frame whose bottom edge sits right below drawable row
    /// `last_occupied_row`. Rows beneath the bottom edge are left untouched.
    pub fn draw_border(buffer: &mut GridBuffer, last_occupied_row: usize) -> Result<()> {
        let (rows, cols) = buffer.dims();
        if rows < MIN_FRAMED || cols < MIN_FRAMED {
            return Err(PlotError::InvalidDimensions {
                rows,
                cols,
                min_rows: MIN_FRAMED,
                min_cols: MIN_FRAMED,
            });
        }

        let bottom = match last_occupied_row.checked_add(2) {
            Some(bottom) if bottom < rows => bottom,
            _ => {
                return Err(PlotError::IndexOutOfBounds {
                    index: isize::try_from(last_occupied_row.saturating_add(2)).unwrap_or(isize::MAX),
                    extent: rows,
                })
            }
        };
        let right = cols - 1;

        Self::draw_edge(buffer, 0, BOX_TOP_LEFT, BOX_TOP_RIGHT)?;
        for row in 1..bottom {
            buffer.set(row, 0, BOX_VERTICAL)?;
            buffer.set(row, right, BOX_VERTICAL)?;
        }
        Self::draw_edge(buffer, bottom, BOX_BOTTOM_LEFT, BOX_BOTTOM_RIGHT)
    }

    fn draw_edge(buffer: &mut GridBuffer, row: usize, left: char, right: char) -> Result<()> {
        let cols = buffer.cols();
        buffer.set(row, 0, left)?;
        buffer.fill_row_slice(row, 1, cols - 1, BOX_HORIZONTAL)?;
        buffer.set(row, cols - 1, right)
    }
}
