//! Border-relative coordinates
//!
//! Callers address the drawable interior of a figure without knowing whether
//! a border exists. Non-negative indices are offsets from the first drawable
//! cell; negative indices count back from the last *absolute* cell, so `-1`
//! lands on the border itself:
//!
//! ```text
//! absolute   0   1   2   3   4   5
//!            ╭   ─   ─   ─   ─   ╮
//! index          0   1   2   3   -1
//! ```

use std::ops::{Range, RangeFrom, RangeFull, RangeTo};

use crate::types::{PlotError, Result};

/// Grid axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Row,
    Col,
}

/// A single index or a half-open slice along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Index(isize),
    Slice {
        start: Option<isize>,
        stop: Option<isize>,
    },
}

impl Selector {
    /// Slice covering the whole drawable extent
    pub fn all() -> Self {
        Self::Slice {
            start: None,
            stop: None,
        }
    }
}

impl From<RangeFull> for Selector {
    fn from(_: RangeFull) -> Self {
        Self::all()
    }
}

macro_rules! selector_from_int {
    ($($t:ty),*) => {$(
        impl From<$t> for Selector {
            fn from(idx: $t) -> Self {
                Self::Index(idx as isize)
            }
        }

        impl From<Range<$t>> for Selector {
            fn from(r: Range<$t>) -> Self {
                Self::Slice {
                    start: Some(r.start as isize),
                    stop: Some(r.end as isize),
                }
            }
        }

        impl From<RangeFrom<$t>> for Selector {
            fn from(r: RangeFrom<$t>) -> Self {
                Self::Slice {
                    start: Some(r.start as isize),
                    stop: None,
                }
            }
        }

        impl From<RangeTo<$t>> for Selector {
            fn from(r: RangeTo<$t>) -> Self {
                Self::Slice {
                    start: None,
                    stop: Some(r.end as isize),
                }
            }
        }
    )*};
}

selector_from_int!(i32, isize);

/// Maps border-relative coordinates onto absolute buffer coordinates.
///
/// Holds only the dimensions; it never owns or touches cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoordinateTranslator {
    rows: usize,
    cols: usize,
    bordered: bool,
}

impl CoordinateTranslator {
    pub fn new(rows: usize, cols: usize, bordered: bool) -> Self {
        Self {
            rows,
            cols,
            bordered,
        }
    }

    pub fn is_bordered(&self) -> bool {
        self.bordered
    }

    /// Full (absolute) extent of an axis
    pub fn full_extent(&self, axis: Axis) -> usize {
        match axis {
            Axis::Row => self.rows,
            Axis::Col => self.cols,
        }
    }

    /// Extent of the drawable interior along an axis
    pub fn drawable_extent(&self, axis: Axis) -> usize {
        let full = self.full_extent(axis);
        if self.bordered {
            full.saturating_sub(2)
        } else {
            full
        }
    }

    /// Translate a single index to an absolute cell position
    pub fn translate_index(&self, idx: isize, axis: Axis) -> Result<usize> {
        let extent = self.full_extent(axis);
        let abs = self.resolve(idx, extent)?;
        if abs >= extent {
            return Err(PlotError::IndexOutOfBounds { index: idx, extent });
        }
        Ok(abs)
    }

    /// Translate slice bounds to an absolute half-open range.
    ///
    /// Missing bounds resolve against the drawable extent; a stop before
    /// the start yields an empty range.
    pub fn translate_slice(
        &self,
        start: Option<isize>,
        stop: Option<isize>,
        axis: Axis,
    ) -> Result<Range<usize>> {
        let extent = self.full_extent(axis);
        let start_idx = start.unwrap_or(0);
        let stop_idx = stop.unwrap_or(self.drawable_extent(axis) as isize);

        let abs_start = self.bounded(start_idx, extent)?;
        let abs_stop = self.bounded(stop_idx, extent)?;
        Ok(abs_start..abs_stop.max(abs_start))
    }

    /// Translate either selector form; an index becomes a one-wide range
    pub fn translate(&self, selector: Selector, axis: Axis) -> Result<Range<usize>> {
        match selector {
            Selector::Index(idx) => {
                let abs = self.translate_index(idx, axis)?;
                Ok(abs..abs + 1)
            }
            Selector::Slice { start, stop } => self.translate_slice(start, stop, axis),
        }
    }

    /// Slice bounds may sit one past the last cell
    fn bounded(&self, idx: isize, extent: usize) -> Result<usize> {
        let abs = self.resolve(idx, extent)?;
        if abs > extent {
            return Err(PlotError::IndexOutOfBounds { index: idx, extent });
        }
        Ok(abs)
    }

    fn resolve(&self, idx: isize, extent: usize) -> Result<usize> {
        if idx >= 0 {
            let offset = if self.bordered { 1 } else { 0 };
            Ok(idx as usize + offset)
        } else {
            let back = idx.unsigned_abs();
            extent
                .checked_sub(back)
                .ok_or(PlotError::IndexOutOfBounds { index: idx, extent })
        }
    }
}
