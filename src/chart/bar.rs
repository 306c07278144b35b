//! Horizontal bar chart layout and rendering
//!
//! Each datum gets one drawable row: a run of `symbol` proportional to the
//! value, followed by a fixed-width label column on the right.
//! Example: data=[1, 2, 4], 20 drawable columns, label width 8 →
//! ```text
//! ***          0
//! ******       1
//! ************ 2
//! ```

use serde::Serialize;
use tracing::{debug, warn};

use crate::grid::{Axis, CoordinateTranslator, GridBuffer, Selector};
use crate::types::{PlotError, Result};

/// Default width of the label column
pub const DEFAULT_LABEL_WIDTH: usize = 8;

/// Default bar fill character
pub const DEFAULT_SYMBOL: char = '*';

/// What to do when there are more data points than drawable rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OverflowPolicy {
    /// Fail with `TooManyRows` before writing anything
    #[default]
    Reject,
    /// Render the rows that fit and log a warning
    Truncate,
}

/// Bar chart configuration
#[derive(Debug, Clone, PartialEq)]
pub struct BarChartOptions {
    /// One label per datum; defaults to the row index
    pub labels: Option<Vec<String>>,
    /// Columns reserved on the right for labels
    pub max_label_length: usize,
    /// (lower, upper); defaults to (0, max(data))
    pub bounds: Option<(f64, f64)>,
    pub symbol: char,
    pub overflow: OverflowPolicy,
}

impl Default for BarChartOptions {
    fn default() -> Self {
        Self {
            labels: None,
            max_label_length: DEFAULT_LABEL_WIDTH,
            bounds: None,
            symbol: DEFAULT_SYMBOL,
            overflow: OverflowPolicy::default(),
        }
    }
}

impl BarChartOptions {
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_max_label_length(mut self, width: usize) -> Self {
        self.max_label_length = width;
        self
    }

    pub fn with_bounds(mut self, lower: f64, upper: f64) -> Self {
        self.bounds = Some((lower, upper));
        self
    }

    pub fn with_symbol(mut self, symbol: char) -> Self {
        self.symbol = symbol;
        self
    }

    pub fn with_overflow(mut self, overflow: OverflowPolicy) -> Self {
        self.overflow = overflow;
        self
    }
}

/// One rendered row of the chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarRow {
    pub value: f64,
    pub bar_length: usize,
    /// Label cell text, exactly `label_width` characters
    pub label: String,
}

/// Fully resolved chart geometry, computed before any cell is written
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarLayout {
    pub lower: f64,
    pub upper: f64,
    pub chart_max_length: usize,
    pub label_width: usize,
    pub symbol: char,
    pub rows: Vec<BarRow>,
    /// Data points dropped under `OverflowPolicy::Truncate`
    pub truncated: usize,
}

/// Format a label cell: one leading space, then the label left-justified
/// and truncated to fill exactly `width` characters.
/// Example: ("cpu", 6) → " cpu  "
pub fn format_label(label: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    let text: String = label.chars().take(width - 1).collect();
    format!(" {:<pad$}", text, pad = width - 1)
}

/// Bar chart over a data series
pub struct BarChart<'a> {
    data: &'a [f64],
    options: &'a BarChartOptions,
}

impl<'a> BarChart<'a> {
    pub fn new(data: &'a [f64], options: &'a BarChartOptions) -> Self {
        Self { data, options }
    }

    /// Validate inputs and compute every row's bar length and label
    pub fn layout(&self, translator: &CoordinateTranslator) -> Result<BarLayout> {
        let opts = self.options;
        if self.data.is_empty() {
            return Err(PlotError::EmptyData);
        }
        if let Some(index) = self.data.iter().position(|v| !v.is_finite()) {
            return Err(PlotError::NonFiniteValue { index });
        }
        if opts.symbol.is_control() {
            return Err(PlotError::InvalidGlyph {
                glyph: opts.symbol,
                row: None,
            });
        }
        if let Some(labels) = &opts.labels {
            if labels.len() != self.data.len() {
                return Err(PlotError::LabelCountMismatch {
                    labels: labels.len(),
                    data: self.data.len(),
                });
            }
            for (row, label) in labels.iter().enumerate() {
                if let Some(glyph) = label.chars().find(|c| c.is_control()) {
                    return Err(PlotError::InvalidGlyph {
                        glyph,
                        row: Some(row),
                    });
                }
            }
        }

        let drawable_rows = translator.drawable_extent(Axis::Row);
        let drawable_cols = translator.drawable_extent(Axis::Col);

        let visible = if self.data.len() > drawable_rows {
            match opts.overflow {
                OverflowPolicy::Reject => {
                    return Err(PlotError::TooManyRows {
                        data_rows: self.data.len(),
                        drawable_rows,
                    });
                }
                OverflowPolicy::Truncate => {
                    warn!(
                        data_rows = self.data.len(),
                        drawable_rows, "truncating bar chart to drawable height"
                    );
                    drawable_rows
                }
            }
        } else {
            self.data.len()
        };

        // dropped rows don't stretch the scale
        let shown = &self.data[..visible];
        let (lower, upper) = opts.bounds.unwrap_or_else(|| (0.0, max_value(shown)));
        let span = upper - lower;
        if !lower.is_finite() || !upper.is_finite() || span <= 0.0 {
            return Err(PlotError::DegenerateBounds { lower, upper });
        }

        if opts.max_label_length >= drawable_cols {
            return Err(PlotError::LabelTooWide {
                label_width: opts.max_label_length,
                drawable_cols,
            });
        }
        let chart_max_length = drawable_cols - opts.max_label_length;

        let mut rows = Vec::with_capacity(visible);
        for (row, &value) in shown.iter().enumerate() {
            if value < lower || value > upper {
                return Err(PlotError::ValueOutOfRange {
                    row,
                    value,
                    lower,
                    upper,
                });
            }
            let bar_length = ((value - lower) / span * chart_max_length as f64).floor() as usize;
            let label = match &opts.labels {
                Some(labels) => format_label(&labels[row], opts.max_label_length),
                None => format_label(&row.to_string(), opts.max_label_length),
            };
            rows.push(BarRow {
                value,
                bar_length,
                label,
            });
        }

        debug!(
            rows = rows.len(),
            lower, upper, chart_max_length, "bar chart layout"
        );

        Ok(BarLayout {
            lower,
            upper,
            chart_max_length,
            label_width: opts.max_label_length,
            symbol: opts.symbol,
            rows,
            truncated: self.data.len() - visible,
        })
    }

    /// Write a computed layout into the drawable region of `buffer`
    pub fn render(
        layout: &BarLayout,
        buffer: &mut GridBuffer,
        translator: &CoordinateTranslator,
    ) -> Result<()> {
        let label_start = layout.chart_max_length as isize;
        let label_stop = label_start + layout.label_width as isize;

        for (i, row) in layout.rows.iter().enumerate() {
            let abs_row = translator.translate_index(i as isize, Axis::Row)?;

            let bar = translator.translate_slice(Some(0), Some(row.bar_length as isize), Axis::Col)?;
            buffer.fill_row_slice(abs_row, bar.start, bar.end, layout.symbol)?;

            let label = translator.translate_slice(Some(label_start), Some(label_stop), Axis::Col)?;
            let cells: Vec<char> = row.label.chars().collect();
            buffer.set_row_slice(abs_row, label.start, label.end, &cells)?;
        }
        Ok(())
    }
}

/// Largest drawable row holding any non-blank cell.
/// Falls back to the last drawable row when everything is blank.
pub fn last_occupied_row(buffer: &GridBuffer, translator: &CoordinateTranslator) -> Result<usize> {
    let drawable_rows = translator.drawable_extent(Axis::Row);
    let cols = translator.translate(Selector::all(), Axis::Col)?;

    for row in (0..drawable_rows).rev() {
        let abs_row = translator.translate_index(row as isize, Axis::Row)?;
        if !buffer.is_blank_span(abs_row, cols.start, cols.end)? {
            return Ok(row);
        }
    }
    Ok(drawable_rows.saturating_sub(1))
}

fn max_value(data: &[f64]) -> f64 {
    data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 20 drawable columns and 10 drawable rows
    fn framed() -> CoordinateTranslator {
        CoordinateTranslator::new(12, 22, true)
    }

    fn bar_lengths(layout: &BarLayout) -> Vec<usize> {
        layout.rows.iter().map(|r| r.bar_length).collect()
    }

    // ========== format_label ==========

    #[test]
    fn test_format_label_pads() {
        assert_eq!(format_label("cpu", 6), " cpu  ");
        assert_eq!(format_label("0", 8), " 0      ");
    }

    #[test]
    fn test_format_label_truncates() {
        assert_eq!(format_label("memory-usage", 5), " memo");
        assert_eq!(format_label("abc", 1), " ");
        assert_eq!(format_label("abc", 0), "");
    }

    #[test]
    fn test_format_label_counts_chars() {
        assert_eq!(format_label("été", 5).chars().count(), 5);
    }

    // ========== layout ==========

    #[test]
    fn test_bar_proportionality() {
        let data = [1.0, 2.0, 4.0];
        let opts = BarChartOptions::default();
        let layout = BarChart::new(&data, &opts).layout(&framed()).unwrap();
        assert_eq!(layout.chart_max_length, 12);
        assert_eq!((layout.lower, layout.upper), (0.0, 4.0));
        assert_eq!(bar_lengths(&layout), vec![3, 6, 12]);
    }

    #[test]
    fn test_explicit_bounds() {
        let data = [10.0, 15.0, 20.0];
        let opts = BarChartOptions::default().with_bounds(10.0, 20.0);
        let layout = BarChart::new(&data, &opts).layout(&framed()).unwrap();
        assert_eq!(bar_lengths(&layout), vec![0, 6, 12]);
    }

    #[test]
    fn test_default_labels_are_row_indices() {
        let data = [1.0, 1.0];
        let opts = BarChartOptions::default().with_max_label_length(4);
        let layout = BarChart::new(&data, &opts).layout(&framed()).unwrap();
        assert_eq!(layout.rows[0].label, " 0  ");
        assert_eq!(layout.rows[1].label, " 1  ");
    }

    #[test]
    fn test_custom_labels() {
        let data = [1.0, 2.0];
        let opts = BarChartOptions::default().with_labels(["read", "write"]);
        let layout = BarChart::new(&data, &opts).layout(&framed()).unwrap();
        assert_eq!(layout.rows[1].label, " write  ");
    }

    #[test]
    fn test_degenerate_bounds() {
        let data = [5.0];
        let opts = BarChartOptions::default().with_bounds(5.0, 5.0);
        assert_eq!(
            BarChart::new(&data, &opts).layout(&framed()),
            Err(PlotError::DegenerateBounds {
                lower: 5.0,
                upper: 5.0
            })
        );
    }

    #[test]
    fn test_all_zero_data_is_degenerate() {
        let data = [0.0, 0.0];
        let opts = BarChartOptions::default();
        assert!(matches!(
            BarChart::new(&data, &opts).layout(&framed()),
            Err(PlotError::DegenerateBounds { .. })
        ));
    }

    #[test]
    fn test_inverted_bounds() {
        let data = [1.0];
        let opts = BarChartOptions::default().with_bounds(4.0, 0.0);
        assert!(matches!(
            BarChart::new(&data, &opts).layout(&framed()),
            Err(PlotError::DegenerateBounds { .. })
        ));
    }

    #[test]
    fn test_label_too_wide() {
        let data = [1.0];
        let opts = BarChartOptions::default().with_max_label_length(20);
        assert_eq!(
            BarChart::new(&data, &opts).layout(&framed()),
            Err(PlotError::LabelTooWide {
                label_width: 20,
                drawable_cols: 20
            })
        );
    }

    #[test]
    fn test_too_many_rows_rejected() {
        let data = [1.0; 11];
        let opts = BarChartOptions::default();
        assert_eq!(
            BarChart::new(&data, &opts).layout(&framed()),
            Err(PlotError::TooManyRows {
                data_rows: 11,
                drawable_rows: 10
            })
        );
    }

    #[test]
    fn test_truncate_policy() {
        let data = [1.0; 13];
        let opts = BarChartOptions::default().with_overflow(OverflowPolicy::Truncate);
        let layout = BarChart::new(&data, &opts).layout(&framed()).unwrap();
        assert_eq!(layout.rows.len(), 10);
        assert_eq!(layout.truncated, 3);
    }

    #[test]
    fn test_truncate_scales_to_shown_rows() {
        // 3 drawable rows; the dropped 100.0 must not set the upper bound
        let t = CoordinateTranslator::new(5, 22, true);
        let data = [1.0, 2.0, 4.0, 100.0];
        let opts = BarChartOptions::default().with_overflow(OverflowPolicy::Truncate);
        let layout = BarChart::new(&data, &opts).layout(&t).unwrap();
        assert_eq!(layout.upper, 4.0);
        assert_eq!(bar_lengths(&layout), vec![3, 6, 12]);
        assert_eq!(layout.truncated, 1);
    }

    #[test]
    fn test_newline_label_rejected() {
        let data = [1.0, 2.0];
        let opts = BarChartOptions::default().with_labels(["ok", "a\nb"]);
        assert_eq!(
            BarChart::new(&data, &opts).layout(&framed()),
            Err(PlotError::InvalidGlyph {
                glyph: '\n',
                row: Some(1)
            })
        );
    }

    #[test]
    fn test_newline_symbol_rejected() {
        let data = [4.0];
        let opts = BarChartOptions::default().with_symbol('\n');
        assert_eq!(
            BarChart::new(&data, &opts).layout(&framed()),
            Err(PlotError::InvalidGlyph {
                glyph: '\n',
                row: None
            })
        );
    }

    #[test]
    fn test_empty_data() {
        let opts = BarChartOptions::default();
        assert_eq!(
            BarChart::new(&[], &opts).layout(&framed()),
            Err(PlotError::EmptyData)
        );
    }

    #[test]
    fn test_non_finite_value() {
        let data = [1.0, f64::NAN];
        let opts = BarChartOptions::default();
        assert_eq!(
            BarChart::new(&data, &opts).layout(&framed()),
            Err(PlotError::NonFiniteValue { index: 1 })
        );
    }

    #[test]
    fn test_value_below_lower_bound() {
        let data = [-1.0, 2.0];
        let opts = BarChartOptions::default();
        assert!(matches!(
            BarChart::new(&data, &opts).layout(&framed()),
            Err(PlotError::ValueOutOfRange { row: 0, .. })
        ));
    }

    #[test]
    fn test_value_above_upper_bound() {
        let data = [1.0, 9.0];
        let opts = BarChartOptions::default().with_bounds(0.0, 4.0);
        assert!(matches!(
            BarChart::new(&data, &opts).layout(&framed()),
            Err(PlotError::ValueOutOfRange { row: 1, .. })
        ));
    }

    #[test]
    fn test_label_count_mismatch() {
        let data = [1.0, 2.0];
        let opts = BarChartOptions::default().with_labels(["only"]);
        assert_eq!(
            BarChart::new(&data, &opts).layout(&framed()),
            Err(PlotError::LabelCountMismatch { labels: 1, data: 2 })
        );
    }

    // ========== render ==========

    #[test]
    fn test_render_writes_bars_and_labels() {
        let t = CoordinateTranslator::new(4, 12, true);
        let mut buf = GridBuffer::new(4, 12).unwrap();
        let data = [2.0, 4.0];
        let opts = BarChartOptions::default()
            .with_max_label_length(4)
            .with_symbol('#')
            .with_labels(["a", "b"]);
        let layout = BarChart::new(&data, &opts).layout(&t).unwrap();
        BarChart::render(&layout, &mut buf, &t).unwrap();

        assert_eq!(buf.stitch(None), "            \n ###    a   \n ###### b   \n            ");
    }

    // ========== last_occupied_row ==========

    #[test]
    fn test_last_occupied_row_blank_defaults_to_full() {
        let t = framed();
        let buf = GridBuffer::new(12, 22).unwrap();
        assert_eq!(last_occupied_row(&buf, &t).unwrap(), 9);
    }

    #[test]
    fn test_last_occupied_row_finds_content() {
        let t = framed();
        let mut buf = GridBuffer::new(12, 22).unwrap();
        buf.set(3, 5, 'x').unwrap();
        assert_eq!(last_occupied_row(&buf, &t).unwrap(), 2);
    }

    #[test]
    fn test_last_occupied_row_ignores_border_cells() {
        let t = framed();
        let mut buf = GridBuffer::new(12, 22).unwrap();
        buf.set(1, 1, 'x').unwrap();
        buf.set(6, 0, '│').unwrap();
        buf.set(6, 21, '│').unwrap();
        assert_eq!(last_occupied_row(&buf, &t).unwrap(), 0);
    }
}
