//! Plain-text data series parsing
//!
//! One datum per line, either `value` or `label,value`. Blank lines and
//! lines starting with `#` are skipped.

use crate::types::{PlotError, Result};

/// Parsed data series
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    pub values: Vec<f64>,
    /// Present only when every line carried a label
    pub labels: Option<Vec<String>>,
}

/// Parse a data series from text
pub fn parse_series(text: &str) -> Result<Series> {
    let mut values = Vec::new();
    let mut labels = Vec::new();
    let mut first_labeled: Option<usize> = None;
    let mut first_unlabeled: Option<usize> = None;

    for (i, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let (label, value) = match line.rsplit_once(',') {
            Some((label, value)) => (Some(label.trim()), value.trim()),
            None => (None, line),
        };
        let value: f64 = value.parse().map_err(|_| PlotError::Parse {
            line: i + 1,
            message: format!("invalid number '{}'", value),
        })?;

        let line_no = i + 1;
        match label {
            Some(label) => {
                first_labeled.get_or_insert(line_no);
                labels.push(label.to_string());
            }
            None => {
                first_unlabeled.get_or_insert(line_no);
            }
        }
        if let (Some(a), Some(b)) = (first_labeled, first_unlabeled) {
            return Err(PlotError::Parse {
                line: a.max(b),
                message: "either label every line or none".into(),
            });
        }
        values.push(value);
    }

    Ok(Series {
        labels: (!labels.is_empty()).then_some(labels),
        values,
    })
}
