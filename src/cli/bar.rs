//! `termplot bar` subcommand

use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tracing::debug;

use termplot::chart::{BarChartOptions, OverflowPolicy, DEFAULT_LABEL_WIDTH, DEFAULT_SYMBOL};
use termplot::input::{parse_series, Series};
use termplot::{Dimensions, Figure, FigureConfig};

/// Draw a horizontal bar chart
#[derive(Args, Debug)]
pub struct BarArgs {
    /// Data values (read from --input or stdin when omitted)
    #[arg(value_name = "VALUE", allow_negative_numbers = true)]
    pub values: Vec<f64>,

    /// File with one `value` or `label,value` per line
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Comma-separated labels, one per value
    #[arg(long, value_delimiter = ',')]
    pub labels: Option<Vec<String>>,

    /// Columns reserved for labels
    #[arg(long, default_value_t = DEFAULT_LABEL_WIDTH)]
    pub label_width: usize,

    /// Chart bounds as LOWER,UPPER (default: 0,max)
    #[arg(long, value_parser = parse_bounds, allow_hyphen_values = true)]
    pub bounds: Option<(f64, f64)>,

    /// Bar fill character
    #[arg(long, default_value_t = DEFAULT_SYMBOL)]
    pub symbol: char,

    /// Figure height (default: terminal height minus 3)
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    pub rows: i32,

    /// Figure width (default: terminal width)
    #[arg(long, default_value_t = -1, allow_negative_numbers = true)]
    pub cols: i32,

    /// Draw without a frame
    #[arg(long)]
    pub no_border: bool,

    /// Keep the full figure height instead of shrinking to the data
    #[arg(long)]
    pub full_height: bool,

    /// Drop data points that don't fit instead of failing
    #[arg(long)]
    pub truncate: bool,

    /// Print the computed layout as JSON instead of the chart
    #[arg(long)]
    pub json: bool,
}

impl BarArgs {
    pub fn run(self) -> anyhow::Result<()> {
        let series = self.load_series()?;
        let options = self.options(series.labels);

        let mut fig = Figure::new(self.figure_config())?;
        let layout = fig
            .plot_bar_chart(&series.values, &options)
            .context("failed to render bar chart")?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&layout)?);
        } else {
            fig.show();
        }
        Ok(())
    }

    /// Values from the command line, else `--input`, else stdin
    fn load_series(&self) -> anyhow::Result<Series> {
        if !self.values.is_empty() {
            return Ok(Series {
                values: self.values.clone(),
                labels: None,
            });
        }

        let text = match &self.input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?,
            None => {
                debug!("reading data from stdin");
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                buf
            }
        };
        Ok(parse_series(&text)?)
    }

    /// Explicit `--labels` win over labels read from input
    fn options(&self, input_labels: Option<Vec<String>>) -> BarChartOptions {
        let mut options = BarChartOptions::default()
            .with_max_label_length(self.label_width)
            .with_symbol(self.symbol);
        options.labels = self.labels.clone().or(input_labels);
        options.bounds = self.bounds;
        if self.truncate {
            options = options.with_overflow(OverflowPolicy::Truncate);
        }
        options
    }

    fn figure_config(&self) -> FigureConfig {
        FigureConfig {
            dims: Dimensions::new(self.rows, self.cols),
            border: !self.no_border,
            shrink_to_fit: !self.full_height,
        }
    }
}

/// Parse `LOWER,UPPER`
fn parse_bounds(s: &str) -> Result<(f64, f64), String> {
    let (lower, upper) = s
        .split_once(',')
        .ok_or_else(|| format!("expected LOWER,UPPER, got '{}'", s))?;
    let lower: f64 = lower
        .trim()
        .parse()
        .map_err(|e| format!("invalid lower bound: {}", e))?;
    let upper: f64 = upper
        .trim()
        .parse()
        .map_err(|e| format!("invalid upper bound: {}", e))?;
    Ok((lower, upper))
}
