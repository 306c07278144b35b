//! End-to-end rendering snapshots

use termplot::{BarChartOptions, Dimensions, Figure, FigureConfig, FigureState, PlotError};

fn lines(fig: &Figure) -> Vec<String> {
    fig.stitch().split('\n').map(str::to_string).collect()
}

#[test]
fn test_labeled_chart_snapshot() {
    let mut fig = Figure::with_dims(8, 24).unwrap();
    let opts = BarChartOptions::default()
        .with_labels(["read", "write", "metadata"])
        .with_max_label_length(6)
        .with_symbol('█');
    let layout = fig.plot_bar_chart(&[50.0, 100.0, 25.0], &opts).unwrap();

    assert_eq!(layout.chart_max_length, 16);
    assert_eq!(
        lines(&fig),
        vec![
            "╭──────────────────────╮",
            "│████████         read │",
            "│████████████████ write│",
            "│████             metad│",
            "╰──────────────────────╯",
        ]
    );
}

#[test]
fn test_full_height_snapshot() {
    let mut fig = Figure::new(FigureConfig {
        dims: Dimensions::new(5, 12),
        border: true,
        shrink_to_fit: false,
    })
    .unwrap();
    fig.plot_bar_chart(&[3.0], &BarChartOptions::default().with_max_label_length(4))
        .unwrap();

    assert_eq!(
        lines(&fig),
        vec![
            "╭──────────╮",
            "│****** 0  │",
            "│          │",
            "│          │",
            "╰──────────╯",
        ]
    );
}

#[test]
fn test_every_line_matches_width() {
    let mut fig = Figure::with_dims(20, 37).unwrap();
    fig.plot_bar_chart(&[0.5, 7.25, 3.0, 9.0], &BarChartOptions::default())
        .unwrap();
    for line in lines(&fig) {
        assert_eq!(line.chars().count(), 37, "line {:?}", line);
    }
}

#[test]
fn test_failed_render_leaves_figure_usable() {
    let mut fig = Figure::with_dims(6, 20).unwrap();
    let err = fig
        .plot_bar_chart(&[1.0, 2.0], &BarChartOptions::default().with_max_label_length(18))
        .unwrap_err();
    assert_eq!(
        err,
        PlotError::LabelTooWide {
            label_width: 18,
            drawable_cols: 18
        }
    );
    assert_eq!(fig.state(), FigureState::Unrendered);

    fig.plot_bar_chart(&[1.0, 2.0], &BarChartOptions::default())
        .unwrap();
    assert_eq!(fig.state(), FigureState::Rendered);
}

#[test]
fn test_annotation_before_render_counts_as_content() {
    let mut fig = Figure::with_dims(10, 20).unwrap();
    fig.write(4, 0..5, "note:").unwrap();
    fig.plot_bar_chart(&[1.0], &BarChartOptions::default())
        .unwrap();
    assert_eq!(fig.last_occupied_row(), Some(4));
    assert_eq!(lines(&fig).len(), 7);
}
