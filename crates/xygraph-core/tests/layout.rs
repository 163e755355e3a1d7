// File: crates/xygraph-core/tests/layout.rs
// Purpose: Validate plot-area layout, shared tick selection and data -> canvas mapping.

use approx::assert_abs_diff_eq;
use xygraph_core::{Axis, Chart, CurveStyle, LayoutOptions, PathCommand, Series};

fn squares_chart() -> Chart {
    let mut chart = Chart::new();
    chart.add_series(Series::from_xy(&[
        (0.0, 0.0), (1.0, 1.0), (4.0, 2.0), (9.0, 3.0), (16.0, 4.0), (25.0, 5.0), (36.0, 6.0),
    ]));
    chart
}

#[test]
fn layout_default_canvas() {
    let layout = squares_chart().layout(&LayoutOptions::default()).expect("layout");

    assert_eq!(layout.y_ticks.labels, vec!["0", "1", "2", "3", "4", "5", "6"]);
    assert_eq!(layout.x_ticks.labels, vec!["0", "5", "10", "15", "20", "25", "30", "35", "40"]);

    // 800x480, glyph 12, line 16: height 480-16-24 = 440, width 800-12-24 = 764.
    assert_abs_diff_eq!(layout.plot.left, 36.0, epsilon = 1e-4);
    assert_abs_diff_eq!(layout.plot.top, 0.0);
    assert_abs_diff_eq!(layout.plot.right, 800.0, epsilon = 1e-4);
    assert_abs_diff_eq!(layout.plot.bottom, 440.0, epsilon = 1e-4);

    assert_abs_diff_eq!(layout.x_tick_px[0], 36.0, epsilon = 1e-3);
    assert_abs_diff_eq!(*layout.x_tick_px.last().unwrap(), 800.0, epsilon = 1e-3);
    assert_abs_diff_eq!(layout.y_tick_px[0], 440.0, epsilon = 1e-3);
    assert_abs_diff_eq!(*layout.y_tick_px.last().unwrap(), 0.0, epsilon = 1e-3);

    let pts = &layout.series[0].points;
    assert_abs_diff_eq!(pts[0].x, 36.0, epsilon = 1e-3);
    assert_abs_diff_eq!(pts[0].y, 440.0, epsilon = 1e-3);
    assert_abs_diff_eq!(pts[6].x, 36.0 + 0.9 * 764.0, epsilon = 1e-2);
    assert_abs_diff_eq!(pts[6].y, 0.0, epsilon = 1e-3);

    // Linear series: one move plus a line per segment.
    assert_eq!(layout.series[0].path.len(), 7);
    assert!(matches!(layout.series[0].path[0], PathCommand::MoveTo(_)));
}

#[test]
fn axis_titles_reserve_space() {
    let mut chart = squares_chart();
    chart.x_axis = Axis::new("Time").with_units("s");
    chart.y_axis = Axis::new("Distance");
    let layout = chart.layout(&LayoutOptions::default()).expect("layout");
    assert_abs_diff_eq!(layout.plot.height(), 424.0, epsilon = 1e-4);
    assert_abs_diff_eq!(layout.plot.width(), 748.0, epsilon = 1e-4);
}

#[test]
fn axis_titles() {
    assert_eq!(Axis::new("Time").with_units("s").title(), "Time (s)");
    assert_eq!(Axis::new("Time").title(), "Time");
    assert_eq!(Axis::default().with_units("s").title(), "");
}

#[test]
fn manual_ticks_override_autoscale() {
    let mut chart = squares_chart();
    chart.y_axis = Axis::new("").with_ticks(vec![0.0, 10.0, 20.0]);
    let layout = chart.layout(&LayoutOptions::default()).expect("layout");
    assert_eq!(layout.y_ticks.values, vec![0.0, 10.0, 20.0]);
    assert_eq!(layout.y_ticks.labels, vec!["0", "10", "20"]);

    // Unsorted manual ticks still run bottom to top.
    chart.y_axis = Axis::new("").with_ticks(vec![20.0, 0.0, 10.0]);
    let layout = chart.layout(&LayoutOptions::default()).expect("layout");
    assert_eq!(layout.y_ticks.labels, vec!["0", "10", "20"]);
    assert_abs_diff_eq!(layout.y_tick_px[0], layout.plot.bottom, epsilon = 1e-3);
    assert_abs_diff_eq!(layout.y_tick_px[2], layout.plot.top, epsilon = 1e-3);

    // An empty manual list falls back to auto-scaling.
    chart.y_axis = Axis::new("").with_ticks(Vec::new());
    let layout = chart.layout(&LayoutOptions::default()).expect("layout");
    assert_eq!(layout.y_ticks.len(), 7);
}

#[test]
fn series_share_axes() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_xy(&[(0.0, 0.0), (1.0, 1.0)]));
    chart.add_series(Series::from_xy(&[(0.0, 5.0), (3.0, 20.0)]).with_curve(CurveStyle::Spline));
    let layout = chart.layout(&LayoutOptions::default()).expect("layout");
    assert!(layout.y_ticks.first() <= 0.0);
    assert!(layout.y_ticks.last() >= 20.0);
    assert!(layout.x_ticks.last() >= 3.0);
    assert_eq!(layout.series.len(), 2);
    assert!(matches!(layout.series[1].path[1], PathCommand::CubicTo(..)));
}

#[test]
fn hidden_lines_and_single_points_have_no_path() {
    let mut chart = Chart::new();
    chart.add_series(Series::from_xy(&[(0.0, 0.0), (1.0, 1.0)]).with_line(false));
    chart.add_series(Series::from_xy(&[(0.5, 0.5)]).with_curve(CurveStyle::Spline));
    let layout = chart.layout(&LayoutOptions::default()).expect("layout");
    assert!(layout.series[0].path.is_empty());
    assert_eq!(layout.series[0].points.len(), 2);
    assert!(layout.series[1].path.is_empty());
}

#[test]
fn degenerate_inputs_do_not_panic() {
    let layout = Chart::new().layout(&LayoutOptions::default()).expect("empty chart");
    assert_eq!(layout.x_ticks.labels, vec!["0"]);
    assert_eq!(layout.y_ticks.labels, vec!["0"]);

    let tiny = LayoutOptions { width: 10.0, height: 10.0, ..LayoutOptions::default() };
    let layout = squares_chart().layout(&tiny).expect("tiny canvas");
    assert_eq!(layout.plot.height(), 0.0);
    assert!(!layout.y_ticks.is_empty());
    assert!(layout.series[0].points.iter().all(|p| p.x.is_finite() && p.y.is_finite()));
}

#[test]
fn canvas_transform_round_trips_data() {
    let layout = squares_chart().layout(&LayoutOptions::default()).expect("layout");
    let p = xygraph_core::Point::new(12.5, 3.25);
    let back = layout.transform.to_data(layout.transform.to_canvas(p));
    assert_abs_diff_eq!(back.x, p.x, epsilon = 1e-3);
    assert_abs_diff_eq!(back.y, p.y, epsilon = 1e-3);
}
