// File: crates/xygraph-core/src/chart.rs
// Summary: Chart struct and renderer-agnostic layout pipeline (plot rect, ticks, series paths).

use log::debug;

use crate::error::Result;
use crate::geometry::{CanvasTransform, PlotRect};
use crate::path::{build_path, PathCommand};
use crate::scale::TickSet;
use crate::series::Series;
use crate::types::{Point, GLYPH_WIDTH, HEIGHT, LINE_HEIGHT, WIDTH};
use crate::Axis;

/// Canvas size and text metrics used to lay out a chart.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutOptions {
    pub width: f32,
    pub height: f32,
    /// Estimated width of one label glyph; also used as tick-mark length.
    pub glyph_width: f32,
    /// Height of one line of label text.
    pub line_height: f32,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, glyph_width: GLYPH_WIDTH, line_height: LINE_HEIGHT }
    }
}

/// Canvas-space geometry for one series.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesLayout {
    /// Knots mapped into canvas pixels.
    pub points: Vec<Point>,
    /// Empty when the series hides its line or has fewer than two points.
    pub path: Vec<PathCommand>,
}

/// Everything a renderer needs to draw the chart.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub plot: PlotRect,
    pub x_ticks: TickSet,
    pub y_ticks: TickSet,
    /// Canvas x of each x tick.
    pub x_tick_px: Vec<f32>,
    /// Canvas y of each y tick.
    pub y_tick_px: Vec<f32>,
    pub transform: CanvasTransform,
    pub series: Vec<SeriesLayout>,
}

#[derive(Clone, Debug, Default)]
pub struct Chart {
    pub series: Vec<Series>,
    pub x_axis: Axis,
    pub y_axis: Axis,
}

impl Chart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Lay out the plot area, ticks and series paths for a canvas described by `opts`.
    ///
    /// All series share the axes; ticks are computed over their pooled points.
    pub fn layout(&self, opts: &LayoutOptions) -> Result<ChartLayout> {
        let xs: Vec<f64> = self.series.iter().flat_map(Series::xs).collect();
        let ys: Vec<f64> = self.series.iter().flat_map(Series::ys).collect();
        let glyph = opts.glyph_width;

        let x_title_h = if self.x_axis.has_title() { opts.line_height } else { 0.0 };
        let plot_h = (opts.height - opts.line_height - glyph * 2.0 - x_title_h).max(0.0);
        let y_ticks = self.y_axis.resolve_ticks(&ys, plot_h as i32, glyph);

        let y_label_w = y_ticks.max_label_chars() as f32 * glyph;
        let y_title_w = if self.y_axis.has_title() { opts.line_height } else { 0.0 };
        let plot_w = (opts.width - y_label_w - glyph * 2.0 - y_title_w).max(0.0);
        let x_ticks = self.x_axis.resolve_ticks(&xs, plot_w as i32, glyph);

        let plot = PlotRect::from_ltwh(opts.width - plot_w, 0.0, plot_w, plot_h);
        debug!("layout: plot={plot:?} x_ticks={:?} y_ticks={:?}", x_ticks.labels, y_ticks.labels);

        let transform = CanvasTransform::new(
            &plot,
            (x_ticks.first(), x_ticks.last()),
            (y_ticks.first(), y_ticks.last()),
        );
        let x_tick_px = x_ticks.values.iter().map(|&v| transform.x.to_px(v)).collect();
        let y_tick_px = y_ticks.values.iter().map(|&v| transform.y.to_px(v)).collect();

        let series = self
            .series
            .iter()
            .map(|s| -> Result<SeriesLayout> {
                let points: Vec<Point> = s.points.iter().map(|&p| transform.to_canvas(p)).collect();
                let path = if s.show_line && points.len() >= 2 {
                    build_path(&points, s.curve)?
                } else {
                    Vec::new()
                };
                Ok(SeriesLayout { points, path })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ChartLayout { plot, x_ticks, y_ticks, x_tick_px, y_tick_px, transform, series })
    }
}
