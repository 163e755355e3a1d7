// File: crates/xygraph-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math (plot rect, data -> canvas mapping).

use crate::types::Point;

/// Axis-aligned rectangle in canvas pixels (y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlotRect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl PlotRect {
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }
}

/// Linear mapping of a data interval onto a pixel interval.
/// `px_start` receives `vmin`; pass a larger start than end to invert (screen y).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearMap {
    pub vmin: f64,
    pub vmax: f64,
    pub px_start: f32,
    pub px_end: f32,
}

impl LinearMap {
    pub fn new(vmin: f64, vmax: f64, px_start: f32, px_end: f32) -> Self {
        let mut m = Self { vmin, vmax, px_start, px_end };
        if (m.vmax - m.vmin).abs() < 1e-12 { m.vmax = m.vmin + 1.0; }
        m
    }
    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        let t = (v - self.vmin) / (self.vmax - self.vmin);
        self.px_start + t as f32 * (self.px_end - self.px_start)
    }
    #[inline]
    pub fn from_px(&self, px: f32) -> f64 {
        let span = self.px_end - self.px_start;
        if span == 0.0 { return self.vmin; }
        self.vmin + ((px - self.px_start) / span) as f64 * (self.vmax - self.vmin)
    }
}

/// Maps data points into a plot rectangle; y is inverted so larger values sit higher.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasTransform {
    pub x: LinearMap,
    pub y: LinearMap,
}

impl CanvasTransform {
    pub fn new(rect: &PlotRect, x_range: (f64, f64), y_range: (f64, f64)) -> Self {
        Self {
            x: LinearMap::new(x_range.0, x_range.1, rect.left, rect.right),
            y: LinearMap::new(y_range.0, y_range.1, rect.bottom, rect.top),
        }
    }

    pub fn to_canvas(&self, p: Point) -> Point {
        Point::new(self.x.to_px(p.x) as f64, self.y.to_px(p.y) as f64)
    }

    pub fn to_data(&self, p: Point) -> Point {
        Point::new(self.x.from_px(p.x as f32), self.y.from_px(p.y as f32))
    }
}
