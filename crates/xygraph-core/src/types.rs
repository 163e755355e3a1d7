// File: crates/xygraph-core/src/types.rs
// Summary: Shared types and constants (points, default canvas size, glyph metrics).

use std::ops::{Add, Mul, Sub};

/// Default canvas width in pixels.
pub const WIDTH: f32 = 800.0;
/// Default canvas height in pixels.
pub const HEIGHT: f32 = 480.0;
/// Default glyph width estimate used for label footprints.
pub const GLYPH_WIDTH: f32 = 12.0;
/// Default height of one line of label text.
pub const LINE_HEIGHT: f32 = 16.0;

/// A 2D point in data or canvas space.
/// Contract: both coordinates are finite.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;
    fn mul(self, k: f64) -> Point {
        Point::new(self.x * k, self.y * k)
    }
}
