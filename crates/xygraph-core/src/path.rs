// File: crates/xygraph-core/src/path.rs
// Summary: Renderer-agnostic path commands for a series, per curve style.

use crate::error::Result;
use crate::series::CurveStyle;
use crate::spline::{fit_cubic_spline, ControlPoints};
use crate::types::Point;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    /// Cubic Bezier: first control, second control, end point.
    CubicTo(Point, Point, Point),
}

impl PathCommand {
    /// Point the pen ends at after this command.
    pub fn end(&self) -> Point {
        match *self {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) | PathCommand::CubicTo(_, _, p) => p,
        }
    }
}

/// Control points placing both tangents of every segment horizontal, at the segment's
/// horizontal midpoint.
pub fn bicubic_control_points(points: &[Point]) -> ControlPoints {
    let mut out = ControlPoints::default();
    for w in points.windows(2) {
        let mid_x = (w[0].x + w[1].x) / 2.0;
        out.first.push(Point::new(mid_x, w[0].y));
        out.second.push(Point::new(mid_x, w[1].y));
    }
    out
}

/// Path through `points` joined according to `curve`.
///
/// Fewer than two points yield an empty path for `Linear`/`Bicubic`; `Spline` reports
/// the spline fitter's error instead.
pub fn build_path(points: &[Point], curve: CurveStyle) -> Result<Vec<PathCommand>> {
    let controls = match curve {
        CurveStyle::Spline => fit_cubic_spline(points)?,
        _ if points.len() < 2 => return Ok(Vec::new()),
        CurveStyle::Bicubic => bicubic_control_points(points),
        CurveStyle::Linear => {
            let mut path = Vec::with_capacity(points.len());
            path.push(PathCommand::MoveTo(points[0]));
            path.extend(points[1..].iter().map(|&p| PathCommand::LineTo(p)));
            return Ok(path);
        }
    };

    let mut path = Vec::with_capacity(points.len());
    path.push(PathCommand::MoveTo(points[0]));
    for ((c1, c2), &end) in controls.segments().zip(&points[1..]) {
        path.push(PathCommand::CubicTo(c1, c2, end));
    }
    Ok(path)
}

/// SVG path data (`M`, `L`, `C` commands) for `path`.
pub fn to_svg_path_data(path: &[PathCommand]) -> String {
    let parts: Vec<String> = path
        .iter()
        .map(|cmd| match cmd {
            PathCommand::MoveTo(p) => format!("M{:.2} {:.2}", p.x, p.y),
            PathCommand::LineTo(p) => format!("L{:.2} {:.2}", p.x, p.y),
            PathCommand::CubicTo(a, b, p) => {
                format!("C{:.2} {:.2} {:.2} {:.2} {:.2} {:.2}", a.x, a.y, b.x, b.y, p.x, p.y)
            }
        })
        .collect();
    parts.join(" ")
}
