// File: crates/xygraph-core/src/series.rs
// Summary: Series model for XY data with point/line visibility and curve style.

use crate::types::Point;

/// How consecutive points of a series are joined.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CurveStyle {
    /// Straight segments.
    #[default]
    Linear,
    /// Cubic segments with horizontal tangents at every knot.
    Bicubic,
    /// C1-continuous cubic spline through all knots.
    Spline,
}

impl std::str::FromStr for CurveStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "linear" => Ok(CurveStyle::Linear),
            "bicubic" => Ok(CurveStyle::Bicubic),
            "spline" => Ok(CurveStyle::Spline),
            other => Err(format!("unknown curve style '{other}' (expected linear, bicubic or spline)")),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Series {
    pub points: Vec<Point>,
    pub description: String,
    pub show_line: bool,
    pub show_points: bool,
    pub curve: CurveStyle,
}

impl Series {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points, description: String::new(), show_line: true, show_points: true, curve: CurveStyle::Linear }
    }

    pub fn from_xy(data: &[(f64, f64)]) -> Self {
        Self::new(data.iter().copied().map(Point::from).collect())
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_curve(mut self, curve: CurveStyle) -> Self {
        self.curve = curve;
        self
    }

    pub fn with_line(mut self, show: bool) -> Self {
        self.show_line = show;
        self
    }

    pub fn with_points(mut self, show: bool) -> Self {
        self.show_points = show;
        self
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ { self.points.iter().map(|p| p.x) }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ { self.points.iter().map(|p| p.y) }
}
