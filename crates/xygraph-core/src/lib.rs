// File: crates/xygraph-core/src/lib.rs
// Summary: Core library entry point; exports axis auto-scaling, spline fitting and chart layout.

pub mod axis;
pub mod chart;
pub mod error;
pub mod geometry;
pub mod path;
pub mod scale;
pub mod series;
pub mod spline;
pub mod types;

pub use axis::Axis;
pub use chart::{Chart, ChartLayout, LayoutOptions, SeriesLayout};
pub use error::GraphError;
pub use geometry::{CanvasTransform, LinearMap, PlotRect};
pub use path::{bicubic_control_points, build_path, PathCommand};
pub use scale::{compute_ticks, scale_axis, TickSet};
pub use series::{CurveStyle, Series};
pub use spline::{fit_cubic_spline, ControlPoints};
pub use types::Point;
