// File: crates/xygraph-core/src/error.rs
// Summary: Library error type.

use thiserror::Error;

/// Errors surfaced by the core algorithms.
///
/// Degenerate axis ranges are not errors; the scaler recovers locally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    /// A Bezier spline needs at least two knots.
    #[error("invalid argument: at least {min} knot points required, got {got}")]
    TooFewKnots { got: usize, min: usize },
}

pub type Result<T> = std::result::Result<T, GraphError>;
