// File: crates/xygraph-core/src/spline.rs
// Summary: Smooth cubic Bezier spline through knot points (first/second control points per segment).

use crate::error::{GraphError, Result};
use crate::types::Point;

/// Diagonal coefficient of the last row of the first-control-point system.
const LAST_DIAGONAL: f64 = 3.5;

/// Control points for a piecewise cubic Bezier path through `n + 1` knots.
/// Segment `i` runs from knot `i` to knot `i + 1` using `first[i]` and `second[i]`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlPoints {
    pub first: Vec<Point>,
    pub second: Vec<Point>,
}

impl ControlPoints {
    /// Number of Bezier segments.
    pub fn len(&self) -> usize { self.first.len() }

    pub fn is_empty(&self) -> bool { self.first.is_empty() }

    /// Iterate `(first, second)` pairs, one per segment.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.first.iter().copied().zip(self.second.iter().copied())
    }
}

/// Fit a C1-continuous cubic Bezier spline through `knots`.
///
/// Returns `knots.len() - 1` first and second control points. Fails with
/// [`GraphError::TooFewKnots`] for fewer than two knots.
pub fn fit_cubic_spline(knots: &[Point]) -> Result<ControlPoints> {
    let n = knots.len().saturating_sub(1);
    if n < 1 {
        return Err(GraphError::TooFewKnots { got: knots.len(), min: 2 });
    }

    if n == 1 {
        // Straight line: 3*P1 = 2*P0 + P3, P2 = 2*P1 - P0
        let first = (knots[0] * 2.0 + knots[1]) * (1.0 / 3.0);
        let second = first * 2.0 - knots[0];
        return Ok(ControlPoints { first: vec![first], second: vec![second] });
    }

    let xs: Vec<f64> = knots.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = knots.iter().map(|p| p.y).collect();
    let (first_x, second_x) = fit_axis(&xs);
    let (first_y, second_y) = fit_axis(&ys);

    let first = first_x.iter().zip(&first_y).map(|(&x, &y)| Point::new(x, y)).collect();
    let second = second_x.iter().zip(&second_y).map(|(&x, &y)| Point::new(x, y)).collect();
    Ok(ControlPoints { first, second })
}

/// First and second control coordinates along one axis. Requires at least three knots.
fn fit_axis(knots: &[f64]) -> (Vec<f64>, Vec<f64>) {
    let n = knots.len() - 1;

    let mut rhs = vec![0.0f64; n];
    for i in 1..n - 1 {
        rhs[i] = 4.0 * knots[i] + 2.0 * knots[i + 1];
    }
    rhs[0] = knots[0] + 2.0 * knots[1];
    rhs[n - 1] = (8.0 * knots[n - 1] + knots[n]) / 2.0;

    let first = solve_tridiagonal(&rhs, LAST_DIAGONAL);

    let second = (0..n)
        .map(|i| {
            if i < n - 1 {
                2.0 * knots[i + 1] - first[i + 1]
            } else {
                (knots[n] + first[n - 1]) / 2.0
            }
        })
        .collect();

    (first, second)
}

/// Thomas algorithm for the first-control-point system: diagonal `2, 4, .., 4, last_diagonal`
/// with ones on both off-diagonals.
pub(crate) fn solve_tridiagonal(rhs: &[f64], last_diagonal: f64) -> Vec<f64> {
    let n = rhs.len();
    let mut x = vec![0.0f64; n];
    if n == 0 {
        return x;
    }
    let mut tmp = vec![0.0f64; n];

    // Decomposition and forward substitution
    let mut b = 2.0;
    x[0] = rhs[0] / b;
    for i in 1..n {
        tmp[i] = 1.0 / b;
        b = if i < n - 1 { 4.0 } else { last_diagonal } - tmp[i];
        x[i] = (rhs[i] - x[i - 1]) / b;
    }

    // Back substitution
    for i in 1..n {
        x[n - i - 1] -= tmp[n - i] * x[n - i];
    }
    x
}
