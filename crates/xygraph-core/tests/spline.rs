// File: crates/xygraph-core/tests/spline.rs
// Purpose: Validate Bezier control points for straight, collinear and curved knot sequences.

use approx::assert_relative_eq;
use xygraph_core::{fit_cubic_spline, GraphError, Point};

fn pts(data: &[(f64, f64)]) -> Vec<Point> {
    data.iter().copied().map(Point::from).collect()
}

#[test]
fn fewer_than_two_knots_is_an_error() {
    assert_eq!(fit_cubic_spline(&[]), Err(GraphError::TooFewKnots { got: 0, min: 2 }));
    assert_eq!(
        fit_cubic_spline(&[Point::new(1.0, 1.0)]),
        Err(GraphError::TooFewKnots { got: 1, min: 2 })
    );
    let msg = fit_cubic_spline(&[]).unwrap_err().to_string();
    assert!(msg.contains("at least 2"), "{msg}");
}

#[test]
fn two_knots_form_a_straight_segment() {
    let cp = fit_cubic_spline(&pts(&[(0.0, 0.0), (3.0, 6.0)])).expect("two knots");
    assert_eq!(cp.len(), 1);
    assert_eq!(cp.second.len(), 1);
    assert_relative_eq!(cp.first[0].x, 1.0, epsilon = 1e-12);
    assert_relative_eq!(cp.first[0].y, 2.0, epsilon = 1e-12);
    assert_relative_eq!(cp.second[0].x, 2.0, epsilon = 1e-12);
    assert_relative_eq!(cp.second[0].y, 4.0, epsilon = 1e-12);
}

#[test]
fn collinear_knots_keep_controls_on_the_line() {
    let knots = pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]);
    let cp = fit_cubic_spline(&knots).expect("fit");
    assert_eq!(cp.first.len(), 3);
    assert_eq!(cp.second.len(), 3);
    for (a, b) in cp.segments() {
        assert_eq!(a.x, a.y);
        assert_eq!(b.x, b.y);
    }
    // Evenly spaced knots put the controls at the thirds of each segment.
    let firsts = [1.0 / 3.0, 4.0 / 3.0, 7.0 / 3.0];
    let seconds = [2.0 / 3.0, 5.0 / 3.0, 8.0 / 3.0];
    for i in 0..3 {
        assert_relative_eq!(cp.first[i].x, firsts[i], epsilon = 1e-12);
        assert_relative_eq!(cp.second[i].x, seconds[i], epsilon = 1e-12);
    }
}

#[test]
fn three_knots_peak() {
    let cp = fit_cubic_spline(&pts(&[(0.0, 0.0), (1.0, 2.0), (2.0, 0.0)])).expect("fit");
    let want_first = [(1.0 / 3.0, 1.0), (4.0 / 3.0, 2.0)];
    let want_second = [(2.0 / 3.0, 2.0), (5.0 / 3.0, 1.0)];
    for i in 0..2 {
        assert_relative_eq!(cp.first[i].x, want_first[i].0, epsilon = 1e-12);
        assert_relative_eq!(cp.first[i].y, want_first[i].1, epsilon = 1e-12);
        assert_relative_eq!(cp.second[i].x, want_second[i].0, epsilon = 1e-12);
        assert_relative_eq!(cp.second[i].y, want_second[i].1, epsilon = 1e-12);
    }
}

#[test]
fn tangents_are_continuous_at_interior_knots() {
    let knots = pts(&[(0.0, 1.0), (0.7, 3.2), (2.0, -1.5), (2.4, 0.0), (5.0, 4.4), (6.1, 2.0)]);
    let cp = fit_cubic_spline(&knots).expect("fit");
    assert_eq!(cp.len(), knots.len() - 1);
    for i in 1..knots.len() - 1 {
        // Incoming and outgoing handles mirror each other around the knot.
        let mid = (cp.second[i - 1] + cp.first[i]) * 0.5;
        assert_relative_eq!(mid.x, knots[i].x, epsilon = 1e-9);
        assert_relative_eq!(mid.y, knots[i].y, epsilon = 1e-9);
    }
}

#[test]
fn fitting_is_deterministic() {
    let knots = pts(&[(0.0, 0.0), (1.0, 4.0), (2.0, 1.0), (3.0, 9.0), (4.0, 0.5)]);
    let a = fit_cubic_spline(&knots).expect("fit");
    let b = fit_cubic_spline(&knots).expect("fit");
    assert_eq!(a, b);
    assert!(a.segments().all(|(p, q)| p.x.is_finite() && p.y.is_finite() && q.x.is_finite() && q.y.is_finite()));
}
