//! One-dimensional piecewise-linear interpolation.
//!
//! Control points `(xs[i], ys[i])` are joined by straight segments. Queries
//! left of the first point take the first value, queries right of the last
//! point take the last value.

use super::common::linear_weight;

/// Evaluate the piecewise-linear function through `(xs, ys)` at `x`.
///
/// `xs` must be non-decreasing and the same length as `ys`. An empty
/// function evaluates to 0.
pub fn interp(x: f64, xs: &[f64], ys: &[f64]) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());

    let n = xs.len().min(ys.len());
    if n == 0 {
        return 0.0;
    }
    if n == 1 || x <= xs[0] {
        return ys[0];
    }
    if x >= xs[n - 1] {
        return ys[n - 1];
    }

    // First control point strictly right of x; x > xs[0] so upper >= 1.
    let upper = xs[..n].partition_point(|&p| p <= x);
    let lower = upper - 1;

    // xs[lower] <= x < xs[upper], so the span is positive.
    let span = xs[upper] - xs[lower];
    let (w0, w1) = linear_weight((x - xs[lower]) / span);
    ys[lower] * w0 + ys[upper] * w1
}
