//! Common utilities for interpolation.

/// Get the weight for linear interpolation
pub fn linear_weight(fraction: f64) -> (f64, f64) {
    (1.0 - fraction, fraction)
}

/// `count` evenly spaced positions covering [0, 1], both ends included.
///
/// A single position sits at 0.
pub fn evenly_spaced(count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (count - 1) as f64;
            // Exact endpoints, independent of rounding in the division.
            (0..count)
                .map(|i| if i + 1 == count { 1.0 } else { i as f64 / last })
                .collect()
        }
    }
}
