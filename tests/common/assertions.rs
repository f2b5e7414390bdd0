//! Assertion utilities for testing.
//!
//! Helpers for comparing color tables where a difference of one unit per
//! channel is acceptable.

/// Default per-channel tolerance for table comparisons
pub const DEFAULT_TOLERANCE: u8 = 1;

/// Assert that two tables have the same length and every channel differs by
/// at most `tolerance` (default: 1).
///
/// # Panics
///
/// Panics on a length mismatch or on the first entry out of tolerance.
pub fn assert_colors_approx_eq(actual: &[[u8; 3]], expected: &[[u8; 3]], tolerance: Option<u8>) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "Tables have different lengths: actual = {}, expected = {}",
        actual.len(),
        expected.len()
    );

    let tolerance = tolerance.unwrap_or(DEFAULT_TOLERANCE);
    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        for c in 0..3 {
            let diff = a[c].abs_diff(e[c]);
            assert!(
                diff <= tolerance,
                "Tables differ at entry {} channel {}: actual = {:?}, expected = {:?}, tolerance = {}",
                i,
                c,
                a,
                e,
                tolerance
            );
        }
    }
}

/// Assert that one channel of a table never decreases
pub fn assert_channel_non_decreasing(colors: &[[u8; 3]], channel: usize) {
    for (i, pair) in colors.windows(2).enumerate() {
        assert!(
            pair[0][channel] <= pair[1][channel],
            "Channel {} decreases between entries {} and {}: {:?} -> {:?}",
            channel,
            i,
            i + 1,
            pair[0],
            pair[1]
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_colors_approx_eq() {
        assert_colors_approx_eq(&[[0, 0, 0], [255, 255, 255]], &[[0, 0, 0], [255, 255, 255]], None);
        assert_colors_approx_eq(&[[1, 0, 0]], &[[0, 1, 0]], None);
        assert_colors_approx_eq(&[[5, 0, 0]], &[[0, 0, 0]], Some(5));
    }

    #[test]
    #[should_panic]
    fn test_assert_colors_approx_eq_fails() {
        assert_colors_approx_eq(&[[2, 0, 0]], &[[0, 0, 0]], None);
    }

    #[test]
    fn test_assert_channel_non_decreasing() {
        assert_channel_non_decreasing(&[[0, 9, 0], [1, 5, 0], [1, 0, 0]], 0);
    }
}
