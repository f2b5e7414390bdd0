//! Lookup table resampling.
//!
//! Stretches or compresses a table to a new number of entries. Each channel
//! is treated as a piecewise-linear function over [0, 1] whose control points
//! are the original entries, evenly spaced. The new entries sample that
//! function at evenly spaced positions, so the first and last colors always
//! survive unchanged.

use ndarray::{ArrayD, ArrayViewD};
use tracing::trace;

use super::{TableLayout, CHANNELS};
use crate::error::{ColormapError, Result};
use crate::interpolation::{evenly_spaced, interp};

/// Resample a table of shape `(N, 3)` or `(N, 1, 3)` to `length` entries.
///
/// The output keeps the input's shape convention. When `length` already
/// equals `N` the result is an independent copy of the input.
pub fn resample_lut(table: ArrayViewD<'_, u8>, length: usize) -> Result<ArrayD<u8>> {
    let layout = TableLayout::detect(table.shape())?;

    if length == 0 {
        return Err(ColormapError::InvalidLength {
            length,
            message: "a resampled table needs at least one entry".to_string(),
        });
    }

    let original_len = table.shape()[0];
    if length == original_len {
        return Ok(table.to_owned());
    }

    trace!(
        from = original_len,
        to = length,
        layout = ?layout,
        "Resampling lookup table"
    );

    let colors = layout.colors(&table);
    let control_points = evenly_spaced(original_len);
    let positions = evenly_spaced(length);

    let mut resampled = vec![[0u8; CHANNELS]; length];
    for channel in 0..CHANNELS {
        let values: Vec<f64> = colors.iter().map(|c| c[channel] as f64).collect();

        for (entry, &position) in resampled.iter_mut().zip(positions.iter()) {
            let value = interp(position, &control_points, &values);
            entry[channel] = value.round().clamp(0.0, 255.0) as u8;
        }
    }

    layout.build(&resampled)
}
