//! Interpolation helpers.
//!
//! The LUT resampler and the built-in colormap catalogs both evaluate
//! piecewise-linear functions over the normalized range [0, 1]; the shared
//! pieces live here.

pub mod common;
pub mod linear;

pub use common::{evenly_spaced, linear_weight};
pub use linear::interp;
