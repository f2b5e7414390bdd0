//! Colormap trait and the table-backed implementation.
//!
//! This module defines the common interface for continuous colormaps and
//! [`LutColormap`], which turns a discrete lookup table into one.

use ndarray::ArrayViewD;
use std::fmt;
use std::str::FromStr;

use crate::error::{ColormapError, Result};
use crate::lut::{Lut, TableLayout};

/// Trait for color mapping implementations
pub trait Colormap: Send + Sync {
    /// Map a normalized value (0.0 to 1.0) to an RGBA color
    fn map_normalized(&self, value: f32) -> [u8; 4];

    /// Map a value to an RGBA color given the data range
    fn map(&self, value: f32, min: f32, max: f32) -> [u8; 4] {
        let normalized = if max > min {
            ((value - min) / (max - min)).clamp(0.0, 1.0)
        } else {
            0.5
        };
        self.map_normalized(normalized)
    }

    /// Get the name of this colormap
    fn name(&self) -> &str;
}

/// Linear interpolation between two colors, rounded to the nearest byte
pub fn lerp_color(c1: [u8; 3], c2: [u8; 3], t: f32) -> [u8; 3] {
    let channel = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t).round() as u8;
    [
        channel(c1[0], c2[0]),
        channel(c1[1], c2[1]),
        channel(c1[2], c2[2]),
    ]
}

/// How a table is read as a continuous colormap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LutMode {
    /// Each entry covers an equal slice of [0, 1]; no blending
    #[default]
    Listed,
    /// Entries sit at evenly spaced positions and are blended in between
    Linear,
}

impl fmt::Display for LutMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LutMode::Listed => write!(f, "listed"),
            LutMode::Linear => write!(f, "linear"),
        }
    }
}

impl FromStr for LutMode {
    type Err = ColormapError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "listed" => Ok(LutMode::Listed),
            "linear" => Ok(LutMode::Linear),
            _ => Err(ColormapError::InvalidParameter {
                param: "mode".to_string(),
                message: format!("Unknown mode: {}. Expected 'listed' or 'linear'", s),
            }),
        }
    }
}

/// A continuous colormap backed by a `u8` RGB table
#[derive(Debug, Clone, PartialEq)]
pub struct LutColormap {
    name: String,
    colors: Vec<[u8; 3]>,
    alpha: u8,
    mode: LutMode,
}

impl LutColormap {
    /// Wrap a raw RGB table of shape `(N, 3)` or `(N, 1, 3)`.
    ///
    /// `alpha` is the opacity of every color and must lie in [0, 1].
    pub fn from_table(
        table: ArrayViewD<'_, u8>,
        name: impl Into<String>,
        alpha: f32,
        mode: LutMode,
    ) -> Result<Self> {
        let layout = TableLayout::detect(table.shape())?;
        Self::from_colors(layout.colors(&table), name, alpha, mode)
    }

    /// Wrap an already validated table
    pub fn from_lut(lut: &Lut, name: impl Into<String>, alpha: f32, mode: LutMode) -> Result<Self> {
        Self::from_colors(lut.colors(), name, alpha, mode)
    }

    fn from_colors(
        colors: Vec<[u8; 3]>,
        name: impl Into<String>,
        alpha: f32,
        mode: LutMode,
    ) -> Result<Self> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ColormapError::InvalidParameter {
                param: "alpha".to_string(),
                message: format!("Alpha must be between 0 and 1, got {}", alpha),
            });
        }

        Ok(Self {
            name: name.into(),
            colors,
            alpha: (alpha * 255.0).round() as u8,
            mode,
        })
    }

    /// Number of table entries
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false; tables hold at least one entry
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn mode(&self) -> LutMode {
        self.mode
    }

    /// The opacity shared by all colors, as a byte
    pub fn alpha(&self) -> u8 {
        self.alpha
    }

    fn rgb(&self, value: f32) -> [u8; 3] {
        let last = self.colors.len() - 1;
        let value = value.clamp(0.0, 1.0) as f64;

        match self.mode {
            LutMode::Listed => {
                let index = ((value * self.colors.len() as f64).floor() as usize).min(last);
                self.colors[index]
            }
            LutMode::Linear => {
                if last == 0 {
                    return self.colors[0];
                }
                let position = value * last as f64;
                let lower = (position.floor() as usize).min(last - 1);
                let t = (position - lower as f64) as f32;
                lerp_color(self.colors[lower], self.colors[lower + 1], t)
            }
        }
    }
}

impl Colormap for LutColormap {
    fn map_normalized(&self, value: f32) -> [u8; 4] {
        // Bad values come out fully transparent
        if value.is_nan() {
            return [0, 0, 0, 0];
        }
        let [r, g, b] = self.rgb(value);
        [r, g, b, self.alpha]
    }

    fn name(&self) -> &str {
        &self.name
    }
}
