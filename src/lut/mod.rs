//! Colormap lookup tables.
//!
//! A [`Lut`] is the canonical table every source hands out: `N` RGB entries
//! of `u8`, stored with shape `(N, 1, 3)` so it can be applied as a 2D lookup
//! table to single-channel images. Raw tables may also arrive as `(N, 3)`;
//! [`TableLayout`] tells the two apart and rejects everything else.

pub mod apply;
pub mod resample;

use ndarray::{s, Array2, Array3, ArrayD, ArrayViewD, Ix3, IxDyn};

use crate::error::{ColormapError, Result};

pub use apply::{apply_colormap, apply_to_image, render_colorbar};
pub use resample::resample_lut;

/// Number of entries in a table unless a caller asks otherwise.
pub const DEFAULT_LENGTH: usize = 256;

/// Number of color channels in every table.
pub const CHANNELS: usize = 3;

/// The two accepted shape conventions for a raw table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableLayout {
    /// `(N, 3)`
    Flat,
    /// `(N, 1, 3)`
    Stacked,
}

impl TableLayout {
    /// Classify a table shape, rejecting anything that is not `(N, 3)` or
    /// `(N, 1, 3)` with `N >= 1`.
    pub fn detect(shape: &[usize]) -> Result<Self> {
        let layout = match shape {
            [_, CHANNELS] => TableLayout::Flat,
            [_, 1, CHANNELS] => TableLayout::Stacked,
            _ => {
                return Err(ColormapError::invalid_shape(
                    shape,
                    "expected a table of shape (N, 3) or (N, 1, 3)",
                ))
            }
        };

        if shape[0] == 0 {
            return Err(ColormapError::invalid_shape(
                shape,
                "a table needs at least one entry",
            ));
        }

        Ok(layout)
    }

    /// Shape of a table with `len` entries in this layout
    pub fn shape(&self, len: usize) -> Vec<usize> {
        match self {
            TableLayout::Flat => vec![len, CHANNELS],
            TableLayout::Stacked => vec![len, 1, CHANNELS],
        }
    }

    /// Read the entries of a table already known to be in this layout
    pub fn colors(&self, table: &ArrayViewD<'_, u8>) -> Vec<[u8; 3]> {
        let len = table.shape()[0];
        (0..len)
            .map(|i| {
                let mut color = [0u8; CHANNELS];
                for (c, value) in color.iter_mut().enumerate() {
                    *value = match self {
                        TableLayout::Flat => table[&[i, c][..]],
                        TableLayout::Stacked => table[&[i, 0, c][..]],
                    };
                }
                color
            })
            .collect()
    }

    /// Build a table in this layout from its entries
    pub fn build(&self, colors: &[[u8; 3]]) -> Result<ArrayD<u8>> {
        let shape = self.shape(colors.len());
        let flat: Vec<u8> = colors.iter().flatten().copied().collect();
        ArrayD::from_shape_vec(IxDyn(&shape), flat)
            .map_err(|e| ColormapError::invalid_shape(&shape, e.to_string()))
    }
}

/// How a channel value in [0, 1] becomes a byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quantize {
    /// `(v * 255) as u8`, the way a plotting library's float colors become bytes
    #[default]
    Truncate,
    /// Nearest byte, the way an image library converts float tables
    Round,
}

impl Quantize {
    /// Convert one channel value, clamping it to [0, 1] first
    pub fn apply(&self, value: f64) -> u8 {
        let scaled = value.clamp(0.0, 1.0) * 255.0;
        match self {
            Quantize::Truncate => scaled as u8,
            Quantize::Round => scaled.round() as u8,
        }
    }
}

/// A colormap lookup table in canonical `(N, 1, 3)` RGB form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lut {
    table: Array3<u8>,
}

impl Lut {
    /// Create a table from RGB entries
    pub fn from_rgb(colors: &[[u8; 3]]) -> Result<Self> {
        if colors.is_empty() {
            return Err(ColormapError::invalid_shape(
                &[0, 1, CHANNELS],
                "a table needs at least one entry",
            ));
        }

        let flat: Vec<u8> = colors.iter().flatten().copied().collect();
        let table = Array3::from_shape_vec((colors.len(), 1, CHANNELS), flat).map_err(|e| {
            ColormapError::invalid_shape(&[colors.len(), 1, CHANNELS], e.to_string())
        })?;

        Ok(Self { table })
    }

    /// Create a table from an RGB array of shape `(N, 3)` or `(N, 1, 3)`
    pub fn from_array(table: ArrayViewD<'_, u8>) -> Result<Self> {
        let layout = TableLayout::detect(table.shape())?;
        Self::from_rgb(&layout.colors(&table))
    }

    /// Create a table from a BGR array of shape `(N, 3)` or `(N, 1, 3)`,
    /// as produced by the image-processing side.
    pub fn from_bgr(table: ArrayViewD<'_, u8>) -> Result<Self> {
        let layout = TableLayout::detect(table.shape())?;
        let colors: Vec<[u8; 3]> = layout
            .colors(&table)
            .into_iter()
            .map(|[b, g, r]| [r, g, b])
            .collect();
        Self::from_rgb(&colors)
    }

    /// Sample a color function at `len` evenly spaced positions over [0, 1].
    ///
    /// Channel values are in [0, 1] and become bytes according to `quantize`.
    pub fn sample<F>(len: usize, quantize: Quantize, mut f: F) -> Result<Self>
    where
        F: FnMut(f64) -> [f64; 3],
    {
        let colors: Vec<[u8; 3]> = crate::interpolation::evenly_spaced(len)
            .into_iter()
            .map(|t| f(t).map(|v| quantize.apply(v)))
            .collect();
        Self::from_rgb(&colors)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.table.shape()[0]
    }

    /// Always false; a table holds at least one entry
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get one entry
    pub fn color(&self, index: usize) -> Option<[u8; 3]> {
        if index >= self.len() {
            return None;
        }
        Some([
            self.table[[index, 0, 0]],
            self.table[[index, 0, 1]],
            self.table[[index, 0, 2]],
        ])
    }

    /// All entries in order
    pub fn colors(&self) -> Vec<[u8; 3]> {
        TableLayout::Stacked.colors(&self.table.view().into_dyn())
    }

    /// Borrow the underlying `(N, 1, 3)` array
    pub fn as_array(&self) -> &Array3<u8> {
        &self.table
    }

    /// The same entries in reverse order
    pub fn reversed(&self) -> Lut {
        Self {
            table: self.table.slice(s![..;-1, .., ..]).to_owned(),
        }
    }

    /// The table as an `(N, 3)` RGB array
    pub fn to_rgb_array(&self) -> Array2<u8> {
        self.table.slice(s![.., 0, ..]).to_owned()
    }

    /// The table with channels reversed, as an `(N, 1, 3)` BGR array.
    ///
    /// This is the only place RGB turns into BGR.
    pub fn to_bgr(&self) -> Array3<u8> {
        self.table.slice(s![.., .., ..;-1]).to_owned()
    }

    /// Resample to `length` entries
    pub fn resample(&self, length: usize) -> Result<Lut> {
        let resampled = resample_lut(self.table.view().into_dyn(), length)?;
        let table = resampled
            .into_dimensionality::<Ix3>()
            .map_err(|e| ColormapError::invalid_shape(&[length, 1, CHANNELS], e.to_string()))?;
        Ok(Self { table })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{arr2, arr3, Array1};

    #[test]
    fn test_detect_layout() {
        assert_eq!(TableLayout::detect(&[5, 3]).unwrap(), TableLayout::Flat);
        assert_eq!(
            TableLayout::detect(&[5, 1, 3]).unwrap(),
            TableLayout::Stacked
        );

        assert!(TableLayout::detect(&[5]).is_err());
        assert!(TableLayout::detect(&[5, 2]).is_err());
        assert!(TableLayout::detect(&[5, 3, 1]).is_err());
        assert!(TableLayout::detect(&[5, 2, 3]).is_err());
        assert!(TableLayout::detect(&[0, 3]).is_err());
        assert!(TableLayout::detect(&[1, 1, 1, 3]).is_err());
    }

    #[test]
    fn test_from_array_accepts_both_layouts() {
        let flat = arr2(&[[1u8, 2, 3], [4, 5, 6]]);
        let stacked = arr3(&[[[1u8, 2, 3]], [[4, 5, 6]]]);

        let a = Lut::from_array(flat.view().into_dyn()).unwrap();
        let b = Lut::from_array(stacked.view().into_dyn()).unwrap();

        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.as_array().shape(), &[2, 1, 3]);
        assert_eq!(a.color(1), Some([4, 5, 6]));
        assert_eq!(a.color(2), None);
    }

    #[test]
    fn test_from_array_rejects_other_shapes() {
        let one_dim = Array1::<u8>::zeros(5);
        assert!(matches!(
            Lut::from_array(one_dim.view().into_dyn()),
            Err(ColormapError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_empty_table_rejected() {
        assert!(matches!(
            Lut::from_rgb(&[]),
            Err(ColormapError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_channel_reversal() {
        let lut = Lut::from_rgb(&[[10, 20, 30], [40, 50, 60]]).unwrap();
        let bgr = lut.to_bgr();

        assert_eq!(bgr.shape(), &[2, 1, 3]);
        assert_eq!(bgr[[0, 0, 0]], 30);
        assert_eq!(bgr[[0, 0, 2]], 10);
        assert_eq!(bgr[[1, 0, 0]], 60);

        let back = Lut::from_bgr(bgr.view().into_dyn()).unwrap();
        assert_eq!(back, lut);
    }

    #[test]
    fn test_to_rgb_array() {
        let lut = Lut::from_rgb(&[[10, 20, 30], [40, 50, 60]]).unwrap();
        assert_eq!(lut.to_rgb_array(), arr2(&[[10, 20, 30], [40, 50, 60]]));
    }

    #[test]
    fn test_sample() {
        let lut = Lut::sample(256, Quantize::Truncate, |t| [t, 1.0 - t, 0.5]).unwrap();

        assert_eq!(lut.len(), 256);
        assert_eq!(lut.color(0), Some([0, 255, 127]));
        assert_eq!(lut.color(255), Some([255, 0, 127]));

        let rounded = Lut::sample(256, Quantize::Round, |t| [t, 1.0 - t, 0.5]).unwrap();
        assert_eq!(rounded.color(0), Some([0, 255, 128]));
    }

    #[test]
    fn test_quantize() {
        assert_eq!(Quantize::Truncate.apply(0.999), 254);
        assert_eq!(Quantize::Round.apply(0.999), 255);
        assert_eq!(Quantize::Round.apply(-1.0), 0);
        assert_eq!(Quantize::Truncate.apply(2.0), 255);
    }

    #[test]
    fn test_reversed() {
        let lut = Lut::from_rgb(&[[1, 2, 3], [4, 5, 6], [7, 8, 9]]).unwrap();
        let reversed = lut.reversed();

        assert_eq!(reversed.colors(), vec![[7, 8, 9], [4, 5, 6], [1, 2, 3]]);
        assert_eq!(reversed.reversed(), lut);
    }
}
