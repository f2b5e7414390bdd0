//! Applying lookup tables to 8-bit images.
//!
//! Pixel intensities index the table directly; nothing is interpolated
//! beyond the table's own resolution.

use image::{GrayImage, ImageBuffer, Rgb, RgbImage};
use ndarray::{aview1, Array3, ArrayView2, ArrayViewD, Axis, Zip};

use super::{Lut, TableLayout, CHANNELS};
use crate::error::{ColormapError, Result};

/// Number of entries a table needs to cover every 8-bit intensity
pub const INTENSITY_LEVELS: usize = 256;

fn check_levels(shape: &[usize], len: usize) -> Result<()> {
    if len != INTENSITY_LEVELS {
        return Err(ColormapError::invalid_shape(
            shape,
            format!(
                "applying a table to 8-bit images needs {} entries, got {}",
                INTENSITY_LEVELS, len
            ),
        ));
    }
    Ok(())
}

/// Map a single-channel image through a 256-entry table of shape `(256, 3)`
/// or `(256, 1, 3)`.
///
/// Returns an `(H, W, 3)` image. Channels are copied in table order, so a
/// BGR table yields a BGR image.
pub fn apply_colormap(image: ArrayView2<'_, u8>, table: ArrayViewD<'_, u8>) -> Result<Array3<u8>> {
    let layout = TableLayout::detect(table.shape())?;
    let colors = layout.colors(&table);
    check_levels(table.shape(), colors.len())?;

    let (height, width) = image.dim();
    let mut colored = Array3::<u8>::zeros((height, width, CHANNELS));

    Zip::from(colored.lanes_mut(Axis(2)))
        .and(&image)
        .for_each(|mut pixel, &intensity| {
            pixel.assign(&aview1(&colors[intensity as usize]));
        });

    Ok(colored)
}

/// Colorize a grayscale image with a 256-entry table
pub fn apply_to_image(image: &GrayImage, lut: &Lut) -> Result<RgbImage> {
    check_levels(lut.as_array().shape(), lut.len())?;

    let colors = lut.colors();
    let colored = ImageBuffer::from_fn(image.width(), image.height(), |x, y| {
        Rgb(colors[image.get_pixel(x, y).0[0] as usize])
    });

    Ok(colored)
}

/// Render a horizontal color bar, first entry on the left
pub fn render_colorbar(lut: &Lut, width: u32, height: u32) -> Result<RgbImage> {
    if width == 0 || height == 0 {
        return Err(ColormapError::InvalidParameter {
            param: "size".to_string(),
            message: format!("Color bar size must be positive, got {}x{}", width, height),
        });
    }

    let colors = lut.colors();
    let last = colors.len() - 1;
    let bar = ImageBuffer::from_fn(width, height, |x, _| {
        let index = (x as usize * colors.len() / width as usize).min(last);
        Rgb(colors[index])
    });

    Ok(bar)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{Array2, Array3};

    fn ramp_table() -> Array2<u8> {
        Array2::from_shape_fn((256, 3), |(i, c)| match c {
            0 => i as u8,
            1 => 255 - i as u8,
            _ => (i / 2) as u8,
        })
    }

    #[test]
    fn test_apply_colormap_indexes_table() {
        let table = ramp_table();
        let image = Array2::from_shape_fn((4, 64), |(y, x)| (y * 64 + x) as u8);

        let colored = apply_colormap(image.view(), table.view().into_dyn()).unwrap();

        assert_eq!(colored.shape(), &[4, 64, 3]);
        for ((y, x), &v) in image.indexed_iter() {
            assert_eq!(colored[[y, x, 0]], v);
            assert_eq!(colored[[y, x, 1]], 255 - v);
            assert_eq!(colored[[y, x, 2]], v / 2);
        }
    }

    #[test]
    fn test_apply_colormap_accepts_stacked_table() {
        let flat = ramp_table();
        let stacked = flat.clone().insert_axis(Axis(1));
        let image = Array2::from_shape_fn((3, 3), |(y, x)| (y * 80 + x * 7) as u8);

        let a = apply_colormap(image.view(), flat.view().into_dyn()).unwrap();
        let b = apply_colormap(image.view(), stacked.view().into_dyn()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_apply_colormap_needs_256_entries() {
        let table = Array2::<u8>::zeros((128, 3));
        let image = Array2::<u8>::zeros((2, 2));
        assert!(matches!(
            apply_colormap(image.view(), table.view().into_dyn()),
            Err(ColormapError::InvalidShape { .. })
        ));

        let table = Array3::<u8>::zeros((256, 3, 1));
        assert!(apply_colormap(image.view(), table.view().into_dyn()).is_err());
    }

    #[test]
    fn test_apply_to_image() {
        let lut = Lut::from_array(ramp_table().view().into_dyn()).unwrap();
        let gray = GrayImage::from_fn(16, 16, |x, y| image::Luma([(x * 16 + y) as u8]));

        let colored = apply_to_image(&gray, &lut).unwrap();
        assert_eq!(colored.dimensions(), (16, 16));
        assert_eq!(colored.get_pixel(15, 15).0, [255, 0, 127]);
        assert_eq!(colored.get_pixel(0, 0).0, [0, 255, 0]);

        let short = lut.resample(16).unwrap();
        assert!(apply_to_image(&gray, &short).is_err());
    }

    #[test]
    fn test_render_colorbar() {
        let lut = Lut::from_rgb(&[[255, 0, 0], [0, 0, 255]]).unwrap();
        let bar = render_colorbar(&lut, 10, 2).unwrap();

        assert_eq!(bar.dimensions(), (10, 2));
        assert_eq!(bar.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(bar.get_pixel(4, 1).0, [255, 0, 0]);
        assert_eq!(bar.get_pixel(5, 0).0, [0, 0, 255]);
        assert_eq!(bar.get_pixel(9, 1).0, [0, 0, 255]);

        assert!(render_colorbar(&lut, 0, 2).is_err());
    }
}
