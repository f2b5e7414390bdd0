//! Image comparison utilities for testing.

use image::{ImageFormat, RgbImage};
use std::path::Path;

/// Maximum pixel difference for image comparison
pub const DEFAULT_PIXEL_DIFF: u8 = 1;

/// Load an image from a file as 8-bit RGB
pub fn load_rgb(path: &Path) -> RgbImage {
    image::open(path).unwrap().to_rgb8()
}

/// Detect image format from a file's bytes
pub fn detect_image_format(path: &Path) -> Option<ImageFormat> {
    let bytes = std::fs::read(path).ok()?;
    image::guess_format(&bytes).ok()
}

/// Compare two images for approximate equality
///
/// # Returns
///
/// * `Ok(())` if every channel differs by at most `max_diff` (default: 1)
/// * `Err(String)` describing the first mismatch otherwise
pub fn assert_images_approx_eq(
    actual: &RgbImage,
    expected: &RgbImage,
    max_diff: Option<u8>,
) -> Result<(), String> {
    if actual.dimensions() != expected.dimensions() {
        return Err(format!(
            "Image dimensions differ: actual = {:?}, expected = {:?}",
            actual.dimensions(),
            expected.dimensions()
        ));
    }

    let max_diff = max_diff.unwrap_or(DEFAULT_PIXEL_DIFF);
    for (x, y, pixel) in actual.enumerate_pixels() {
        let expected_pixel = expected.get_pixel(x, y);
        for (a, e) in pixel.0.iter().zip(expected_pixel.0.iter()) {
            if a.abs_diff(*e) > max_diff {
                return Err(format!(
                    "Images differ at ({}, {}): actual = {:?}, expected = {:?}",
                    x, y, pixel.0, expected_pixel.0
                ));
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_assert_images_approx_eq() {
        let img1 = RgbImage::from_fn(3, 3, |x, y| Rgb([x as u8, y as u8, 100]));
        let img2 = RgbImage::from_fn(3, 3, |x, y| Rgb([x as u8, y as u8, 101]));
        let img3 = RgbImage::from_fn(3, 3, |x, y| Rgb([x as u8, y as u8, 110]));

        assert!(assert_images_approx_eq(&img1, &img2, None).is_ok());
        assert!(assert_images_approx_eq(&img1, &img3, None).is_err());
        assert!(assert_images_approx_eq(&img1, &RgbImage::new(2, 3), None).is_err());
    }
}
