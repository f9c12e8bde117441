//! Rectangular cropping in pixel coordinates.
//!
//! The rectangle `[x, x + width) x [y, y + height)` must lie entirely inside
//! the source image. Rectangles that are empty, start at a negative offset or
//! extend past the right/bottom edge are rejected rather than clamped, so a
//! crop never reads outside the source buffer.
//!
//! # Example
//!
//! ```ignore
//! // Keep the 50x50 block starting at (10, 20)
//! let cropped = crop(&image, 10, 20, 50, 50)?;
//! ```

use crate::buffer::Image;
use crate::error::ImageError;

/// Extract a rectangle from an image.
///
/// # Arguments
///
/// * `image` - Source image to crop
/// * `x` - Left edge of the crop region, in pixels
/// * `y` - Top edge of the crop region, in pixels
/// * `width` - Width of the crop region, in pixels
/// * `height` - Height of the crop region, in pixels
///
/// # Returns
///
/// A new `Image` of `width` x `height` pixels copied verbatim from the source.
///
/// # Errors
///
/// - `ImageError::InvalidGeometry` if the rectangle is empty, negative or not
///   fully inside the source, or if the source is empty
/// - `ImageError::AllocationError` if the destination can't be allocated
pub fn crop(image: &Image, x: i32, y: i32, width: i32, height: i32) -> Result<Image, ImageError> {
    if image.is_empty() {
        return Err(ImageError::geometry("cannot crop an empty image"));
    }
    if width <= 0 || height <= 0 {
        return Err(ImageError::geometry(format!(
            "crop size {width}x{height} must be positive"
        )));
    }

    let (src_w, src_h) = image.dimensions();
    // i64 so that x + width can't wrap
    let right = i64::from(x) + i64::from(width);
    let bottom = i64::from(y) + i64::from(height);
    if x < 0 || y < 0 || right > i64::from(src_w) || bottom > i64::from(src_h) {
        return Err(ImageError::geometry(format!(
            "crop rectangle ({x}, {y}) {width}x{height} exceeds {src_w}x{src_h} image"
        )));
    }

    let mut cropped = Image::new(width, height)?;

    let src_w = src_w as usize;
    let (x, y, width) = (x as usize, y as usize, width as usize);
    let src = image.pixels();

    // Copy pixel data row by row
    for (row, dst_row) in cropped.pixels_mut().chunks_exact_mut(width).enumerate() {
        let src_start = (y + row) * src_w + x;
        dst_row.copy_from_slice(&src[src_start..src_start + width]);
    }

    log::debug!(
        "crop {}x{} -> ({}, {}) {}x{}",
        image.width(),
        image.height(),
        x,
        y,
        cropped.width(),
        cropped.height()
    );

    Ok(cropped)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::buffer::Pixel;
    use proptest::prelude::*;

    fn dimensions_strategy() -> impl Strategy<Value = (i32, i32)> {
        (1i32..=64, 1i32..=64)
    }

    fn create_test_image(width: i32, height: i32) -> Image {
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| Pixel::new(x as u8, y as u8, 7, 255)))
            .collect();
        Image::from_pixels(width, height, pixels).unwrap()
    }

    /// Image dimensions plus a rectangle that fits inside them.
    fn image_and_rect_strategy() -> impl Strategy<Value = ((i32, i32), (i32, i32, i32, i32))> {
        dimensions_strategy().prop_flat_map(|(w, h)| {
            (0..w, 0..h).prop_flat_map(move |(x, y)| {
                (Just((w, h)), (Just(x), Just(y), 1..=w - x, 1..=h - y))
            })
        })
    }

    proptest! {
        /// Property: in-bounds crops copy exactly the requested pixels.
        #[test]
        fn prop_in_bounds_crop_copies_pixels(
            ((width, height), (x, y, cw, ch)) in image_and_rect_strategy(),
        ) {
            let img = create_test_image(width, height);
            let result = crop(&img, x, y, cw, ch).unwrap();

            prop_assert_eq!(result.dimensions(), (cw, ch));
            for dy in 0..ch {
                for dx in 0..cw {
                    prop_assert_eq!(result.pixel(dx, dy), img.pixel(x + dx, y + dy));
                }
            }
        }

        /// Property: rectangles reaching past the edge are rejected and the
        /// source is untouched.
        #[test]
        fn prop_out_of_bounds_rejected(
            (width, height) in dimensions_strategy(),
            overshoot in 1i32..=10,
        ) {
            let img = create_test_image(width, height);
            let before = img.clone();

            prop_assert!(crop(&img, 0, 0, width + overshoot, height).is_err());
            prop_assert!(crop(&img, 0, 0, width, height + overshoot).is_err());
            prop_assert!(crop(&img, overshoot, 0, width, height).is_err());
            prop_assert_eq!(img, before);
        }

        /// Property: full crop returns the original image.
        #[test]
        fn prop_full_crop_returns_original((width, height) in dimensions_strategy()) {
            let img = create_test_image(width, height);
            let result = crop(&img, 0, 0, width, height).unwrap();
            prop_assert_eq!(result, img);
        }
    }
}
