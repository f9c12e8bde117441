//! Nearest-neighbor resizing with fixed-point coordinates.
//!
//! Source coordinates are tracked as integers with [`FIXED_POINT_SHIFT`]
//! fractional bits (a scale of 1024), so the inner loop is additions and
//! shifts only. The step per destination pixel is
//! `(src_size << 10) / dst_size`, truncated; the truncation can make the last
//! destination column sample slightly left of its exact nearest source pixel,
//! which is within the tolerance of nearest-neighbor sampling.

use crate::buffer::Image;
use crate::error::ImageError;

/// Number of fractional bits in the fixed-point source coordinates.
pub const FIXED_POINT_SHIFT: u32 = 10;

/// Resize an image to exact dimensions with nearest-neighbor sampling.
///
/// # Arguments
///
/// * `image` - Source image
/// * `new_width` - Target width in pixels
/// * `new_height` - Target height in pixels
///
/// # Returns
///
/// A new `Image` of `new_width` x `new_height` pixels.
///
/// # Errors
///
/// - `ImageError::InvalidGeometry` if a target dimension is not positive or
///   the source is empty
/// - `ImageError::AllocationError` if the destination can't be allocated
pub fn resize(image: &Image, new_width: i32, new_height: i32) -> Result<Image, ImageError> {
    if new_width <= 0 || new_height <= 0 {
        return Err(ImageError::geometry(format!(
            "resize target {new_width}x{new_height} must be positive"
        )));
    }
    if image.is_empty() {
        return Err(ImageError::geometry("cannot resize an empty image"));
    }

    let mut resized = Image::new(new_width, new_height)?;

    let (src_w, src_h) = image.dimensions();
    // i64 keeps `src << 10` from overflowing for widths above 2^21
    let scale_x = (i64::from(src_w) << FIXED_POINT_SHIFT) / i64::from(new_width);
    let scale_y = (i64::from(src_h) << FIXED_POINT_SHIFT) / i64::from(new_height);

    let src_w = src_w as usize;
    let dst_w = new_width as usize;
    let src = image.pixels();
    let dst = resized.pixels_mut();

    let mut src_y: i64 = 0;
    for dst_row in dst.chunks_exact_mut(dst_w) {
        let src_row_start = (src_y >> FIXED_POINT_SHIFT) as usize * src_w;
        let src_row = &src[src_row_start..src_row_start + src_w];

        let mut src_x: i64 = 0;
        for dst_pixel in dst_row.iter_mut() {
            *dst_pixel = src_row[(src_x >> FIXED_POINT_SHIFT) as usize];
            src_x += scale_x;
        }
        src_y += scale_y;
    }

    log::debug!(
        "resize {}x{} -> {}x{} (scale {}/{} in 1/1024 px)",
        image.width(),
        image.height(),
        new_width,
        new_height,
        scale_x,
        scale_y
    );

    Ok(resized)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
