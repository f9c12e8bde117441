//! Nearest-pixel rotation about the image center.
//!
//! The canvas keeps its size; whatever rotates out of it is lost and the
//! uncovered area becomes [`Pixel::TRANSPARENT`]. No interpolation is done.
//!
//! # Algorithm
//!
//! With `(cx, cy) = (width / 2, height / 2)` (integer division) and `θ` the
//! angle in degrees, a source pixel `(x, y)` lands at:
//!
//! ```text
//! new_x = cos(θ) * (x - cx) - sin(θ) * (y - cy) + cx
//! new_y = sin(θ) * (x - cx) + cos(θ) * (y - cy) + cy
//! ```
//!
//! which is a clockwise rotation on screen (y grows down). Sine and cosine
//! come from [`crate::math`].
//!
//! Two ways of applying this are offered, see [`RotationMapping`].

use serde::{Deserialize, Serialize};

use crate::buffer::{Image, Pixel};
use crate::error::ImageError;
use crate::math::{cos_approx, sin_approx};

/// How pixels are carried from the source to the rotated canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationMapping {
    /// Forward mapping: every source pixel is written to its rotated
    /// position. Collisions are last-write-wins and some destinations may
    /// receive nothing, leaving holes at angles that aren't multiples of 90°.
    #[default]
    Scatter,
    /// Inverse mapping: every destination pixel reads the source pixel at the
    /// inverse-rotated position. No holes.
    Gather,
}

/// Rotate an image clockwise about its center using forward mapping.
///
/// Equivalent to `rotate_with(image, angle_degrees, RotationMapping::Scatter)`.
pub fn rotate(image: &mut Image, angle_degrees: f64) -> Result<(), ImageError> {
    rotate_with(image, angle_degrees, RotationMapping::Scatter)
}

/// Rotate an image clockwise about its center.
///
/// A zeroed working buffer of the same size receives the rotated pixels and
/// is then copied back over the image.
///
/// # Errors
///
/// - `ImageError::InvalidGeometry` if the image is empty
/// - `ImageError::AllocationError` if the working buffer can't be allocated;
///   the image is untouched in that case
pub fn rotate_with(
    image: &mut Image,
    angle_degrees: f64,
    mapping: RotationMapping,
) -> Result<(), ImageError> {
    if image.is_empty() {
        return Err(ImageError::geometry("cannot rotate an empty image"));
    }

    let (width, height) = image.dimensions();
    let mut rotated = Image::new(width, height)?;

    let rotation = Rotation::new(width, height, angle_degrees);
    match mapping {
        RotationMapping::Scatter => scatter(image, &mut rotated, &rotation),
        RotationMapping::Gather => gather(image, &mut rotated, &rotation),
    }

    image.pixels_mut().copy_from_slice(rotated.pixels());

    log::debug!(
        "rotate {}x{} by {} degrees ({:?})",
        width,
        height,
        angle_degrees,
        mapping
    );

    Ok(())
}

/// Precomputed rotation about the integer image center.
struct Rotation {
    cos: f64,
    sin: f64,
    cx: f64,
    cy: f64,
    width: f64,
    height: f64,
}

impl Rotation {
    fn new(width: i32, height: i32, angle_degrees: f64) -> Self {
        Self {
            cos: cos_approx(angle_degrees),
            sin: sin_approx(angle_degrees),
            cx: f64::from(width / 2),
            cy: f64::from(height / 2),
            width: f64::from(width),
            height: f64::from(height),
        }
    }

    /// Where `(x, y)` goes under the rotation.
    #[inline]
    fn forward(&self, x: f64, y: f64) -> (f64, f64) {
        let (dx, dy) = (x - self.cx, y - self.cy);
        (
            self.cos * dx - self.sin * dy + self.cx,
            self.sin * dx + self.cos * dy + self.cy,
        )
    }

    /// Where `(x, y)` comes from under the rotation.
    #[inline]
    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        let (dx, dy) = (x - self.cx, y - self.cy);
        (
            self.cos * dx + self.sin * dy + self.cx,
            -self.sin * dx + self.cos * dy + self.cy,
        )
    }

    /// Row-major index of a position truncated to pixels, `None` outside.
    #[inline]
    fn index(&self, x: f64, y: f64) -> Option<usize> {
        if x >= 0.0 && x < self.width && y >= 0.0 && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }
}

fn scatter(src: &Image, dst: &mut Image, rotation: &Rotation) {
    let width = src.width() as usize;
    let dst = dst.pixels_mut();

    for (i, &pixel) in src.pixels().iter().enumerate() {
        let (x, y) = ((i % width) as f64, (i / width) as f64);
        let (new_x, new_y) = rotation.forward(x, y);
        if let Some(j) = rotation.index(new_x, new_y) {
            dst[j] = pixel;
        }
    }
}

fn gather(src: &Image, dst: &mut Image, rotation: &Rotation) {
    let width = src.width() as usize;
    let src = src.pixels();

    for (i, out) in dst.pixels_mut().iter_mut().enumerate() {
        let (x, y) = ((i % width) as f64, (i / width) as f64);
        let (src_x, src_y) = rotation.inverse(x, y);
        *out = rotation
            .index(src_x, src_y)
            .map_or(Pixel::TRANSPARENT, |j| src[j]);
    }
}
