//! Pixel buffer: an owned, row-major RGBA8 image.
//!
//! # Invariant
//!
//! `pixels.len() == width * height` at all times. The fields are private and
//! every constructor checks the invariant, so transforms can index without
//! re-validating.
//!
//! # Empty image
//!
//! `Image::default()` is a 0x0 image with no buffer. It plays the role of a
//! null handle: [`Image::flip_horizontal`] treats it as a no-op and every
//! other transform rejects it with [`ImageError::InvalidGeometry`].

use crate::error::ImageError;
use crate::transform::{self, RotationMapping};

/// A single RGBA pixel, 8 bits per channel.
///
/// `#[repr(C)]` keeps a `[Pixel]` slice laid out exactly like interleaved
/// RGBA8 bytes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(C)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// The all-zero pixel, used as background by rotation.
    pub const TRANSPARENT: Pixel = Pixel::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Pixel {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Pixel> for [u8; 4] {
    fn from(pixel: Pixel) -> Self {
        pixel.to_array()
    }
}

/// An image that exclusively owns its pixel buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Image {
    width: i32,
    height: i32,
    pixels: Vec<Pixel>,
}

/// Number of pixels for the given dimensions, `None` if either is
/// non-positive or the product overflows.
pub(crate) fn buffer_len(width: i32, height: i32) -> Option<usize> {
    if width <= 0 || height <= 0 {
        return None;
    }
    let width = usize::try_from(width).ok()?;
    let height = usize::try_from(height).ok()?;
    width.checked_mul(height)
}

impl Image {
    /// Allocate a `width` x `height` image.
    ///
    /// The buffer is zero-filled, but callers must not rely on the initial
    /// contents.
    ///
    /// # Errors
    ///
    /// Returns `ImageError::AllocationError` if either dimension is not
    /// positive, if `width * height` overflows, or if the allocator refuses
    /// the reservation.
    pub fn new(width: i32, height: i32) -> Result<Self, ImageError> {
        let len = buffer_len(width, height).ok_or_else(|| ImageError::allocation(width, height))?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| ImageError::allocation(width, height))?;
        pixels.resize(len, Pixel::TRANSPARENT);

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Wrap an existing pixel vector.
    ///
    /// # Errors
    ///
    /// Returns `ImageError::InvalidGeometry` if the dimensions are not
    /// positive or don't match `pixels.len()`.
    pub fn from_pixels(width: i32, height: i32, pixels: Vec<Pixel>) -> Result<Self, ImageError> {
        let len = buffer_len(width, height).ok_or_else(|| {
            ImageError::geometry(format!("{width}x{height} is not a valid image size"))
        })?;
        if pixels.len() != len {
            return Err(ImageError::geometry(format!(
                "{width}x{height} image needs {len} pixels, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build an image from interleaved RGBA8 bytes.
    ///
    /// # Errors
    ///
    /// Returns `ImageError::InvalidGeometry` for non-positive dimensions and
    /// `ImageError::InvalidPixelData` when `bytes.len() != width * height * 4`.
    pub fn from_rgba_bytes(width: i32, height: i32, bytes: &[u8]) -> Result<Self, ImageError> {
        let len = buffer_len(width, height).ok_or_else(|| {
            ImageError::geometry(format!("{width}x{height} is not a valid image size"))
        })?;
        let expected = len.checked_mul(4).ok_or_else(|| ImageError::allocation(width, height))?;
        if bytes.len() != expected {
            return Err(ImageError::InvalidPixelData {
                expected,
                actual: bytes.len(),
            });
        }

        let pixels = bytes
            .chunks_exact(4)
            .map(|c| Pixel::new(c[0], c[1], c[2], c[3]))
            .collect();

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create an Image from an `image::RgbaImage`.
    pub fn from_rgba_image(img: image::RgbaImage) -> Result<Self, ImageError> {
        let (w, h) = img.dimensions();
        let width = i32::try_from(w)
            .map_err(|_| ImageError::geometry(format!("width {w} exceeds i32::MAX")))?;
        let height = i32::try_from(h)
            .map_err(|_| ImageError::geometry(format!("height {h} exceeds i32::MAX")))?;
        Self::from_rgba_bytes(width, height, img.as_raw())
    }

    /// Convert to an `image::RgbaImage` for encoding.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        let width = u32::try_from(self.width).ok()?;
        let height = u32::try_from(self.height).ok()?;
        image::RgbaImage::from_raw(width, height, self.to_rgba_bytes())
    }

    /// Interleaved RGBA8 copy of the pixel data.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|p| p.to_array()).collect()
    }

    /// Release the image and its buffer.
    ///
    /// Equivalent to dropping it; releasing the empty image is fine.
    pub fn release(self) {
        drop(self);
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// `(width, height)`
    pub fn dimensions(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    /// Number of pixels in the buffer.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is the empty (null) image.
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0 || self.pixels.is_empty()
    }

    /// Row-major pixel data.
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Mutable row-major pixel data. The length can't be changed through it.
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Pixel at `(x, y)`, `None` when out of bounds.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Pixel> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Overwrite the pixel at `(x, y)`. Returns `false` when out of bounds.
    pub fn set_pixel(&mut self, x: i32, y: i32, pixel: Pixel) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = pixel;
                true
            }
            None => false,
        }
    }

    /// Pixels of row `y`, `None` when out of bounds.
    pub fn row(&self, y: i32) -> Option<&[Pixel]> {
        if y < 0 || y >= self.height {
            return None;
        }
        let width = self.width as usize;
        let start = y as usize * width;
        Some(&self.pixels[start..start + width])
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Resize in place with nearest-neighbor sampling.
    ///
    /// See [`transform::resize`]. On error `self` is unchanged.
    pub fn resize(&mut self, new_width: i32, new_height: i32) -> Result<(), ImageError> {
        *self = transform::resize(self, new_width, new_height)?;
        Ok(())
    }

    /// Crop in place. See [`transform::crop`]. On error `self` is unchanged.
    pub fn crop(&mut self, x: i32, y: i32, width: i32, height: i32) -> Result<(), ImageError> {
        *self = transform::crop(self, x, y, width, height)?;
        Ok(())
    }

    /// Mirror horizontally. See [`transform::flip_horizontal`].
    pub fn flip_horizontal(&mut self) {
        transform::flip_horizontal(self);
    }

    /// Rotate clockwise about the center. See [`transform::rotate`].
    pub fn rotate(&mut self, angle_degrees: f64) -> Result<(), ImageError> {
        transform::rotate(self, angle_degrees)
    }

    /// Rotate with an explicit mapping. See [`transform::rotate_with`].
    pub fn rotate_with(
        &mut self,
        angle_degrees: f64,
        mapping: RotationMapping,
    ) -> Result<(), ImageError> {
        transform::rotate_with(self, angle_degrees, mapping)
    }
}
