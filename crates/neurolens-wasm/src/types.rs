//! WASM-compatible wrapper types for image data.
//!
//! This module provides the JavaScript-facing image type, wrapping the core
//! `Image` and converting between its pixel buffer and flat RGBA bytes.

use neurolens_core::Image;
use wasm_bindgen::prelude::*;

/// An RGBA image for JavaScript.
///
/// # Memory Management
///
/// The pixel data lives in WASM memory. `pixels()` copies it out to a
/// `Uint8Array`, so keep images in WASM memory between transforms and only
/// extract pixels when they are needed on the JS side.
///
/// `free()` releases the buffer immediately; otherwise wasm-bindgen's
/// finalizer does it.
#[wasm_bindgen]
pub struct JsImage {
    inner: Image,
}

#[wasm_bindgen]
impl JsImage {
    /// Create an image from dimensions and RGBA pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    ///
    /// # Errors
    /// Returns an error if the dimensions are not positive or `pixels` is not
    /// exactly `width * height * 4` bytes.
    #[wasm_bindgen(constructor)]
    pub fn new(width: i32, height: i32, pixels: Vec<u8>) -> Result<JsImage, JsValue> {
        Image::from_rgba_bytes(width, height, &pixels)
            .map(JsImage::from_image)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> i32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> i32 {
        self.inner.height()
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.len() * 4
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.to_rgba_bytes()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        self.inner.release();
    }
}

impl JsImage {
    pub(crate) fn from_image(inner: Image) -> Self {
        Self { inner }
    }

    pub(crate) fn as_image(&self) -> &Image {
        &self.inner
    }
}


/// WASM-specific tests for the error paths, which build a `JsValue`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_wrong_byte_count_rejected() {
        assert!(JsImage::new(2, 2, vec![0u8; 15]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_non_positive_dimensions_rejected() {
        assert!(JsImage::new(0, 2, Vec::new()).is_err());
        assert!(JsImage::new(-1, -1, vec![0u8; 4]).is_err());
    }
}
