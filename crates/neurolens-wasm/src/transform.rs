//! WASM bindings for the geometric transforms and pipelines.
//!
//! Every function borrows its input and returns a new `JsImage`, so the
//! source stays valid on the JS side whether the call succeeds or fails.

use crate::types::JsImage;
use neurolens_core::{transform as engine, RotationMapping, TransformOp};
use wasm_bindgen::prelude::*;

/// Resize an image to exact dimensions with nearest-neighbor sampling.
#[wasm_bindgen]
pub fn resize(image: &JsImage, width: i32, height: i32) -> Result<JsImage, JsValue> {
    engine::resize(image.as_image(), width, height)
        .map(JsImage::from_image)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Crop a rectangle given in pixels.
///
/// # Errors
///
/// Returns an error if the rectangle is empty or not fully inside the image.
///
/// # Example (TypeScript)
///
/// ```typescript
/// // Keep the 100x100 block at (20, 20)
/// const cropped = crop(sourceImage, 20, 20, 100, 100);
/// ```
#[wasm_bindgen]
pub fn crop(image: &JsImage, x: i32, y: i32, width: i32, height: i32) -> Result<JsImage, JsValue> {
    engine::crop(image.as_image(), x, y, width, height)
        .map(JsImage::from_image)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Mirror an image horizontally.
#[wasm_bindgen]
pub fn flip_horizontal(image: &JsImage) -> JsImage {
    let mut result = image.as_image().clone();
    engine::flip_horizontal(&mut result);
    JsImage::from_image(result)
}

/// Rotate an image clockwise about its center, keeping its dimensions.
///
/// # Arguments
///
/// * `image` - Source image to rotate
/// * `angle_degrees` - Rotation angle in degrees (positive = clockwise)
/// * `gather` - Sample each output pixel from the source (no holes) instead
///   of scattering source pixels forward
#[wasm_bindgen]
pub fn rotate(image: &JsImage, angle_degrees: f64, gather: bool) -> Result<JsImage, JsValue> {
    let mapping = if gather {
        RotationMapping::Gather
    } else {
        RotationMapping::Scatter
    };

    let mut result = image.as_image().clone();
    engine::rotate_with(&mut result, angle_degrees, mapping)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(JsImage::from_image(result))
}

/// Apply a list of transforms in order.
///
/// `ops` is an array of tagged objects:
///
/// ```typescript
/// const out = apply_pipeline(image, [
///   { op: 'resize', width: 640, height: 480 },
///   { op: 'crop', x: 10, y: 10, width: 320, height: 240 },
///   { op: 'rotate', degrees: 15, mapping: 'gather' },
///   { op: 'flip_horizontal' },
/// ]);
/// ```
///
/// # Errors
///
/// Returns an error if `ops` can't be deserialized or any op fails.
#[wasm_bindgen]
pub fn apply_pipeline(image: &JsImage, ops: JsValue) -> Result<JsImage, JsValue> {
    let ops: Vec<TransformOp> = serde_wasm_bindgen::from_value(ops)
        .map_err(|e| JsValue::from_str(&format!("Invalid transform list: {}", e)))?;

    neurolens_core::apply_pipeline(image.as_image(), &ops)
        .map(JsImage::from_image)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Create a test image where red/green encode the pixel position.
    fn test_image(width: i32, height: i32) -> JsImage {
        let pixels: Vec<u8> = (0..height)
            .flat_map(|y| (0..width).flat_map(move |x| [x as u8, y as u8, 0, 255]))
            .collect();
        JsImage::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_resize_dimensions() {
        let img = test_image(100, 50);
        let result = resize(&img, 25, 10).unwrap();
        assert_eq!(result.width(), 25);
        assert_eq!(result.height(), 10);
    }

    #[test]
    fn test_crop_region() {
        let img = test_image(10, 10);
        let result = crop(&img, 2, 3, 4, 5).unwrap();
        assert_eq!(result.width(), 4);
        assert_eq!(result.height(), 5);
        assert_eq!(&result.pixels()[0..4], &[2, 3, 0, 255]);
    }

    #[test]
    fn test_flip_leaves_source() {
        let img = test_image(3, 1);
        let flipped = flip_horizontal(&img);
        assert_eq!(&flipped.pixels()[0..4], &[2, 0, 0, 255]);
        assert_eq!(&img.pixels()[0..4], &[0, 0, 0, 255]);
    }

    #[test]
    fn test_rotate_keeps_dimensions() {
        let img = test_image(40, 20);
        for gather in [false, true] {
            let result = rotate(&img, 30.0, gather).unwrap();
            assert_eq!(result.width(), 40);
            assert_eq!(result.height(), 20);
        }
    }

    #[test]
    fn test_rotate_zero_gather_is_identity() {
        let img = test_image(8, 8);
        let result = rotate(&img, 0.0, true).unwrap();
        assert_eq!(result.pixels(), img.pixels());
    }
}
