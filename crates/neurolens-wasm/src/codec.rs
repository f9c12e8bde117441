//! PNG codec WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_png, encode_png, rotate } from '@neurolens/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_png(bytes);
//! const rotated = rotate(image, 30, false);
//! const out = encode_png(rotated);
//! ```

use crate::types::JsImage;
use neurolens_core::codec;
use wasm_bindgen::prelude::*;

/// Decode an 8-bit RGBA PNG from bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not a valid PNG or the PNG is not 8-bit
/// RGBA (no conversion is attempted).
#[wasm_bindgen]
pub fn decode_png(bytes: &[u8]) -> Result<JsImage, JsValue> {
    codec::decode_png(bytes)
        .map(JsImage::from_image)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Encode an image to 8-bit RGBA PNG bytes.
#[wasm_bindgen]
pub fn encode_png(image: &JsImage) -> Result<Vec<u8>, JsValue> {
    codec::encode_png(image.as_image()).map_err(|e| JsValue::from_str(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_round_trip() {
        let pixels: Vec<u8> = (0..6 * 4 * 4).map(|i| (i * 7 % 256) as u8).collect();
        let img = JsImage::new(6, 4, pixels.clone()).unwrap();

        let png = encode_png(&img).unwrap();
        let decoded = decode_png(&png).unwrap();

        assert_eq!(decoded.width(), 6);
        assert_eq!(decoded.height(), 4);
        assert_eq!(decoded.pixels(), pixels);
    }
}
