//! Neurolens WASM - WebAssembly bindings for Neurolens
//!
//! This crate exposes the neurolens-core transforms and PNG codec to
//! JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - The `JsImage` wrapper around the core RGBA image
//! - `codec` - PNG decoding and encoding
//! - `transform` - Resize, crop, flip, rotate and whole pipelines
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_png, apply_pipeline } from '@neurolens/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const image = decode_png(new Uint8Array(await file.arrayBuffer()));
//! const out = apply_pipeline(image, [{ op: 'rotate', degrees: 45 }]);
//! console.log(`Result ${out.width}x${out.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod codec;
mod transform;
mod types;

// Re-export public types
pub use codec::{decode_png, encode_png};
pub use transform::{apply_pipeline, crop, flip_horizontal, resize, rotate};
pub use types::JsImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
