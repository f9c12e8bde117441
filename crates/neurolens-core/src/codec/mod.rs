//! PNG bridge between files/bytes and the pixel buffer.
//!
//! This module provides functionality for:
//! - Decoding 8-bit RGBA PNG images into an [`Image`](crate::Image)
//! - Encoding an image back to 8-bit RGBA PNG bytes
//! - Loading and saving PNG files
//!
//! Only the straight RGBA8 layout is accepted on decode. Other color types
//! (gray, RGB, 16-bit) are rejected with
//! [`ImageError::UnsupportedFormat`](crate::ImageError::UnsupportedFormat)
//! instead of being converted.
//!
//! # Examples
//!
//! ```ignore
//! use neurolens_core::codec::{load_png, save_png};
//!
//! let mut image = load_png("photo.png")?;
//! image.flip_horizontal();
//! save_png("flipped.png", &image)?;
//! ```

mod png;

pub use png::{decode_png, encode_png, load_png, save_png};
