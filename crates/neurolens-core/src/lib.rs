//! Neurolens Core - RGBA image transform library
//!
//! This crate provides the core functionality for Neurolens: an owned RGBA8
//! pixel buffer, geometric transforms (nearest-neighbor resize, crop,
//! horizontal flip, rotation), ordered transform pipelines and a PNG bridge.
//!
//! Transforms never leave a half-written image behind: on error the input is
//! unchanged and the caller still owns it.

pub mod buffer;
pub mod codec;
pub mod error;
pub mod math;
pub mod pipeline;
pub mod transform;

pub use buffer::{Image, Pixel};
pub use codec::{decode_png, encode_png, load_png, save_png};
pub use error::ImageError;
pub use pipeline::{apply_pipeline, legacy_pipeline, PipelineParseError, TransformOp};
pub use transform::{crop, flip_horizontal, resize, rotate, rotate_with, RotationMapping};
