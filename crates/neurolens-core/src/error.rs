//! Error taxonomy shared by the pixel buffer, transform engine and codec bridge.

use thiserror::Error;

/// Error types for image operations.
///
/// Transforms fail closed: when one of these is returned, the image that was
/// passed in is exactly as it was before the call.
#[derive(Debug, Error)]
pub enum ImageError {
    /// The pixel buffer could not be allocated.
    #[error("Failed to allocate a {width}x{height} pixel buffer")]
    AllocationError { width: i64, height: i64 },

    /// Non-positive or out-of-range dimensions or rectangle.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// The decoder met a pixel layout the bridge does not interpret.
    #[error("Unsupported pixel format: {0}")]
    UnsupportedFormat(String),

    /// The PNG data is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// PNG encoding failed.
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),

    /// Raw pixel bytes don't match the expected dimensions.
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// I/O error while reading or writing a file.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ImageError {
    pub(crate) fn allocation(width: impl Into<i64>, height: impl Into<i64>) -> Self {
        ImageError::AllocationError {
            width: width.into(),
            height: height.into(),
        }
    }

    pub(crate) fn geometry(message: impl Into<String>) -> Self {
        ImageError::InvalidGeometry(message.into())
    }
}
