//! PNG decoding and encoding with the `image` crate.

use std::io::Cursor;
use std::path::Path;

use image::codecs::png::{PngDecoder, PngEncoder};
use image::{ColorType, ExtendedColorType, ImageDecoder, ImageEncoder};

use crate::buffer::Image;
use crate::error::ImageError;

/// Decode a PNG image from bytes.
///
/// # Arguments
///
/// * `bytes` - Raw PNG file bytes
///
/// # Returns
///
/// An `Image` with the decoded RGBA pixels.
///
/// # Errors
///
/// - `ImageError::UnsupportedFormat` if the PNG isn't 8-bit RGBA
/// - `ImageError::CorruptedFile` if the bytes are not a valid PNG
pub fn decode_png(bytes: &[u8]) -> Result<Image, ImageError> {
    let decoder = PngDecoder::new(Cursor::new(bytes))
        .map_err(|e| ImageError::CorruptedFile(e.to_string()))?;

    let original = decoder.original_color_type();
    if decoder.color_type() != ColorType::Rgba8 || original != ExtendedColorType::Rgba8 {
        return Err(ImageError::UnsupportedFormat(format!(
            "{original:?} PNG, only 8-bit RGBA is supported"
        )));
    }

    let (width, height) = decoder.dimensions();
    let width = i32::try_from(width)
        .map_err(|_| ImageError::geometry(format!("PNG width {width} exceeds i32::MAX")))?;
    let height = i32::try_from(height)
        .map_err(|_| ImageError::geometry(format!("PNG height {height} exceeds i32::MAX")))?;

    let total_bytes = usize::try_from(decoder.total_bytes())
        .map_err(|_| ImageError::allocation(width, height))?;
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(total_bytes)
        .map_err(|_| ImageError::allocation(width, height))?;
    buffer.resize(total_bytes, 0);

    decoder
        .read_image(&mut buffer)
        .map_err(|e| ImageError::CorruptedFile(e.to_string()))?;

    log::debug!("decoded {width}x{height} RGBA8 PNG ({} bytes)", bytes.len());

    Image::from_rgba_bytes(width, height, &buffer)
}

/// Encode an image to 8-bit RGBA PNG bytes.
///
/// # Errors
///
/// - `ImageError::InvalidGeometry` if the image is empty
/// - `ImageError::EncodingFailed` if the encoder fails
pub fn encode_png(image: &Image) -> Result<Vec<u8>, ImageError> {
    if image.is_empty() {
        return Err(ImageError::geometry("cannot encode an empty image"));
    }

    let (width, height) = image.dimensions();
    let pixels = image.to_rgba_bytes();

    let mut buffer = Cursor::new(Vec::new());
    let encoder = PngEncoder::new(&mut buffer);
    encoder
        .write_image(
            &pixels,
            width as u32,
            height as u32,
            ExtendedColorType::Rgba8,
        )
        .map_err(|e| ImageError::EncodingFailed(e.to_string()))?;

    let bytes = buffer.into_inner();
    log::debug!("encoded {width}x{height} RGBA8 PNG ({} bytes)", bytes.len());
    Ok(bytes)
}

/// Read and decode a PNG file.
///
/// # Errors
///
/// `ImageError::IoError` if the file can't be read, otherwise the errors of
/// [`decode_png`].
pub fn load_png(path: impl AsRef<Path>) -> Result<Image, ImageError> {
    let bytes = std::fs::read(path.as_ref())?;
    decode_png(&bytes)
}

/// Encode an image and write it to a PNG file.
///
/// # Errors
///
/// `ImageError::IoError` if the file can't be written, otherwise the errors
/// of [`encode_png`].
pub fn save_png(path: impl AsRef<Path>, image: &Image) -> Result<(), ImageError> {
    let bytes = encode_png(image)?;
    std::fs::write(path.as_ref(), bytes)?;
    Ok(())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
