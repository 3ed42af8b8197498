//! Image file loading through the `image` crate.

use std::io::Cursor;
use std::path::Path;

use image::{ImageError, ImageReader};
use log::debug;

use crate::buffer::PixelBuffer;
use crate::error::{TransformError, TransformResult};

/// File extensions offered to users when picking an image.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp"];

/// Source of decoded pixel buffers.
///
/// Implementations own file access and format handling; the transform engine
/// only ever sees the resulting [`PixelBuffer`].
pub trait ImageLoader {
    /// Decode the image at `path`.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::UnreadableFile` if the file cannot be read and
    /// `TransformError::UnsupportedFormat` if its contents cannot be decoded.
    fn load(&self, path: &Path) -> TransformResult<PixelBuffer>;
}

/// Loader that reads files from disk and decodes them with the `image` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLoader;

impl ImageLoader for FileLoader {
    fn load(&self, path: &Path) -> TransformResult<PixelBuffer> {
        load_image(path)
    }
}

/// Check whether `path` has one of the [`SUPPORTED_EXTENSIONS`] (case-insensitive).
pub fn is_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
        .unwrap_or(false)
}

/// Read and decode the image file at `path`.
///
/// # Errors
///
/// Returns `TransformError::UnreadableFile` if the path is empty, does not
/// exist, or cannot be read. Returns `TransformError::UnsupportedFormat` if
/// the contents are not a decodable image.
pub fn load_image(path: impl AsRef<Path>) -> TransformResult<PixelBuffer> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(TransformError::UnreadableFile("No file selected".to_string()));
    }
    if !path.exists() {
        return Err(TransformError::UnreadableFile(format!(
            "{} does not exist",
            path.display()
        )));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| TransformError::UnreadableFile(format!("{}: {}", path.display(), e)))?;
    let image = decode_image(&bytes)?;
    debug!(
        "decoded {} ({}x{})",
        path.display(),
        image.width(),
        image.height()
    );
    Ok(image)
}

/// Decode image bytes of any supported format into a packed ARGB buffer.
///
/// # Errors
///
/// Returns `TransformError::UnsupportedFormat` if the format is not recognized
/// or the data cannot be decoded.
pub fn decode_image(bytes: &[u8]) -> TransformResult<PixelBuffer> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| TransformError::UnreadableFile(e.to_string()))?;

    if reader.format().is_none() {
        return Err(TransformError::UnsupportedFormat(
            "Unrecognized image data".to_string(),
        ));
    }

    let img = reader.decode().map_err(map_image_error)?;
    Ok(PixelBuffer::from_rgba_image(&img.into_rgba8()))
}

/// Map `image` crate failures onto the engine's error kinds.
fn map_image_error(err: ImageError) -> TransformError {
    match err {
        ImageError::IoError(e) => TransformError::UnreadableFile(e.to_string()),
        ImageError::Limits(e) => TransformError::UnreadableFile(e.to_string()),
        other => TransformError::UnsupportedFormat(other.to_string()),
    }
}
