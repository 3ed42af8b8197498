//! Error types for the transform engine.

use thiserror::Error;

/// Error types for buffer construction, loading and transform operations.
///
/// Every variant is a local validation failure. Operations that return one of
/// these leave the engine state exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// The pixel sequence length does not match `width * height`.
    #[error("Pixel buffer size mismatch: expected {expected} pixels, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A pixel coordinate lies outside the buffer.
    #[error("Pixel ({x}, {y}) is outside a {width}x{height} buffer")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },

    /// The image has a zero width or height.
    #[error("Invalid image: {width}x{height}")]
    InvalidImage { width: u32, height: u32 },

    /// A transform was requested before any image was loaded.
    #[error("No image loaded")]
    NotLoaded,

    /// The file could not be found or read.
    #[error("Unreadable file: {0}")]
    UnreadableFile(String),

    /// The file contents are not a supported image format.
    #[error("Unsupported image format: {0}")]
    UnsupportedFormat(String),
}

/// Result type for transform operations.
pub type TransformResult<T> = Result<T, TransformError>;
