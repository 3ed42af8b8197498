//! Image loading for the transform engine.
//!
//! Decoding is an external concern of the engine: it only needs something
//! that turns a path into a [`PixelBuffer`](crate::buffer::PixelBuffer) or
//! fails. This module defines that seam ([`ImageLoader`]) and provides the
//! default implementation backed by the `image` crate.
//!
//! # Supported Formats
//!
//! JPEG, PNG, GIF (first frame) and BMP. Every format is converted to packed
//! ARGB; formats without alpha decode as fully opaque.
//!
//! # Examples
//!
//! ```ignore
//! use rotaflip_core::decode::load_image;
//!
//! let image = load_image("photo.jpg").unwrap();
//! println!("Loaded {}x{} image", image.width(), image.height());
//! ```

mod loader;

pub use loader::{
    decode_image, is_supported_extension, load_image, FileLoader, ImageLoader,
    SUPPORTED_EXTENSIONS,
};
