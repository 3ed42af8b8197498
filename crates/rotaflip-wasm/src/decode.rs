//! Image decoding WASM bindings.
//!
//! The browser reads the file (`File.arrayBuffer()`); this module turns the
//! bytes into a [`JsPixelBuffer`] ready to be loaded into a
//! [`TransformSession`](crate::TransformSession).
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, is_supported_file_name } from '@rotaflip/wasm';
//!
//! if (is_supported_file_name(file.name)) {
//!   const bytes = new Uint8Array(await file.arrayBuffer());
//!   const image = decode_image(bytes);
//!   console.log(`Decoded ${image.width}x${image.height}`);
//! }
//! ```

use crate::types::JsPixelBuffer;
use rotaflip_core::decode;
use std::path::Path;
use wasm_bindgen::prelude::*;

/// Decode JPEG, PNG, GIF or BMP bytes into a pixel buffer.
///
/// # Errors
///
/// Returns an error string if the bytes are not a supported image format or
/// cannot be decoded.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsPixelBuffer, JsValue> {
    decode::decode_image(bytes)
        .map(JsPixelBuffer::from_buffer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Check whether a file name has a supported image extension.
#[wasm_bindgen]
pub fn is_supported_file_name(name: &str) -> bool {
    decode::is_supported_extension(Path::new(name))
}
