//! Rotaflip WASM - WebAssembly bindings for Rotaflip
//!
//! This crate provides WASM bindings to expose the rotaflip-core transform
//! engine to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for pixel buffers
//! - `decode` - Image decoding bindings (JPEG, PNG, GIF, BMP)
//! - `transform` - Stateless rotate and flip functions
//! - `session` - Stateful, non-destructive transform session
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, TransformSession } from '@rotaflip/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const session = new TransformSession();
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! session.load(decode_image(bytes));
//! const rotated = session.rotate_by(30);
//! console.log(`Rotated to ${rotated.width}x${rotated.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod session;
mod transform;
mod types;

// Re-export public types
pub use decode::{decode_image, is_supported_file_name};
pub use session::TransformSession;
pub use transform::{flip_image_horizontal, flip_image_vertical, rotate_image};
pub use types::JsPixelBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
