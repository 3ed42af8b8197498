//! WASM-compatible wrapper types for pixel buffers.
//!
//! This module provides JavaScript-friendly types that wrap the core Rotaflip types,
//! handling the conversion between Rust and JavaScript data representations.

use rotaflip_core::{InterpolationMethod, PixelBuffer};
use wasm_bindgen::prelude::*;

/// A packed ARGB pixel buffer for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. `pixels()` and `to_rgba()` copy
/// it out to JavaScript. `to_rgba()` produces the byte order expected by
/// canvas `ImageData`.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    inner: PixelBuffer,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Create a buffer from packed ARGB pixels (one `u32` per pixel, row-major).
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Result<JsPixelBuffer, JsValue> {
        PixelBuffer::new(width, height, pixels)
            .map(JsPixelBuffer::from_buffer)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Create a buffer from canvas-style RGBA bytes.
    pub fn from_rgba(width: u32, height: u32, bytes: &[u8]) -> Result<JsPixelBuffer, JsValue> {
        PixelBuffer::from_rgba_bytes(width, height, bytes)
            .map(JsPixelBuffer::from_buffer)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Returns packed ARGB pixels as a `Uint32Array` (copy).
    pub fn pixels(&self) -> Vec<u32> {
        self.inner.pixels().to_vec()
    }

    /// Returns RGBA bytes as a `Uint8Array` (copy), ready for `ImageData`.
    pub fn to_rgba(&self) -> Vec<u8> {
        self.inner.to_rgba_bytes()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPixelBuffer {
    pub(crate) fn from_buffer(inner: PixelBuffer) -> Self {
        Self { inner }
    }

    pub(crate) fn buffer(&self) -> &PixelBuffer {
        &self.inner
    }

    pub(crate) fn into_buffer(self) -> PixelBuffer {
        self.inner
    }
}

/// Convert a u8 interpolation value to the core enum.
///
/// Values:
/// - 0 = Nearest neighbor (sharp, fastest)
/// - 1 = Bilinear (smooth)
///
/// Any other value defaults to nearest neighbor.
pub(crate) fn interpolation_from_u8(value: u8) -> InterpolationMethod {
    InterpolationMethod::from(value)
}

/// Inverse of [`interpolation_from_u8`].
pub(crate) fn interpolation_to_u8(method: InterpolationMethod) -> u8 {
    match method {
        InterpolationMethod::NearestNeighbor => 0,
        InterpolationMethod::Bilinear => 1,
    }
}
