//! WASM bindings for stateless transform operations.
//!
//! These functions transform a buffer directly without any baseline
//! bookkeeping. Use [`TransformSession`](crate::TransformSession) for
//! repeated, non-destructive edits.

use crate::types::{interpolation_from_u8, JsPixelBuffer};
use rotaflip_core::transform::{apply_rotation, flip_horizontal, flip_vertical};
use wasm_bindgen::prelude::*;

/// Rotate an image by whole degrees (positive = clockwise).
///
/// Right angles are exact. Other angles expand the canvas to fit the rotated
/// image; uncovered corners are transparent.
///
/// # Arguments
///
/// * `image` - Source image to rotate
/// * `degrees` - Rotation angle in degrees (normalized modulo 360)
/// * `interpolation` - 0 = nearest neighbor, 1 = bilinear
///
/// # Example (TypeScript)
///
/// ```typescript
/// const rotated = rotate_image(sourceImage, 30, 1);
/// ```
#[wasm_bindgen]
pub fn rotate_image(image: &JsPixelBuffer, degrees: i32, interpolation: u8) -> JsPixelBuffer {
    let method = interpolation_from_u8(interpolation);
    JsPixelBuffer::from_buffer(apply_rotation(image.buffer(), degrees, method))
}

/// Mirror an image left-to-right.
#[wasm_bindgen]
pub fn flip_image_horizontal(image: &JsPixelBuffer) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(flip_horizontal(image.buffer()))
}

/// Mirror an image top-to-bottom.
#[wasm_bindgen]
pub fn flip_image_vertical(image: &JsPixelBuffer) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(flip_vertical(image.buffer()))
}
