//! Stateful transform session for JavaScript.
//!
//! [`TransformSession`] wraps the core `TransformState`: it keeps the
//! original and unrotated baselines in WASM memory, so repeated rotations
//! never resample an already rotated image. Every successful operation
//! returns the new displayed buffer and, when a presenter callback is set,
//! also passes it to that callback.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const session = new TransformSession();
//! session.set_presenter((img: JsPixelBuffer) => {
//!   ctx.putImageData(new ImageData(new Uint8ClampedArray(img.to_rgba()), img.width), 0, 0);
//! });
//! session.load(decode_image(bytes));
//! session.interpolation = 1; // bilinear
//! session.rotate_right();    // +45 degrees
//! session.flip_horizontal(); // discards the rotation
//! ```

use crate::types::{interpolation_from_u8, interpolation_to_u8, JsPixelBuffer};
use rotaflip_core::{PixelBuffer, TransformOptions, TransformResult, TransformState};
use wasm_bindgen::prelude::*;

/// Non-destructive rotate/flip state for one image.
#[wasm_bindgen]
pub struct TransformSession {
    state: TransformState,
    presenter: Option<js_sys::Function>,
}

#[wasm_bindgen]
impl TransformSession {
    /// Create an empty session with default options.
    #[wasm_bindgen(constructor)]
    pub fn new() -> TransformSession {
        TransformSession {
            state: TransformState::new(),
            presenter: None,
        }
    }

    /// Create a session from a serialized `TransformOptions` object, e.g.
    /// `{ interpolation: "Bilinear", step_degrees: 15 }`. Missing fields use defaults.
    pub fn with_options(options: JsValue) -> Result<TransformSession, JsValue> {
        let options: TransformOptions = serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsValue::from_str(&format!("Invalid options: {}", e)))?;
        Ok(TransformSession {
            state: TransformState::with_options(options),
            presenter: None,
        })
    }

    /// Register a callback that receives every displayed buffer.
    ///
    /// Exceptions thrown by the callback are logged and otherwise ignored.
    pub fn set_presenter(&mut self, callback: js_sys::Function) {
        self.presenter = Some(callback);
    }

    pub fn clear_presenter(&mut self) {
        self.presenter = None;
    }

    /// Load an image, replacing the baselines. The buffer is consumed.
    pub fn load(&mut self, image: JsPixelBuffer) -> Result<JsPixelBuffer, JsValue> {
        let result = self.state.load(image.into_buffer());
        self.finish(result)
    }

    /// Add `delta` degrees (positive = clockwise) to the rotation.
    pub fn rotate_by(&mut self, delta: i32) -> Result<JsPixelBuffer, JsValue> {
        let result = self.state.rotate_by(delta);
        self.finish(result)
    }

    /// Set the absolute rotation in degrees.
    pub fn rotate_to(&mut self, degrees: i32) -> Result<JsPixelBuffer, JsValue> {
        let result = self.state.rotate_to(degrees);
        self.finish(result)
    }

    /// Rotate counter-clockwise by the configured step (45 degrees by default).
    pub fn rotate_left(&mut self) -> Result<JsPixelBuffer, JsValue> {
        let result = self.state.rotate_left();
        self.finish(result)
    }

    /// Rotate clockwise by the configured step.
    pub fn rotate_right(&mut self) -> Result<JsPixelBuffer, JsValue> {
        let result = self.state.rotate_right();
        self.finish(result)
    }

    pub fn flip_vertical(&mut self) -> Result<JsPixelBuffer, JsValue> {
        let result = self.state.flip_vertical();
        self.finish(result)
    }

    pub fn flip_horizontal(&mut self) -> Result<JsPixelBuffer, JsValue> {
        let result = self.state.flip_horizontal();
        self.finish(result)
    }

    /// Undo the rotation, keeping flips.
    pub fn reset_rotation(&mut self) -> Result<JsPixelBuffer, JsValue> {
        let result = self.state.reset_rotation();
        self.finish(result)
    }

    /// Restore the image as loaded.
    pub fn reset_all(&mut self) -> Result<JsPixelBuffer, JsValue> {
        let result = self.state.reset_all();
        self.finish(result)
    }

    /// Re-render the current view, e.g. after changing the interpolation.
    pub fn render(&self) -> Result<JsPixelBuffer, JsValue> {
        let result = self.state.render();
        self.finish(result)
    }

    /// Cumulative rotation in `[0, 360)`.
    #[wasm_bindgen(getter)]
    pub fn degrees(&self) -> i32 {
        self.state.degrees()
    }

    #[wasm_bindgen(getter)]
    pub fn is_loaded(&self) -> bool {
        self.state.is_loaded()
    }

    /// Interpolation as a u8 (0 = nearest neighbor, 1 = bilinear).
    #[wasm_bindgen(getter)]
    pub fn interpolation(&self) -> u8 {
        interpolation_to_u8(self.state.interpolation())
    }

    /// Takes effect on the next rotation.
    #[wasm_bindgen(setter)]
    pub fn set_interpolation(&mut self, value: u8) {
        self.state.set_interpolation(interpolation_from_u8(value));
    }

    /// Angle applied by `rotate_left` / `rotate_right`.
    #[wasm_bindgen(getter)]
    pub fn step_degrees(&self) -> i32 {
        self.state.options().step_degrees
    }

    #[wasm_bindgen(setter)]
    pub fn set_step_degrees(&mut self, step: i32) {
        self.state.set_step_degrees(step);
    }

    /// Serialize a `TransformSnapshot` (degrees, dimensions, interpolation).
    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = self
            .state
            .snapshot()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        serde_wasm_bindgen::to_value(&snapshot).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Serialize the current `TransformOptions`.
    pub fn options(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.state.options())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for TransformSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TransformSession {
    /// Hand a successful result to the presenter and wrap it for JavaScript.
    fn finish(&self, result: TransformResult<PixelBuffer>) -> Result<JsPixelBuffer, JsValue> {
        let displayed = result.map_err(|e| JsValue::from_str(&e.to_string()))?;
        if let Some(presenter) = &self.presenter {
            let frame = JsValue::from(JsPixelBuffer::from_buffer(displayed.clone()));
            if let Err(e) = presenter.call1(&JsValue::NULL, &frame) {
                web_sys::console::warn_2(&JsValue::from_str("presenter failed:"), &e);
            }
        }
        Ok(JsPixelBuffer::from_buffer(displayed))
    }

    #[cfg(test)]
    fn state(&self) -> &TransformState {
        &self.state
    }
}
