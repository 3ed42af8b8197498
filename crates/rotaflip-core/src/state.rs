//! Non-destructive transform state.
//!
//! [`TransformState`] owns two baselines and the cumulative rotation:
//!
//! - **original**: the image as loaded; only replaced by the next `load`
//! - **unrotated**: the original with every flip applied so far; this is the
//!   only buffer rotations ever resample
//! - **degrees**: cumulative rotation, always in `[0, 360)`
//!
//! Each operation computes the new displayed buffer first and only then
//! commits its state change, so a failing call leaves the state untouched.
//! The displayed buffer is not stored; it is returned to the caller.
//!
//! A flip discards the current rotation. Flips and rotations do not commute,
//! and flipping the displayed (rotated) view is not supported.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::error::{TransformError, TransformResult};
use crate::transform::{
    apply_rotation, compute_rotated_bounds, flip_horizontal, flip_vertical, normalize_degrees,
    InterpolationMethod,
};

/// Default step for [`TransformState::rotate_left`] / [`TransformState::rotate_right`].
pub const DEFAULT_STEP_DEGREES: i32 = 45;

/// User-tunable options for a [`TransformState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    /// Sampling policy for non-right-angle rotations.
    pub interpolation: InterpolationMethod,
    /// Angle applied by a single left/right step.
    pub step_degrees: i32,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            interpolation: InterpolationMethod::NearestNeighbor,
            step_degrees: DEFAULT_STEP_DEGREES,
        }
    }
}

/// Serializable summary of the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformSnapshot {
    /// Cumulative rotation in `[0, 360)`.
    pub degrees: i32,
    /// Baseline width (identical for original and unrotated).
    pub width: u32,
    /// Baseline height.
    pub height: u32,
    /// Width of the buffer currently displayed.
    pub display_width: u32,
    /// Height of the buffer currently displayed.
    pub display_height: u32,
    pub interpolation: InterpolationMethod,
}

#[derive(Debug, Clone)]
struct Baselines {
    original: PixelBuffer,
    unrotated: PixelBuffer,
}

/// Rotation and mirroring state for one loaded image.
#[derive(Debug, Clone, Default)]
pub struct TransformState {
    baselines: Option<Baselines>,
    degrees: i32,
    options: TransformOptions,
}

impl TransformState {
    /// Create an empty state; every transform fails with `NotLoaded` until
    /// [`load`](Self::load) succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: TransformOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Load a new image, replacing both baselines and clearing the rotation.
    ///
    /// Returns the buffer to display (a copy of `image`).
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidImage` for a zero width or height; the
    /// previously loaded image, if any, is kept.
    pub fn load(&mut self, image: PixelBuffer) -> TransformResult<PixelBuffer> {
        if image.is_empty() {
            return Err(TransformError::InvalidImage {
                width: image.width(),
                height: image.height(),
            });
        }

        debug!("loaded {}x{} image", image.width(), image.height());
        let displayed = image.clone();
        self.baselines = Some(Baselines {
            unrotated: image.clone(),
            original: image,
        });
        self.degrees = 0;
        Ok(displayed)
    }

    /// Add `delta` degrees to the cumulative rotation and render it.
    pub fn rotate_by(&mut self, delta: i32) -> TransformResult<PixelBuffer> {
        // Both terms are in [0, 360), so the sum cannot overflow
        let target = normalize_degrees(self.degrees + normalize_degrees(delta));
        self.rotate_to(target)
    }

    /// Set the cumulative rotation to `degrees` (normalized) and render it.
    pub fn rotate_to(&mut self, degrees: i32) -> TransformResult<PixelBuffer> {
        let degrees = normalize_degrees(degrees);
        let baselines = self.baselines()?;
        let displayed = apply_rotation(&baselines.unrotated, degrees, self.options.interpolation);

        debug!(
            "rotated to {} degrees ({:?}): {}x{}",
            degrees,
            self.options.interpolation,
            displayed.width(),
            displayed.height()
        );
        self.degrees = degrees;
        Ok(displayed)
    }

    /// Rotate counter-clockwise by one step.
    pub fn rotate_left(&mut self) -> TransformResult<PixelBuffer> {
        self.rotate_by(-normalize_degrees(self.options.step_degrees))
    }

    /// Rotate clockwise by one step.
    pub fn rotate_right(&mut self) -> TransformResult<PixelBuffer> {
        self.rotate_by(self.options.step_degrees)
    }

    /// Mirror the unrotated baseline top-to-bottom. Discards the rotation.
    pub fn flip_vertical(&mut self) -> TransformResult<PixelBuffer> {
        let flipped = flip_vertical(&self.baselines()?.unrotated);
        debug!("flipped vertically");
        Ok(self.commit_flip(flipped))
    }

    /// Mirror the unrotated baseline left-to-right. Discards the rotation.
    pub fn flip_horizontal(&mut self) -> TransformResult<PixelBuffer> {
        let flipped = flip_horizontal(&self.baselines()?.unrotated);
        debug!("flipped horizontally");
        Ok(self.commit_flip(flipped))
    }

    /// Undo the rotation only; flips are kept.
    pub fn reset_rotation(&mut self) -> TransformResult<PixelBuffer> {
        let displayed = self.baselines()?.unrotated.clone();
        debug!("rotation reset");
        self.degrees = 0;
        Ok(displayed)
    }

    /// Undo flips and rotation, restoring the image as loaded.
    pub fn reset_all(&mut self) -> TransformResult<PixelBuffer> {
        let baselines = self.baselines.as_mut().ok_or(TransformError::NotLoaded)?;
        baselines.unrotated = baselines.original.clone();
        debug!("all transforms reset");
        self.degrees = 0;
        Ok(baselines.original.clone())
    }

    /// Render the current view without changing any state.
    pub fn render(&self) -> TransformResult<PixelBuffer> {
        let baselines = self.baselines()?;
        Ok(apply_rotation(
            &baselines.unrotated,
            self.degrees,
            self.options.interpolation,
        ))
    }

    /// Change the interpolation used by subsequent rotations.
    ///
    /// The current view is not re-rendered.
    pub fn set_interpolation(&mut self, method: InterpolationMethod) {
        self.options.interpolation = method;
    }

    pub fn set_step_degrees(&mut self, step: i32) {
        self.options.step_degrees = step;
    }

    pub fn interpolation(&self) -> InterpolationMethod {
        self.options.interpolation
    }

    pub fn options(&self) -> TransformOptions {
        self.options
    }

    /// Cumulative rotation in `[0, 360)`.
    pub fn degrees(&self) -> i32 {
        self.degrees
    }

    pub fn is_loaded(&self) -> bool {
        self.baselines.is_some()
    }

    /// The image as loaded.
    pub fn original(&self) -> Option<&PixelBuffer> {
        self.baselines.as_ref().map(|b| &b.original)
    }

    /// The original with all flips applied; the rotation source.
    pub fn unrotated(&self) -> Option<&PixelBuffer> {
        self.baselines.as_ref().map(|b| &b.unrotated)
    }

    /// Summarize the state without rendering.
    pub fn snapshot(&self) -> TransformResult<TransformSnapshot> {
        let (width, height) = self.baselines()?.unrotated.dimensions();
        let (display_width, display_height) = compute_rotated_bounds(width, height, self.degrees);
        Ok(TransformSnapshot {
            degrees: self.degrees,
            width,
            height,
            display_width,
            display_height,
            interpolation: self.options.interpolation,
        })
    }

    fn baselines(&self) -> TransformResult<&Baselines> {
        self.baselines.as_ref().ok_or(TransformError::NotLoaded)
    }

    /// Replace the unrotated baseline after a flip and return its display copy.
    fn commit_flip(&mut self, flipped: PixelBuffer) -> PixelBuffer {
        let displayed = flipped.clone();
        if let Some(baselines) = self.baselines.as_mut() {
            baselines.unrotated = flipped;
        }
        self.degrees = 0;
        displayed
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
