//! Loader -> state -> presenter glue.
//!
//! A [`Session`] owns a [`TransformState`] and forwards every displayed
//! buffer it produces to a [`Presenter`]. Failed operations present nothing
//! and leave the state untouched.

use std::path::Path;

use log::warn;

use crate::buffer::PixelBuffer;
use crate::decode::ImageLoader;
use crate::error::TransformResult;
use crate::state::{TransformOptions, TransformState};
use crate::transform::InterpolationMethod;

/// Sink for displayed buffers, e.g. a canvas or window.
///
/// Presentation failures are the presenter's own business and are not
/// reported back to the engine.
pub trait Presenter {
    fn display(&mut self, image: &PixelBuffer);
}

impl<F> Presenter for F
where
    F: FnMut(&PixelBuffer),
{
    fn display(&mut self, image: &PixelBuffer) {
        self(image)
    }
}

/// A transform state wired to a loader and a presenter.
#[derive(Debug)]
pub struct Session<L, P> {
    loader: L,
    presenter: P,
    state: TransformState,
}

impl<L: ImageLoader, P: Presenter> Session<L, P> {
    pub fn new(loader: L, presenter: P) -> Self {
        Self::with_options(loader, presenter, TransformOptions::default())
    }

    pub fn with_options(loader: L, presenter: P, options: TransformOptions) -> Self {
        Self {
            loader,
            presenter,
            state: TransformState::with_options(options),
        }
    }

    /// Load the image at `path` through the loader and present it.
    pub fn open(&mut self, path: impl AsRef<Path>) -> TransformResult<()> {
        let path = path.as_ref();
        let image = self.loader.load(path).map_err(|e| {
            warn!("failed to load {}: {}", path.display(), e);
            e
        })?;
        self.load(image)
    }

    /// Load an already decoded image and present it.
    pub fn load(&mut self, image: PixelBuffer) -> TransformResult<()> {
        let displayed = self.state.load(image);
        self.present(displayed)
    }

    pub fn rotate_by(&mut self, delta: i32) -> TransformResult<()> {
        let displayed = self.state.rotate_by(delta);
        self.present(displayed)
    }

    pub fn rotate_to(&mut self, degrees: i32) -> TransformResult<()> {
        let displayed = self.state.rotate_to(degrees);
        self.present(displayed)
    }

    pub fn rotate_left(&mut self) -> TransformResult<()> {
        let displayed = self.state.rotate_left();
        self.present(displayed)
    }

    pub fn rotate_right(&mut self) -> TransformResult<()> {
        let displayed = self.state.rotate_right();
        self.present(displayed)
    }

    pub fn flip_vertical(&mut self) -> TransformResult<()> {
        let displayed = self.state.flip_vertical();
        self.present(displayed)
    }

    pub fn flip_horizontal(&mut self) -> TransformResult<()> {
        let displayed = self.state.flip_horizontal();
        self.present(displayed)
    }

    pub fn reset_rotation(&mut self) -> TransformResult<()> {
        let displayed = self.state.reset_rotation();
        self.present(displayed)
    }

    pub fn reset_all(&mut self) -> TransformResult<()> {
        let displayed = self.state.reset_all();
        self.present(displayed)
    }

    /// Re-render the current view and present it again.
    pub fn refresh(&mut self) -> TransformResult<()> {
        let displayed = self.state.render();
        self.present(displayed)
    }

    /// Change the interpolation; takes effect on the next rotation.
    pub fn set_interpolation(&mut self, method: InterpolationMethod) {
        self.state.set_interpolation(method);
    }

    pub fn state(&self) -> &TransformState {
        &self.state
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn into_parts(self) -> (L, P, TransformState) {
        (self.loader, self.presenter, self.state)
    }

    fn present(&mut self, displayed: TransformResult<PixelBuffer>) -> TransformResult<()> {
        let displayed = displayed?;
        self.presenter.display(&displayed);
        Ok(())
    }
}
