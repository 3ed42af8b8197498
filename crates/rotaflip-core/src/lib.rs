//! Rotaflip Core - non-destructive image rotation and mirroring
//!
//! This crate provides the transform engine behind Rotaflip: arbitrary-angle
//! rotation with nearest-neighbor or bilinear resampling, exact right-angle
//! rotation, horizontal/vertical mirroring, and the state that keeps every
//! result derived from a pristine baseline.
//!
//! # Module Structure
//!
//! - `buffer` - Packed ARGB pixel buffers
//! - `transform` - Pure rotation, resampling and mirroring functions
//! - `state` - Baseline bookkeeping for repeated flips and rotations
//! - `decode` - Loading image files into pixel buffers
//! - `session` - Loader and presenter wiring around the state
//!
//! # Usage
//!
//! ```ignore
//! use rotaflip_core::{load_image, TransformState};
//!
//! let mut state = TransformState::new();
//! state.load(load_image("photo.png")?)?;
//! let rotated = state.rotate_by(30)?;
//! let mirrored = state.flip_horizontal()?; // discards the rotation
//! ```

pub mod buffer;
pub mod decode;
pub mod error;
pub mod session;
pub mod state;
pub mod transform;

pub use buffer::{pack_argb, unpack_argb, PixelBuffer};
pub use decode::{decode_image, load_image, FileLoader, ImageLoader};
pub use error::{TransformError, TransformResult};
pub use session::{Presenter, Session};
pub use state::{TransformOptions, TransformSnapshot, TransformState};
pub use transform::{apply_rotation, compute_rotated_bounds, InterpolationMethod};
