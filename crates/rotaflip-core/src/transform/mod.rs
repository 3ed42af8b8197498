//! Image transformation operations: rotation and mirroring.
//!
//! Every function here is pure: it reads one source buffer and returns a new
//! one. The stateful, non-destructive bookkeeping lives in [`crate::state`].
//!
//! # Coordinate System
//!
//! - Rotation angles are whole degrees, positive = clockwise on screen
//! - Origin is the top-left corner, y grows downward
//! - Rotation pivots on the centre of the pixel grid

mod geometry;
mod mirror;
mod resample;
mod rotation;

pub use geometry::{compute_extent, normalize_degrees, Extent, RightAngle, RotationGeometry};
pub use mirror::{flip_horizontal, flip_vertical};
pub use resample::{resample, sample_bilinear, sample_nearest, InterpolationMethod};
pub use rotation::{apply_rotation, compute_rotated_bounds, rotate_right_angle};
