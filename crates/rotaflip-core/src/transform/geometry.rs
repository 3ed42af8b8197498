//! Rotation geometry: destination canvas sizing and inverse coordinate mapping.
//!
//! # Coordinate System
//!
//! - Pixel coordinates address pixel centres; the source centre is
//!   `((width - 1) / 2, (height - 1) / 2)`
//! - The y axis points down, so positive angles rotate clockwise on screen
//! - Destination coordinates are expressed in source space by adding the
//!   extent's origin, which keeps source and destination sharing one centre
//!
//! For rotation by angle θ about centre `c`, a source point `p` lands at
//! `c + R(θ)(p - c)`. The inverse used for sampling is:
//! ```text
//! src_x = cx + (dx - cx) * cos(θ) + (dy - cy) * sin(θ)
//! src_y = cy - (dx - cx) * sin(θ) + (dy - cy) * cos(θ)
//! ```
//! where `(dx, dy) = origin + (dest_x, dest_y)`. This is the polar form
//! (same distance to centre, polar angle reduced by θ) without the per-pixel
//! `atan2`/`hypot`.

/// Destination canvas for a rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    /// Width of the rotated canvas in pixels.
    pub dest_width: u32,
    /// Height of the rotated canvas in pixels.
    pub dest_height: u32,
    /// Source-space x of the destination's top-left pixel (may be negative).
    pub origin_x: f64,
    /// Source-space y of the destination's top-left pixel (may be negative).
    pub origin_y: f64,
}

/// Exact quarter-turn rotations, computed by index remapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RightAngle {
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl RightAngle {
    /// Classify a normalized angle in `[0, 360)`; `None` for anything that
    /// needs the trigonometric path.
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match degrees {
            0 => Some(RightAngle::Deg0),
            90 => Some(RightAngle::Deg90),
            180 => Some(RightAngle::Deg180),
            270 => Some(RightAngle::Deg270),
            _ => None,
        }
    }

    /// Returns true if this rotation swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, RightAngle::Deg90 | RightAngle::Deg270)
    }

    /// Destination dimensions for a `width` x `height` source.
    pub fn dimensions(self, width: u32, height: u32) -> (u32, u32) {
        if self.swaps_dimensions() {
            (height, width)
        } else {
            (width, height)
        }
    }

    /// Source pixel read by destination pixel `(x, y)`.
    ///
    /// `width`/`height` are the source dimensions.
    #[inline]
    pub fn source_index(self, x: u32, y: u32, width: u32, height: u32) -> (u32, u32) {
        match self {
            RightAngle::Deg0 => (x, y),
            RightAngle::Deg90 => (y, height - 1 - x),
            RightAngle::Deg180 => (width - 1 - x, height - 1 - y),
            RightAngle::Deg270 => (width - 1 - y, x),
        }
    }
}

/// Normalize an angle in whole degrees into `[0, 360)`.
#[inline]
pub fn normalize_degrees(degrees: i32) -> i32 {
    degrees.rem_euclid(360)
}

/// Centre of a `width` x `height` pixel grid.
#[inline]
fn center(width: u32, height: u32) -> (f64, f64) {
    (
        (width as f64 - 1.0) * 0.5,
        (height as f64 - 1.0) * 0.5,
    )
}

/// Compute the destination canvas for rotating a `src_width` x `src_height`
/// image by `angle_radians` (clockwise on screen).
///
/// The four corner pixel centres keep their distance to the centre; each is
/// moved along its circle by the rotation angle, and the canvas is the
/// axis-aligned bounding box of the results. The canvas is never smaller
/// than 1x1, which covers a single-pixel source whose corners all sit on the
/// centre.
///
/// # Example
///
/// ```
/// use rotaflip_core::transform::compute_extent;
///
/// let extent = compute_extent(101, 101, std::f64::consts::FRAC_PI_4);
/// // The diagonal of a 100 x 100 span is ~141.4
/// assert_eq!(extent.dest_width, 142);
/// ```
pub fn compute_extent(src_width: u32, src_height: u32, angle_radians: f64) -> Extent {
    let (cx, cy) = center(src_width, src_height);
    let (sin, cos) = angle_radians.sin_cos();

    let right = src_width as f64 - 1.0;
    let bottom = src_height as f64 - 1.0;
    let corners = [(0.0, 0.0), (right, 0.0), (0.0, bottom), (right, bottom)];

    let mut min_x = f64::INFINITY;
    let mut min_y = f64::INFINITY;
    let mut max_x = f64::NEG_INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for (px, py) in corners {
        let (dx, dy) = (px - cx, py - cy);
        let x = cx + dx * cos - dy * sin;
        let y = cy + dx * sin + dy * cos;
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }

    Extent {
        dest_width: ((max_x - min_x).ceil() as u32).max(1),
        dest_height: ((max_y - min_y).ceil() as u32).max(1),
        origin_x: min_x,
        origin_y: min_y,
    }
}

/// A rotation of one source size by one angle: centre, angle and extent.
#[derive(Debug, Clone, Copy)]
pub struct RotationGeometry {
    center_x: f64,
    center_y: f64,
    sin: f64,
    cos: f64,
    extent: Extent,
}

impl RotationGeometry {
    pub fn new(src_width: u32, src_height: u32, angle_radians: f64) -> Self {
        let (center_x, center_y) = center(src_width, src_height);
        let (sin, cos) = angle_radians.sin_cos();
        Self {
            center_x,
            center_y,
            sin,
            cos,
            extent: compute_extent(src_width, src_height, angle_radians),
        }
    }

    /// Convenience constructor for whole degrees.
    pub fn from_degrees(src_width: u32, src_height: u32, degrees: i32) -> Self {
        Self::new(src_width, src_height, (degrees as f64).to_radians())
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Map destination pixel `(dest_x, dest_y)` back to fractional source
    /// coordinates.
    #[inline]
    pub fn inverse_map(&self, dest_x: u32, dest_y: u32) -> (f64, f64) {
        let dx = dest_x as f64 + self.extent.origin_x - self.center_x;
        let dy = dest_y as f64 + self.extent.origin_y - self.center_y;
        (
            self.center_x + dx * self.cos + dy * self.sin,
            self.center_y - dx * self.sin + dy * self.cos,
        )
    }
}
