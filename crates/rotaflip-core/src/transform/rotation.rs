//! Image rotation with an exact right-angle path and a resampling path.
//!
//! Angles are whole degrees, positive = clockwise on screen. There are two
//! paths:
//! - **Right angles** (0, 90, 180, 270): pure index remapping, lossless.
//!   Floating point rotation at these angles can mis-round pixel positions.
//! - **Any other angle**: the canvas is expanded to the rotated bounding box
//!   and every destination pixel is inverse-mapped and resampled.
//!
//! # Algorithm
//!
//! The general path uses inverse mapping: for each pixel in the output image,
//! we calculate which source position it came from and sample there with the
//! chosen [`InterpolationMethod`]. See [`super::geometry`] for the mapping.

use log::trace;

use super::geometry::{normalize_degrees, RightAngle, RotationGeometry};
use super::resample::{resample, InterpolationMethod};
use crate::buffer::PixelBuffer;

/// Compute the dimensions of the canvas for a rotated image.
///
/// Right angles swap or keep the dimensions exactly; other angles use the
/// bounding box of the rotated corner pixels.
///
/// # Example
///
/// ```
/// use rotaflip_core::transform::compute_rotated_bounds;
///
/// // 90-degree rotation swaps dimensions
/// assert_eq!(compute_rotated_bounds(100, 50, 90), (50, 100));
///
/// // Full turns preserve dimensions
/// assert_eq!(compute_rotated_bounds(100, 50, 720), (100, 50));
/// ```
pub fn compute_rotated_bounds(width: u32, height: u32, degrees: i32) -> (u32, u32) {
    let degrees = normalize_degrees(degrees);
    match RightAngle::from_degrees(degrees) {
        Some(right) => right.dimensions(width, height),
        None => {
            let extent = RotationGeometry::from_degrees(width, height, degrees).extent();
            (extent.dest_width, extent.dest_height)
        }
    }
}

/// Rotate an image by `degrees` (any integer, normalized modulo 360).
///
/// # Arguments
///
/// * `image` - Source image; always the unrotated baseline, never a
///   previously rotated result
/// * `degrees` - Rotation angle in degrees (positive = clockwise)
/// * `method` - Interpolation method for non-right angles
///
/// # Returns
///
/// New `PixelBuffer` with the rotated content. Pixels of the expanded canvas
/// that do not map into the source are fully transparent.
pub fn apply_rotation(
    image: &PixelBuffer,
    degrees: i32,
    method: InterpolationMethod,
) -> PixelBuffer {
    let degrees = normalize_degrees(degrees);

    if let Some(right) = RightAngle::from_degrees(degrees) {
        return rotate_right_angle(image, right);
    }

    if image.is_empty() {
        return image.clone();
    }

    let geometry = RotationGeometry::from_degrees(image.width(), image.height(), degrees);
    let extent = geometry.extent();
    trace!(
        "rotating {}x{} by {} degrees into {}x{} (origin {:.3}, {:.3})",
        image.width(),
        image.height(),
        degrees,
        extent.dest_width,
        extent.dest_height,
        extent.origin_x,
        extent.origin_y
    );

    resample(image, &extent, |x, y| geometry.inverse_map(x, y), method)
}

/// Rotate by an exact quarter turn through index remapping.
pub fn rotate_right_angle(image: &PixelBuffer, angle: RightAngle) -> PixelBuffer {
    if angle == RightAngle::Deg0 {
        return image.clone();
    }

    let (src_w, src_h) = image.dimensions();
    let (dst_w, dst_h) = angle.dimensions(src_w, src_h);
    let mut output = Vec::with_capacity(image.pixel_count());

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            let (sx, sy) = angle.source_index(dst_x, dst_y, src_w, src_h);
            output.push(image.at(sx as usize, sy as usize));
        }
    }

    PixelBuffer::from_parts(dst_w, dst_h, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::pack_argb;

    /// Create a test image where every pixel is unique and opaque.
    fn test_image(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::from_fn(width, height, |x, y| {
            pack_argb(255, x as u8, y as u8, ((x + y) * 8) as u8)
        })
    }

    #[test]
    fn test_no_rotation() {
        let img = test_image(100, 50);
        let result = apply_rotation(&img, 0, InterpolationMethod::Bilinear);
        assert_eq!(result, img);
    }

    #[test]
    fn test_full_turns_match_zero() {
        let img = test_image(7, 3);
        let zero = apply_rotation(&img, 0, InterpolationMethod::NearestNeighbor);
        for degrees in [360, 720, -360, -1080] {
            let result = apply_rotation(&img, degrees, InterpolationMethod::NearestNeighbor);
            assert_eq!(result, zero, "rotation by {}", degrees);
        }
    }

    #[test]
    fn test_90_degree_rotation_bounds() {
        assert_eq!(compute_rotated_bounds(100, 50, 90), (50, 100));
        assert_eq!(compute_rotated_bounds(100, 50, 270), (50, 100));
        assert_eq!(compute_rotated_bounds(100, 50, -90), (50, 100));
        assert_eq!(compute_rotated_bounds(100, 50, 450), (50, 100));
    }

    #[test]
    fn test_180_degree_rotation_bounds() {
        assert_eq!(compute_rotated_bounds(100, 50, 180), (100, 50));
    }

    #[test]
    fn test_45_degree_rotation_bounds() {
        let (w, h) = compute_rotated_bounds(100, 100, 45);
        // Diagonal of the 99 x 99 corner span is ~140.007
        assert_eq!(w, 141);
        assert_eq!(h, 141);
    }

    #[test]
    fn test_negative_rotation_bounds() {
        assert_eq!(
            compute_rotated_bounds(100, 50, 30),
            compute_rotated_bounds(100, 50, -30)
        );
    }

    #[test]
    fn test_complementary_rotations() {
        // 30 and 150 give the same bounding box
        let (w1, h1) = compute_rotated_bounds(100, 50, 30);
        let (w2, h2) = compute_rotated_bounds(100, 50, 150);
        assert!((w1 as i32 - w2 as i32).abs() <= 1);
        assert!((h1 as i32 - h2 as i32).abs() <= 1);
    }

    #[test]
    fn test_rotate_90_remaps_tall_image() {
        // 4 rows by 2 columns
        let img = test_image(2, 4);
        let result = apply_rotation(&img, 90, InterpolationMethod::NearestNeighbor);

        assert_eq!(result.dimensions(), (4, 2));
        assert_eq!(result.pixel(0, 0).unwrap(), img.pixel(0, 3).unwrap());
        assert_eq!(result.pixel(3, 0).unwrap(), img.pixel(0, 0).unwrap());
        assert_eq!(result.pixel(0, 1).unwrap(), img.pixel(1, 3).unwrap());
        assert_eq!(result.pixel(3, 1).unwrap(), img.pixel(1, 0).unwrap());
    }

    #[test]
    fn test_rotate_minus_90_is_mirror_transpose() {
        let img = test_image(2, 4);
        let result = apply_rotation(&img, -90, InterpolationMethod::NearestNeighbor);

        assert_eq!(result.dimensions(), (4, 2));
        assert_eq!(result.pixel(0, 0).unwrap(), img.pixel(1, 0).unwrap());
        assert_eq!(result.pixel(3, 0).unwrap(), img.pixel(1, 3).unwrap());
        assert_eq!(result.pixel(0, 1).unwrap(), img.pixel(0, 0).unwrap());
        assert_eq!(result.pixel(3, 1).unwrap(), img.pixel(0, 3).unwrap());
    }

    #[test]
    fn test_rotate_180_is_point_reflection() {
        let img = test_image(3, 2);
        let result = apply_rotation(&img, 180, InterpolationMethod::Bilinear);

        assert_eq!(result.dimensions(), (3, 2));
        for y in 0..2 {
            for x in 0..3 {
                assert_eq!(result.pixel(x, y).unwrap(), img.pixel(2 - x, 1 - y).unwrap());
            }
        }
    }

    #[test]
    fn test_four_quarter_turns_restore_image() {
        let img = test_image(5, 3);
        let mut current = img.clone();
        for _ in 0..4 {
            current = rotate_right_angle(&current, RightAngle::Deg90);
        }
        assert_eq!(current, img);
    }

    #[test]
    fn test_90_then_270_restore_image() {
        let img = test_image(6, 2);
        let turned = rotate_right_angle(&img, RightAngle::Deg90);
        assert_eq!(rotate_right_angle(&turned, RightAngle::Deg270), img);
    }

    #[test]
    fn test_rotation_expands_canvas() {
        let img = test_image(100, 100);
        let result = apply_rotation(&img, 45, InterpolationMethod::Bilinear);
        assert!(result.width() > img.width());
        assert!(result.height() > img.height());
    }

    #[test]
    fn test_1x1_image_rotation() {
        let img = PixelBuffer::new(1, 1, vec![0xFF80_4020]).unwrap();
        for degrees in [0, 17, 45, 90, 133, 180, 270, 359, -45] {
            for method in [InterpolationMethod::NearestNeighbor, InterpolationMethod::Bilinear] {
                let result = apply_rotation(&img, degrees, method);
                assert_eq!(result, img, "{} degrees, {:?}", degrees, method);
            }
        }
    }

    #[test]
    fn test_expanded_corners_are_transparent() {
        let img = PixelBuffer::from_fn(20, 20, |_, _| 0xFFFF_FFFF);
        for method in [InterpolationMethod::NearestNeighbor, InterpolationMethod::Bilinear] {
            let result = apply_rotation(&img, 45, method);
            assert_eq!(result.pixel(0, 0).unwrap(), 0);
            let (w, h) = result.dimensions();
            assert_eq!(result.pixel(w - 1, h - 1).unwrap(), 0);
        }
    }

    #[test]
    fn test_rotation_center_preservation() {
        // 21x21 with a bright 3x3 block at the centre
        let img = PixelBuffer::from_fn(21, 21, |x, y| {
            if (9..=11).contains(&x) && (9..=11).contains(&y) {
                0xFFFF_FFFF
            } else {
                0xFF00_0000
            }
        });

        let result = apply_rotation(&img, 30, InterpolationMethod::NearestNeighbor);
        let (cx, cy) = (result.width() / 2, result.height() / 2);
        assert_eq!(result.pixel(cx, cy).unwrap(), 0xFFFF_FFFF);
    }

    #[test]
    fn test_very_thin_image_rotation() {
        let img = test_image(100, 1);
        let result = apply_rotation(&img, 45, InterpolationMethod::Bilinear);
        assert!(result.width() > 0);
        assert!(result.height() > 0);

        let img = test_image(1, 100);
        let result = apply_rotation(&img, 45, InterpolationMethod::NearestNeighbor);
        assert!(result.width() > 0);
        assert!(result.height() > 0);
    }

    #[test]
    fn test_empty_image_is_returned_unchanged() {
        let img = PixelBuffer::new(0, 0, vec![]).unwrap();
        assert_eq!(apply_rotation(&img, 30, InterpolationMethod::Bilinear), img);
        assert_eq!(apply_rotation(&img, 90, InterpolationMethod::Bilinear), img);
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
