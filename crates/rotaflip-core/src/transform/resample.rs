//! Inverse-mapping resampler with nearest-neighbor and bilinear sampling.
//!
//! For each destination pixel the caller's mapper yields fractional source
//! coordinates, and the pixel is sampled from the one source buffer passed in.
//! Points whose rounded position falls outside the source become fully
//! transparent (`0x00000000`) under both policies.

use serde::{Deserialize, Serialize};

use super::geometry::Extent;
use crate::buffer::{pack_argb, pixel_len, unpack_argb, PixelBuffer};

/// Interpolation method for arbitrary-angle rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum InterpolationMethod {
    /// Copy the closest source pixel. Sharp, may alias.
    #[default]
    NearestNeighbor,
    /// Weighted blend of the four surrounding source pixels.
    Bilinear,
}

impl From<u8> for InterpolationMethod {
    /// 0 = nearest neighbor, 1 = bilinear. Unknown values fall back to nearest.
    fn from(value: u8) -> Self {
        match value {
            1 => InterpolationMethod::Bilinear,
            _ => InterpolationMethod::NearestNeighbor,
        }
    }
}

/// Produce an `extent`-sized buffer by sampling `source` at `mapper(x, y)`.
pub fn resample<F>(
    source: &PixelBuffer,
    extent: &Extent,
    mapper: F,
    method: InterpolationMethod,
) -> PixelBuffer
where
    F: Fn(u32, u32) -> (f64, f64),
{
    let (dst_w, dst_h) = (extent.dest_width, extent.dest_height);
    let mut output = Vec::with_capacity(pixel_len(dst_w, dst_h).unwrap_or(0));

    for dst_y in 0..dst_h {
        for dst_x in 0..dst_w {
            let (src_x, src_y) = mapper(dst_x, dst_y);
            let pixel = match method {
                InterpolationMethod::NearestNeighbor => sample_nearest(source, src_x, src_y),
                InterpolationMethod::Bilinear => sample_bilinear(source, src_x, src_y),
            };
            output.push(pixel);
        }
    }

    PixelBuffer::from_parts(dst_w, dst_h, output)
}

/// Round a fractional coordinate pair and check it against the source.
#[inline]
fn rounded_in_bounds(source: &PixelBuffer, x: f64, y: f64) -> Option<(usize, usize)> {
    let rx = x.round();
    let ry = y.round();
    // Written positively so NaN coordinates are rejected
    let inside = rx >= 0.0
        && rx < source.width() as f64
        && ry >= 0.0
        && ry < source.height() as f64;
    if !inside {
        return None;
    }
    Some((rx as usize, ry as usize))
}

/// Sample the nearest source pixel, or transparent outside the source.
pub fn sample_nearest(source: &PixelBuffer, x: f64, y: f64) -> u32 {
    match rounded_in_bounds(source, x, y) {
        Some((px, py)) => source.at(px, py),
        None => 0,
    }
}

/// Sample with bilinear interpolation.
///
/// Neighbours that fall outside the source are clamped per axis to the
/// nearest edge pixel of the same buffer, so every contributing value comes
/// from `source`.
pub fn sample_bilinear(source: &PixelBuffer, x: f64, y: f64) -> u32 {
    if rounded_in_bounds(source, x, y).is_none() {
        return 0;
    }

    let max_x = source.width() as i64 - 1;
    let max_y = source.height() as i64 - 1;

    let fx = x.floor();
    let fy = y.floor();
    let dx = x - fx;
    let dy = y - fy;

    let x0 = (fx as i64).clamp(0, max_x) as usize;
    let x1 = (fx as i64 + 1).clamp(0, max_x) as usize;
    let y0 = (fy as i64).clamp(0, max_y) as usize;
    let y1 = (fy as i64 + 1).clamp(0, max_y) as usize;

    let c00 = unpack_argb(source.at(x0, y0));
    let c10 = unpack_argb(source.at(x1, y0));
    let c01 = unpack_argb(source.at(x0, y1));
    let c11 = unpack_argb(source.at(x1, y1));

    let w1 = (1.0 - dx) * (1.0 - dy);
    let w2 = dx * (1.0 - dy);
    let w3 = (1.0 - dx) * dy;
    let w4 = dx * dy;

    let mut channels = [0u8; 4];
    for i in 0..4 {
        let v = c00[i] as f64 * w1 + c10[i] as f64 * w2 + c01[i] as f64 * w3 + c11[i] as f64 * w4;
        channels[i] = v.round().clamp(0.0, 255.0) as u8;
    }

    pack_argb(channels[0], channels[1], channels[2], channels[3])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_extent(width: u32, height: u32) -> Extent {
        Extent {
            dest_width: width,
            dest_height: height,
            origin_x: 0.0,
            origin_y: 0.0,
        }
    }

    fn gradient(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::from_fn(width, height, |x, y| {
            pack_argb(255, (x * 40) as u8, (y * 40) as u8, 7)
        })
    }

    #[test]
    fn test_interpolation_from_u8() {
        assert_eq!(InterpolationMethod::from(0), InterpolationMethod::NearestNeighbor);
        assert_eq!(InterpolationMethod::from(1), InterpolationMethod::Bilinear);
        assert_eq!(InterpolationMethod::from(9), InterpolationMethod::NearestNeighbor);
    }

    #[test]
    fn test_identity_mapping_copies_source() {
        let src = gradient(5, 4);
        for method in [InterpolationMethod::NearestNeighbor, InterpolationMethod::Bilinear] {
            let out = resample(&src, &identity_extent(5, 4), |x, y| (x as f64, y as f64), method);
            assert_eq!(out, src, "{:?}", method);
        }
    }

    #[test]
    fn test_nearest_rounds_half_away_from_zero() {
        let src = gradient(4, 4);
        assert_eq!(sample_nearest(&src, 1.5, 0.2), src.pixel(2, 0).unwrap());
        assert_eq!(sample_nearest(&src, 1.49, 2.51), src.pixel(1, 3).unwrap());
    }

    #[test]
    fn test_nearest_out_of_bounds_is_transparent() {
        let src = PixelBuffer::from_fn(3, 3, |_, _| 0xFFFF_FFFF);
        assert_eq!(sample_nearest(&src, -0.6, 1.0), 0);
        assert_eq!(sample_nearest(&src, 1.0, -0.51), 0);
        assert_eq!(sample_nearest(&src, 2.5, 1.0), 0);
        assert_eq!(sample_nearest(&src, 1.0, 2.5), 0);
        // Just inside the rounding boundary
        assert_eq!(sample_nearest(&src, -0.4, 2.4), 0xFFFF_FFFF);
    }

    #[test]
    fn test_nan_coordinates_are_transparent() {
        let src = gradient(3, 3);
        assert_eq!(sample_nearest(&src, f64::NAN, f64::NAN), 0);
        assert_eq!(sample_nearest(&src, 1.0, f64::NAN), 0);
        assert_eq!(sample_bilinear(&src, f64::NAN, 1.0), 0);

        let empty = PixelBuffer::new(0, 0, vec![]).unwrap();
        assert_eq!(sample_nearest(&empty, f64::NAN, f64::NAN), 0);
        assert_eq!(sample_bilinear(&empty, f64::NAN, f64::NAN), 0);

        let out = resample(
            &src,
            &identity_extent(2, 2),
            |_, _| (f64::NAN, f64::NAN),
            InterpolationMethod::Bilinear,
        );
        assert!(out.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn test_bilinear_out_of_bounds_is_transparent() {
        let src = PixelBuffer::from_fn(3, 3, |_, _| 0xFFFF_FFFF);
        assert_eq!(sample_bilinear(&src, -0.6, 1.0), 0);
        assert_eq!(sample_bilinear(&src, 1.0, 2.5), 0);
    }

    #[test]
    fn test_bilinear_midpoint_blends_channels() {
        let src = PixelBuffer::new(
            2,
            1,
            vec![pack_argb(0, 0, 100, 200), pack_argb(255, 100, 200, 0)],
        )
        .unwrap();
        let p = sample_bilinear(&src, 0.5, 0.0);
        // 127.5 rounds to 128, 50, 150, 100
        assert_eq!(unpack_argb(p), [128, 50, 150, 100]);
    }

    #[test]
    fn test_bilinear_quarter_weights() {
        let src = PixelBuffer::new(
            2,
            2,
            vec![
                pack_argb(255, 0, 0, 0),
                pack_argb(255, 100, 0, 0),
                pack_argb(255, 0, 0, 0),
                pack_argb(255, 100, 0, 0),
            ],
        )
        .unwrap();
        let p = sample_bilinear(&src, 0.25, 0.75);
        assert_eq!(unpack_argb(p), [255, 25, 0, 0]);
    }

    #[test]
    fn test_bilinear_clamps_at_right_and_bottom_edge() {
        let src = gradient(3, 3);
        // floor = 2, neighbour 3 is clamped back to 2 on both axes
        let p = sample_bilinear(&src, 2.3, 2.4);
        assert_eq!(p, src.pixel(2, 2).unwrap());
    }

    #[test]
    fn test_bilinear_clamps_at_left_and_top_edge() {
        let src = gradient(3, 3);
        // floor = -1 is clamped to 0, neighbour 0 stays 0
        let p = sample_bilinear(&src, -0.3, -0.2);
        assert_eq!(p, src.pixel(0, 0).unwrap());
    }

    #[test]
    fn test_single_pixel_source() {
        let src = PixelBuffer::new(1, 1, vec![0x80FF_0102]).unwrap();
        assert_eq!(sample_bilinear(&src, 0.2, -0.3), 0x80FF_0102);
        assert_eq!(sample_nearest(&src, 0.2, -0.3), 0x80FF_0102);
    }

    #[test]
    fn test_resample_output_dimensions() {
        let src = gradient(4, 4);
        let extent = identity_extent(7, 2);
        let out = resample(
            &src,
            &extent,
            |x, y| (x as f64, y as f64),
            InterpolationMethod::NearestNeighbor,
        );
        assert_eq!(out.dimensions(), (7, 2));
        // Columns 4..7 map outside the source
        assert_eq!(out.pixel(5, 1).unwrap(), 0);
        assert_eq!(out.pixel(3, 1).unwrap(), src.pixel(3, 1).unwrap());
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for a small buffer with arbitrary ARGB pixels.
    fn buffer_strategy() -> impl Strategy<Value = PixelBuffer> {
        (1u32..=12, 1u32..=12).prop_flat_map(|(w, h)| {
            let size = (w * h) as usize;
            prop::collection::vec(any::<u32>(), size..=size)
                .prop_map(move |pixels| PixelBuffer::new(w, h, pixels).unwrap())
        })
    }

    proptest! {
        /// Property: each bilinear channel lies within its four neighbours' range.
        #[test]
        fn prop_bilinear_no_overshoot(
            src in buffer_strategy(),
            fx in 0.0f64..1.0,
            fy in 0.0f64..1.0,
        ) {
            // Covers [-0.49, size - 0.5), including the clamped band left of
            // and above the first pixel centre
            let x = -0.49 + fx * (src.width() as f64 - 0.01);
            let y = -0.49 + fy * (src.height() as f64 - 0.01);
            let max_x = src.width() as i64 - 1;
            let max_y = src.height() as i64 - 1;
            let x0 = (x.floor() as i64).clamp(0, max_x) as usize;
            let y0 = (y.floor() as i64).clamp(0, max_y) as usize;
            let x1 = (x.floor() as i64 + 1).clamp(0, max_x) as usize;
            let y1 = (y.floor() as i64 + 1).clamp(0, max_y) as usize;

            let neighbours = [
                unpack_argb(src.at(x0, y0)),
                unpack_argb(src.at(x1, y0)),
                unpack_argb(src.at(x0, y1)),
                unpack_argb(src.at(x1, y1)),
            ];
            let out = unpack_argb(sample_bilinear(&src, x, y));

            for c in 0..4 {
                let lo = neighbours.iter().map(|n| n[c]).min().unwrap();
                let hi = neighbours.iter().map(|n| n[c]).max().unwrap();
                prop_assert!(out[c] >= lo && out[c] <= hi, "channel {} = {} not in [{}, {}]", c, out[c], lo, hi);
            }
        }

        /// Property: nearest sampling never invents a colour.
        #[test]
        fn prop_nearest_returns_source_or_transparent(
            src in buffer_strategy(),
            x in -5.0f64..20.0,
            y in -5.0f64..20.0,
        ) {
            let p = sample_nearest(&src, x, y);
            prop_assert!(p == 0 || src.pixels().contains(&p));
        }
    }
}
