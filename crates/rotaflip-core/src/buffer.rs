//! Packed ARGB pixel buffers.
//!
//! A [`PixelBuffer`] is the only pixel container the engine knows about. Each
//! pixel is one `u32` laid out as `(alpha << 24) | (red << 16) | (green << 8) | blue`,
//! stored row-major with no padding. Buffers are never mutated after
//! construction; every transform produces a new one.

use crate::error::{TransformError, TransformResult};

/// Pack four 8-bit channels into one ARGB pixel.
#[inline]
pub fn pack_argb(alpha: u8, red: u8, green: u8, blue: u8) -> u32 {
    ((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32
}

/// Split an ARGB pixel into `[alpha, red, green, blue]`.
#[inline]
pub fn unpack_argb(pixel: u32) -> [u8; 4] {
    [
        (pixel >> 24) as u8,
        (pixel >> 16) as u8,
        (pixel >> 8) as u8,
        pixel as u8,
    ]
}

/// Pixel count of a `width` x `height` grid, or `None` if it overflows `usize`.
#[inline]
pub(crate) fn pixel_len(width: u32, height: u32) -> Option<usize> {
    (width as usize).checked_mul(height as usize)
}

/// A width x height image of packed ARGB pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl PixelBuffer {
    /// Create a buffer from explicit dimensions and row-major pixel data.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::DimensionMismatch` if `pixels.len()` is not
    /// `width * height`, or if that product does not fit in `usize`.
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> TransformResult<Self> {
        let expected = pixel_len(width, height).unwrap_or(usize::MAX);
        if pixels.len() != expected {
            return Err(TransformError::DimensionMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u32) -> Self {
        let mut pixels = Vec::with_capacity(pixel_len(width, height).unwrap_or(0));
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a buffer from tightly packed RGBA bytes (4 bytes per pixel).
    ///
    /// This is the layout used by browser `ImageData` and `image::RgbaImage`.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> TransformResult<Self> {
        let expected = pixel_len(width, height).unwrap_or(usize::MAX);
        if expected.checked_mul(4) != Some(bytes.len()) {
            return Err(TransformError::DimensionMismatch {
                expected,
                actual: bytes.len() / 4,
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| pack_argb(px[3], px[0], px[1], px[2]))
            .collect();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer from an `image::RgbaImage`.
    pub fn from_rgba_image(img: &image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img
            .pixels()
            .map(|px| {
                let [r, g, b, a] = px.0;
                pack_argb(a, r, g, b)
            })
            .collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an `image::RgbaImage`, e.g. for encoding.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.to_rgba_bytes())
    }

    /// Unpack into RGBA bytes (4 bytes per pixel, row-major).
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);
        for &pixel in &self.pixels {
            let [a, r, g, b] = unpack_argb(pixel);
            bytes.extend_from_slice(&[r, g, b, a]);
        }
        bytes
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Row-major pixel data.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Consume the buffer and return its pixel data.
    pub fn into_pixels(self) -> Vec<u32> {
        self.pixels
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this buffer has a zero width or height.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::OutOfBounds` outside `[0, width) x [0, height)`.
    pub fn pixel(&self, x: u32, y: u32) -> TransformResult<u32> {
        if x >= self.width || y >= self.height {
            return Err(TransformError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.at(x as usize, y as usize))
    }

    /// Unchecked read for the transform loops, which stay in bounds by construction.
    #[inline]
    pub(crate) fn at(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width as usize + x]
    }

    /// Assemble a buffer whose length is guaranteed by the caller.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<u32>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }
}
