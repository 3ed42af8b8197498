//! Horizontal and vertical mirroring.
//!
//! Both operations are exact row/column permutations: the output has the
//! same dimensions as the input and every pixel is copied verbatim.

use crate::buffer::PixelBuffer;

/// Mirror top-to-bottom: destination row `y` is source row `height - 1 - y`.
pub fn flip_vertical(image: &PixelBuffer) -> PixelBuffer {
    let width = image.width() as usize;
    let mut output = Vec::with_capacity(image.pixel_count());

    // Copy whole rows in reverse order
    if width > 0 {
        for row in image.pixels().chunks_exact(width).rev() {
            output.extend_from_slice(row);
        }
    }

    PixelBuffer::from_parts(image.width(), image.height(), output)
}

/// Mirror left-to-right: destination column `x` is source column `width - 1 - x`.
pub fn flip_horizontal(image: &PixelBuffer) -> PixelBuffer {
    let width = image.width() as usize;
    let mut output = Vec::with_capacity(image.pixel_count());

    if width > 0 {
        for row in image.pixels().chunks_exact(width) {
            output.extend(row.iter().rev());
        }
    }

    PixelBuffer::from_parts(image.width(), image.height(), output)
}
