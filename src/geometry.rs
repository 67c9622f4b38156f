//! Size and offset fields derived from width, height and depth.

use crate::bmp::PALETTE_OFFSET;
use crate::pixel::BitDepth;

/// Bytes per scanline including padding to a 4-byte boundary.
pub(crate) fn bytes_per_line(width: u32, bits: u16) -> usize {
    (width as usize * bits as usize).div_ceil(32) * 4
}

/// Bytes per scanline actually carrying pixel bits.
pub(crate) fn bytes_per_line_used(width: u32, bits: u16) -> usize {
    (width as usize * bits as usize).div_ceil(8)
}

/// All derived layout values of a bitmap.
///
/// Callers validate width, height and depth first; there is no error path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub width: u32,
    pub height: u32,
    pub depth: BitDepth,
    pub palette_color_count: usize,
    pub palette_offset: usize,
    pub palette_size: usize,
    pub bytes_per_line: usize,
    pub bytes_per_line_used: usize,
    pub bytes_per_line_padding: usize,
    pub bitmap_offset: usize,
    pub bitmap_size: usize,
    pub file_size: usize,
    pub x_min: i32,
    pub x_max: i32,
    pub y_min: i32,
    pub y_max: i32,
}

impl Geometry {
    pub fn new(width: u32, height: u32, depth: BitDepth) -> Self {
        let bits = depth.bits();
        let palette_color_count = depth.palette_len();
        let palette_size = palette_color_count * 4;
        let bytes_per_line = bytes_per_line(width, bits);
        let bytes_per_line_used = bytes_per_line_used(width, bits);
        let bitmap_size = bytes_per_line * height as usize;
        let bitmap_offset = PALETTE_OFFSET + palette_size;

        Self {
            width,
            height,
            depth,
            palette_color_count,
            palette_offset: PALETTE_OFFSET,
            palette_size,
            bytes_per_line,
            bytes_per_line_used,
            bytes_per_line_padding: bytes_per_line - bytes_per_line_used,
            bitmap_offset,
            bitmap_size,
            file_size: bitmap_offset + bitmap_size,
            x_min: 0,
            x_max: width as i32 - 1,
            y_min: 0,
            y_max: height as i32 - 1,
        }
    }

    /// Whether `(x, y)` lies inside the pixel area.
    #[inline]
    pub fn contains(&self, x: i32, y: i32) -> bool {
        (self.x_min..=self.x_max).contains(&x) && (self.y_min..=self.y_max).contains(&y)
    }
}

impl Default for Geometry {
    /// 1x1 at 24 bpp.
    fn default() -> Self {
        Self::new(1, 1, BitDepth::Bpp24)
    }
}
