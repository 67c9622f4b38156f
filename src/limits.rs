use crate::geometry::Geometry;
use crate::pixel::BitDepth;

/// Largest width and height the format layer accepts.
pub const MAX_DIMENSION: u32 = 4096;

/// Smallest file that can hold a bitmap: 1x1 at 24 bpp, one padded row.
pub const MIN_FILE_LEN: u64 = 58;

/// Dimension limits applied when validating headers and opening files.
///
/// Both limits default to [`MAX_DIMENSION`] and always lie in
/// `1..=MAX_DIMENSION`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limits {
    max_width: u32,
    max_height: u32,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_width: MAX_DIMENSION,
            max_height: MAX_DIMENSION,
        }
    }
}

impl Limits {
    /// Out-of-range values are clamped to `1..=MAX_DIMENSION`.
    pub fn new(max_width: u32, max_height: u32) -> Self {
        Self {
            max_width: max_width.clamp(1, MAX_DIMENSION),
            max_height: max_height.clamp(1, MAX_DIMENSION),
        }
    }

    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    pub fn max_height(&self) -> u32 {
        self.max_height
    }

    /// Largest file any supported depth produces at the limit dimensions.
    pub fn max_file_len(&self) -> u64 {
        [BitDepth::Bpp1, BitDepth::Bpp4, BitDepth::Bpp8, BitDepth::Bpp24]
            .into_iter()
            .map(|depth| Geometry::new(self.max_width, self.max_height, depth).file_size as u64)
            .max()
            .unwrap_or(MIN_FILE_LEN)
    }
}
