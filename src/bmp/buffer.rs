//! Scanline-padded pixel storage with per-depth bit addressing.
//!
//! Rows are stored bottom-up: the row for `y_max` comes first. Sub-byte
//! depths pack pixels from the most significant bit down.

use super::utils::{read_le, write_le};
use crate::geometry::Geometry;
use crate::pixel::BitDepth;

/// Raw pixel bytes, `bytes_per_line * height` long.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
    data: Vec<u8>,
}

impl PixelBuffer {
    pub(crate) fn from_vec(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Buffer filled with white: every used bit set, padding zeroed.
    pub fn white(g: &Geometry) -> Self {
        let bits_used = g.width as usize * g.depth.bits() as usize;
        let full = bits_used / 8;
        let rem = bits_used % 8;

        let mut line = Vec::with_capacity(g.bytes_per_line);
        line.resize(full, 0xFF);
        if rem != 0 {
            // high `rem` bits of the trailing byte
            line.push(0xFFu8 << (8 - rem));
        }
        line.resize(g.bytes_per_line, 0);
        debug_assert_eq!(full + usize::from(rem != 0), g.bytes_per_line_used);

        Self {
            data: line.repeat(g.height as usize),
        }
    }

    /// Byte index and bit shift of pixel `(x, y)`; the caller checks bounds.
    ///
    /// For 24 bpp the index is the first byte of a 3-byte run and the shift is 0.
    #[inline]
    pub(crate) fn address(g: &Geometry, x: i32, y: i32) -> (usize, u32) {
        let x = x as usize;
        let row = (g.y_max - y) as usize * g.bytes_per_line;
        let (col, shift) = match g.depth {
            BitDepth::Bpp1 => (x / 8, 7 - (x % 8) as u32),
            BitDepth::Bpp4 => (x / 2, 4 * (1 - (x % 2) as u32)),
            BitDepth::Bpp8 => (x, 0),
            BitDepth::Bpp24 => (x * 3, 0),
        };
        (row + col, shift)
    }

    /// Raw value at `(x, y)`: a palette index, or `0xRRGGBB` at 24 bpp.
    pub(crate) fn get(&self, g: &Geometry, x: i32, y: i32) -> Option<u32> {
        if !g.contains(x, y) {
            return None;
        }
        let (idx, shift) = Self::address(g, x, y);
        let value = match g.depth {
            BitDepth::Bpp24 => read_le(self.data.get(idx..idx + 3)?),
            depth => (u32::from(*self.data.get(idx)?) >> shift) & depth.mask(),
        };
        Some(value)
    }

    /// Stores `value` at `(x, y)`, leaving neighbouring bits untouched.
    pub(crate) fn set(&mut self, g: &Geometry, x: i32, y: i32, value: u32) {
        if !g.contains(x, y) {
            return;
        }
        let (idx, shift) = Self::address(g, x, y);
        match g.depth {
            BitDepth::Bpp24 => {
                if let Some(run) = self.data.get_mut(idx..idx + 3) {
                    write_le(value & 0xFF_FFFF, run);
                }
            }
            depth => {
                if let Some(byte) = self.data.get_mut(idx) {
                    let mask = depth.mask() << shift;
                    let cleared = u32::from(*byte) & !mask;
                    *byte = (cleared | ((value & depth.mask()) << shift)) as u8;
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
