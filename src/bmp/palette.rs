//! Color table for indexed depths.

use crate::pixel::{BitDepth, color};

/// 2-color monochrome palette.
pub const PALETTE_1BPP: [u32; 2] = [0x000000, 0xFFFFFF];

/// 16-color VGA palette.
pub const PALETTE_4BPP: [u32; 16] = [
    0x000000, 0x800000, 0x008000, 0x808000, 0x000080, 0x800080, 0x008080, 0x808080,
    0xC0C0C0, 0xFF0000, 0x00FF00, 0xFFFF00, 0x0000FF, 0xFF00FF, 0x00FFFF, 0xFFFFFF,
];

/// 256-color palette (system colors plus a color cube).
#[rustfmt::skip]
pub const PALETTE_8BPP: [u32; 256] = [
    0x000000, 0x800000, 0x008000, 0x808000, 0x000080, 0x800080, 0x008080, 0xC0C0C0,
    0xC0DCC0, 0xA6CAF0, 0x402000, 0x602000, 0x802000, 0xA02000, 0xC02000, 0xE02000,
    0x004000, 0x204000, 0x404000, 0x604000, 0x804000, 0xA04000, 0xC04000, 0xE04000,
    0x006000, 0x206000, 0x406000, 0x606000, 0x806000, 0xA06000, 0xC06000, 0xE06000,
    0x008000, 0x208000, 0x408000, 0x608000, 0x808000, 0xA08000, 0xC08000, 0xE08000,
    0x00A000, 0x20A000, 0x40A000, 0x60A000, 0x80A000, 0xA0A000, 0xC0A000, 0xE0A000,
    0x00C000, 0x20C000, 0x40C000, 0x60C000, 0x80C000, 0xA0C000, 0xC0C000, 0xE0C000,
    0x00E000, 0x20E000, 0x40E000, 0x60E000, 0x80E000, 0xA0E000, 0xC0E000, 0xE0E000,
    0x000040, 0x200040, 0x400040, 0x600040, 0x800040, 0xA00040, 0xC00040, 0xE00040,
    0x002040, 0x202040, 0x402040, 0x602040, 0x802040, 0xA02040, 0xC02040, 0xE02040,
    0x004040, 0x204040, 0x404040, 0x604040, 0x804040, 0xA04040, 0xC04040, 0xE04040,
    0x006040, 0x206040, 0x406040, 0x606040, 0x806040, 0xA06040, 0xC06040, 0xE06040,
    0x008040, 0x208040, 0x408040, 0x608040, 0x808040, 0xA08040, 0xC08040, 0xE08040,
    0x00A040, 0x20A040, 0x40A040, 0x60A040, 0x80A040, 0xA0A040, 0xC0A040, 0xE0A040,
    0x00C040, 0x20C040, 0x40C040, 0x60C040, 0x80C040, 0xA0C040, 0xC0C040, 0xE0C040,
    0x00E040, 0x20E040, 0x40E040, 0x60E040, 0x80E040, 0xA0E040, 0xC0E040, 0xE0E040,
    0x000080, 0x200080, 0x400080, 0x600080, 0x800080, 0xA00080, 0xC00080, 0xE00080,
    0x002080, 0x202080, 0x402080, 0x602080, 0x802080, 0xA02080, 0xC02080, 0xE02080,
    0x004080, 0x204080, 0x404080, 0x604080, 0x804080, 0xA04080, 0xC04080, 0xE04080,
    0x006080, 0x206080, 0x406080, 0x606080, 0x806080, 0xA06080, 0xC06080, 0xE06080,
    0x008080, 0x208080, 0x408080, 0x608080, 0x808080, 0xA08080, 0xC08080, 0xE08080,
    0x00A080, 0x20A080, 0x40A080, 0x60A080, 0x80A080, 0xA0A080, 0xC0A080, 0xE0A080,
    0x00C080, 0x20C080, 0x40C080, 0x60C080, 0x80C080, 0xA0C080, 0xC0C080, 0xE0C080,
    0x00E080, 0x20E080, 0x40E080, 0x60E080, 0x80E080, 0xA0E080, 0xC0E080, 0xE0E080,
    0x0000C0, 0x2000C0, 0x4000C0, 0x6000C0, 0x8000C0, 0xA000C0, 0xC000C0, 0xE000C0,
    0x0020C0, 0x2020C0, 0x4020C0, 0x6020C0, 0x8020C0, 0xA020C0, 0xC020C0, 0xE020C0,
    0x0040C0, 0x2040C0, 0x4040C0, 0x6040C0, 0x8040C0, 0xA040C0, 0xC040C0, 0xE040C0,
    0x0060C0, 0x2060C0, 0x4060C0, 0x6060C0, 0x8060C0, 0xA060C0, 0xC060C0, 0xE060C0,
    0x0080C0, 0x2080C0, 0x4080C0, 0x6080C0, 0x8080C0, 0xA080C0, 0xC080C0, 0xE080C0,
    0x00A0C0, 0x20A0C0, 0x40A0C0, 0x60A0C0, 0x80A0C0, 0xA0A0C0, 0xC0A0C0, 0xE0A0C0,
    0x00C0C0, 0x20C0C0, 0x40C0C0, 0x60C0C0, 0x80C0C0, 0xA0C0C0, 0xFFFBF0, 0xA0A0A4,
    0x808080, 0xFF0000, 0x00FF00, 0xFFFF00, 0x0000FF, 0xFF00FF, 0x00FFFF, 0xFFFFFF,
];

/// Ordered list of 24-bit `0xRRGGBB` colors.
///
/// On disk each entry is 4 bytes `B, G, R, 0`. The fourth byte is dropped on
/// decode and written as zero on encode.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Palette {
    colors: Vec<u32>,
}

impl Palette {
    /// Standard palette for `depth` (empty for 24 bpp).
    pub fn standard(depth: BitDepth) -> Self {
        let colors = match depth {
            BitDepth::Bpp1 => PALETTE_1BPP.to_vec(),
            BitDepth::Bpp4 => PALETTE_4BPP.to_vec(),
            BitDepth::Bpp8 => PALETTE_8BPP.to_vec(),
            BitDepth::Bpp24 => Vec::new(),
        };
        Self { colors }
    }

    pub fn decode(bytes: &[u8]) -> Self {
        let colors = bytes
            .chunks_exact(4)
            .map(|c| color::rgb(u32::from_le_bytes([c[0], c[1], c[2], c[3]])))
            .collect();
        Self { colors }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.colors.len() * 4);
        for &c in &self.colors {
            out.extend_from_slice(&color::rgb(c).to_le_bytes());
        }
        out
    }

    /// Color at `index`, or `None` when out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<u32> {
        self.colors.get(index).copied()
    }

    /// Sets the color at `index`; out-of-range indices are ignored.
    pub fn set(&mut self, index: usize, color: u32) {
        if let Some(slot) = self.colors.get_mut(index) {
            *slot = color::rgb(color);
        }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.colors.iter().copied()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.colors
    }
}
