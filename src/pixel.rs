/// Supported color depths.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BitDepth {
    /// 1 bpp, 2-color palette.
    Bpp1,
    /// 4 bpp, 16-color palette.
    Bpp4,
    /// 8 bpp, 256-color palette.
    Bpp8,
    /// 24 bpp true color, no palette.
    Bpp24,
}

impl BitDepth {
    pub fn from_bits(bits: u16) -> Option<Self> {
        match bits {
            1 => Some(Self::Bpp1),
            4 => Some(Self::Bpp4),
            8 => Some(Self::Bpp8),
            24 => Some(Self::Bpp24),
            _ => None,
        }
    }

    /// Bits per pixel.
    pub fn bits(self) -> u16 {
        match self {
            Self::Bpp1 => 1,
            Self::Bpp4 => 4,
            Self::Bpp8 => 8,
            Self::Bpp24 => 24,
        }
    }

    /// Mask applied to a pixel value before it is stored.
    pub fn mask(self) -> u32 {
        match self {
            Self::Bpp1 => 0x01,
            Self::Bpp4 => 0x0F,
            Self::Bpp8 => 0xFF,
            Self::Bpp24 => 0xFF_FFFF,
        }
    }

    /// Number of palette entries (`2^bits` for indexed depths, 0 for true color).
    pub fn palette_len(self) -> usize {
        match self {
            Self::Bpp24 => 0,
            d => 1 << d.bits(),
        }
    }

    /// Whether pixel values are palette indices.
    pub fn is_indexed(self) -> bool {
        self != Self::Bpp24
    }
}

impl TryFrom<u16> for BitDepth {
    type Error = crate::BitmapError;

    fn try_from(bits: u16) -> Result<Self, Self::Error> {
        Self::from_bits(bits).ok_or(crate::BitmapError::UnsupportedDepth(bits))
    }
}

/// 24-bit `0xRRGGBB` color helpers.
pub mod color {
    /// Masks a value down to 24 bits.
    #[inline]
    pub fn rgb(value: u32) -> u32 {
        value & 0xFF_FFFF
    }

    #[cfg(feature = "rgb")]
    pub fn to_rgb8(color: u32) -> rgb::RGB8 {
        rgb::RGB8::new((color >> 16) as u8, (color >> 8) as u8, color as u8)
    }

    #[cfg(feature = "rgb")]
    pub fn from_rgb8(px: rgb::RGB8) -> u32 {
        (u32::from(px.r) << 16) | (u32::from(px.g) << 8) | u32::from(px.b)
    }
}
