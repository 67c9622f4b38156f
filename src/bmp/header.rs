//! The 54-byte file + info header (BITMAPFILEHEADER + BITMAPINFOHEADER).

use super::utils::{read_le, write_le};
use super::{FILE_TYPE, HEADER_LEN, INFO_HEADER_SIZE};
use crate::error::BitmapError;
use crate::geometry::Geometry;
use crate::limits::Limits;
use crate::pixel::BitDepth;

/// `(offset, width)` of each header field, in declaration order.
const FIELDS: [(usize, usize); 15] = [
    (0, 2),  // file_type
    (2, 4),  // file_size
    (6, 4),  // reserved
    (10, 4), // bitmap_offset
    (14, 4), // header_size
    (18, 4), // width
    (22, 4), // height
    (26, 2), // plane_count
    (28, 2), // bits_per_pixel
    (30, 4), // compression
    (34, 4), // bitmap_size
    (38, 4), // h_resolution
    (42, 4), // v_resolution
    (46, 4), // colors_used
    (50, 4), // colors_important
];

/// Header fields exactly as stored on disk.
///
/// `file_size`, `bitmap_offset` and `bitmap_size` are recomputed by
/// [`BitmapHeader::apply_geometry`]; `reserved`, the resolutions and the
/// color counts are carried through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitmapHeader {
    pub file_type: u16,
    pub file_size: u32,
    pub reserved: u32,
    pub bitmap_offset: u32,
    pub header_size: u32,
    pub width: u32,
    pub height: u32,
    pub plane_count: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub bitmap_size: u32,
    pub h_resolution: u32,
    pub v_resolution: u32,
    pub colors_used: u32,
    pub colors_important: u32,
}

impl Default for BitmapHeader {
    /// 1x1 white pixel at 24 bpp.
    fn default() -> Self {
        let mut header = Self {
            file_type: FILE_TYPE,
            file_size: 0,
            reserved: 0,
            bitmap_offset: 0,
            header_size: INFO_HEADER_SIZE,
            width: 1,
            height: 1,
            plane_count: 1,
            bits_per_pixel: 24,
            compression: 0,
            bitmap_size: 0,
            h_resolution: 0,
            v_resolution: 0,
            colors_used: 0,
            colors_important: 0,
        };
        header.apply_geometry(&Geometry::default());
        header
    }
}

impl BitmapHeader {
    /// Decodes the fixed-offset fields. Never fails; see [`Self::validate`].
    pub fn decode(bytes: &[u8; HEADER_LEN]) -> Self {
        let f = |i: usize| {
            let (off, len) = FIELDS[i];
            read_le(&bytes[off..off + len])
        };
        Self {
            file_type: f(0) as u16,
            file_size: f(1),
            reserved: f(2),
            bitmap_offset: f(3),
            header_size: f(4),
            width: f(5),
            height: f(6),
            plane_count: f(7) as u16,
            bits_per_pixel: f(8) as u16,
            compression: f(9),
            bitmap_size: f(10),
            h_resolution: f(11),
            v_resolution: f(12),
            colors_used: f(13),
            colors_important: f(14),
        }
    }

    pub fn encode(&self) -> [u8; HEADER_LEN] {
        let values = [
            u32::from(self.file_type),
            self.file_size,
            self.reserved,
            self.bitmap_offset,
            self.header_size,
            self.width,
            self.height,
            u32::from(self.plane_count),
            u32::from(self.bits_per_pixel),
            self.compression,
            self.bitmap_size,
            self.h_resolution,
            self.v_resolution,
            self.colors_used,
            self.colors_important,
        ];
        let mut out = [0u8; HEADER_LEN];
        for ((off, len), value) in FIELDS.into_iter().zip(values) {
            write_le(value, &mut out[off..off + len]);
        }
        out
    }

    /// Checks every structural constraint under the default [`Limits`].
    pub fn validate(&self) -> Vec<BitmapError> {
        self.validate_with(&Limits::default())
    }

    /// Checks every structural constraint, reporting all violations found.
    pub fn validate_with(&self, limits: &Limits) -> Vec<BitmapError> {
        let mut errors = Vec::new();

        // Mandatory constants
        if self.file_type != FILE_TYPE {
            errors.push(BitmapError::InvalidFileType(self.file_type));
        }
        if self.header_size != INFO_HEADER_SIZE {
            errors.push(BitmapError::UnusualHeaderSize(self.header_size));
        }
        if self.plane_count != 1 {
            errors.push(BitmapError::UnsupportedPlaneCount(self.plane_count));
        }
        if self.compression != 0 {
            errors.push(BitmapError::UnsupportedCompression(self.compression));
        }

        // Restrictions
        if self.width > limits.max_width() {
            errors.push(BitmapError::WidthTooLarge {
                width: self.width,
                max: limits.max_width(),
            });
        }
        if self.width < 1 {
            errors.push(BitmapError::WidthTooSmall(self.width));
        }
        if self.height > limits.max_height() {
            errors.push(BitmapError::HeightTooLarge {
                height: self.height,
                max: limits.max_height(),
            });
        }
        if self.height < 1 {
            errors.push(BitmapError::HeightTooSmall(self.height));
        }
        if BitDepth::from_bits(self.bits_per_pixel).is_none() {
            errors.push(BitmapError::UnsupportedDepth(self.bits_per_pixel));
        }

        errors
    }

    /// Depth of a validated header.
    pub fn depth(&self) -> Option<BitDepth> {
        BitDepth::from_bits(self.bits_per_pixel)
    }

    /// Overwrites the computed size/offset fields.
    pub(crate) fn apply_geometry(&mut self, g: &Geometry) {
        self.file_size = g.file_size as u32;
        self.bitmap_offset = g.bitmap_offset as u32;
        self.bitmap_size = g.bitmap_size as u32;
    }
}
