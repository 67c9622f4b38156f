//! On-disk BMP layout: header, palette and pixel buffer codecs.

mod buffer;
pub(crate) mod decode;
mod encode;
mod header;
mod palette;
mod utils;

pub use buffer::PixelBuffer;
pub use header::BitmapHeader;
pub use palette::{PALETTE_1BPP, PALETTE_4BPP, PALETTE_8BPP, Palette};

pub(crate) use encode::encode_bmp;

/// `"BM"` read as a little-endian u16.
pub const FILE_TYPE: u16 = 0x4D42;

/// File header (14) + BITMAPINFOHEADER (40).
pub const HEADER_LEN: usize = 54;

/// Size of the BITMAPINFOHEADER, the only info header supported.
pub const INFO_HEADER_SIZE: u32 = 40;

/// The palette always follows the header directly.
pub const PALETTE_OFFSET: usize = HEADER_LEN;
