//! Whole-file encoder: header, palette, then raw scanlines.

use super::buffer::PixelBuffer;
use super::header::BitmapHeader;
use super::palette::Palette;

pub(crate) fn encode_bmp(
    header: &BitmapHeader,
    palette: &Palette,
    pixels: &PixelBuffer,
) -> Vec<u8> {
    let header_bytes = header.encode();
    let palette_bytes = palette.encode();
    let mut out = Vec::with_capacity(header_bytes.len() + palette_bytes.len() + pixels.len());
    out.extend_from_slice(&header_bytes);
    out.extend_from_slice(&palette_bytes);
    out.extend_from_slice(pixels.as_bytes());
    out
}
