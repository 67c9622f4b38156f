use crate::bmp::BitmapHeader;
use crate::geometry::Geometry;

/// Read-only snapshot of a document's header and layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitmapInfo {
    /// Header fields as they would be written.
    pub header: BitmapHeader,
    /// Derived sizes, offsets and pixel bounds.
    pub geometry: Geometry,
    /// Entries actually held in the palette.
    pub palette_len: usize,
    /// Bytes actually held in the pixel buffer.
    pub bitmap_len: usize,
}
