//! Section readers over a seekable byte source.
//!
//! Each reader seeks to its own offset, so sections may be loaded in any
//! order from one handle.

use std::io::{Read, Seek, SeekFrom};

use super::HEADER_LEN;
use super::buffer::PixelBuffer;
use super::header::BitmapHeader;
use super::palette::Palette;
use crate::error::BitmapError;

fn read_at<R: Read + Seek>(
    input: &mut R,
    offset: usize,
    len: usize,
) -> Result<Vec<u8>, BitmapError> {
    log::trace!("reading {len} bytes at offset {offset}");
    input.seek(SeekFrom::Start(offset as u64))?;
    let mut buf = vec![0u8; len];
    input.read_exact(&mut buf)?;
    Ok(buf)
}

pub(crate) fn read_header<R: Read + Seek>(input: &mut R) -> Result<BitmapHeader, BitmapError> {
    input.seek(SeekFrom::Start(0))?;
    let mut buf = [0u8; HEADER_LEN];
    input.read_exact(&mut buf)?;
    Ok(BitmapHeader::decode(&buf))
}

pub(crate) fn read_pixels<R: Read + Seek>(
    input: &mut R,
    offset: usize,
    len: usize,
) -> Result<PixelBuffer, BitmapError> {
    Ok(PixelBuffer::from_vec(read_at(input, offset, len)?))
}

pub(crate) fn read_palette<R: Read + Seek>(
    input: &mut R,
    offset: usize,
    len: usize,
) -> Result<Palette, BitmapError> {
    Ok(Palette::decode(&read_at(input, offset, len)?))
}

/// Total length of the source, restoring the current position.
pub(crate) fn stream_len<R: Seek>(input: &mut R) -> Result<u64, BitmapError> {
    let pos = input.stream_position()?;
    let len = input.seek(SeekFrom::End(0))?;
    input.seek(SeekFrom::Start(pos))?;
    Ok(len)
}
