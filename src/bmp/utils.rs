//! Little-endian integer <-> byte helpers used by every on-disk field.

/// Reads an unsigned little-endian integer from up to 4 bytes.
#[inline]
pub(crate) fn read_le(bytes: &[u8]) -> u32 {
    debug_assert!(bytes.len() <= 4);
    bytes
        .iter()
        .rev()
        .fold(0u32, |acc, &b| (acc << 8) | u32::from(b))
}

/// Writes the low `out.len()` bytes of `value` in little-endian order.
#[inline]
pub(crate) fn write_le(value: u32, out: &mut [u8]) {
    debug_assert!(out.len() <= 4);
    let bytes = value.to_le_bytes();
    out.copy_from_slice(&bytes[..out.len()]);
}
