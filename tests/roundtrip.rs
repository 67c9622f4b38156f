use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::ops::Range;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use bmpfile::*;

fn temp_path(name: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = std::env::temp_dir().join(format!("bmpfile_rt_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(format!("{n}_{name}"))
}

fn contexts(bmp: &Bitmap) -> Vec<ErrorContext> {
    bmp.errors().iter().map(|e| e.context()).collect()
}

fn paint(bmp: &mut Bitmap) {
    let mask = bmp.depth().mask();
    for y in 0..bmp.height() as i32 {
        for x in 0..bmp.width() as i32 {
            let v = (x as u32 * 7 + y as u32 * 13 + 0x1234_5601) & mask;
            bmp.set_pixel(x, y, v);
        }
    }
}

#[test]
fn file_roundtrip_all_depths() {
    for bits in [1u16, 4, 8, 24] {
        for (w, h) in [(1, 1), (3, 2), (8, 1), (13, 7), (33, 4)] {
            let mut bmp = Bitmap::new();
            assert!(bmp.create(w, h, bits), "{}", bmp.errors());
            paint(&mut bmp);
            if bits <= 8 {
                bmp.set_palette_color(1, 0x123456);
            }

            let path = temp_path(&format!("rt_{bits}_{w}x{h}.bmp"));
            assert!(bmp.save_as(&path, true), "{}", bmp.errors());

            let mut back = Bitmap::new();
            assert!(back.open(&path), "{}", back.errors());
            assert_eq!(back.state(), State::Ready);
            assert_eq!(back.header(), bmp.header());
            assert_eq!(back.palette(), bmp.palette());
            assert_eq!(back.pixels(), bmp.pixels());
            assert_eq!(back.file_len(), Some(bmp.geometry().file_size as u64));
            assert!(back.errors().is_empty());
        }
    }
}

#[test]
fn in_memory_roundtrip() {
    let mut bmp = Bitmap::new();
    assert!(bmp.create(10, 3, 4));
    paint(&mut bmp);
    let bytes = bmp.to_bytes();
    assert_eq!(bytes.len(), bmp.geometry().file_size);

    let mut back = Bitmap::new();
    assert!(back.read_from(Cursor::new(&bytes)));
    assert_eq!(back.to_bytes(), bytes);
    assert_eq!(back.path(), std::path::Path::new(""));
}

#[test]
fn eight_pixel_monochrome_scenario() {
    let mut bmp = Bitmap::new();
    assert!(bmp.create(8, 1, 1));
    let g = bmp.geometry();
    assert_eq!(g.bytes_per_line_used, 1);
    assert_eq!(g.bytes_per_line, 4);
    assert_eq!(g.palette_color_count, 2);
    assert_eq!(g.palette_size, 8);
    assert_eq!(g.bitmap_offset, 62);
    assert_eq!(g.file_size, 66);

    bmp.set_pixel(0, 0, 1);
    assert_eq!(bmp.pixel(0, 0, false), Some(1));
    assert_eq!(bmp.pixel(0, 0, true), Some(0xFFFFFF));
    bmp.set_pixel(0, 0, 0);
    assert_eq!(bmp.pixel(0, 0, true), Some(0x000000));

    let bytes = bmp.to_bytes();
    assert_eq!(&bytes[54..62], &[0, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0]);
    assert_eq!(&bytes[62..66], &[0x7F, 0, 0, 0]);
}

#[test]
fn default_document() {
    let bmp = Bitmap::new();
    assert_eq!(bmp.state(), State::Uninitialized);
    assert_eq!(bmp.pixel(0, 0, true), Some(0xFFFFFF));
    assert_eq!(bmp.pixel(1, 0, true), None);
    assert_eq!(bmp.palette_color(0), None);
    assert_eq!(bmp.to_bytes().len(), 58);
}

#[test]
fn create_rejects_bad_dimensions() {
    let mut bmp = Bitmap::new();
    assert!(!bmp.create(4097, 10, 24));
    assert_eq!(bmp.state(), State::Invalid);
    assert_eq!(contexts(&bmp), [ErrorContext::CheckHeader]);
    assert!(matches!(
        bmp.errors().as_slice()[0].error(),
        BitmapError::WidthTooLarge { width: 4097, max: 4096 }
    ));
    assert_eq!(bmp.pixel(0, 0, false), None);

    assert!(!bmp.create(10, 10, 7));
    assert_eq!(bmp.errors().len(), 1);
    assert!(matches!(
        bmp.errors().as_slice()[0].error(),
        BitmapError::UnsupportedDepth(7)
    ));
    assert_eq!(bmp.errors().as_slice()[0].error().kind(), ErrorKind::Validation);

    assert!(!bmp.create(0, 0, 32));
    assert_eq!(bmp.errors().len(), 3);

    // a success clears the log
    assert!(bmp.create(2, 2, 8));
    assert!(bmp.errors().is_empty());
    assert_eq!(bmp.state(), State::Ready);
}

#[test]
fn overwrite_protection() {
    let path = temp_path("existing.bmp");
    std::fs::write(&path, b"not a bitmap but precious").unwrap();

    let mut bmp = Bitmap::new();
    assert!(bmp.create(4, 4, 24));
    assert!(!bmp.save_as(&path, false));
    assert_eq!(contexts(&bmp), [ErrorContext::IsSavable]);
    assert!(matches!(
        bmp.errors().as_slice()[0].error(),
        BitmapError::OverwriteDisallowed
    ));
    assert_eq!(std::fs::read(&path).unwrap(), b"not a bitmap but precious");

    // state survives a failed save, and the log is cleared by the next one
    assert!(bmp.save_as(&path, true));
    assert!(bmp.errors().is_empty());
    assert_eq!(std::fs::read(&path).unwrap(), bmp.to_bytes());
}

#[test]
fn save_destination_checks() {
    let mut bmp = Bitmap::new();
    assert!(bmp.create(2, 2, 1));

    let dir = temp_path("a_directory");
    std::fs::create_dir_all(&dir).unwrap();
    assert!(!bmp.save_as(&dir, true));
    assert!(matches!(
        bmp.errors().as_slice()[0].error(),
        BitmapError::DestinationIsDirectory
    ));

    let orphan = temp_path("missing_parent").join("child.bmp");
    assert!(!bmp.save_as(&orphan, true));
    assert_eq!(contexts(&bmp), [ErrorContext::IsSavable]);
    assert!(matches!(
        bmp.errors().as_slice()[0].error(),
        BitmapError::ParentMissing
    ));
    assert_eq!(bmp.file_stem().as_deref(), Some("child"));
}

#[test]
fn invalid_document_cannot_be_saved() {
    let mut bmp = Bitmap::new();
    assert!(!bmp.create(0, 1, 24));
    assert!(!bmp.save_as(temp_path("never.bmp"), true));
    assert!(matches!(
        bmp.errors().as_slice()[0].error(),
        BitmapError::NotReady
    ));
}

#[test]
fn open_missing_and_tiny_files() {
    let mut bmp = Bitmap::new();
    assert!(!bmp.open(temp_path("does_not_exist.bmp")));
    assert_eq!(contexts(&bmp), [ErrorContext::IsOpenable]);
    assert!(matches!(
        bmp.errors().as_slice()[0].error(),
        BitmapError::FileNotFound
    ));
    assert_eq!(bmp.file_len(), None);
    assert_eq!(bmp.errors().as_slice()[1].context(), ErrorContext::FileLength);

    let tiny = temp_path("tiny.bmp");
    std::fs::write(&tiny, [0u8; 57]).unwrap();
    assert!(!bmp.open(&tiny));
    assert_eq!(bmp.errors().len(), 1);
    assert!(matches!(
        bmp.errors().as_slice()[0].error(),
        BitmapError::FileTooSmall { len: 57, min: 58 }
    ));
    assert_eq!(bmp.errors().as_slice()[0].error().kind(), ErrorKind::Bounds);
}

#[test]
fn open_rejects_header_violations() {
    let mut bmp = Bitmap::new();
    assert!(bmp.create(4, 4, 8));
    let mut bytes = bmp.to_bytes();
    bytes[0] = b'X'; // file type
    bytes[30] = 1; // compression
    let path = temp_path("bad_header.bmp");
    std::fs::write(&path, &bytes).unwrap();

    let mut back = Bitmap::new();
    assert!(!back.open(&path));
    assert_eq!(contexts(&back), [ErrorContext::CheckHeader, ErrorContext::CheckHeader]);
    // decoded fields stay inspectable
    assert_eq!(back.header().compression, 1);
    assert_eq!(back.pixel(0, 0, false), None);
}

#[test]
fn open_rejects_truncated_file() {
    let mut bmp = Bitmap::new();
    assert!(bmp.create(16, 16, 24));
    let bytes = bmp.to_bytes();
    let path = temp_path("truncated.bmp");
    std::fs::write(&path, &bytes[..bytes.len() - 1]).unwrap();

    let mut back = Bitmap::new();
    assert!(!back.open(&path));
    assert_eq!(contexts(&back), [ErrorContext::CheckSize]);
    assert!(matches!(
        back.errors().as_slice()[0].error(),
        BitmapError::UnexpectedFileSize { .. }
    ));
}

#[test]
fn open_accepts_trailing_bytes() {
    let mut bmp = Bitmap::new();
    assert!(bmp.create(5, 5, 4));
    paint(&mut bmp);
    let mut bytes = bmp.to_bytes();
    bytes.extend_from_slice(&[0xEE; 32]);
    let path = temp_path("trailing.bmp");
    std::fs::write(&path, &bytes).unwrap();

    let mut back = Bitmap::new();
    assert!(back.open(&path));
    assert_eq!(back.pixels(), bmp.pixels());
    assert_eq!(back.header().file_size as usize, bytes.len() - 32);
}

#[test]
fn preserved_header_fields() {
    let mut bmp = Bitmap::new();
    assert!(bmp.create(3, 3, 24));
    let mut bytes = bmp.to_bytes();
    bytes[6..10].copy_from_slice(&0xCAFE_F00Du32.to_le_bytes());
    bytes[38..42].copy_from_slice(&2835u32.to_le_bytes());
    bytes[46..50].copy_from_slice(&5u32.to_le_bytes());
    // a stale file size is recomputed on load
    bytes[2..6].copy_from_slice(&0u32.to_le_bytes());

    let mut back = Bitmap::new();
    assert!(back.read_from(Cursor::new(bytes)));
    let h = back.header();
    assert_eq!(h.reserved, 0xCAFE_F00D);
    assert_eq!(h.h_resolution, 2835);
    assert_eq!(h.colors_used, 5);
    assert_eq!(h.file_size, 54 + 12 * 3);
}

#[test]
fn custom_limits_shrink_envelope() {
    let mut bmp = Bitmap::with_limits(Limits::new(16, 16));
    assert!(!bmp.create(17, 1, 8));
    assert!(bmp.create(16, 16, 8));

    let mut big = Bitmap::new();
    assert!(big.create(64, 64, 24));
    let mut small = Bitmap::with_limits(Limits::new(16, 16));
    assert!(!small.read_from(Cursor::new(big.to_bytes())));
    assert!(matches!(
        small.errors().as_slice()[0].error(),
        BitmapError::FileTooBig { .. }
    ));
    assert_eq!(small.limits(), Limits::new(16, 16));

    // an 8 bpp file at the limit carries a palette and is larger than 24 bpp
    let mut reopened = Bitmap::with_limits(Limits::new(16, 16));
    assert!(
        reopened.read_from(Cursor::new(bmp.to_bytes())),
        "{}",
        reopened.errors()
    );
    assert_eq!(reopened.to_bytes().len(), 1334);
    assert_eq!(reopened.pixels(), bmp.pixels());
}

// ── I/O failures ─────────────────────────────────────────────────────

/// Serves `data` but fails any read that starts inside `bad`.
struct FailingReader {
    inner: Cursor<Vec<u8>>,
    bad: Range<u64>,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.bad.contains(&self.inner.position()) {
            return Err(io::Error::other("device error"));
        }
        self.inner.read(buf)
    }
}

impl Seek for FailingReader {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        self.inner.seek(pos)
    }
}

#[test]
fn read_failures_name_the_section() {
    let mut bmp = Bitmap::new();
    assert!(bmp.create(4, 2, 8));
    let g = *bmp.geometry();
    let offset = g.bitmap_offset as u64;

    let cases = [
        (0..1, ErrorContext::LoadHeader),
        (offset..offset + 1, ErrorContext::LoadBitmap),
        (54..55, ErrorContext::LoadPalette),
    ];
    for (bad, context) in cases {
        let reader = FailingReader {
            inner: Cursor::new(bmp.to_bytes()),
            bad,
        };
        let mut back = Bitmap::new();
        assert!(!back.read_from(reader));
        assert_eq!(back.state(), State::Invalid);
        assert_eq!(contexts(&back), [context]);
        assert_eq!(back.errors().as_slice()[0].error().kind(), ErrorKind::Io);
        assert_eq!(back.pixel(0, 0, false), None);
    }
}

#[test]
fn write_failure_is_save_all() {
    let mut bmp = Bitmap::new();
    assert!(bmp.create(2, 2, 24));
    // the parent exists, but no filesystem accepts a component this long
    let path = temp_path("x").with_file_name(format!("{}.bmp", "x".repeat(300)));
    assert!(!bmp.save_as(&path, false));
    assert_eq!(contexts(&bmp), [ErrorContext::SaveAll]);
    assert!(matches!(
        bmp.errors().as_slice()[0].error(),
        BitmapError::Io(_)
    ));
    assert_eq!(bmp.state(), State::Ready);
}

#[test]
fn info_snapshot() {
    let mut bmp = Bitmap::new();
    assert!(bmp.create(9, 2, 4));
    let info = bmp.info();
    assert_eq!(info.header.width, 9);
    assert_eq!(info.geometry.bytes_per_line_used, 5);
    assert_eq!(info.geometry.bytes_per_line_padding, 3);
    assert_eq!(info.palette_len, 16);
    assert_eq!(info.bitmap_len, 16);
}

#[cfg(feature = "imgref")]
#[test]
fn imgvec_is_top_down() {
    let mut bmp = Bitmap::new();
    assert!(bmp.create(2, 2, 24));
    bmp.set_pixel(1, 0, 0xFF0000);
    let img = bmp.to_imgvec().unwrap();
    assert_eq!(img.width(), 2);
    assert_eq!(img.buf()[1], rgb::RGB8::new(0xFF, 0, 0));
    assert_eq!(img.buf()[3], rgb::RGB8::new(0xFF, 0xFF, 0xFF));
}
