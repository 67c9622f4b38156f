//! The bitmap document: create, open, edit and save.

use std::fs::{self, File};
use std::io::{Read, Seek};
use std::path::{Path, PathBuf};

use crate::bmp::{self, BitmapHeader, Palette, PixelBuffer, decode};
use crate::error::{BitmapError, ErrorContext, ErrorLog};
use crate::geometry::Geometry;
use crate::info::BitmapInfo;
use crate::limits::{Limits, MIN_FILE_LEN};
use crate::pixel::BitDepth;

/// Lifecycle state of a [`Bitmap`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum State {
    /// Freshly constructed 1x1 white 24 bpp image.
    Uninitialized,
    /// Last `create`/`open` succeeded.
    Ready,
    /// Last `create`/`open` failed; pixel and palette access is disabled.
    Invalid,
}

/// An uncompressed BMP image held in memory.
///
/// Lifecycle operations ([`create`](Self::create), [`open`](Self::open),
/// [`save_as`](Self::save_as)) return `bool` and record the reasons for a
/// failure in [`errors`](Self::errors). Pixel accessors never record
/// errors: out-of-range access yields `None` or does nothing.
///
/// ```
/// use bmpfile::Bitmap;
///
/// let mut bmp = Bitmap::new();
/// assert!(bmp.create(8, 1, 1));
/// bmp.set_pixel(0, 0, 0);
/// assert_eq!(bmp.pixel(0, 0, false), Some(0));
/// assert_eq!(bmp.pixel(1, 0, true), Some(0xFFFFFF));
/// assert_eq!(bmp.pixel(8, 0, false), None);
/// ```
#[derive(Debug)]
pub struct Bitmap {
    header: BitmapHeader,
    geometry: Geometry,
    palette: Palette,
    pixels: PixelBuffer,
    path: PathBuf,
    errors: ErrorLog,
    state: State,
    limits: Limits,
}

impl Default for Bitmap {
    fn default() -> Self {
        Self::with_limits(Limits::default())
    }
}

impl Bitmap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: Limits) -> Self {
        let geometry = Geometry::default();
        Self {
            header: BitmapHeader::default(),
            palette: Palette::standard(geometry.depth),
            pixels: PixelBuffer::white(&geometry),
            geometry,
            path: PathBuf::new(),
            errors: ErrorLog::new(),
            state: State::Uninitialized,
            limits,
        }
    }

    fn reset(&mut self) {
        *self = Self::with_limits(self.limits);
    }

    // ── Lifecycle ───────────────────────────────────────────────────

    /// Starts a new white image of the given size and depth.
    #[must_use]
    pub fn create(&mut self, width: u32, height: u32, bits_per_pixel: u16) -> bool {
        self.reset();
        self.header.width = width;
        self.header.height = height;
        self.header.bits_per_pixel = bits_per_pixel;

        let Some(depth) = self.check_header() else {
            return self.finish(false);
        };
        self.apply_layout(depth);
        self.palette = Palette::standard(depth);
        self.pixels = PixelBuffer::white(&self.geometry);
        self.finish(true)
    }

    /// Loads a BMP file, replacing the current image.
    #[must_use]
    pub fn open(&mut self, path: impl AsRef<Path>) -> bool {
        self.reset();
        self.path = absolute(path.as_ref());
        let ok = self.open_file();
        self.finish(ok)
    }

    /// Loads a BMP image from any seekable source, replacing the current image.
    ///
    /// Runs the same checks as [`open`](Self::open), using the stream length
    /// in place of the file length. The recorded path is cleared.
    #[must_use]
    pub fn read_from<R: Read + Seek>(&mut self, mut input: R) -> bool {
        self.reset();
        let ok = match decode::stream_len(&mut input) {
            Ok(len) => match self.check_openable_len(len) {
                Ok(()) => self.load(&mut input),
                Err(e) => self.record(ErrorContext::IsOpenable, e),
            },
            Err(e) => self.record(ErrorContext::IsOpenable, e),
        };
        self.finish(ok)
    }

    /// Writes the image to `path`. Header, palette and pixels are untouched;
    /// only the error log is cleared first.
    #[must_use]
    pub fn save_as(&mut self, path: impl AsRef<Path>, allow_overwrite: bool) -> bool {
        self.errors.clear();
        self.path = absolute(path.as_ref());

        if self.state == State::Invalid {
            return self.record(ErrorContext::IsSavable, BitmapError::NotReady);
        }
        if let Err(e) = self.check_savable(allow_overwrite) {
            return self.record(ErrorContext::IsSavable, e);
        }
        match fs::write(&self.path, self.to_bytes()) {
            Ok(()) => {
                log::debug!("saved {} ({} bytes)", self.path.display(), self.geometry.file_size);
                true
            }
            Err(e) => self.record(ErrorContext::SaveAll, e.into()),
        }
    }

    /// The complete file content `save_as` would write.
    pub fn to_bytes(&self) -> Vec<u8> {
        bmp::encode_bmp(&self.header, &self.palette, &self.pixels)
    }

    /// Size of the file at the recorded path, or `None` (with a logged
    /// error) if it cannot be queried.
    pub fn file_len(&mut self) -> Option<u64> {
        match fs::metadata(&self.path) {
            Ok(meta) => Some(meta.len()),
            Err(e) => {
                self.record(ErrorContext::FileLength, e.into());
                None
            }
        }
    }

    // ── Pixels and palette ──────────────────────────────────────────

    /// Value of pixel `(x, y)`, or `None` outside the image.
    ///
    /// Indexed depths yield the palette index, or its color when
    /// `true_color` is set. 24 bpp always yields `0xRRGGBB`.
    pub fn pixel(&self, x: i32, y: i32, true_color: bool) -> Option<u32> {
        if self.state == State::Invalid {
            return None;
        }
        let value = self.pixels.get(&self.geometry, x, y)?;
        if true_color && self.geometry.depth.is_indexed() {
            self.palette.get(value as usize)
        } else {
            Some(value)
        }
    }

    /// Sets pixel `(x, y)` to a palette index (indexed depths) or a
    /// `0xRRGGBB` color (24 bpp). Does nothing outside the image.
    pub fn set_pixel(&mut self, x: i32, y: i32, value: u32) {
        if self.state == State::Invalid {
            return;
        }
        self.pixels.set(&self.geometry, x, y, value);
    }

    pub fn palette_color(&self, index: usize) -> Option<u32> {
        if self.state == State::Invalid {
            return None;
        }
        self.palette.get(index)
    }

    pub fn set_palette_color(&mut self, index: usize, color: u32) {
        if self.state == State::Invalid {
            return;
        }
        self.palette.set(index, color);
    }

    // ── Accessors ───────────────────────────────────────────────────

    pub fn errors(&self) -> &ErrorLog {
        &self.errors
    }

    pub fn clear_errors(&mut self) {
        self.errors.clear();
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn header(&self) -> &BitmapHeader {
        &self.header
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// Absolute path of the last open/save, empty if none.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name of the recorded path without its extension.
    pub fn file_stem(&self) -> Option<String> {
        self.path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
    }

    pub fn width(&self) -> u32 {
        self.geometry.width
    }

    pub fn height(&self) -> u32 {
        self.geometry.height
    }

    pub fn depth(&self) -> BitDepth {
        self.geometry.depth
    }

    pub fn info(&self) -> BitmapInfo {
        BitmapInfo {
            header: self.header,
            geometry: self.geometry,
            palette_len: self.palette.len(),
            bitmap_len: self.pixels.len(),
        }
    }

    /// Every pixel resolved to true color, top row first.
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> Option<imgref::ImgVec<rgb::RGB8>> {
        if self.state == State::Invalid {
            return None;
        }
        let g = &self.geometry;
        let mut out = Vec::with_capacity(g.width as usize * g.height as usize);
        for y in g.y_min..=g.y_max {
            for x in g.x_min..=g.x_max {
                out.push(crate::pixel::color::to_rgb8(self.pixel(x, y, true)?));
            }
        }
        Some(imgref::ImgVec::new(out, g.width as usize, g.height as usize))
    }

    // ── Internals ───────────────────────────────────────────────────

    fn record(&mut self, context: ErrorContext, error: BitmapError) -> bool {
        self.errors.push(context, error);
        false
    }

    fn finish(&mut self, ok: bool) -> bool {
        if ok {
            log::debug!(
                "bitmap ready: {}x{} @ {} bpp",
                self.geometry.width,
                self.geometry.height,
                self.geometry.depth.bits()
            );
            self.state = State::Ready;
        } else {
            self.state = State::Invalid;
        }
        ok
    }

    /// Validates the header, logging every violation.
    fn check_header(&mut self) -> Option<BitDepth> {
        let errors = self.header.validate_with(&self.limits);
        if errors.is_empty() {
            self.header.depth()
        } else {
            self.errors.extend(ErrorContext::CheckHeader, errors);
            None
        }
    }

    fn apply_layout(&mut self, depth: BitDepth) {
        self.geometry = Geometry::new(self.header.width, self.header.height, depth);
        self.header.apply_geometry(&self.geometry);
    }

    fn check_openable_len(&self, len: u64) -> Result<(), BitmapError> {
        let max = self.limits.max_file_len();
        if len < MIN_FILE_LEN {
            Err(BitmapError::FileTooSmall {
                len,
                min: MIN_FILE_LEN,
            })
        } else if len > max {
            Err(BitmapError::FileTooBig { len, max })
        } else {
            Ok(())
        }
    }

    fn open_file(&mut self) -> bool {
        if !self.path.is_file() {
            return self.record(ErrorContext::IsOpenable, BitmapError::FileNotFound);
        }
        let len = match fs::metadata(&self.path) {
            Ok(meta) => meta.len(),
            Err(e) => return self.record(ErrorContext::IsOpenable, e.into()),
        };
        if let Err(e) = self.check_openable_len(len) {
            return self.record(ErrorContext::IsOpenable, e);
        }
        match File::open(&self.path) {
            Ok(mut file) => self.load(&mut file),
            Err(e) => self.record(ErrorContext::LoadHeader, e.into()),
        }
    }

    /// Header, size check, pixels, then palette.
    fn load<R: Read + Seek>(&mut self, input: &mut R) -> bool {
        match decode::read_header(input) {
            Ok(header) => self.header = header,
            Err(e) => return self.record(ErrorContext::LoadHeader, e),
        }
        let Some(depth) = self.check_header() else {
            return false;
        };
        self.apply_layout(depth);

        let expected = self.geometry.file_size as u64;
        match decode::stream_len(input) {
            Ok(actual) if actual >= expected => {}
            Ok(actual) => {
                return self.record(
                    ErrorContext::CheckSize,
                    BitmapError::UnexpectedFileSize { expected, actual },
                );
            }
            Err(e) => return self.record(ErrorContext::CheckSize, e),
        }

        let g = self.geometry;
        match decode::read_pixels(input, g.bitmap_offset, g.bitmap_size) {
            Ok(pixels) => self.pixels = pixels,
            Err(e) => return self.record(ErrorContext::LoadBitmap, e),
        }
        if g.palette_color_count > 0 {
            match decode::read_palette(input, g.palette_offset, g.palette_size) {
                Ok(palette) => self.palette = palette,
                Err(e) => return self.record(ErrorContext::LoadPalette, e),
            }
        }
        true
    }

    fn check_savable(&self, allow_overwrite: bool) -> Result<(), BitmapError> {
        let path = &self.path;
        if path.is_file() {
            if allow_overwrite {
                Ok(())
            } else {
                Err(BitmapError::OverwriteDisallowed)
            }
        } else if path.is_dir() {
            Err(BitmapError::DestinationIsDirectory)
        } else {
            match path.parent() {
                Some(parent) if parent.is_dir() => Ok(()),
                _ => Err(BitmapError::ParentMissing),
            }
        }
    }
}

fn absolute(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}
