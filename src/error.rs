use core::fmt;

/// Errors recorded while creating, loading or saving a bitmap.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BitmapError {
    #[error("Invalid file type (0x{0:04X})")]
    InvalidFileType(u16),

    #[error("Unusual header size ({0})")]
    UnusualHeaderSize(u32),

    #[error("Unsupported plane count ({0})")]
    UnsupportedPlaneCount(u16),

    #[error("Unsupported compressed file (compression {0})")]
    UnsupportedCompression(u32),

    #[error("Bitmap width must be equal or less than {max} ({width})")]
    WidthTooLarge { width: u32, max: u32 },

    #[error("Bitmap width must be equal or greater than 1 ({0})")]
    WidthTooSmall(u32),

    #[error("Bitmap height must be equal or less than {max} ({height})")]
    HeightTooLarge { height: u32, max: u32 },

    #[error("Bitmap height must be equal or greater than 1 ({0})")]
    HeightTooSmall(u32),

    #[error("Color depth must be 1, 4, 8, or 24 bpp ({0})")]
    UnsupportedDepth(u16),

    #[error("File doesn't exist")]
    FileNotFound,

    #[error("File too small, less than {min} bytes ({len})")]
    FileTooSmall { len: u64, min: u64 },

    #[error("File too big, more than {max} bytes ({len})")]
    FileTooBig { len: u64, max: u64 },

    #[error("Unexpected file size: need {expected} bytes, got {actual}")]
    UnexpectedFileSize { expected: u64, actual: u64 },

    #[error("Unable to overwrite file with overwrite disallowed")]
    OverwriteDisallowed,

    #[error("A folder with this name already exists")]
    DestinationIsDirectory,

    #[error("Parent folder doesn't exist")]
    ParentMissing,

    /// Lifecycle guard: the last `create`/`open` failed, so there is no
    /// image to write. Not a property of the destination.
    #[error("Document is not ready (last create/open failed)")]
    NotReady,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Broad classification of a [`BitmapError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A header field violates an invariant.
    Validation,
    /// File length outside the openable or expected-size envelope.
    Bounds,
    /// Destination cannot be written.
    Savability,
    /// Underlying read/write/stat failure.
    Io,
}

impl BitmapError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFileType(_)
            | Self::UnusualHeaderSize(_)
            | Self::UnsupportedPlaneCount(_)
            | Self::UnsupportedCompression(_)
            | Self::WidthTooLarge { .. }
            | Self::WidthTooSmall(_)
            | Self::HeightTooLarge { .. }
            | Self::HeightTooSmall(_)
            | Self::UnsupportedDepth(_) => ErrorKind::Validation,
            Self::FileNotFound
            | Self::FileTooSmall { .. }
            | Self::FileTooBig { .. }
            | Self::UnexpectedFileSize { .. } => ErrorKind::Bounds,
            Self::OverwriteDisallowed
            | Self::DestinationIsDirectory
            | Self::ParentMissing
            | Self::NotReady => ErrorKind::Savability,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

/// The check or I/O step that produced a logged error.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    CheckHeader,
    IsOpenable,
    LoadHeader,
    CheckSize,
    LoadBitmap,
    LoadPalette,
    IsSavable,
    SaveAll,
    FileLength,
}

impl ErrorContext {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CheckHeader => "Check Header",
            Self::IsOpenable => "Is Openable",
            Self::LoadHeader => "Load Header",
            Self::CheckSize => "Check Size",
            Self::LoadBitmap => "Load Bitmap",
            Self::LoadPalette => "Load Palette",
            Self::IsSavable => "Is Savable",
            Self::SaveAll => "Save All",
            Self::FileLength => "File Length",
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of an [`ErrorLog`]: what went wrong, and where.
#[derive(Debug)]
pub struct LoggedError {
    context: ErrorContext,
    error: BitmapError,
}

impl LoggedError {
    pub fn context(&self) -> ErrorContext {
        self.context
    }

    pub fn error(&self) -> &BitmapError {
        &self.error
    }

    /// Human-readable message (the error's `Display`).
    pub fn message(&self) -> String {
        self.error.to_string()
    }
}

/// Ordered, append-only list of errors from the last lifecycle operation.
#[derive(Debug, Default)]
pub struct ErrorLog {
    entries: Vec<LoggedError>,
}

impl ErrorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, context: ErrorContext, error: BitmapError) {
        log::warn!("{context}: {error}");
        self.entries.push(LoggedError { context, error });
    }

    pub(crate) fn extend(&mut self, context: ErrorContext, errors: Vec<BitmapError>) {
        for error in errors {
            self.push(context, error);
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, LoggedError> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[LoggedError] {
        &self.entries
    }

    /// Whether any entry carries `context`.
    pub fn has_context(&self, context: ErrorContext) -> bool {
        self.entries.iter().any(|e| e.context == context)
    }
}

impl<'a> IntoIterator for &'a ErrorLog {
    type Item = &'a LoggedError;
    type IntoIter = core::slice::Iter<'a, LoggedError>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ErrorLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for e in &self.entries {
            writeln!(f, "{}: {}", e.context, e.error)?;
        }
        Ok(())
    }
}
