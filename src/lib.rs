//! # bmpfile
//!
//! Read, edit and write uncompressed Windows bitmap (`.bmp`) files with
//! bit-exact pixel access.
//!
//! ## Supported Files
//!
//! - BITMAPINFOHEADER (40-byte) files, `BI_RGB` (no compression)
//! - 1, 4 and 8 bpp with a full `2^bpp` palette, and 24 bpp true color
//! - Width and height from 1 to 4096
//!
//! ## Non-Goals
//!
//! - RLE/bitfield compression, 16/32 bpp, alpha
//! - Color management
//! - Multi-image containers
//!
//! ## Usage
//!
//! ```no_run
//! use bmpfile::Bitmap;
//!
//! let mut bmp = Bitmap::new();
//! if !bmp.create(64, 32, 4) {
//!     eprint!("{}", bmp.errors());
//!     return;
//! }
//! for x in 0..64 {
//!     bmp.set_pixel(x, 16, 9); // palette index 9: red
//! }
//! if !bmp.save_as("stripe.bmp", true) {
//!     eprint!("{}", bmp.errors());
//! }
//!
//! let mut copy = Bitmap::new();
//! assert!(copy.open("stripe.bmp"));
//! assert_eq!(copy.pixel(3, 16, true), Some(0xFF0000));
//! ```
//!
//! Failures never panic or return `Err` across the [`Bitmap`] boundary:
//! lifecycle calls return `false` and the reasons are kept in
//! [`Bitmap::errors`], each tagged with the [`ErrorContext`] that produced it.

#![forbid(unsafe_code)]

pub mod bmp;
mod document;
mod error;
mod geometry;
mod info;
mod limits;
mod pixel;

// Re-exports
pub use bmp::{BitmapHeader, Palette, PixelBuffer};
pub use document::{Bitmap, State};
pub use error::{BitmapError, ErrorContext, ErrorKind, ErrorLog, LoggedError};
pub use geometry::Geometry;
pub use info::BitmapInfo;
pub use limits::{Limits, MAX_DIMENSION, MIN_FILE_LEN};
pub use pixel::{BitDepth, color};
