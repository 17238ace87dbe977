//! Decoders for legacy PC/Mac raster image formats: AOL Art (`.art`),
//! MacPaint (`.mac`), PICtor/PNTG (`.pic`), PC Paintbrush (`.pcx`), and TIFF.
//!
//! Every decoder is a pure function from a whole file's bytes to a
//! [`Raster`] (or a [`DecodeError`]). There is no streaming API: these
//! formats are small enough, and their variant-detection cascades need
//! enough lookahead, that buffering the whole file up front is simpler than
//! a partial-read state machine.
//!
//! Decoders are deliberately lenient: malformed or truncated input is
//! zero-padded or routed through a fallback cascade rather than rejected,
//! and an error is only returned once every fallback has been exhausted. See
//! each module under [`formats`] for the specifics of its cascade.
//!
//! Enable the `debug-logging` feature to emit `log::debug!`/`log::warn!`
//! calls at variant-selection and fallback points; with it disabled, no code
//! is compiled in and no decoder's behaviour changes either way.

pub mod codecs;
mod error;
pub mod formats;
mod pixel;
mod primitives;
mod raster;

pub use error::DecodeError;
pub use formats::FormatHint;
pub use raster::{Channels, Palette, Raster, MAX_DIMENSION};

/// Decode `bytes` as the format named by `hint`.
///
/// This is the crate's single public entry point; [`FormatHint::from_extension`]
/// turns a filename into the `hint` this function expects.
///
/// ```
/// use retro_raster::{decode, FormatHint};
///
/// let mut pcx = vec![0u8; 128];
/// pcx[0] = 0x0A; // manufacturer signature
/// pcx[3] = 1; // 1 bit per pixel
/// pcx[65] = 1; // 1 color plane
/// pcx[66..68].copy_from_slice(&1u16.to_le_bytes()); // bytes_per_line
/// let raster = decode(FormatHint::Pcx, &pcx).unwrap();
/// assert_eq!((raster.width(), raster.height()), (1, 1));
/// ```
pub fn decode(hint: FormatHint, bytes: &[u8]) -> error::Result<Raster> {
    formats::decode(hint, bytes)
}
