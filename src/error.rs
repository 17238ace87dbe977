//! Error types returned by the decoders in this crate.

use thiserror::Error;

/// Failure modes shared by every decoder in this crate.
///
/// Decoders are lenient by design (see the crate-level docs): truncated or
/// malformed payloads are zero-padded or walked through a fallback cascade
/// rather than rejected outright. These variants are reserved for the cases
/// where no amount of fallback produces a plausible image.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// No variant signature matched and no fallback produced plausible
    /// dimensions.
    #[error("not a recognized image file")]
    InvalidFormat,

    /// The file is shorter than the minimum header length for the variant
    /// that was selected.
    #[error("file is truncated: {0}")]
    Truncated(&'static str),

    /// The header is well-formed but names a combination this decoder does
    /// not implement (e.g. PCX with 2 bits per pixel).
    #[error("unsupported combination: {0}")]
    Unsupported(&'static str),

    /// The TIFF adapter's delegated image library rejected the input.
    #[error("delegated TIFF decoder failed: {0}")]
    DelegatedFailure(#[from] image::ImageError),
}

/// Convenience alias for results returned by decoders in this crate.
pub type Result<T> = std::result::Result<T, DecodeError>;
