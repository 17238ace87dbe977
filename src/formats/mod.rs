//! One module per supported file format, each exposing a single
//! `decode(bytes) -> Result<Raster>` entry point.

pub mod art;
pub mod mac;
pub mod pcx;
pub mod pic;
pub mod tiff;

use crate::error::Result;
use crate::raster::Raster;

/// Which format-specific decoder to invoke.
///
/// Distinct from file extension: callers that already know a buffer's format
/// (e.g. from a content-type header) can skip extension sniffing entirely by
/// constructing this directly.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FormatHint {
    Art,
    Mac,
    Pic,
    Pcx,
    Tiff,
}

impl FormatHint {
    /// Resolve a format hint from a filename's extension, case-insensitively.
    /// Returns `None` for unrecognized or missing extensions.
    pub fn from_extension(filename: &str) -> Option<Self> {
        let ext = filename.rsplit('.').next()?.to_ascii_lowercase();
        match ext.as_str() {
            "art" => Some(FormatHint::Art),
            "mac" => Some(FormatHint::Mac),
            "pic" => Some(FormatHint::Pic),
            "pcx" => Some(FormatHint::Pcx),
            "tif" | "tiff" => Some(FormatHint::Tiff),
            _ => None,
        }
    }
}

/// Decode `bytes` using the decoder named by `hint`.
pub fn decode(hint: FormatHint, bytes: &[u8]) -> Result<Raster> {
    match hint {
        FormatHint::Art => art::decode(bytes),
        FormatHint::Mac => mac::decode(bytes),
        FormatHint::Pic => pic::decode(bytes),
        FormatHint::Pcx => pcx::decode(bytes),
        FormatHint::Tiff => tiff::decode(bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_matching_is_case_insensitive() {
        assert_eq!(FormatHint::from_extension("Photo.PCX"), Some(FormatHint::Pcx));
        assert_eq!(FormatHint::from_extension("scan.TIFF"), Some(FormatHint::Tiff));
        assert_eq!(FormatHint::from_extension("scan.tif"), Some(FormatHint::Tiff));
    }

    #[test]
    fn unknown_extension_is_not_recognized() {
        assert_eq!(FormatHint::from_extension("notes.txt"), None);
        assert_eq!(FormatHint::from_extension("noextension"), None);
    }
}
