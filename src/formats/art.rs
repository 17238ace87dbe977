//! AOL Art (.ART) decoder.
//!
//! Three historical sub-variants share the `.art` extension — an AOL signed
//! bitmap container, AOL's own RLE-compressed signature format, and PFS
//! First Publisher's raw bitmap — plus a best-effort fallback for anything
//! that matches none of them. Detection is a magic-byte cascade: each
//! attempt validates its own dimensions and falls through to the next on
//! failure, rather than raising until every variant (and the fallback) has
//! been tried.

use crate::codecs::aol_rle;
use crate::error::{DecodeError, Result};
use crate::pixel::expand_mono;
use crate::primitives::ByteCursor;
use crate::raster::{Channels, Raster, MAX_DIMENSION};

/// Candidate resolutions tried by the generic fallback, in priority order.
/// The order is a heuristic inherited from the original viewer with no
/// documented rationale; it is preserved here for regression compatibility.
const FALLBACK_RESOLUTIONS: [(u32, u32); 4] = [(320, 200), (640, 480), (640, 400), (800, 600)];

fn dimensions_in_range(width: u32, height: u32) -> bool {
    width >= 1 && height >= 1 && width <= MAX_DIMENSION && height <= MAX_DIMENSION
}

/// `round_up_even(ceil(width / 8))`: the word-aligned byte stride of one
/// Standard Bitmap scanline.
fn standard_row_bytes(width: u32) -> usize {
    let bytes = ((width as usize) + 7) / 8;
    bytes + (bytes % 2)
}

fn try_standard_bitmap(data: &[u8]) -> Option<Raster> {
    if data.len() < 16 {
        return None;
    }
    let mut cursor = ByteCursor::new(data);
    cursor.seek(2);
    let width = cursor.read_u16_le()? as u32;
    cursor.seek(6);
    let height = cursor.read_u16_le()? as u32;

    if !dimensions_in_range(width, height) {
        return None;
    }

    let row_bytes = standard_row_bytes(width);
    let pre_skip = row_bytes.saturating_sub(8);
    let body = &data[16.min(data.len())..];

    let pixels = expand_mono(body, width as usize, height as usize, row_bytes, pre_skip, true);
    Raster::new(width, height, Channels::Gray, pixels).ok()
}

fn try_aol_signature(data: &[u8]) -> Option<Raster> {
    if data.len() < 16 || &data[0..4] != b"ART\0" {
        return None;
    }
    let mut cursor = ByteCursor::new(data);
    cursor.seek(4);
    let width = cursor.read_u16_le()? as u32;
    let height = cursor.read_u16_le()? as u32;

    if !dimensions_in_range(width, height) {
        return None;
    }

    let row_bytes = ((width as usize) + 7) / 8;
    let payload = &data[16.min(data.len())..];
    let body = aol_rle::decode(payload, row_bytes * height as usize);

    let pixels = expand_mono(&body, width as usize, height as usize, row_bytes, 0, true);
    Raster::new(width, height, Channels::Gray, pixels).ok()
}

fn try_pfs(data: &[u8]) -> Option<Raster> {
    if data.len() < 10 {
        return None;
    }
    let mut cursor = ByteCursor::new(data);
    cursor.seek(2);
    let width = cursor.read_u16_le()? as u32;
    cursor.seek(4);
    let height = cursor.read_u16_le()? as u32;

    if !dimensions_in_range(width, height) {
        return None;
    }

    let row_bytes = ((width as usize) + 7) / 8;
    let body = &data[10.min(data.len())..];

    let pixels = expand_mono(body, width as usize, height as usize, row_bytes, 0, true);
    Raster::new(width, height, Channels::Gray, pixels).ok()
}

fn try_generic_fallback(data: &[u8]) -> Option<Raster> {
    for &(width, height) in &FALLBACK_RESOLUTIONS {
        let row_bytes = ((width as usize) + 7) / 8;
        let expected_bits = row_bytes * height as usize;
        if data.len() * 8 >= expected_bits {
            let pixels = expand_mono(data, width as usize, height as usize, row_bytes, 0, true);
            if let Ok(raster) = Raster::new(width, height, Channels::Gray, pixels) {
                return Some(raster);
            }
        }
    }
    None
}

/// Decode an AOL Art file into a [`Raster`].
pub fn decode(data: &[u8]) -> Result<Raster> {
    let by_magic = if data.len() >= 2 && data[0] == 0x00 && data[1] == 0x00 {
        #[cfg(feature = "debug-logging")]
        log::debug!("art: leading zero word, trying Standard Bitmap");
        try_standard_bitmap(data)
    } else if data.len() >= 4 && &data[0..4] == b"ART\0" {
        #[cfg(feature = "debug-logging")]
        log::debug!("art: ART\\0 magic, trying AOL-Signature");
        try_aol_signature(data)
    } else if data.len() >= 2 && data[0] == 0x01 && data[1] == 0x00 {
        #[cfg(feature = "debug-logging")]
        log::debug!("art: 01 00 prefix, trying PFS First Publisher");
        try_pfs(data)
    } else {
        None
    };

    let raster = by_magic
        .or_else(|| try_standard_bitmap(data))
        .or_else(|| try_aol_signature(data))
        .or_else(|| try_pfs(data))
        .or_else(|| {
            #[cfg(feature = "debug-logging")]
            log::warn!("art: no variant matched, falling back to candidate resolutions");
            try_generic_fallback(data)
        });

    match raster {
        Some(raster) => {
            #[cfg(feature = "debug-logging")]
            log::debug!("art: resolved {}x{}", raster.width(), raster.height());
            Ok(raster)
        }
        None => Err(DecodeError::InvalidFormat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn standard_bitmap_file(width: u16, height: u16, body: &[u8]) -> Vec<u8> {
        let mut file = vec![0u8; 16];
        file[2..4].copy_from_slice(&width.to_le_bytes());
        file[6..8].copy_from_slice(&height.to_le_bytes());
        file.extend_from_slice(body);
        file
    }

    #[test]
    fn standard_bitmap_dispatches_on_leading_zero_word() {
        let row_bytes = standard_row_bytes(8);
        let body = vec![0u8; row_bytes * 2];
        let file = standard_bitmap_file(8, 2, &body);
        let raster = decode(&file).unwrap();
        assert_eq!((raster.width(), raster.height()), (8, 2));
        assert_eq!(raster.channels(), Channels::Gray);
    }

    #[test]
    fn all_zero_body_decodes_to_all_black_for_standard_bitmap() {
        // ART polarity is 0 = black, 1 = white.
        let row_bytes = standard_row_bytes(8);
        let body = vec![0u8; row_bytes * 1];
        let file = standard_bitmap_file(8, 1, &body);
        let raster = decode(&file).unwrap();
        assert_eq!(raster.pixels(), &[0u8; 8]);
    }

    #[test]
    fn aol_signature_is_detected_by_magic() {
        let mut file = vec![0u8; 16];
        file[0..4].copy_from_slice(b"ART\0");
        file[4..6].copy_from_slice(&8u16.to_le_bytes());
        file[6..8].copy_from_slice(&1u16.to_le_bytes());
        // One AOL-RLE literal run of 1 byte: 0xFF.
        file.extend_from_slice(&[0x01, 0xFF]);
        let raster = decode(&file).unwrap();
        assert_eq!((raster.width(), raster.height()), (8, 1));
    }

    #[test]
    fn pfs_layout_reads_width_height_and_raw_bitmap() {
        let mut file = vec![0u8; 10];
        file[2..4].copy_from_slice(&8u16.to_le_bytes());
        file[4..6].copy_from_slice(&1u16.to_le_bytes());
        file[1] = 0x00;
        file[0] = 0x01;
        file.push(0xFF);
        let raster = decode(&file).unwrap();
        assert_eq!((raster.width(), raster.height()), (8, 1));
        assert_eq!(raster.pixels(), &[255u8; 8]);
    }

    #[test]
    fn oversized_standard_bitmap_dimensions_are_rejected() {
        let mut file = vec![0u8; 16];
        file[2..4].copy_from_slice(&5000u16.to_le_bytes());
        file[6..8].copy_from_slice(&5000u16.to_le_bytes());
        // No other magic matches and the fallback resolutions won't fit in
        // this tiny file, so this should bottom out at InvalidFormat.
        assert!(matches!(decode(&file), Err(DecodeError::InvalidFormat)));
    }

    #[test]
    fn generic_fallback_tries_resolutions_in_spec_order() {
        let row_bytes = ((320usize) + 7) / 8;
        let data = vec![0u8; row_bytes * 200];
        // Doesn't match any magic cascade entry (first two bytes aren't a
        // recognized prefix), so it falls through to generic resolution
        // guessing.
        let mut file = vec![0x99, 0x99];
        file.extend_from_slice(&data[2..]);
        let raster = decode(&file).unwrap();
        assert_eq!((raster.width(), raster.height()), (320, 200));
    }
}
