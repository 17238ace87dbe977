//! PICtor/PNTG (.PIC) decoder.
//!
//! `.pic` is shared by two unrelated formats: Mac-style PNTG bitmaps (same
//! layout as [`crate::formats::mac`]'s PNTG path) and PICtor's own indexed
//! format. A generic raw-bitmap fallback covers anything else.

use crate::codecs::{packbits, pictor_rle};
use crate::error::{DecodeError, Result};
use crate::pixel::{expand_mono, expand_palette_packed};
use crate::primitives::ByteCursor;
use crate::raster::{Channels, Palette, Raster, MAX_DIMENSION};

const PNTG_WIDTH: usize = 576;
const PNTG_HEIGHT: usize = 720;
const PNTG_ROW_BYTES: usize = PNTG_WIDTH / 8;
const PNTG_BODY_LENGTH: usize = PNTG_ROW_BYTES * PNTG_HEIGHT;
const PNTG_HEADER_LENGTH: usize = 0x280;

const PICTOR_HEADER_LENGTH: usize = 17;
const PICTOR_PALETTE_LENGTH: usize = 768;

fn is_pntg(data: &[u8]) -> bool {
    let scan_len = data.len().min(100);
    data[..scan_len]
        .windows(4)
        .any(|window| window == b"PNTG" || window == b"PICT")
}

fn decode_pntg(data: &[u8]) -> Result<Raster> {
    let payload = &data[PNTG_HEADER_LENGTH.min(data.len())..];
    let body = packbits::decode_or_raw(payload, PNTG_BODY_LENGTH);
    let pixels = expand_mono(&body, PNTG_WIDTH, PNTG_HEIGHT, PNTG_ROW_BYTES, 0, false);
    Raster::new(PNTG_WIDTH as u32, PNTG_HEIGHT as u32, Channels::Gray, pixels)
}

/// Scale a 6-bit PICtor palette component to 8 bits: `(c6 * 255) / 63`.
fn scale_6_to_8(component: u8) -> u8 {
    (component as u16 * 255 / 63) as u8
}

fn read_pictor_palette(data: &[u8], entries: usize) -> Option<Palette> {
    if data.len() < PICTOR_PALETTE_LENGTH {
        return None;
    }
    let raw = &data[..PICTOR_PALETTE_LENGTH];
    let mut scaled: Vec<[u8; 3]> = raw
        .chunks_exact(3)
        .take(256)
        .map(|c| [scale_6_to_8(c[0]), scale_6_to_8(c[1]), scale_6_to_8(c[2])])
        .collect();
    scaled.truncate(entries);
    if scaled.len() != entries {
        return None;
    }
    Palette::new(scaled).ok()
}

fn decode_pictor(data: &[u8]) -> Result<Raster> {
    let mut cursor = ByteCursor::new(data);
    cursor.seek(2);
    let width = cursor.read_u16_le().unwrap_or(0) as usize;
    let height = cursor.read_u16_le().unwrap_or(0) as usize;
    let bits_per_pixel = cursor.read_u8().unwrap_or(0);

    if width == 0 || height == 0 || width > MAX_DIMENSION as usize || height > MAX_DIMENSION as usize {
        return Err(DecodeError::InvalidFormat);
    }

    let row_bytes = (width * bits_per_pixel as usize + 7) / 8;
    let body_len = row_bytes * height;

    let rest = &data[PICTOR_HEADER_LENGTH.min(data.len())..];

    let (palette_entries, palette_bytes) = match bits_per_pixel {
        1 => (0, 0),
        4 => (16, PICTOR_PALETTE_LENGTH.min(rest.len())),
        8 => (256, PICTOR_PALETTE_LENGTH.min(rest.len())),
        _ => return Err(DecodeError::Unsupported("PICtor bits-per-pixel")),
    };

    let (palette, payload) = if palette_entries > 0 {
        match read_pictor_palette(rest, palette_entries) {
            Some(palette) => (palette, &rest[palette_bytes.min(rest.len())..]),
            None if bits_per_pixel == 4 => (Palette::default_ega(), rest),
            None => (Palette::default_grayscale(), rest),
        }
    } else {
        (Palette::default_grayscale(), rest)
    };

    let body = pictor_rle::decode(payload, body_len);

    match bits_per_pixel {
        1 => {
            let pixels = expand_mono(&body, width, height, row_bytes, 0, false);
            Raster::new(width as u32, height as u32, Channels::Gray, pixels)
        }
        4 => {
            let pixels = expand_palette_packed(&body, width, height, row_bytes, 4, &palette);
            Raster::new(width as u32, height as u32, Channels::Rgb, pixels)
        }
        8 => {
            let pixels = expand_palette_packed(&body, width, height, row_bytes, 8, &palette);
            Raster::new(width as u32, height as u32, Channels::Rgb, pixels)
        }
        _ => unreachable!(),
    }
}

const GENERIC_FALLBACK_RESOLUTIONS: [(u32, u32); 2] = [(320, 200), (640, 480)];

fn decode_generic(data: &[u8]) -> Result<Raster> {
    for &(width, height) in &GENERIC_FALLBACK_RESOLUTIONS {
        let row_bytes = ((width as usize) + 7) / 8;
        let expected_bits = row_bytes * height as usize;
        if data.len() * 8 >= expected_bits {
            let pixels = expand_mono(data, width as usize, height as usize, row_bytes, 0, false);
            if let Ok(raster) = Raster::new(width, height, Channels::Gray, pixels) {
                return Ok(raster);
            }
        }
    }
    Err(DecodeError::InvalidFormat)
}

/// Decode a PICtor/PNTG file into a [`Raster`].
pub fn decode(data: &[u8]) -> Result<Raster> {
    if is_pntg(data) {
        #[cfg(feature = "debug-logging")]
        log::debug!("pic: PNTG/PICT signature found, using Mac-style bitmap path");
        decode_pntg(data)
    } else if data.len() >= 2 && data[0] == 0x34 && data[1] == 0x12 {
        #[cfg(feature = "debug-logging")]
        log::debug!("pic: 0x1234 magic found, using PICtor path");
        decode_pictor(data)
    } else {
        #[cfg(feature = "debug-logging")]
        log::warn!("pic: no known signature, falling back to generic resolution guess");
        decode_generic(data)
    }
}
