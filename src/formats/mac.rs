//! MacPaint (.MAC) decoder.
//!
//! Every MacPaint file — standard or PNTG — decodes to a fixed 576×720
//! monochrome canvas; the only variability is where the payload starts and
//! whether it is PackBits-compressed or a raw bitmap (see
//! [`packbits::decode_or_raw`]).

use crate::codecs::packbits;
use crate::error::{DecodeError, Result};
use crate::pixel::expand_mono;
use crate::raster::{Channels, Raster};

const WIDTH: usize = 576;
const HEIGHT: usize = 720;
const ROW_BYTES: usize = WIDTH / 8;
const BODY_LENGTH: usize = ROW_BYTES * HEIGHT;

const STANDARD_HEADER_LENGTH: usize = 512;
const PNTG_HEADER_LENGTH: usize = 0x280;
const MIN_FILE_LENGTH: usize = 512;

fn is_pntg(data: &[u8]) -> bool {
    let scan_len = data.len().min(100);
    data[..scan_len]
        .windows(4)
        .any(|window| window == b"PNTG")
}

/// Decode a MacPaint file into a 576×720 monochrome [`Raster`].
pub fn decode(data: &[u8]) -> Result<Raster> {
    if data.len() < MIN_FILE_LENGTH {
        return Err(DecodeError::Truncated("MacPaint file"));
    }

    let header_len = if is_pntg(data) {
        #[cfg(feature = "debug-logging")]
        log::debug!("mac: PNTG signature found, using PNTG header offset");
        PNTG_HEADER_LENGTH
    } else {
        STANDARD_HEADER_LENGTH
    };

    let payload = &data[header_len.min(data.len())..];
    let body = packbits::decode_or_raw(payload, BODY_LENGTH);

    let pixels = expand_mono(&body, WIDTH, HEIGHT, ROW_BYTES, 0, false);
    Raster::new(WIDTH as u32, HEIGHT as u32, Channels::Gray, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_file_shorter_than_minimum() {
        let data = vec![0u8; 100];
        assert!(matches!(decode(&data), Err(DecodeError::Truncated(_))));
    }

    /// Build a run of PackBits repeat codes (flag `257 - chunk`, value byte)
    /// that together decompress to `len` copies of `value`. Requires `len` to
    /// be a multiple of 128 (true for `BODY_LENGTH`).
    fn packbits_repeat_run(len: usize, value: u8) -> Vec<u8> {
        assert_eq!(len % 128, 0);
        let mut payload = Vec::new();
        let mut remaining = len;
        while remaining > 0 {
            let chunk = remaining.min(128);
            payload.push((257 - chunk) as u8);
            payload.push(value);
            remaining -= chunk;
        }
        payload
    }

    #[test]
    fn standard_file_is_always_576_by_720() {
        let mut data = vec![0u8; STANDARD_HEADER_LENGTH];
        data.extend(packbits_repeat_run(BODY_LENGTH, 0x00));
        let raster = decode(&data).unwrap();
        assert_eq!((raster.width(), raster.height()), (576, 720));
        assert_eq!(raster.pixels().len(), WIDTH * HEIGHT);
    }

    #[test]
    fn all_zero_decompressed_body_is_all_white() {
        let mut data = vec![0u8; STANDARD_HEADER_LENGTH];
        data.extend(packbits_repeat_run(BODY_LENGTH, 0x00));
        let raster = decode(&data).unwrap();
        assert!(raster.pixels().iter().all(|&p| p == 255));
    }

    #[test]
    fn pntg_signature_shifts_payload_start() {
        let mut data = vec![0u8; PNTG_HEADER_LENGTH];
        data[0..4].copy_from_slice(b"PNTG");
        data.extend(packbits_repeat_run(BODY_LENGTH, 0xFF));
        let raster = decode(&data).unwrap();
        assert_eq!((raster.width(), raster.height()), (576, 720));
        // bit 1 -> black.
        assert!(raster.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn truncated_payload_pads_with_white() {
        // With no payload at all, PackBits produces an all-zero body, and
        // zero bits decode to white under MacPaint polarity.
        let data = vec![0u8; STANDARD_HEADER_LENGTH];
        let raster = decode(&data).unwrap();
        assert!(raster.pixels().iter().all(|&p| p == 255));
    }

    #[test]
    fn already_uncompressed_body_is_passed_through_raw() {
        // Exactly BODY_LENGTH bytes whose first byte (0x05) would be read as
        // a PackBits literal-run flag if blindly decompressed, corrupting
        // the bitmap. The heuristic must recognize the body is already the
        // right length and copy it verbatim instead.
        let mut data = vec![0u8; STANDARD_HEADER_LENGTH];
        data.extend(vec![0x05u8; BODY_LENGTH]);
        let raster = decode(&data).unwrap();

        // Byte 0x05 = 0b0000_0101, MSB-first, polarity 1 = black:
        // 0,0,0,0,0,1,0,1 -> white,white,white,white,white,black,white,black.
        assert_eq!(
            &raster.pixels()[0..8],
            &[255, 255, 255, 255, 255, 0, 255, 0]
        );
    }
}
