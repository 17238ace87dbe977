//! PC Paintbrush (.PCX) decoder.
//!
//! PCX has a single container variant but five pixel-packing modes,
//! selected by `(bits_per_pixel, number_of_color_planes)`. Grounded on the
//! header layout ZSoft documented and the `pcx` crate's `Header::load`.

use crate::codecs::pcx_rle;
use crate::error::{DecodeError, Result};
use crate::pixel::{expand_ega_planar, expand_mono, expand_palette_packed, expand_rgb_planar};
use crate::primitives::ByteCursor;
use crate::raster::{Channels, Palette, Raster, MAX_DIMENSION};

const HEADER_LENGTH: usize = 128;
const MANUFACTURER: u8 = 0x0A;
const PALETTE_MARKER: u8 = 0x0C;
const TRAILER_LENGTH: usize = 256 * 3 + 1;

struct Header {
    is_compressed: bool,
    bits_per_pixel: u8,
    width: u32,
    height: u32,
    ega_palette: [[u8; 3]; 16],
    num_planes: u8,
    bytes_per_line: u16,
}

fn parse_header(data: &[u8]) -> Result<Header> {
    if data.first().copied() != Some(MANUFACTURER) {
        return Err(DecodeError::InvalidFormat);
    }
    if data.len() < HEADER_LENGTH {
        return Err(DecodeError::Truncated("PCX header"));
    }

    let mut cursor = ByteCursor::new(data);
    cursor.skip(2); // manufacturer, version
    let encoding = cursor.read_u8().unwrap_or(0);
    let bits_per_pixel = cursor.read_u8().unwrap_or(0);
    let x_min = cursor.read_u16_le().unwrap_or(0);
    let y_min = cursor.read_u16_le().unwrap_or(0);
    let x_max = cursor.read_u16_le().unwrap_or(0);
    let y_max = cursor.read_u16_le().unwrap_or(0);

    if x_max < x_min || y_max < y_min {
        return Err(DecodeError::InvalidFormat);
    }

    let width = u32::from(x_max - x_min) + 1;
    let height = u32::from(y_max - y_min) + 1;
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(DecodeError::InvalidFormat);
    }

    cursor.seek(16);
    let mut ega_palette = [[0u8; 3]; 16];
    for entry in &mut ega_palette {
        entry.copy_from_slice(cursor.take(3).unwrap_or(&[0, 0, 0]));
    }

    cursor.seek(65);
    let num_planes = cursor.read_u8().unwrap_or(1);
    let bytes_per_line = cursor.read_u16_le().unwrap_or(0);

    Ok(Header {
        is_compressed: encoding == 1,
        bits_per_pixel,
        width,
        height,
        ega_palette,
        num_planes,
        bytes_per_line,
    })
}

/// Read the 256-colour trailer palette from the very end of the file, or
/// fall back to a grayscale ramp if the `0x0C` marker is missing.
fn trailer_palette(file: &[u8]) -> Palette {
    if file.len() >= TRAILER_LENGTH {
        let marker_pos = file.len() - TRAILER_LENGTH;
        if file[marker_pos] == PALETTE_MARKER {
            let entries: Vec<[u8; 3]> = file[marker_pos + 1..]
                .chunks_exact(3)
                .take(256)
                .map(|c| [c[0], c[1], c[2]])
                .collect();
            if let Ok(palette) = Palette::new(entries) {
                return palette;
            }
        }
    }
    #[cfg(feature = "debug-logging")]
    log::warn!("pcx: no 0x0C trailer marker, falling back to grayscale ramp");
    Palette::default_grayscale()
}

/// Decode a PCX file into a [`Raster`].
pub fn decode(file: &[u8]) -> Result<Raster> {
    let header = parse_header(file)?;

    let bytes_per_line = header.bytes_per_line as usize;
    let num_planes = header.num_planes as usize;
    let width = header.width as usize;
    let height = header.height as usize;
    let row_stride = bytes_per_line * num_planes;
    let body_len = row_stride * height;

    let payload = &file[HEADER_LENGTH.min(file.len())..];
    let body = if header.is_compressed {
        pcx_rle::decode(payload, body_len)
    } else {
        let mut buf = payload.to_vec();
        buf.resize(body_len, 0);
        buf
    };

    match (header.bits_per_pixel, header.num_planes) {
        (1, 1) => {
            let pixels = expand_mono(&body, width, height, bytes_per_line, 0, false);
            Raster::new(header.width, header.height, Channels::Gray, pixels)
        }
        (1, 4) => {
            let palette = Palette::new(header.ega_palette.to_vec())?;
            let pixels = expand_ega_planar(&body, width, height, bytes_per_line, 4, &palette);
            Raster::new(header.width, header.height, Channels::Rgb, pixels)
        }
        (4, 1) => {
            let palette = Palette::new(header.ega_palette.to_vec())?;
            let pixels = expand_palette_packed(&body, width, height, bytes_per_line, 4, &palette);
            Raster::new(header.width, header.height, Channels::Rgb, pixels)
        }
        (8, 1) => {
            let palette = trailer_palette(file);
            let pixels = expand_palette_packed(&body, width, height, bytes_per_line, 8, &palette);
            Raster::new(header.width, header.height, Channels::Rgb, pixels)
        }
        (8, 3) => {
            let pixels = expand_rgb_planar(&body, width, height, bytes_per_line);
            Raster::new(header.width, header.height, Channels::Rgb, pixels)
        }
        _ => Err(DecodeError::Unsupported(
            "PCX bit depth / color plane combination",
        )),
    }
}
