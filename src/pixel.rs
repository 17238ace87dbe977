//! Converts decompressed byte streams into 8-bit-per-channel pixel buffers.
//!
//! Every format decoder first runs its payload through one of the
//! [`crate::codecs`] to get a flat byte buffer, then hands that buffer to
//! one of the functions here together with a description of how pixels are
//! packed into it. None of these functions can fail: out-of-range source
//! bytes are treated as zero, matching the "codecs and pixel assemblers
//! never fail" policy from the crate's design notes. Dimension and format
//! validation happens one layer up, in each decoder's header parser.

use crate::primitives::{bit_at, BitReader};
use crate::raster::Palette;

/// Borrow up to `len` bytes starting at `start`, bounds-checked against
/// `data`. Returns an empty slice instead of panicking when the requested
/// range runs past the end of `data`.
fn row_slice(data: &[u8], start: usize, len: usize) -> &[u8] {
    if start >= data.len() {
        return &[];
    }
    let end = (start + len).min(data.len());
    &data[start..end]
}

#[inline]
fn write_rgb(pixels: &mut [u8], pixel_index: usize, rgb: [u8; 3]) {
    let base = pixel_index * 3;
    pixels[base..base + 3].copy_from_slice(&rgb);
}

/// Expand 1-bit-per-pixel monochrome scanlines into a single-channel (gray)
/// pixel buffer, MSB-first.
///
/// `row_stride` is the number of decompressed bytes per scanline (including
/// any padding), `pre_skip` is the number of leading bytes in each scanline
/// to discard before pixel extraction (ART's word-aligned header bytes),
/// and `bit_one_is_white` selects the polarity: ART uses `true` (1 = white),
/// MacPaint/PNTG/PCX use `false` (1 = black).
pub fn expand_mono(
    data: &[u8],
    width: usize,
    height: usize,
    row_stride: usize,
    pre_skip: usize,
    bit_one_is_white: bool,
) -> Vec<u8> {
    let mut pixels = vec![0u8; width * height];
    let row_bytes = (width + 7) / 8;

    for y in 0..height {
        let row = row_slice(data, y * row_stride + pre_skip, row_bytes);
        let mut reader = BitReader::new(row);
        for x in 0..width {
            let bit = reader.next_bit();
            let is_white = if bit_one_is_white { bit == 1 } else { bit == 0 };
            pixels[y * width + x] = if is_white { 255 } else { 0 };
        }
    }

    pixels
}

/// Expand packed (non-planar) paletted scanlines — 1, 2, 4 or 8 bits per
/// pixel, one plane — into an interleaved RGB buffer via `palette`.
///
/// For sub-byte depths, pixels are packed MSB-first within each byte (the
/// upper nibble first for 4 bpp).
pub fn expand_palette_packed(
    data: &[u8],
    width: usize,
    height: usize,
    row_stride: usize,
    bits_per_pixel: u8,
    palette: &Palette,
) -> Vec<u8> {
    let mut pixels = vec![0u8; width * height * 3];

    for y in 0..height {
        let row = row_slice(data, y * row_stride, row_stride);

        if bits_per_pixel == 8 {
            for x in 0..width {
                let index = *row.get(x).unwrap_or(&0) as usize;
                write_rgb(&mut pixels, y * width + x, palette.get(index));
            }
        } else {
            let mut reader = BitReader::new(row);
            for x in 0..width {
                let index = reader.read_bits(bits_per_pixel) as usize;
                write_rgb(&mut pixels, y * width + x, palette.get(index));
            }
        }
    }

    pixels
}

/// Expand EGA-style planar scanlines (1 bit per pixel per plane, typically 4
/// planes) into an interleaved RGB buffer via `palette`.
///
/// For pixel column `x`, plane `p` contributes bit `p` of the palette index
/// (plane 0 is the least-significant bit), matching the wire format's
/// `b3<<3 | b2<<2 | b1<<1 | b0` index construction.
pub fn expand_ega_planar(
    data: &[u8],
    width: usize,
    height: usize,
    bytes_per_plane: usize,
    planes: usize,
    palette: &Palette,
) -> Vec<u8> {
    let mut pixels = vec![0u8; width * height * 3];
    let row_stride = bytes_per_plane * planes;

    for y in 0..height {
        let row = row_slice(data, y * row_stride, row_stride);
        for x in 0..width {
            let byte_index = x / 8;
            let bit_index = (x % 8) as u8;

            let mut index = 0u8;
            for p in 0..planes {
                let plane = row_slice(row, p * bytes_per_plane, bytes_per_plane);
                let byte = *plane.get(byte_index).unwrap_or(&0);
                index |= bit_at(byte, bit_index) << p;
            }

            write_rgb(&mut pixels, y * width + x, palette.get(index as usize));
        }
    }

    pixels
}

/// Expand 8-bit-per-pixel RGB planar scanlines (plane 0 = R, 1 = G, 2 = B)
/// into an interleaved RGB buffer.
pub fn expand_rgb_planar(
    data: &[u8],
    width: usize,
    height: usize,
    bytes_per_plane: usize,
) -> Vec<u8> {
    let mut pixels = vec![0u8; width * height * 3];
    let row_stride = bytes_per_plane * 3;

    for y in 0..height {
        let row = row_slice(data, y * row_stride, row_stride);
        let r_plane = row_slice(row, 0, bytes_per_plane);
        let g_plane = row_slice(row, bytes_per_plane, bytes_per_plane);
        let b_plane = row_slice(row, bytes_per_plane * 2, bytes_per_plane);

        for x in 0..width {
            let index = y * width + x;
            pixels[index * 3] = *r_plane.get(x).unwrap_or(&0);
            pixels[index * 3 + 1] = *g_plane.get(x).unwrap_or(&0);
            pixels[index * 3 + 2] = *b_plane.get(x).unwrap_or(&0);
        }
    }

    pixels
}
