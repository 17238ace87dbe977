//! TIFF adapter.
//!
//! Unlike the other four formats, TIFF's container is complex enough (IFDs,
//! multiple compression schemes, tiled and strip layouts) that hand-rolling a
//! decoder is not worth it here: this module is a thin translation layer over
//! the `image` crate's own TIFF decoder.

use image::{DynamicImage, GenericImageView, ImageFormat};

use crate::error::Result;
use crate::raster::{Channels, Raster};

/// Decode a TIFF file into a [`Raster`], delegating pixel decoding to the
/// `image` crate and converting its output to this crate's gray/RGB model.
pub fn decode(data: &[u8]) -> Result<Raster> {
    let dynamic = image::load_from_memory_with_format(data, ImageFormat::Tiff)?;
    raster_from_dynamic(dynamic)
}

fn raster_from_dynamic(image: DynamicImage) -> Result<Raster> {
    let (width, height) = image.dimensions();

    match image {
        DynamicImage::ImageLuma8(buf) => Raster::new(width, height, Channels::Gray, buf.into_raw()),
        other => {
            let rgb = other.to_rgb8();
            Raster::new(width, height, Channels::Rgb, rgb.into_raw())
        }
    }
}
