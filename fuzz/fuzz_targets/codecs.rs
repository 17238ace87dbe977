#![no_main]
use libfuzzer_sys::fuzz_target;
use retro_raster::codecs::{aol_rle, packbits, pcx_rle, pictor_rle};

fuzz_target!(|data: &[u8]| {
    let Some((len_byte, payload)) = data.split_first() else {
        return;
    };
    let expected_length = *len_byte as usize * 64;

    let _ = packbits::decode(payload, expected_length);
    let _ = pcx_rle::decode(payload, expected_length);
    let _ = pictor_rle::decode(payload, expected_length);
    let _ = aol_rle::decode(payload, expected_length);
});
