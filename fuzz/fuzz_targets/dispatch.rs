#![no_main]
use libfuzzer_sys::fuzz_target;
use retro_raster::{decode, FormatHint};

const HINTS: [FormatHint; 5] = [
    FormatHint::Art,
    FormatHint::Mac,
    FormatHint::Pic,
    FormatHint::Pcx,
    FormatHint::Tiff,
];

fuzz_target!(|data: &[u8]| {
    let Some((selector, bytes)) = data.split_first() else {
        return;
    };
    let hint = HINTS[*selector as usize % HINTS.len()];
    let _ = decode(hint, bytes);
});
