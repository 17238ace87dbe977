#![no_main]
use libfuzzer_sys::fuzz_target;
use retro_raster::formats::pcx;

fuzz_target!(|data: &[u8]| {
    // Only checks that the header parser and pixel assembler never panic;
    // the result itself is not inspected.
    let _ = pcx::decode(data);
});
