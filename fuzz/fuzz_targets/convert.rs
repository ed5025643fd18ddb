#![no_main]

use libfuzzer_sys::fuzz_target;
use webidl_dts_gen::ConvertOptions;

fuzz_target!(|data: &[u8]| {
    // Convert bytes to UTF-8 string (ignore invalid UTF-8)
    if let Ok(s) = std::str::from_utf8(data) {
        // Both output modes share the frontend; Emscripten mode also exercises enum dedup
        let _ = webidl_dts_gen::convert(s, ConvertOptions::default());
        let _ = webidl_dts_gen::convert(s, ConvertOptions::new().with_emscripten(true));
    }
});
