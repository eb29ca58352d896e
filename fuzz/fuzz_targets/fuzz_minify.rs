#![no_main]

use libfuzzer_sys::fuzz_target;

use css2cpp::{LightningCss, Minifier};

fuzz_target!(|data: &[u8]| {
    // Arbitrary bytes must give text or a minify error, never a panic
    let _ = LightningCss::new().minify(std::path::Path::new("fuzz.css"), data);
});
