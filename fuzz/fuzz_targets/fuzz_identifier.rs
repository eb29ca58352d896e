#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        // Identifier and destination derivation should never panic
        let path = std::path::Path::new(name);
        let _ = css2cpp::derive_identifier(path);
        let _ = css2cpp::derive_destination(path);
    }
});
