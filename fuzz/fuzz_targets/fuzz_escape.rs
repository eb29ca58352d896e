#![no_main]

use libfuzzer_sys::fuzz_target;

use css2cpp::{escape_c_string, Minified};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        // Escaping only ever inserts one backslash per quote
        let escaped = escape_c_string(&Minified::Text(text.to_string()));
        assert_eq!(escaped.len(), text.len() + text.matches('"').count());
    }
});
