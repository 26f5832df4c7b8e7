#![no_main]

use libfuzzer_sys::fuzz_target;
use vbfront::parser::{self, ParseContext};

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    // First line lists names to pre-declare; the rest is the module.
    let (names, source) = s.split_once('\n').unwrap_or(("", s));
    let mut context = ParseContext::with_declared_names(names.split_whitespace().map(str::to_string));
    let _ = parser::parse_source(source, &mut context);
});
