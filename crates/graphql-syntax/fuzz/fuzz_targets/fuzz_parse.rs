#![no_main]

use libfuzzer_sys::fuzz_target;

// The parser must never panic or overflow the stack: any input yields a
// document or exactly one syntax error with an in-bounds position.
fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        match graphql_syntax::parse(source) {
            Ok(document) => {
                let _ = document.to_mapping();
            }
            Err(error) => {
                assert!(error.start().byte_offset() <= source.len());
            }
        }
    }
});
