#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        let _ = graphql_syntax::parse_value(source);
        let _ = graphql_syntax::parse_type(source);
    }
});
