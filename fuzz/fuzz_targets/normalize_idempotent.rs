#![no_main]
use full_name_parser::{Lexicon, ParsedName};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let name = match ParsedName::parse(data) {
        Ok(name) => name,
        Err(err) => err.into_partial(),
    };

    let mut again = name.clone();
    again.normalize_case(Lexicon::english());
    assert_eq!(name, again);
});
