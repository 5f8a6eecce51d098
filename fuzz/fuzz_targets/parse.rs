#![no_main]
use full_name_parser::ParsedName;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let _ = ParsedName::parse(data);
});
