#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    text: &'a str,
    max_length: u16,
}

fuzz_target!(|input: Input<'_>| {
    // Must never slice inside a char
    let out = drills::utils::truncate_string(input.text, input.max_length as usize);
    let max_length = input.max_length as usize;
    if input.text.chars().count() > max_length {
        assert_eq!(out.chars().count(), max_length + 3);
    } else {
        assert_eq!(out, input.text);
    }
});
