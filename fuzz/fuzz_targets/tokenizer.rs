#![no_main]

use libfuzzer_sys::fuzz_target;
use vellum_diff::tokenize;

/// Tokenizing must never panic on arbitrary UTF-8, and the concatenation of
/// token text (which drops whitespace) must always be a substring obtained
/// by just removing whitespace from the input.
fn do_fuzz(input: &str) {
    let tokens = tokenize(input);
    let joined: String = tokens.iter().map(|t| t.as_str()).collect();
    let expected: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    assert_eq!(joined, expected);
}

fuzz_target!(|input: &str| {
    do_fuzz(input);
});
