#![no_main]

use libfuzzer_sys::arbitrary;
use libfuzzer_sys::fuzz_target;
use vellum_diff::{diff_line, InlineKind};

#[derive(arbitrary::Arbitrary, Debug)]
struct Input<'a> {
    before: &'a str,
    after: &'a str,
}

/// The Myers token diff must always reconstruct both sides' tokenization
/// exactly: the non-`Delete` tokens in order are `after`'s tokens, the
/// non-`Insert` tokens in order are `before`'s tokens.
fn do_fuzz(Input { before, after }: Input<'_>) {
    let script = diff_line(before, after);

    let reconstructed_after: String = script
        .iter()
        .filter(|(k, _)| *k != InlineKind::Delete)
        .map(|(_, t)| t.as_str())
        .collect();
    let reconstructed_before: String = script
        .iter()
        .filter(|(k, _)| *k != InlineKind::Insert)
        .map(|(_, t)| t.as_str())
        .collect();

    let expected_after: String = vellum_diff::tokenize(after)
        .iter()
        .map(|t| t.as_str())
        .collect();
    let expected_before: String = vellum_diff::tokenize(before)
        .iter()
        .map(|t| t.as_str())
        .collect();

    assert_eq!(reconstructed_after, expected_after);
    assert_eq!(reconstructed_before, expected_before);
}

fuzz_target!(|input: Input<'_>| {
    do_fuzz(input);
});
