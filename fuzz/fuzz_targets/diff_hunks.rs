#![no_main]

use libfuzzer_sys::arbitrary;
use libfuzzer_sys::fuzz_target;
use vellum_diff::{diff_hunks, Config};

#[derive(arbitrary::Arbitrary, Debug)]
struct Input<'a> {
    before: &'a str,
    after: &'a str,
    threshold: u8,
    context: u8,
}

/// `diff_hunks` must never panic on arbitrary text, must be deterministic,
/// and its hunks must stay ordered and non-overlapping on the old side.
fn do_fuzz(
    Input {
        before,
        after,
        threshold,
        context,
    }: Input<'_>,
) {
    let config = Config::new(threshold as f64 / 255.0, (context % 8) as i64).unwrap();

    let diff = match diff_hunks(before, after, &config) {
        Ok(diff) => diff,
        Err(_) => return,
    };
    let again = diff_hunks(before, after, &config).unwrap();
    assert_eq!(diff, again);

    for pair in diff.hunks.windows(2) {
        let end = pair[0].old_range.start + pair[0].old_range.len;
        assert!(end <= pair[1].old_range.start);
    }

    if before == after {
        assert!(diff.is_empty());
    }
}

fuzz_target!(|input: Input<'_>| {
    do_fuzz(input);
});
