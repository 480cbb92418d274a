#![no_main]

use libfuzzer_sys::arbitrary;
use libfuzzer_sys::fuzz_target;
use vellum_diff::{diff_hunks, render, Config, PlainPrinter};

const VALID_DIFF_LINE_PREFIXES: [char; 3] = [' ', '+', '-'];

#[derive(arbitrary::Arbitrary, Debug)]
struct Input<'a> {
    before: &'a str,
    after: &'a str,
    context_len: u8,
}

/// The plain-text renderer's output, ignoring `@@ ... @@` headers, must
/// only ever produce lines prefixed with ` `, `+` or `-`.
fn do_fuzz(
    Input {
        before,
        after,
        context_len,
    }: Input<'_>,
) {
    let config = Config::new(0.5, (context_len % 8) as i64).unwrap();
    let diff = match diff_hunks(before, after, &config) {
        Ok(diff) => diff,
        Err(_) => return,
    };
    let output = render(&diff, &PlainPrinter);

    for line in output.lines() {
        if line.starts_with("@@") {
            continue;
        }
        if let Some(first) = line.chars().next() {
            assert!(
                VALID_DIFF_LINE_PREFIXES.contains(&first),
                "invalid diff line prefix {first:?} in {line:?}"
            );
        }
    }
}

fuzz_target!(|input: Input<'_>| {
    do_fuzz(input);
});
