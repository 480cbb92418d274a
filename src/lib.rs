//! `vellum-diff` is a text-differencing engine that computes structured,
//! human-readable differences between two text inputs at three levels of
//! granularity: whole lines, tokens within a line, and grouped contiguous
//! change regions ("hunks") carrying inline refinement.
//!
//! The engine is meant as a library core usable by command-line tools,
//! editor integrations and viewers. It does not do file I/O, terminal
//! coloring or argument parsing; those are collaborators built on top of
//! the types and operations in this crate.
//!
//! # Overview
//!
//! [`tokenize`] splits a line into words and punctuation for inline
//! diffing. [`diff_tokens`]/[`diff_line`] run the Myers shortest-edit-
//! script search over tokens. [`diff_hunks`] is the top-level entry
//! point: it runs a patience-style line diff, offers adjacent
//! delete/insert line pairs to the inline refiner, and groups the result
//! into context-bounded [`Hunk`]s.
//!
//! ```
//! # use vellum_diff::{diff_hunks, Config};
//! let old = "fn foo() {\n    let x = 1;\n}\n";
//! let new = "fn foo() {\n    let x = 2;\n}\n";
//! let diff = diff_hunks(old, new, &Config::default()).unwrap();
//! assert_eq!(diff.hunks.len(), 1);
//! assert!(diff.hunks[0].lines.iter().any(|l| !l.inline.is_empty()));
//! ```

#![deny(missing_docs)]

mod config;
mod error;
mod hunk;
mod inline;
mod intern;
mod model;
mod myers;
mod patience;
#[cfg(feature = "unified_diff")]
mod printer;
mod token;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::DiffError;
pub use model::{Diff, DiffLine, Hunk, InlineChunk, InlineKind, LineDiffKind, Range};
#[cfg(feature = "unified_diff")]
pub use printer::{render, LinePrinter, PlainPrinter};
pub use token::{tokenize, Token};

use model::Edit;

/// Runs the Myers shortest-edit-script search over two token
/// sequences, returning the script in order as `(kind, token)` pairs. No
/// `D`-cap: the exact script is always found.
pub fn diff_tokens<'a>(a: &[Token<'a>], b: &[Token<'a>]) -> Vec<(InlineKind, Token<'a>)> {
    let (edits, _approx) = myers::diff(a, b, None);
    edits
        .into_iter()
        .map(|e| match e {
            Edit::Equal { a_idx, .. } => (InlineKind::Equal, a[a_idx]),
            Edit::Delete { a_idx } => (InlineKind::Delete, a[a_idx]),
            Edit::Insert { b_idx } => (InlineKind::Insert, b[b_idx]),
        })
        .collect()
}

/// Tokenizes `a` and `b` and runs [`diff_tokens`] over the result.
pub fn diff_line<'a>(a: &'a str, b: &'a str) -> Vec<(InlineKind, Token<'a>)> {
    let ta = tokenize(a);
    let tb = tokenize(b);
    diff_tokens(&ta, &tb)
}

/// Computes the structured diff between `old` and `new`: a
/// patience line diff, refined where similar replace pairs clear
/// `config.threshold`, grouped into hunks bounded by `config.context`
/// unchanged lines.
///
/// `old`/`new` are split on `\n`; a trailing newline does not produce a
/// trailing empty line. This is the only entry point that can fail: both
/// `threshold` and `context` are already validated by the time they reach
/// here, so the only error surface lives in [`Config::new`].
pub fn diff_hunks<'a>(old: &'a str, new: &'a str, config: &Config) -> Result<Diff<'a>, DiffError> {
    if !(0.0..=1.0).contains(&config.threshold) {
        return Err(DiffError::InvalidThreshold(config.threshold));
    }
    Ok(hunk::build(old, new, config))
}

#[cfg(test)]
mod lib_tests {
    use super::*;

    #[test]
    fn word_level_inline_diff_identifies_changed_and_shared_words() {
        let script = diff_line("I love writing code", "I enjoy writing Python code");
        let rendered: Vec<(InlineKind, &str)> =
            script.iter().map(|(k, t)| (*k, t.as_str())).collect();
        assert_eq!(
            rendered,
            vec![
                (InlineKind::Equal, "I"),
                (InlineKind::Delete, "love"),
                (InlineKind::Insert, "enjoy"),
                (InlineKind::Equal, "writing"),
                (InlineKind::Insert, "Python"),
                (InlineKind::Equal, "code"),
            ]
        );
    }

    #[test]
    fn identical_text_has_zero_hunks() {
        let diff = diff_hunks("a\nb\nc", "a\nb\nc", &Config::default()).unwrap();
        assert!(diff.is_empty());
    }

    #[test]
    fn invalid_threshold_is_rejected_before_computing_anything() {
        let bad = Config {
            threshold: 2.0,
            ..Config::default()
        };
        assert_eq!(
            diff_hunks("a", "b", &bad),
            Err(DiffError::InvalidThreshold(2.0))
        );
    }

    #[test]
    fn determinism_same_inputs_same_output() {
        let a = diff_hunks("a\nb\nc", "a\nx\nc", &Config::default()).unwrap();
        let b = diff_hunks("a\nb\nc", "a\nx\nc", &Config::default()).unwrap();
        assert_eq!(a, b);
    }
}
