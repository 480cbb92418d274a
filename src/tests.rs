//! Integration tests against the public API: end-to-end scenarios plus
//! property-based checks of the engine's invariants.

use crate::{diff_hunks, diff_line, Config, InlineKind, LineDiffKind};
use proptest::prelude::*;

fn lines(diff: &crate::Diff<'_>) -> Vec<(LineDiffKind, Option<u32>, Option<u32>)> {
    diff.hunks
        .iter()
        .flat_map(|h| &h.lines)
        .map(|l| (l.kind, l.old_line_no, l.new_line_no))
        .collect()
}

#[test]
fn word_and_punctuation_substitution_produces_mixed_inline_script() {
    let script = diff_line("I love writing code", "I enjoy writing Python code");
    let kinds: Vec<InlineKind> = script.iter().map(|(k, _)| *k).collect();
    assert_eq!(
        kinds,
        vec![
            InlineKind::Equal,
            InlineKind::Delete,
            InlineKind::Insert,
            InlineKind::Equal,
            InlineKind::Insert,
            InlineKind::Equal,
        ]
    );
}

#[test]
fn single_char_replace_in_call_becomes_one_refined_replace_line() {
    let diff = diff_hunks(
        "result = f(x=1, y=2)",
        "result = f(x=1, y=3)",
        &Config::default(),
    )
    .unwrap();
    assert_eq!(diff.hunks.len(), 1);
    let replaces: Vec<_> = diff.hunks[0]
        .lines
        .iter()
        .filter(|l| l.kind == LineDiffKind::Replace)
        .collect();
    assert_eq!(replaces.len(), 1);
    assert!(!replaces[0].inline.is_empty());
}

#[test]
fn identical_multiline_text_produces_zero_hunks() {
    let diff = diff_hunks("a\nb\nc", "a\nb\nc", &Config::default()).unwrap();
    assert_eq!(diff.hunks.len(), 0);
}

#[test]
fn pure_insertion_gets_zero_length_old_side_range() {
    let diff = diff_hunks("a\nc", "a\nb\nc", &Config::default()).unwrap();
    assert_eq!(diff.hunks.len(), 1);
    let h = &diff.hunks[0];
    assert_eq!(h.old_range.to_string(), "1,2");
    assert_eq!(h.new_range.to_string(), "1,3");
    assert_eq!(
        lines(&diff),
        vec![
            (LineDiffKind::Equal, Some(1), Some(1)),
            (LineDiffKind::Insert, None, Some(2)),
            (LineDiffKind::Equal, Some(2), Some(3)),
        ]
    );
}

#[test]
fn pure_deletion_gets_zero_length_new_side_range() {
    let diff = diff_hunks("a\nb\nc", "a\nc", &Config::default()).unwrap();
    assert_eq!(diff.hunks.len(), 1);
    let h = &diff.hunks[0];
    assert_eq!(h.old_range.to_string(), "1,3");
    assert_eq!(h.new_range.to_string(), "1,2");
    assert_eq!(
        lines(&diff),
        vec![
            (LineDiffKind::Equal, Some(1), Some(1)),
            (LineDiffKind::Delete, Some(2), None),
            (LineDiffKind::Equal, Some(3), Some(2)),
        ]
    );
}

#[test]
fn disjoint_content_is_not_refined_at_default_threshold() {
    let diff = diff_hunks("a\nb\nc", "x\ny\nz", &Config::default()).unwrap();
    assert_eq!(diff.hunks.len(), 1);
    let kinds: Vec<_> = diff.hunks[0].lines.iter().map(|l| l.kind).collect();
    assert_eq!(
        kinds,
        vec![
            LineDiffKind::Delete,
            LineDiffKind::Delete,
            LineDiffKind::Delete,
            LineDiffKind::Insert,
            LineDiffKind::Insert,
            LineDiffKind::Insert,
        ]
    );
}

proptest! {
    /// Equal+Insert tokens in order reconstruct `b`'s tokenization;
    /// Equal+Delete tokens in order reconstruct `a`'s.
    #[test]
    fn token_script_round_trips_both_sides(a in "[a-zA-Z0-9_ .,:;()\\[\\]=+\\-]{0,40}", b in "[a-zA-Z0-9_ .,:;()\\[\\]=+\\-]{0,40}") {
        let script = diff_line(&a, &b);
        let reconstructed_b: String = script
            .iter()
            .filter(|(k, _)| *k != InlineKind::Delete)
            .map(|(_, t)| t.as_str())
            .collect();
        let reconstructed_a: String = script
            .iter()
            .filter(|(k, _)| *k != InlineKind::Insert)
            .map(|(_, t)| t.as_str())
            .collect();
        let expected_b: String = crate::tokenize(&b).iter().map(|t| t.as_str()).collect();
        let expected_a: String = crate::tokenize(&a).iter().map(|t| t.as_str()).collect();
        prop_assert_eq!(reconstructed_b, expected_b);
        prop_assert_eq!(reconstructed_a, expected_a);
    }

    /// Diffing a text against itself always yields zero hunks.
    #[test]
    fn identical_input_has_zero_hunks(s in "[a-zA-Z0-9_ \n]{0,80}") {
        let diff = diff_hunks(&s, &s, &Config::default()).unwrap();
        prop_assert!(diff.hunks.is_empty());
    }

    /// Every old/new line number that shows up in the hunks stays within
    /// the bounds of the corresponding input.
    #[test]
    fn line_numbers_in_hunks_stay_in_bounds(
        a in prop::collection::vec("[a-z]{1,3}", 0..8),
        b in prop::collection::vec("[a-z]{1,3}", 0..8),
    ) {
        let old = a.join("\n");
        let new = b.join("\n");
        let diff = diff_hunks(&old, &new, &Config::default()).unwrap();
        let mut old_nos: Vec<u32> = diff.hunks.iter().flat_map(|h| &h.lines).filter_map(|l| l.old_line_no).collect();
        let mut new_nos: Vec<u32> = diff.hunks.iter().flat_map(|h| &h.lines).filter_map(|l| l.new_line_no).collect();
        old_nos.sort_unstable();
        new_nos.sort_unstable();
        old_nos.dedup();
        new_nos.dedup();
        prop_assert!(old_nos.iter().all(|&n| n >= 1 && n <= a.len() as u32));
        prop_assert!(new_nos.iter().all(|&n| n >= 1 && n <= b.len() as u32));
    }

    /// Hunks come out ordered by old-side start with no overlap.
    #[test]
    fn hunks_are_disjoint_and_sorted(
        a in prop::collection::vec("[a-z]{1,3}", 0..12),
        b in prop::collection::vec("[a-z]{1,3}", 0..12),
    ) {
        let old = a.join("\n");
        let new = b.join("\n");
        let diff = diff_hunks(&old, &new, &Config::default()).unwrap();
        for pair in diff.hunks.windows(2) {
            let end_a = pair[0].old_range.start + pair[0].old_range.len;
            prop_assert!(end_a <= pair[1].old_range.start);
        }
    }

    /// For a refined replace, the non-delete chunks concatenate to the new
    /// line's non-whitespace characters and the non-insert chunks to the
    /// old line's.
    #[test]
    fn refined_chunks_cover_both_lines_exactly(a in "[a-zA-Z0-9 ]{1,20}", b in "[a-zA-Z0-9 ]{1,20}") {
        if let Some((chunks, _)) = crate::inline::refine(&a, &b, 0.0, None) {
            let new_side: String = chunks.iter().filter(|c| c.kind != InlineKind::Delete).map(|c| c.value.as_ref()).collect();
            let old_side: String = chunks.iter().filter(|c| c.kind != InlineKind::Insert).map(|c| c.value.as_ref()).collect();
            let expected_new: String = b.chars().filter(|c| !c.is_whitespace()).collect();
            let expected_old: String = a.chars().filter(|c| !c.is_whitespace()).collect();
            prop_assert_eq!(new_side, expected_new);
            prop_assert_eq!(old_side, expected_old);
        }
    }

    /// Diffing the same pair of inputs twice always produces the same diff.
    #[test]
    fn same_inputs_produce_the_same_diff(a in prop::collection::vec("[a-z]{1,3}", 0..10), b in prop::collection::vec("[a-z]{1,3}", 0..10)) {
        let old = a.join("\n");
        let new = b.join("\n");
        let d1 = diff_hunks(&old, &new, &Config::default()).unwrap();
        let d2 = diff_hunks(&old, &new, &Config::default()).unwrap();
        prop_assert_eq!(d1, d2);
    }
}
