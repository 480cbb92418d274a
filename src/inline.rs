//! The inline refiner: decides whether a deleted/inserted line pair
//! is similar enough to show as one refined `Replace` line, and if so
//! produces the coalesced [`InlineChunk`] sequence.

use std::borrow::Cow;

use crate::model::{Edit, InlineChunk, InlineKind};
use crate::myers;
use crate::token::tokenize;

/// Character-based similarity ratio `2*M / (|A|+|B|)`, `M` the LCS length
/// over characters. Two empty lines are considered identical (ratio 1.0).
pub(crate) fn similarity(old: &str, new: &str) -> f64 {
    let a: Vec<char> = old.chars().collect();
    let b: Vec<char> = new.chars().collect();
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    let lcs = lcs_length(&a, &b);
    (2 * lcs) as f64 / (a.len() + b.len()) as f64
}

fn lcs_length(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut cur = vec![0usize; b.len() + 1];
    for &ac in a {
        for (j, &bc) in b.iter().enumerate() {
            cur[j + 1] = if ac == bc {
                prev[j] + 1
            } else {
                prev[j + 1].max(cur[j])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[b.len()]
}

/// Offers `old`/`new` to the refiner. Returns `None` if the pair falls
/// below `threshold` (caller should keep them as separate Delete/Insert
/// lines); otherwise the coalesced inline chunks plus whether the
/// token-level Myers search hit `max_d`.
pub(crate) fn refine<'a>(
    old: &'a str,
    new: &'a str,
    threshold: f64,
    max_d: Option<usize>,
) -> Option<(Vec<InlineChunk<'a>>, bool)> {
    if similarity(old, new) < threshold {
        return None;
    }

    let old_tokens = tokenize(old);
    let new_tokens = tokenize(new);
    let (edits, approx) = myers::diff(&old_tokens, &new_tokens, max_d);

    let mut chunks: Vec<InlineChunk<'a>> = Vec::new();
    for e in edits {
        let (kind, value) = match e {
            Edit::Equal { a_idx, .. } => (InlineKind::Equal, old_tokens[a_idx].as_str()),
            Edit::Delete { a_idx } => (InlineKind::Delete, old_tokens[a_idx].as_str()),
            Edit::Insert { b_idx } => (InlineKind::Insert, new_tokens[b_idx].as_str()),
        };
        push_coalesced(&mut chunks, kind, value);
    }

    Some((chunks, approx))
}

/// Appends `value` to `chunks`, merging into the previous chunk if it has
/// the same `kind` (tokens of a coalesced run are not contiguous in the
/// source line once the whitespace between them was discarded, so merging
/// requires an owned `String`).
fn push_coalesced<'a>(chunks: &mut Vec<InlineChunk<'a>>, kind: InlineKind, value: &'a str) {
    if let Some(last) = chunks.last_mut() {
        if last.kind == kind {
            let mut merged = last.value.to_string();
            merged.push_str(value);
            last.value = Cow::Owned(merged);
            return;
        }
    }
    chunks.push(InlineChunk {
        kind,
        value: Cow::Borrowed(value),
    });
}
