//! The patience line-diff: peel common prefix/suffix, align on
//! lines that occur exactly once on both sides ("anchors"), pick the
//! longest increasing run of anchors via patience-sort, and recurse into
//! the gaps. An interval with no anchors falls back to line-level Myers
//! (the classic greedy search).
//!
//! The occurrence counting below (`select_anchors`) is the classic
//! patience-diff anchor selection, as ported from git's histogram diff:
//! find lines unique on both sides of the interval, then keep only an
//! order-preserving subsequence of them. Where the histogram family
//! typically extends a single lowest-occurrence-count line into a run,
//! this module solves a full longest-increasing-subsequence over every
//! unique common line via patience-sort piles, which admits more than one
//! disjoint anchor run per interval.

use crate::intern::{Id, Interner};
use crate::model::Edit;
use crate::myers;
use hashbrown::HashMap;

type AHashMap<K, V> = HashMap<K, V, ahash::RandomState>;

/// Diffs two line sequences, returning a script in document order.
pub(crate) fn diff_lines(old: &[&str], new: &[&str], max_d: Option<usize>) -> (Vec<Edit>, bool) {
    let mut interner = Interner::new(old.len() + new.len());
    let old_ids: Vec<Id> = old.iter().map(|&l| interner.intern(l)).collect();
    let new_ids: Vec<Id> = new.iter().map(|&l| interner.intern(l)).collect();
    diff_interval(&old_ids, &new_ids, 0, 0, max_d)
}

fn diff_interval(old: &[Id], new: &[Id], old_base: usize, new_base: usize, max_d: Option<usize>) -> (Vec<Edit>, bool) {
    // common-prefix / common-suffix peeling
    let mut start = 0;
    while start < old.len() && start < new.len() && old[start] == new[start] {
        start += 1;
    }
    let mut old_end = old.len();
    let mut new_end = new.len();
    while old_end > start && new_end > start && old[old_end - 1] == new[new_end - 1] {
        old_end -= 1;
        new_end -= 1;
    }

    let mut out = Vec::new();
    let mut approx = false;

    for i in 0..start {
        out.push(Edit::Equal {
            a_idx: old_base + i,
            b_idx: new_base + i,
        });
    }

    let inner_old = &old[start..old_end];
    let inner_new = &new[start..new_end];

    if !inner_old.is_empty() || !inner_new.is_empty() {
        match select_anchors(inner_old, inner_new) {
            Some(anchors) if !anchors.is_empty() => {
                let mut prev_old = 0;
                let mut prev_new = 0;
                for (old_pos, new_pos) in anchors {
                    let (sub, sub_approx) = diff_interval(
                        &inner_old[prev_old..old_pos],
                        &inner_new[prev_new..new_pos],
                        old_base + start + prev_old,
                        new_base + start + prev_new,
                        max_d,
                    );
                    out.extend(sub);
                    approx |= sub_approx;
                    out.push(Edit::Equal {
                        a_idx: old_base + start + old_pos,
                        b_idx: new_base + start + new_pos,
                    });
                    prev_old = old_pos + 1;
                    prev_new = new_pos + 1;
                }
                let (sub, sub_approx) = diff_interval(
                    &inner_old[prev_old..],
                    &inner_new[prev_new..],
                    old_base + start + prev_old,
                    new_base + start + prev_new,
                    max_d,
                );
                out.extend(sub);
                approx |= sub_approx;
            }
            _ => {
                let (edits, sub_approx) = myers::diff(inner_old, inner_new, max_d);
                approx |= sub_approx;
                for e in edits {
                    out.push(offset(e, old_base + start, new_base + start));
                }
            }
        }
    }

    for i in 0..(old.len() - old_end) {
        out.push(Edit::Equal {
            a_idx: old_base + old_end + i,
            b_idx: new_base + new_end + i,
        });
    }

    (out, approx)
}

fn offset(edit: Edit, old_base: usize, new_base: usize) -> Edit {
    match edit {
        Edit::Equal { a_idx, b_idx } => Edit::Equal {
            a_idx: a_idx + old_base,
            b_idx: b_idx + new_base,
        },
        Edit::Delete { a_idx } => Edit::Delete {
            a_idx: a_idx + old_base,
        },
        Edit::Insert { b_idx } => Edit::Insert {
            b_idx: b_idx + new_base,
        },
    }
}

/// Finds lines that occur exactly once on both sides of the interval (in
/// old-side order, each paired with its new-side position), then keeps
/// only the longest increasing run of new-side positions (patience-sort
/// LIS, ties broken toward the earliest new-side position by construction
/// of the algorithm below). Returns `None` only as a marker that there are
/// no candidate anchors at all, triggering the Myers fallback.
fn select_anchors(old: &[Id], new: &[Id]) -> Option<Vec<(usize, usize)>> {
    let mut old_counts: AHashMap<Id, u32> = HashMap::default();
    for &id in old {
        *old_counts.entry(id).or_insert(0) += 1;
    }
    let mut new_positions: AHashMap<Id, (u32, usize)> = HashMap::default();
    for (pos, &id) in new.iter().enumerate() {
        let entry = new_positions.entry(id).or_insert((0, 0));
        entry.0 += 1;
        entry.1 = pos;
    }

    let mut anchors = Vec::new();
    for (pos, &id) in old.iter().enumerate() {
        if old_counts.get(&id) != Some(&1) {
            continue;
        }
        if let Some(&(count, new_pos)) = new_positions.get(&id) {
            if count == 1 {
                anchors.push((pos, new_pos));
            }
        }
    }

    if anchors.is_empty() {
        return None;
    }

    Some(longest_increasing_subsequence(&anchors))
}

/// Patience-sort LIS over `anchors` by their `.1` (new-side position),
/// preserving the `.0`-order subsequence. Classic "piles + back-pointers"
/// construction: each element starts a new pile or tops the leftmost pile
/// whose current top is `>=` it, so among equal-length candidates the one
/// with the smallest possible tail (hence earliest new-side position) is
/// always kept.
fn longest_increasing_subsequence(anchors: &[(usize, usize)]) -> Vec<(usize, usize)> {
    let mut pile_tops: Vec<usize> = Vec::new();
    let mut back_ptr: Vec<Option<usize>> = vec![None; anchors.len()];

    for (i, &(_, new_pos)) in anchors.iter().enumerate() {
        let pile = pile_tops.partition_point(|&idx| anchors[idx].1 < new_pos);
        back_ptr[i] = if pile > 0 { Some(pile_tops[pile - 1]) } else { None };
        if pile == pile_tops.len() {
            pile_tops.push(i);
        } else {
            pile_tops[pile] = i;
        }
    }

    let mut seq = Vec::new();
    let mut cur = pile_tops.last().copied();
    while let Some(idx) = cur {
        seq.push(anchors[idx]);
        cur = back_ptr[idx];
    }
    seq.reverse();
    seq
}
