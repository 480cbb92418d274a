//! The hunk builder: turns the patience engine's line-level edit
//! script into a [`Diff`] of [`Hunk`]s, fusing adjacent delete/insert runs
//! into (optionally refined) `Replace` lines and bounding each hunk by a
//! configurable context window.

use std::collections::VecDeque;

use crate::config::Config;
use crate::inline;
use crate::model::{Diff, DiffLine, Edit, Hunk, Range};
use crate::patience;

fn split_lines(s: &str) -> Vec<&str> {
    if s.is_empty() {
        return Vec::new();
    }
    let mut lines: Vec<&str> = s.split('\n').collect();
    if s.ends_with('\n') {
        lines.pop();
    }
    lines
}

/// Computes the full structured diff between `old` and `new`.
pub(crate) fn build<'a>(old: &'a str, new: &'a str, config: &Config) -> Diff<'a> {
    let old_lines = split_lines(old);
    let new_lines = split_lines(new);

    let (edits, mut approximate) = patience::diff_lines(&old_lines, &new_lines, config.max_d);
    let (lines, replace_approx) = fuse_replaces(&edits, &old_lines, &new_lines, config);
    approximate |= replace_approx;

    let hunks = group_into_hunks(lines, config.context as usize);
    Diff { hunks, approximate }
}

/// Walks the flat edit script, pairing consecutive delete runs with
/// immediately following insert runs positionally (1st↔1st, 2nd↔2nd, ...)
/// and offering each pair to the inline refiner; the rest become plain
/// `Equal`/`Delete`/`Insert` lines.
///
/// Pairs that don't refine are not emitted immediately: their `Delete`
/// and `Insert` lines are buffered separately and only flushed (deletes
/// before inserts) once a refined pair interrupts the run, or at its end.
/// This keeps a fully-unrefined run in its original delete-run-then-
/// insert-run shape instead of interleaving `Delete`/`Insert` per pair.
fn fuse_replaces<'a>(
    edits: &[Edit],
    old_lines: &[&'a str],
    new_lines: &[&'a str],
    config: &Config,
) -> (Vec<DiffLine<'a>>, bool) {
    let mut out = Vec::with_capacity(edits.len());
    let mut approx = false;
    let mut i = 0;

    while i < edits.len() {
        match edits[i] {
            Edit::Equal { a_idx, b_idx } => {
                out.push(DiffLine::equal(
                    (a_idx + 1) as u32,
                    (b_idx + 1) as u32,
                    old_lines[a_idx],
                    new_lines[b_idx],
                ));
                i += 1;
            }
            Edit::Delete { .. } => {
                let delete_start = i;
                while i < edits.len() && matches!(edits[i], Edit::Delete { .. }) {
                    i += 1;
                }
                let insert_start = i;
                while i < edits.len() && matches!(edits[i], Edit::Insert { .. }) {
                    i += 1;
                }
                let deletes = &edits[delete_start..insert_start];
                let inserts = &edits[insert_start..i];
                let pair_count = deletes.len().min(inserts.len());

                let mut pending_deletes: Vec<DiffLine<'a>> = Vec::new();
                let mut pending_inserts: Vec<DiffLine<'a>> = Vec::new();

                for j in 0..pair_count {
                    let a_idx = match deletes[j] {
                        Edit::Delete { a_idx } => a_idx,
                        _ => unreachable!(),
                    };
                    let b_idx = match inserts[j] {
                        Edit::Insert { b_idx } => b_idx,
                        _ => unreachable!(),
                    };
                    let old_s = old_lines[a_idx];
                    let new_s = new_lines[b_idx];
                    match inline::refine(old_s, new_s, config.threshold, config.max_d) {
                        Some((chunks, sub_approx)) => {
                            approx |= sub_approx;
                            out.extend(pending_deletes.drain(..));
                            out.extend(pending_inserts.drain(..));
                            out.push(DiffLine::replace(
                                (a_idx + 1) as u32,
                                (b_idx + 1) as u32,
                                old_s,
                                new_s,
                                chunks,
                            ));
                        }
                        None => {
                            pending_deletes.push(DiffLine::delete((a_idx + 1) as u32, old_s));
                            pending_inserts.push(DiffLine::insert((b_idx + 1) as u32, new_s));
                        }
                    }
                }
                out.extend(pending_deletes.drain(..));
                out.extend(pending_inserts.drain(..));

                for d in &deletes[pair_count..] {
                    if let Edit::Delete { a_idx } = *d {
                        out.push(DiffLine::delete((a_idx + 1) as u32, old_lines[a_idx]));
                    }
                }
                for ins in &inserts[pair_count..] {
                    if let Edit::Insert { b_idx } = *ins {
                        out.push(DiffLine::insert((b_idx + 1) as u32, new_lines[b_idx]));
                    }
                }
            }
            Edit::Insert { b_idx } => {
                out.push(DiffLine::insert((b_idx + 1) as u32, new_lines[b_idx]));
                i += 1;
            }
        }
    }

    (out, approx)
}

/// One pass over the fused line stream: equal lines outside an open hunk
/// are buffered in a size-`context` ring; a non-equal line opens a hunk,
/// flushing that ring as leading context. Once `context + 1` consecutive
/// equal lines are seen inside an open hunk, it closes with only the
/// final `context` retained, and the overflow line re-seeds the ring for
/// whatever hunk comes next.
fn group_into_hunks<'a>(lines: Vec<DiffLine<'a>>, context: usize) -> Vec<Hunk<'a>> {
    let mut hunks = Vec::new();
    let mut pending: VecDeque<DiffLine<'a>> = VecDeque::new();
    let mut active: Option<Vec<DiffLine<'a>>> = None;
    let mut trailing_equal = 0usize;
    let mut last_old = 0u32;
    let mut last_new = 0u32;
    let mut hunk_old_before = 0u32;
    let mut hunk_new_before = 0u32;

    for line in lines {
        if !line.is_equal() {
            if active.is_none() {
                hunk_old_before = last_old;
                hunk_new_before = last_new;
                let mut hunk_lines: Vec<DiffLine<'a>> = pending.drain(..).collect();
                hunk_lines.push(line_with_update(line, &mut last_old, &mut last_new));
                active = Some(hunk_lines);
            } else {
                active
                    .as_mut()
                    .unwrap()
                    .push(line_with_update(line, &mut last_old, &mut last_new));
            }
            trailing_equal = 0;
        } else {
            match active.as_mut() {
                None => {
                    let line = line_with_update(line, &mut last_old, &mut last_new);
                    pending.push_back(line);
                    if pending.len() > context {
                        pending.pop_front();
                    }
                }
                Some(hunk_lines) => {
                    hunk_lines.push(line_with_update(line, &mut last_old, &mut last_new));
                    trailing_equal += 1;
                    if trailing_equal == context + 1 {
                        let overflow = hunk_lines.pop().unwrap();
                        let finished = active.take().unwrap();
                        hunks.push(finalize_hunk(finished, hunk_old_before, hunk_new_before));
                        pending.clear();
                        pending.push_back(overflow);
                        trailing_equal = 0;
                    }
                }
            }
        }
    }

    if let Some(finished) = active {
        hunks.push(finalize_hunk(finished, hunk_old_before, hunk_new_before));
    }

    hunks
}

fn line_with_update<'a>(line: DiffLine<'a>, last_old: &mut u32, last_new: &mut u32) -> DiffLine<'a> {
    if let Some(n) = line.old_line_no {
        *last_old = n;
    }
    if let Some(n) = line.new_line_no {
        *last_new = n;
    }
    line
}

fn finalize_hunk<'a>(lines: Vec<DiffLine<'a>>, old_before: u32, new_before: u32) -> Hunk<'a> {
    let mut old_min = None;
    let mut old_max = 0u32;
    let mut new_min = None;
    let mut new_max = 0u32;

    for line in &lines {
        if let Some(n) = line.old_line_no {
            old_min.get_or_insert(n);
            old_max = n;
        }
        if let Some(n) = line.new_line_no {
            new_min.get_or_insert(n);
            new_max = n;
        }
    }

    let old_range = match old_min {
        Some(min) => Range::new(min, old_max - min + 1),
        None => Range::new(old_before, 0),
    };
    let new_range = match new_min {
        Some(min) => Range::new(min, new_max - min + 1),
        None => Range::new(new_before, 0),
    };

    Hunk {
        old_range,
        new_range,
        lines,
    }
}
