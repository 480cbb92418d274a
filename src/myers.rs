//! The greedy Myers shortest-edit-script search.
//!
//! Unlike a linear-space divide-and-conquer Myers search (which recurses
//! over a "middle snake" to bound memory for huge files), this engine keeps
//! the full per-`D` trace so it can backtrack a concrete script directly.
//! That is the right trade-off here: the engine only ever runs over a
//! single line's tokens or a single patience interval's lines, never whole
//! files, so `D` stays small. The per-`D` furthest-reaching table is a flat
//! `Vec<i32>` indexed by `k + offset`, not a hashmap keyed by `k`.

use crate::model::Edit;

/// Computes a shortest edit script turning `a` into `b`.
///
/// `max_d` caps the number of search rounds; `None` means "no cap" (the
/// exact script is always found, in the worst case after `a.len() +
/// b.len()` rounds). When the cap is hit before the search completes, a
/// valid but possibly non-minimal script is still returned, and the second
/// return value is `true`.
pub(crate) fn diff<T: PartialEq + Copy>(a: &[T], b: &[T], max_d: Option<usize>) -> (Vec<Edit>, bool) {
    let n = a.len() as i32;
    let m = b.len() as i32;

    if n == 0 {
        return ((0..m as usize).map(|b_idx| Edit::Insert { b_idx }).collect(), false);
    }
    if m == 0 {
        return ((0..n as usize).map(|a_idx| Edit::Delete { a_idx }).collect(), false);
    }

    let max = (n + m) as usize;
    let cap = max_d.map(|d| d.min(max)).unwrap_or(max);
    let offset = max as i32;

    let mut v = vec![0i32; 2 * max + 1];
    let mut trace: Vec<Vec<i32>> = Vec::with_capacity(cap + 1);
    let mut found_at: Option<usize> = None;

    'search: for d in 0..=cap {
        trace.push(v.clone());
        let d_i = d as i32;
        let mut k = -d_i;
        while k <= d_i {
            let idx = (k + offset) as usize;
            let mut x = if k == -d_i || (k != d_i && v[idx - 1] < v[idx + 1]) {
                v[idx + 1]
            } else {
                v[idx - 1] + 1
            };
            let mut y = x - k;
            while x < n && y < m && a[x as usize] == b[y as usize] {
                x += 1;
                y += 1;
            }
            v[idx] = x;
            if x >= n && y >= m {
                found_at = Some(d);
                break 'search;
            }
            k += 2;
        }
    }

    match found_at {
        Some(d) => (backtrack(&trace, d, offset, n, m), false),
        None => {
            let (end_x, end_y) = furthest_reaching(&v, cap, offset, n, m);
            let mut script = backtrack(&trace, cap, offset, end_x, end_y);
            script.extend((end_x..n).map(|i| Edit::Delete { a_idx: i as usize }));
            script.extend((end_y..m).map(|j| Edit::Insert { b_idx: j as usize }));
            (script, true)
        }
    }
}

/// Picks the diagonal endpoint closest to `(n, m)` among those reached by
/// the last completed round, for the D-cap fallback.
fn furthest_reaching(v: &[i32], d: usize, offset: i32, n: i32, m: i32) -> (i32, i32) {
    let d_i = d as i32;
    let mut best = (0i32, 0i32);
    let mut best_gap = i32::MAX;
    let mut k = -d_i;
    while k <= d_i {
        let idx = (k + offset) as usize;
        let x = v[idx].min(n);
        let y = (x - k).clamp(0, m);
        let gap = (n - x) + (m - y);
        if gap < best_gap {
            best_gap = gap;
            best = (x, y);
        }
        k += 2;
    }
    best
}

/// Reconstructs the script from `(0, 0)` to `(end_x, end_y)`, walking the
/// `D`-trace backwards from round `d`. Standard Myers backtrack: at each
/// round, the diagonal the search arrived from is the one preferring
/// deletions over insertions on ties, matching the forward search's own
/// preference.
fn backtrack(trace: &[Vec<i32>], mut d: usize, offset: i32, end_x: i32, end_y: i32) -> Vec<Edit> {
    let mut ops = Vec::new();
    let mut x = end_x;
    let mut y = end_y;

    loop {
        let v = &trace[d];
        let k = x - y;
        let d_i = d as i32;
        let prev_k = if k == -d_i || (k != d_i && v[(k - 1 + offset) as usize] < v[(k + 1 + offset) as usize]) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = v[(prev_k + offset) as usize];
        let prev_y = prev_x - prev_k;

        while x > prev_x && y > prev_y {
            ops.push(Edit::Equal {
                a_idx: (x - 1) as usize,
                b_idx: (y - 1) as usize,
            });
            x -= 1;
            y -= 1;
        }

        if d > 0 {
            if x == prev_x {
                ops.push(Edit::Insert { b_idx: (y - 1) as usize });
            } else {
                ops.push(Edit::Delete { a_idx: (x - 1) as usize });
            }
            x = prev_x;
            y = prev_y;
        }

        if d == 0 {
            break;
        }
        d -= 1;
    }

    ops.reverse();
    ops
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn apply(a: &[char], b: &[char], script: &[Edit]) -> String {
        script
            .iter()
            .filter_map(|e| match e {
                Edit::Equal { b_idx, .. } => Some(b[*b_idx]),
                Edit::Insert { b_idx } => Some(b[*b_idx]),
                Edit::Delete { .. } => None,
            })
            .collect()
    }

    fn non_equal_count(script: &[Edit]) -> usize {
        script
            .iter()
            .filter(|e| !matches!(e, Edit::Equal { .. }))
            .count()
    }

    #[test]
    fn both_empty() {
        let (script, approx) = diff::<char>(&[], &[], None);
        assert!(script.is_empty());
        assert!(!approx);
    }

    #[test]
    fn pure_insertion() {
        let a = chars("");
        let b = chars("abc");
        let (script, _) = diff(&a, &b, None);
        assert_eq!(script.len(), 3);
        assert!(script.iter().all(|e| matches!(e, Edit::Insert { .. })));
    }

    #[test]
    fn pure_deletion() {
        let a = chars("abc");
        let b = chars("");
        let (script, _) = diff(&a, &b, None);
        assert_eq!(script.len(), 3);
        assert!(script.iter().all(|e| matches!(e, Edit::Delete { .. })));
    }

    #[test]
    fn reconstructs_b_from_equal_and_insert() {
        let a = chars("ABCABBA");
        let b = chars("CBABAC");
        let (script, approx) = diff(&a, &b, None);
        assert!(!approx);
        assert_eq!(apply(&a, &b, &script), "CBABAC");
    }

    #[test]
    fn minimal_edit_count_matches_known_distance() {
        // classic example from Myers' paper: distance 5
        let a = chars("ABCABBA");
        let b = chars("CBABAC");
        let (script, _) = diff(&a, &b, None);
        assert_eq!(non_equal_count(&script), 5);
    }

    #[test]
    fn d_cap_yields_valid_but_approximate_script() {
        let a = chars("abcdefgh");
        let b = chars("hgfedcba");
        let (script, approx) = diff(&a, &b, Some(1));
        assert!(approx);
        // still a valid script: reconstructs b fully
        assert_eq!(apply(&a, &b, &script), "hgfedcba");
    }

    #[test]
    fn identical_inputs_have_no_edits() {
        let a = chars("same text");
        let (script, approx) = diff(&a, &a, None);
        assert!(!approx);
        assert!(script.iter().all(|e| matches!(e, Edit::Equal { .. })));
    }
}
