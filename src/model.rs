//! The typed result of a diff: lines, hunks and the inline chunks attached
//! to refined replace lines.

use std::borrow::Cow;
use std::fmt;

/// A single low-level edit operation produced by [`crate::myers`] and
/// [`crate::patience`].
///
/// `Equal`/`Delete`/`Insert` carry the index of the element they refer to
/// in the respective input slice so that callers can recover the original
/// value without threading a second cursor alongside the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    /// `a[a_idx] == b[b_idx]`.
    Equal { a_idx: usize, b_idx: usize },
    /// `a[a_idx]` has no counterpart in `b`.
    Delete { a_idx: usize },
    /// `b[b_idx]` has no counterpart in `a`.
    Insert { b_idx: usize },
}

/// The kind of change a [`DiffLine`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineDiffKind {
    /// The line is present, unchanged, on both sides.
    Equal,
    /// The line only exists on the new side.
    Insert,
    /// The line only exists on the old side.
    Delete,
    /// A deleted and an inserted line were judged similar enough to be
    /// shown as one changed line, optionally with an inline diff.
    Replace,
}

/// The kind of an [`InlineChunk`] inside a refined [`DiffLine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    /// The token is shared between the old and new line.
    Equal,
    /// The token was inserted on the new line.
    Insert,
    /// The token was removed from the old line.
    Delete,
}

/// One token-level piece of an inline diff.
///
/// `value` borrows directly from the source line when a chunk is a single
/// token, and falls back to an owned `String` when the inline refiner
/// coalesces a run of consecutive same-kind tokens into one chunk (the two
/// source tokens are not contiguous in the original line once the
/// whitespace between them was discarded by the tokenizer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineChunk<'a> {
    /// Whether this chunk is shared, inserted or deleted.
    pub kind: InlineKind,
    /// The underlying text, including any punctuation the tokenizer split
    /// off as its own token. Whitespace between tokens is not retained.
    pub value: Cow<'a, str>,
}

/// An inclusive, 1-based `start,len` span, rendered the way `diff -u` hunk
/// headers render their old/new spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Range {
    /// First affected line number, or the line before an insertion point
    /// when `len == 0`.
    pub start: u32,
    /// Number of lines this range covers; `0` for a side with no lines
    /// (a pure insertion has `len == 0` on the old side).
    pub len: u32,
}

impl Range {
    /// Builds a range from a 1-based start and a line count.
    pub fn new(start: u32, len: u32) -> Self {
        Range { start, len }
    }
}

impl fmt::Display for Range {
    /// A side spanning exactly one line, or no lines at all, is rendered
    /// as a bare number; only a multi-line span gets the `start,len` form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.len <= 1 {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{},{}", self.start, self.len)
        }
    }
}

/// One line of diff output.
///
/// `old_line_no`/`old_content` are set iff `kind` is `Equal`, `Delete` or
/// `Replace`; `new_line_no`/`new_content` are set iff `kind` is `Equal`,
/// `Insert` or `Replace`. `inline` is non-empty only for a `Replace` line
/// whose similarity passed the configured threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffLine<'a> {
    /// What kind of change this line represents.
    pub kind: LineDiffKind,
    /// 1-based line number on the old side, if applicable.
    pub old_line_no: Option<u32>,
    /// 1-based line number on the new side, if applicable.
    pub new_line_no: Option<u32>,
    /// The line's text on the old side, if applicable.
    pub old_content: Option<&'a str>,
    /// The line's text on the new side, if applicable.
    pub new_content: Option<&'a str>,
    /// Inline token diff, present only on a refined `Replace` line.
    pub inline: Vec<InlineChunk<'a>>,
}

impl<'a> DiffLine<'a> {
    pub(crate) fn equal(old_no: u32, new_no: u32, old: &'a str, new: &'a str) -> Self {
        DiffLine {
            kind: LineDiffKind::Equal,
            old_line_no: Some(old_no),
            new_line_no: Some(new_no),
            old_content: Some(old),
            new_content: Some(new),
            inline: Vec::new(),
        }
    }

    pub(crate) fn delete(old_no: u32, old: &'a str) -> Self {
        DiffLine {
            kind: LineDiffKind::Delete,
            old_line_no: Some(old_no),
            new_line_no: None,
            old_content: Some(old),
            new_content: None,
            inline: Vec::new(),
        }
    }

    pub(crate) fn insert(new_no: u32, new: &'a str) -> Self {
        DiffLine {
            kind: LineDiffKind::Insert,
            old_line_no: None,
            new_line_no: Some(new_no),
            old_content: None,
            new_content: Some(new),
            inline: Vec::new(),
        }
    }

    pub(crate) fn replace(
        old_no: u32,
        new_no: u32,
        old: &'a str,
        new: &'a str,
        inline: Vec<InlineChunk<'a>>,
    ) -> Self {
        DiffLine {
            kind: LineDiffKind::Replace,
            old_line_no: Some(old_no),
            new_line_no: Some(new_no),
            old_content: Some(old),
            new_content: Some(new),
            inline,
        }
    }

    /// `true` for `Equal` lines, the only kind that counts toward neither
    /// the insertion nor the deletion total.
    pub fn is_equal(&self) -> bool {
        self.kind == LineDiffKind::Equal
    }
}

/// A contiguous changed region plus its surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<'a> {
    /// Span of old-side line numbers covered by `lines`.
    pub old_range: Range,
    /// Span of new-side line numbers covered by `lines`.
    pub new_range: Range,
    /// The lines making up this hunk, in order.
    pub lines: Vec<DiffLine<'a>>,
}

impl Hunk<'_> {
    /// The `@@ -old +new @@` header line conventionally printed above a
    /// hunk's body.
    pub fn header(&self) -> String {
        format!("@@ -{} +{} @@", self.old_range, self.new_range)
    }
}

/// The result of diffing two texts: an ordered, non-overlapping sequence
/// of hunks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Diff<'a> {
    /// The hunks, sorted by `old_range.start`.
    pub hunks: Vec<Hunk<'a>>,
    /// Set when any Myers computation feeding this diff hit its D-cap and
    /// therefore returned a valid but possibly non-minimal script.
    pub approximate: bool,
}

impl<'a> Diff<'a> {
    /// `true` if the two inputs produced no changes at all.
    pub fn is_empty(&self) -> bool {
        self.hunks.is_empty()
    }

    /// Total number of inserted lines (`Insert` + `Replace`) across all
    /// hunks.
    pub fn additions(&self) -> usize {
        self.hunks
            .iter()
            .flat_map(|h| &h.lines)
            .filter(|l| matches!(l.kind, LineDiffKind::Insert | LineDiffKind::Replace))
            .count()
    }

    /// Total number of removed lines (`Delete` + `Replace`) across all
    /// hunks.
    pub fn deletions(&self) -> usize {
        self.hunks
            .iter()
            .flat_map(|h| &h.lines)
            .filter(|l| matches!(l.kind, LineDiffKind::Delete | LineDiffKind::Replace))
            .count()
    }
}
