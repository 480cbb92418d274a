//! A library-internal, uncolored textual printer. This is a thin consumer
//! of the public data model, not a terminal application — the
//! `LinePrinter` trait is the seam a caller plugs a colored/ANSI-emitting
//! printer into; the bundled `PlainPrinter` never emits escapes.

use std::fmt::{self, Write};

use crate::model::{Diff, DiffLine, InlineKind, LineDiffKind};

/// Formats the pieces of a single [`DiffLine`]. A caller wanting terminal
/// coloring implements this trait instead of walking `Diff` by hand.
pub trait LinePrinter {
    /// Writes a full unchanged/deleted/inserted line's text, prefix
    /// already handled by the caller.
    fn write_plain(&self, out: &mut dyn Write, text: &str) -> fmt::Result {
        out.write_str(text)
    }

    /// Writes one inline chunk of a refined `Replace` line.
    fn write_inline(&self, out: &mut dyn Write, kind: InlineKind, value: &str) -> fmt::Result {
        let _ = kind;
        out.write_str(value)
    }
}

/// The default printer: no styling, no escapes, suitable for a non-TTY
/// target or as a base to wrap with coloring.
#[derive(Debug, Default, Clone, Copy)]
pub struct PlainPrinter;

impl LinePrinter for PlainPrinter {}

/// Renders `diff` as unified-style text: one `@@ -old +new @@` header per
/// hunk, `' '`/`'-'`/`'+'` line prefixes, `\n` line endings, no trailing
/// header or footer.
pub fn render<P: LinePrinter>(diff: &Diff<'_>, printer: &P) -> String {
    let mut out = String::new();
    for hunk in &diff.hunks {
        writeln!(out, "{}", hunk.header()).unwrap();
        for line in &hunk.lines {
            render_line(&mut out, line, printer);
        }
    }
    out
}

fn render_line<P: LinePrinter>(out: &mut String, line: &DiffLine<'_>, printer: &P) {
    match line.kind {
        LineDiffKind::Equal => {
            out.push(' ');
            printer
                .write_plain(out, line.old_content.unwrap_or_default())
                .unwrap();
            out.push('\n');
        }
        LineDiffKind::Delete => {
            out.push('-');
            printer
                .write_plain(out, line.old_content.unwrap_or_default())
                .unwrap();
            out.push('\n');
        }
        LineDiffKind::Insert => {
            out.push('+');
            printer
                .write_plain(out, line.new_content.unwrap_or_default())
                .unwrap();
            out.push('\n');
        }
        LineDiffKind::Replace => {
            if line.inline.is_empty() {
                out.push('-');
                printer
                    .write_plain(out, line.old_content.unwrap_or_default())
                    .unwrap();
                out.push('\n');
                out.push('+');
                printer
                    .write_plain(out, line.new_content.unwrap_or_default())
                    .unwrap();
                out.push('\n');
            } else {
                out.push('+');
                for chunk in &line.inline {
                    if chunk.kind != InlineKind::Delete {
                        printer.write_inline(out, chunk.kind, &chunk.value).unwrap();
                    }
                }
                out.push('\n');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{diff_hunks, Config};
    use expect_test::expect;

    #[test]
    fn pure_insertion_renders_standard_unified_header_and_prefixes() {
        let diff = diff_hunks("a\nc", "a\nb\nc", &Config::default()).unwrap();
        expect![[r#"
            @@ -1,2 +1,3 @@
             a
            +b
             c
        "#]]
        .assert_eq(&render(&diff, &PlainPrinter));
    }

    #[test]
    fn pure_deletion_renders_standard_unified_header_and_prefixes() {
        let diff = diff_hunks("a\nb\nc", "a\nc", &Config::default()).unwrap();
        expect![[r#"
            @@ -1,3 +1,2 @@
             a
            -b
             c
        "#]]
        .assert_eq(&render(&diff, &PlainPrinter));
    }

    #[test]
    fn refined_replace_only_emits_new_side_with_inline_highlighting() {
        let diff = diff_hunks(
            "fn foo() {\n    result = f(x=1, y=2)\n}\n",
            "fn foo() {\n    result = f(x=1, y=3)\n}\n",
            &Config::default(),
        )
        .unwrap();
        let rendered = render(&diff, &PlainPrinter);
        assert!(rendered.contains("+result=f(x=1,y=3)\n"));
        assert!(!rendered.contains("-    result = f(x=1, y=2)"));
    }

    #[test]
    fn identity_renders_empty_string() {
        let diff = diff_hunks("same\ntext", "same\ntext", &Config::default()).unwrap();
        assert_eq!(render(&diff, &PlainPrinter), "");
    }
}
