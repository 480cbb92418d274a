//! Splits a line into the words and punctuation tokens the inline refiner
//! diffs: a maximal run of word characters (Unicode letters/digits plus
//! `_`), or a single non-word, non-whitespace codepoint. Whitespace is
//! skipped and never produces a token.

/// A single lexical unit produced by [`tokenize`], borrowed from the line
/// it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a>(
    /// The token's text.
    pub &'a str,
);

impl<'a> Token<'a> {
    /// The token's text.
    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Tokenizes `s` into a sequence of word and punctuation tokens.
///
/// The empty string yields the empty sequence. Determinism: identical
/// input always yields a bit-identical output sequence.
pub fn tokenize(s: &str) -> Vec<Token<'_>> {
    let mut out = Vec::new();
    let mut chars = s.char_indices().peekable();
    while let Some(&(start, c)) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
            continue;
        }
        if is_word_char(c) {
            let mut end = start + c.len_utf8();
            chars.next();
            while let Some(&(i, c2)) = chars.peek() {
                if !is_word_char(c2) {
                    break;
                }
                end = i + c2.len_utf8();
                chars.next();
            }
            out.push(Token(&s[start..end]));
        } else {
            let end = start + c.len_utf8();
            out.push(Token(&s[start..end]));
            chars.next();
        }
    }
    out
}
