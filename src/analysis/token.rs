//! The word token produced by the tokenizer.

/// A word extracted from a line: a borrowed view plus its byte span.
///
/// `start` and `end` are byte offsets into the source line, always on char
/// boundaries, so `&line[start..end]` is exactly `text`. Words are consumed
/// immediately by a dictionary lookup or a prompt; they are never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word<'a> {
    /// The word text as it appears in the line, original casing intact.
    pub text: &'a str,
    /// Byte offset of the first character.
    pub start: usize,
    /// Byte offset one past the last character.
    pub end: usize,
}

impl<'a> Word<'a> {
    /// Create a word from a line and a byte span.
    pub fn new(line: &'a str, start: usize, end: usize) -> Self {
        Word {
            text: &line[start..end],
            start,
            end,
        }
    }

    /// The lowercase-folded copy used as the dictionary lookup key.
    ///
    /// The line's original casing is left untouched; only the lookup key is
    /// folded.
    pub fn folded(&self) -> String {
        self.text.to_lowercase()
    }
}
