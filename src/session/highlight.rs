//! Highlighting of misspelled words in prompt context.

/// Trait for marking a misspelled word when a line is shown to the operator.
pub trait Highlighter {
    /// Render `word` in its highlighted form.
    fn highlight(&self, word: &str) -> String;
}

/// Highlights by wrapping the word in the red/reset SGR escape sequences.
#[derive(Clone, Debug, Default)]
pub struct AnsiHighlighter;

impl Highlighter for AnsiHighlighter {
    fn highlight(&self, word: &str) -> String {
        format!("\x1b[31m{word}\x1b[0m")
    }
}

/// Pass-through highlighter for non-terminal and test contexts.
#[derive(Clone, Debug, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, word: &str) -> String {
        word.to_string()
    }
}
