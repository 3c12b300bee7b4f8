//! Maximal-alphabetic-run tokenizer.

use super::token::Word;

/// A tokenizer that yields maximal runs of alphabetic characters.
#[derive(Clone, Debug, Default)]
pub struct WordTokenizer;

impl WordTokenizer {
    /// Create a new word tokenizer.
    pub fn new() -> Self {
        WordTokenizer
    }

    /// Find the next word in `line` at or after byte offset `pos`.
    ///
    /// Skips a run of non-alphabetic characters, then collects the following
    /// maximal alphabetic run. Returns the word and the offset just past it,
    /// or `None` when the rest of the line holds no alphabetic character.
    pub fn next_word<'a>(&self, line: &'a str, pos: usize) -> Option<(Word<'a>, usize)> {
        let mut chars = line[pos..].char_indices();

        // Skip the separator run.
        let (start_rel, first) = chars.find(|(_, c)| c.is_alphabetic())?;
        let start = pos + start_rel;

        // Collect the maximal alphabetic run.
        let mut end = start + first.len_utf8();
        for (i, c) in chars {
            if !c.is_alphabetic() {
                break;
            }
            end = pos + i + c.len_utf8();
        }

        Some((Word::new(line, start, end), end))
    }

    /// A restartable iterator over all words of `line`, in order.
    pub fn words<'a>(&self, line: &'a str) -> Words<'a> {
        Words { line, pos: 0 }
    }
}

/// Lazy per-line word iterator returned by [`WordTokenizer::words`].
#[derive(Debug, Clone)]
pub struct Words<'a> {
    line: &'a str,
    pos: usize,
}

impl<'a> Iterator for Words<'a> {
    type Item = Word<'a>;

    fn next(&mut self) -> Option<Word<'a>> {
        let (word, next_pos) = WordTokenizer.next_word(self.line, self.pos)?;
        self.pos = next_pos;
        Some(word)
    }
}
