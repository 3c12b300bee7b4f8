//! The scan/prompt state machine over misspelled words.

use std::io::{BufRead, Write};

use crate::analysis::{Word, WordTokenizer};
use crate::dictionary::Dictionary;
use crate::error::Result;
use crate::session::highlight::Highlighter;
use crate::text::LineStore;

/// How a correction session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Every line was scanned; the caller should persist the store.
    Completed,
    /// The operator quit; in-memory edits are discarded and the original
    /// file must be left untouched.
    Aborted,
}

/// How one misspelled word was resolved at the prompt.
enum Resolution {
    Quit,
    Next,
    Add,
    Replace(String),
}

/// An interactive pass over the text, prompting on every word missing from
/// the dictionary.
///
/// Input, output, and highlighting are injected so tests can drive the
/// session with in-memory streams and a pass-through highlighter.
pub struct CorrectionSession<'a, R, W, H> {
    store: &'a mut LineStore,
    dictionary: &'a mut Dictionary,
    tokenizer: WordTokenizer,
    input: R,
    output: W,
    highlighter: H,
}

impl<'a, R: BufRead, W: Write, H: Highlighter> CorrectionSession<'a, R, W, H> {
    /// Create a session over a loaded store and a sorted dictionary.
    pub fn new(
        store: &'a mut LineStore,
        dictionary: &'a mut Dictionary,
        input: R,
        output: W,
        highlighter: H,
    ) -> Self {
        CorrectionSession {
            store,
            dictionary,
            tokenizer: WordTokenizer::new(),
            input,
            output,
            highlighter,
        }
    }

    /// Scan every line in order, prompting on each dictionary miss, until
    /// all lines are exhausted or the operator quits.
    pub fn run(mut self) -> Result<SessionOutcome> {
        let mut index = 0;
        while index < self.store.len() {
            let mut pos = 0;
            loop {
                // The line is copied out so the prompt can splice a
                // replacement back into the store mid-scan.
                let line = match self.store.get(index) {
                    Some(line) => line.to_string(),
                    None => break,
                };
                let Some((word, next_pos)) = self.tokenizer.next_word(&line, pos) else {
                    break;
                };

                let folded = word.folded();
                if self.dictionary.contains(&folded) {
                    pos = next_pos;
                    continue;
                }

                match self.prompt(index, &line, word)? {
                    Resolution::Quit => return Ok(SessionOutcome::Aborted),
                    Resolution::Next => pos = word.end,
                    Resolution::Add => {
                        self.dictionary.add(&folded);
                        pos = word.end;
                    }
                    Resolution::Replace(replacement) => {
                        let mut edited =
                            String::with_capacity(line.len() - word.text.len() + replacement.len());
                        edited.push_str(&line[..word.start]);
                        edited.push_str(&replacement);
                        edited.push_str(&line[word.end..]);
                        self.store.set(index, edited)?;
                        // Resume just past the splice; the replacement is
                        // not itself re-checked.
                        pos = word.start + replacement.len();
                    }
                }
            }
            index += 1;
        }
        Ok(SessionOutcome::Completed)
    }

    /// Show context and read commands until the word is resolved.
    ///
    /// Unrecognized input prints a notice and re-prompts; it is the only
    /// recoverable condition in the program. End of input counts as quit.
    fn prompt(&mut self, index: usize, line: &str, word: Word<'_>) -> Result<Resolution> {
        loop {
            self.show_context(index, line, word)?;
            write!(self.output, "(r)eplace, (a)dd, (n)ext or (q)uit: ")?;
            self.output.flush()?;

            let mut answer = String::new();
            if self.input.read_line(&mut answer)? == 0 {
                return Ok(Resolution::Quit);
            }
            let answer = answer.trim_end_matches(['\r', '\n']);

            let mut chars = answer.chars();
            match chars.next() {
                Some('q') => return Ok(Resolution::Quit),
                Some('n') => return Ok(Resolution::Next),
                Some('a') => return Ok(Resolution::Add),
                Some('r') => {
                    // The rest of the answer line is the replacement, one
                    // separating space stripped.
                    let rest = chars.as_str();
                    let replacement = rest.strip_prefix(' ').unwrap_or(rest);
                    return Ok(Resolution::Replace(replacement.to_string()));
                }
                _ => writeln!(self.output, "Unknown command")?,
            }
        }
    }

    /// Print the previous line (if any), the current line with the word
    /// highlighted, and the next line (if any).
    fn show_context(&mut self, index: usize, line: &str, word: Word<'_>) -> Result<()> {
        writeln!(self.output)?;
        if index > 0
            && let Some(previous) = self.store.get(index - 1)
        {
            writeln!(self.output, "{previous}")?;
        }
        writeln!(
            self.output,
            "{}{}{}",
            &line[..word.start],
            self.highlighter.highlight(word.text),
            &line[word.end..]
        )?;
        if let Some(next) = self.store.get(index + 1) {
            writeln!(self.output, "{next}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::highlight::PlainHighlighter;
    use std::io::Cursor;

    fn dictionary(words: &[&str]) -> Dictionary {
        let mut d = Dictionary::from_entries(words.iter().map(|w| w.to_string()).collect());
        d.sort();
        d
    }

    fn run_session(
        lines: &[&str],
        dict: &mut Dictionary,
        commands: &str,
    ) -> (LineStore, SessionOutcome, String) {
        let mut store = LineStore::from_lines(lines.iter().map(|l| l.to_string()).collect());
        let mut output = Vec::new();
        let outcome = CorrectionSession::new(
            &mut store,
            dict,
            Cursor::new(commands.as_bytes()),
            &mut output,
            PlainHighlighter,
        )
        .run()
        .unwrap();
        (store, outcome, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_clean_text_never_prompts() {
        let mut dict = dictionary(&["the", "fox"]);
        let (store, outcome, output) = run_session(&["The fox."], &mut dict, "");
        assert_eq!(outcome, SessionOutcome::Completed);
        assert_eq!(store.get(0), Some("The fox."));
        assert!(output.is_empty());
    }

    #[test]
    fn test_next_leaves_word_unchanged() {
        let mut dict = dictionary(&["the", "fox"]);
        let (store, outcome, _) = run_session(&["The qick fox."], &mut dict, "n\n");
        assert_eq!(outcome, SessionOutcome::Completed);
        assert_eq!(store.get(0), Some("The qick fox."));
        assert!(!dict.contains("qick"));
    }

    #[test]
    fn test_add_accepts_word_for_rest_of_run() {
        let mut dict = dictionary(&["the", "fox", "a", "dog"]);
        // "qick" appears twice; a single `a` must cover both.
        let (store, outcome, output) =
            run_session(&["The qick fox.", "A qick dog."], &mut dict, "a\n");
        assert_eq!(outcome, SessionOutcome::Completed);
        assert!(dict.contains("qick"));
        assert_eq!(store.get(0), Some("The qick fox."));
        // The second prompt is for "a"/"dog", not "qick" again.
        assert_eq!(output.matches("qick").count(), 1);
    }

    #[test]
    fn test_replace_splices_span() {
        let mut dict = dictionary(&["the", "fox"]);
        let (store, outcome, _) = run_session(&["The qick fox."], &mut dict, "r quick\n");
        assert_eq!(outcome, SessionOutcome::Completed);
        assert_eq!(store.get(0), Some("The quick fox."));
    }

    #[test]
    fn test_replacement_is_not_rechecked() {
        let mut dict = dictionary(&["the", "fox"]);
        // "wrng" is also missing from the dictionary, but scanning resumes
        // past the splice, so only "fox" remains to be checked.
        let (store, outcome, _) = run_session(&["The qick fox."], &mut dict, "r wrng\n");
        assert_eq!(outcome, SessionOutcome::Completed);
        assert_eq!(store.get(0), Some("The wrng fox."));
    }

    #[test]
    fn test_replace_with_shorter_then_scan_continues() {
        let mut dict = dictionary(&["a", "fox"]);
        let (store, outcome, _) =
            run_session(&["wonderfl qick fox"], &mut dict, "r a\nr a\n");
        assert_eq!(outcome, SessionOutcome::Completed);
        assert_eq!(store.get(0), Some("a a fox"));
    }

    #[test]
    fn test_replace_empty_removes_word() {
        let mut dict = dictionary(&["the", "fox"]);
        let (store, outcome, _) = run_session(&["The qick fox."], &mut dict, "r\n");
        assert_eq!(outcome, SessionOutcome::Completed);
        assert_eq!(store.get(0), Some("The  fox."));
    }

    #[test]
    fn test_quit_aborts_immediately() {
        let mut dict = dictionary(&["the"]);
        let (store, outcome, _) = run_session(&["The qick fox."], &mut dict, "q\n");
        assert_eq!(outcome, SessionOutcome::Aborted);
        // Nothing after the quit was touched.
        assert_eq!(store.get(0), Some("The qick fox."));
    }

    #[test]
    fn test_end_of_input_counts_as_quit() {
        let mut dict = dictionary(&["the"]);
        let (_, outcome, _) = run_session(&["The qick fox."], &mut dict, "");
        assert_eq!(outcome, SessionOutcome::Aborted);
    }

    #[test]
    fn test_unknown_command_reprompts() {
        let mut dict = dictionary(&["the", "fox"]);
        let (store, outcome, output) = run_session(&["The qick fox."], &mut dict, "x\n\nn\n");
        assert_eq!(outcome, SessionOutcome::Completed);
        assert_eq!(store.get(0), Some("The qick fox."));
        assert_eq!(output.matches("Unknown command").count(), 2);
        assert_eq!(output.matches("(r)eplace, (a)dd, (n)ext or (q)uit: ").count(), 3);
    }

    #[test]
    fn test_context_shows_neighboring_lines() {
        let mut dict = dictionary(&["before", "after", "the", "fox"]);
        let (_, _, output) = run_session(
            &["before", "The qick fox.", "after"],
            &mut dict,
            "n\n",
        );
        assert!(output.contains("before\nThe qick fox.\nafter\n"));
    }

    #[test]
    fn test_lookup_is_case_folded() {
        // "The" must match the lowercase entry "the" without edits.
        let mut dict = dictionary(&["the"]);
        let (store, outcome, _) = run_session(&["THE The the"], &mut dict, "");
        assert_eq!(outcome, SessionOutcome::Completed);
        assert_eq!(store.get(0), Some("THE The the"));
    }
}
