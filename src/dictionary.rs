//! Sorted word-list dictionary used for membership testing.
//!
//! The dictionary is an ordered sequence of lowercase alphabetic words,
//! sorted ascending by ordinal comparison so lookups are a binary search.
//! Words may be added during a correction session; the dictionary never
//! shrinks.

use std::path::Path;

use crate::error::{Result, SpellfixError};
use crate::text::read_lines;

/// A validated, sorted word list.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    entries: Vec<String>,
    sorted: bool,
}

impl Dictionary {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Dictionary {
            entries: Vec::new(),
            sorted: true,
        }
    }

    /// Load a dictionary from a text file with one word per line.
    ///
    /// Entries are taken verbatim; call [`Dictionary::validate`] before any
    /// lookup to enforce the format contract.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Dictionary {
            entries: read_lines(path)?,
            sorted: false,
        })
    }

    /// Create a dictionary from words already in memory.
    pub fn from_entries(entries: Vec<String>) -> Self {
        Dictionary {
            entries,
            sorted: false,
        }
    }

    /// Check that every entry is a non-empty run of lowercase alphabetic
    /// characters with no whitespace.
    ///
    /// Fails at the first offending entry, citing its 1-based line number.
    /// All-or-nothing: a failure here must abort before any text scanning.
    pub fn validate(&self) -> Result<()> {
        for (i, entry) in self.entries.iter().enumerate() {
            let valid =
                !entry.is_empty() && entry.chars().all(|c| c.is_alphabetic() && c.is_lowercase());
            if !valid {
                return Err(SpellfixError::dictionary_format(i + 1));
            }
        }
        Ok(())
    }

    /// Establish ascending ordinal order. Required before any
    /// [`Dictionary::contains`] query.
    pub fn sort(&mut self) {
        self.entries.sort_unstable();
        self.sorted = true;
    }

    /// Binary-search membership test. The lookup key must already be
    /// lowercase; matching is exact.
    pub fn contains(&self, word: &str) -> bool {
        debug_assert!(self.sorted, "contains() called before sort()");
        self.entries
            .binary_search_by(|entry| entry.as_str().cmp(word))
            .is_ok()
    }

    /// Insert `word` (already lowercase) keeping sorted order, so
    /// `contains(word)` is true immediately afterwards.
    ///
    /// Duplicates are ignored; the dictionary stays a sorted set.
    pub fn add(&mut self, word: &str) {
        debug_assert!(self.sorted, "add() called before sort()");
        if let Err(pos) = self
            .entries
            .binary_search_by(|entry| entry.as_str().cmp(word))
        {
            self.entries.insert(pos, word.to_string());
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if the dictionary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    fn dict(words: &[&str]) -> Dictionary {
        let mut d = Dictionary::from_entries(words.iter().map(|w| w.to_string()).collect());
        d.sort();
        d
    }

    #[test]
    fn test_validate_accepts_lowercase_words() {
        let d = Dictionary::from_entries(vec!["the".to_string(), "fox".to_string()]);
        assert!(d.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_uppercase() {
        let d = Dictionary::from_entries(vec!["the".to_string(), "Fox".to_string()]);
        let err = d.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid word, line: 2");
    }

    #[test]
    fn test_validate_rejects_whitespace() {
        let d = Dictionary::from_entries(vec!["two words".to_string()]);
        let err = d.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid word, line: 1");
    }

    #[test]
    fn test_validate_rejects_non_alphabetic() {
        let d = Dictionary::from_entries(vec!["abc".to_string(), "a1c".to_string()]);
        let err = d.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid word, line: 2");
    }

    #[test]
    fn test_validate_rejects_empty_entry() {
        let d = Dictionary::from_entries(vec!["abc".to_string(), "".to_string()]);
        let err = d.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid word, line: 2");
    }

    #[test]
    fn test_validate_reports_first_offender() {
        let d = Dictionary::from_entries(vec![
            "ok".to_string(),
            "Bad".to_string(),
            "als0 bad".to_string(),
        ]);
        let err = d.validate().unwrap_err();
        assert_eq!(err.to_string(), "Invalid word, line: 2");
    }

    #[test]
    fn test_contains_after_sort() {
        let d = dict(&["zebra", "apple", "mango"]);
        assert!(d.contains("apple"));
        assert!(d.contains("zebra"));
        assert!(!d.contains("pear"));
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        let d = dict(&["apple"]);
        assert!(!d.contains("Apple"));
    }

    #[test]
    fn test_add_then_contains() {
        let mut d = dict(&["the", "fox"]);
        assert!(!d.contains("qick"));
        d.add("qick");
        assert!(d.contains("qick"));
        // Previously present words are still found.
        assert!(d.contains("the"));
        assert!(d.contains("fox"));
    }

    #[test]
    fn test_add_skips_duplicates() {
        let mut d = dict(&["fox"]);
        d.add("fox");
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn test_load_from_file() {
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "the\nfox\n").unwrap();

        let mut d = Dictionary::load(file.path()).unwrap();
        d.validate().unwrap();
        d.sort();
        assert_eq!(d.len(), 2);
        assert!(d.contains("fox"));
    }
}
