//! Ordered, mutable storage for the lines of a text file.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, SpellfixError};

/// Read a file into lines, excluding terminators.
///
/// Splits on `\n`, tolerating `\r\n` by stripping the trailing `\r`. Both the
/// text store and the dictionary use this contract, so line numbers reported
/// for one match what an editor shows for the other.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| SpellfixError::file_open(path.to_string_lossy(), e))?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for line in reader.lines() {
        let mut line = line?;
        if line.ends_with('\r') {
            line.pop();
        }
        lines.push(line);
    }
    Ok(lines)
}

/// An ordered sequence of text lines loaded from a file.
///
/// Indices are 0-based, contiguous, and match the order lines appear in the
/// file. Lines are mutated only through [`LineStore::set`] during a
/// correction session.
#[derive(Debug, Clone)]
pub struct LineStore {
    lines: Vec<String>,
}

impl LineStore {
    /// Load a file into a line store.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(LineStore {
            lines: read_lines(path)?,
        })
    }

    /// Create a store from lines already in memory.
    pub fn from_lines(lines: Vec<String>) -> Self {
        LineStore { lines }
    }

    /// Number of stored lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True if the store holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get line `i`, or `None` if out of bounds.
    pub fn get(&self, i: usize) -> Option<&str> {
        self.lines.get(i).map(String::as_str)
    }

    /// Replace line `i` with `text`.
    ///
    /// Returns an error if `i` is out of bounds.
    pub fn set(&mut self, i: usize, text: String) -> Result<()> {
        match self.lines.get_mut(i) {
            Some(line) => {
                *line = text;
                Ok(())
            }
            None => Err(SpellfixError::other(format!(
                "line index {i} out of bounds (stored lines: {})",
                self.lines.len()
            ))),
        }
    }

    /// Write every line in index order, each followed by a single `\n`,
    /// overwriting `path`.
    pub fn persist<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        for line in &self.lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()?;
        Ok(())
    }
}
