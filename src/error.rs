//! Error types for the Spellfix library.
//!
//! All fatal conditions are represented by the [`SpellfixError`] enum, which
//! also owns the mapping from error kind to process exit code.
//!
//! # Examples
//!
//! ```
//! use spellfix::error::{SpellfixError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(SpellfixError::persistence("backup failed"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// Exit code for fatal I/O, file-open, and persistence failures.
pub const EXIT_IO: i32 = 1;
/// Exit code clap uses for usage errors.
pub const EXIT_USAGE: i32 = 2;
/// Exit code for a dictionary that fails format validation.
pub const EXIT_DICTIONARY_FORMAT: i32 = 3;
/// Exit code when the user quits the correction session.
pub const EXIT_USER_QUIT: i32 = 4;

/// The main error type for Spellfix operations.
///
/// Uses the `thiserror` crate for automatic `Error` trait implementation and
/// provides convenient constructor methods for the stringly variants.
#[derive(Error, Debug)]
pub enum SpellfixError {
    /// A text or dictionary file could not be opened or read.
    #[error("Can't open file: {path}")]
    FileOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    /// I/O errors outside the open path (reads, writes, renames).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A dictionary entry failed validation; `line` is 1-based.
    #[error("Invalid word, line: {line}")]
    DictionaryFormat { line: usize },

    /// Backup or final rewrite failed; edits must not be dropped silently.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error.
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with SpellfixError.
pub type Result<T> = std::result::Result<T, SpellfixError>;

impl SpellfixError {
    /// Create a file-open error for the given path.
    pub fn file_open<S: Into<String>>(path: S, source: io::Error) -> Self {
        SpellfixError::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a dictionary format error citing a 1-based line number.
    pub fn dictionary_format(line: usize) -> Self {
        SpellfixError::DictionaryFormat { line }
    }

    /// Create a new persistence error.
    pub fn persistence<S: Into<String>>(msg: S) -> Self {
        SpellfixError::Persistence(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        SpellfixError::Other(msg.into())
    }

    /// The process exit code for this error kind.
    ///
    /// Each fatal kind gets a distinct code so callers can tell a usage
    /// problem from a bad dictionary from an I/O failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            SpellfixError::DictionaryFormat { .. } => EXIT_DICTIONARY_FORMAT,
            SpellfixError::FileOpen { .. }
            | SpellfixError::Io(_)
            | SpellfixError::Persistence(_)
            | SpellfixError::Other(_)
            | SpellfixError::Anyhow(_) => EXIT_IO,
        }
    }
}
