//! Command line argument parsing for spellfix using clap.

use clap::Parser;
use std::path::PathBuf;

/// Spellfix - an interactive command-line spell checker
#[derive(Parser, Debug, Clone)]
#[command(name = "spellfix")]
#[command(about = "Interactively fix misspelled words in a text file")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellfixArgs {
    /// Text file to spellcheck
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// Word list with one lowercase alphabetic word per line
    #[arg(value_name = "DICTIONARY_FILE", default_value = "words.txt")]
    pub dictionary_file: PathBuf,

    /// Disable color highlighting of misspelled words
    #[arg(long)]
    pub no_color: bool,
}
