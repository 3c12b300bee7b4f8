//! CLI module for the spellfix command-line tool.

pub mod args;
pub mod commands;

pub use args::*;
pub use commands::*;
