//! # Spellfix
//!
//! An interactive command-line spell checker backed by a sorted word list.
//!
//! ## Features
//!
//! - Pure Rust implementation
//! - Binary-searched dictionary with runtime insertion
//! - Maximal-alphabetic-run tokenization
//! - Interactive skip/add/replace correction session
//! - Safe persistence with a `.bak` copy of the original

pub mod analysis;
pub mod cli;
pub mod dictionary;
pub mod error;
pub mod persist;
pub mod session;
pub mod text;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
