//! Text line storage for the file being spellchecked.
//!
//! This module owns reading a file into an ordered sequence of lines,
//! mutating individual lines during a correction session, and writing the
//! corrected lines back out.

pub mod store;

// Re-export commonly used types
pub use store::*;
