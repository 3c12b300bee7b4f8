//! Interactive correction session.
//!
//! Drives the scan/prompt state machine over every word of the text,
//! consuming the line store and dictionary and applying the operator's
//! skip/add/replace commands.

pub mod correct;
pub mod highlight;

// Re-export commonly used types
pub use correct::{CorrectionSession, SessionOutcome};
pub use highlight::{AnsiHighlighter, Highlighter, PlainHighlighter};
