//! Word extraction from text lines.
//!
//! The scanner walks a line and yields maximal runs of alphabetic
//! characters; everything between runs (digits, punctuation, whitespace) is
//! skipped and never emitted.

pub mod token;
pub mod tokenizer;

// Re-export commonly used types
pub use token::Word;
pub use tokenizer::WordTokenizer;
