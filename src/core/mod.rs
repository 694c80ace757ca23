//! Core domain types for the puzzle
//!
//! Pure, dependency-light value types: words and per-letter feedback.

mod feedback;
mod word;

pub use feedback::{Feedback, LetterState};
pub use word::{WORD_LENGTH, Word, WordError};
