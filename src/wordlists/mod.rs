//! Word lists for the puzzle
//!
//! Curated words are embedded at build time; an external dictionary can be merged in
//! at startup.

mod embedded;
pub mod loader;

pub use embedded::{GUESSES, GUESSES_COUNT, SOLUTIONS, SOLUTIONS_COUNT};
pub use loader::{DICTIONARY_FALLBACK, DictionaryUnavailable, WordList, load_dictionary, parse_dictionary};
