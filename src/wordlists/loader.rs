//! Word list loading utilities
//!
//! Builds the accepted word set from the embedded lists and an optional dictionary file.

use super::{GUESSES, SOLUTIONS};
use crate::core::{WORD_LENGTH, Word};
use rustc_hash::FxHashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Player-facing notice for a dictionary that could not be read
pub const DICTIONARY_FALLBACK: &str = "Dictionary failed to load, using defaults.";

/// The dictionary file could not be read; the built-in list is used instead
#[derive(Debug, Error)]
#[error("dictionary {} unavailable: {source}", .path.display())]
pub struct DictionaryUnavailable {
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Ordered, deduplicated set of accepted words
///
/// Order matters: daily puzzles index into it, so the same list always yields the
/// same daily word.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: Vec<Word>,
    index: FxHashSet<[u8; WORD_LENGTH]>,
}

impl WordList {
    /// Build from string slices, skipping malformed entries and duplicates
    ///
    /// # Examples
    /// ```
    /// use logicline::wordlists::WordList;
    ///
    /// let list = WordList::from_slice(&["light", "LIGHT", "toolong", "storm"]);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[must_use]
    pub fn from_slice(slice: &[&str]) -> Self {
        Self::default().merged(slice.iter().filter_map(|&s| Word::new(s).ok()))
    }

    /// The curated built-in words: puzzle words first, then extra guesses
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_slice(SOLUTIONS).merged(GUESSES.iter().filter_map(|&s| Word::new(s).ok()))
    }

    /// Load the built-in words plus an optional dictionary file
    ///
    /// A missing or unreadable dictionary is not fatal: the built-in list is
    /// returned together with the warning.
    pub fn load(dictionary: Option<&Path>) -> (Self, Option<DictionaryUnavailable>) {
        let builtin = Self::builtin();

        let Some(path) = dictionary else {
            return (builtin, None);
        };

        match load_dictionary(path) {
            Ok(words) => {
                let before = builtin.len();
                let merged = builtin.merged(words);
                log::info!(
                    "Merged dictionary {}: {} new words ({} total)",
                    path.display(),
                    merged.len() - before,
                    merged.len()
                );
                (merged, None)
            }
            Err(warning) => {
                log::warn!("{warning}; using built-in words");
                (builtin, Some(warning))
            }
        }
    }

    /// Append words not already present, keeping first-seen order
    #[must_use]
    pub fn merged(mut self, words: impl IntoIterator<Item = Word>) -> Self {
        for word in words {
            if self.index.insert(*word.chars()) {
                self.words.push(word);
            }
        }
        self
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.index.contains(word.chars())
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}

/// Parse newline-separated dictionary text
///
/// Entries are trimmed and upper-cased; anything that is not exactly 5 ASCII letters
/// is skipped.
#[must_use]
pub fn parse_dictionary(text: &str) -> Vec<Word> {
    text.lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

/// Load words from a dictionary file
///
/// # Errors
///
/// Returns `DictionaryUnavailable` if the file cannot be read.
pub fn load_dictionary(path: impl AsRef<Path>) -> Result<Vec<Word>, DictionaryUnavailable> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| DictionaryUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_dictionary(&content))
}
