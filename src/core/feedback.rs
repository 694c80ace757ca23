//! Per-letter feedback for a guess
//!
//! Each position of a guess is classified against the target word:
//! - `Correct`: same letter at the same position
//! - `Present`: letter occurs somewhere in the target, different position
//! - `Absent`: letter does not occur in the target
//!
//! `Present` is a plain membership test on the whole target. It is not limited by
//! letter frequency, so a guess with two `P`s against a target with one `P` can show
//! `Present` twice.

use super::word::{WORD_LENGTH, Word};
use std::fmt;

/// Classification of one guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum LetterState {
    Absent,
    Present,
    Correct,
}

impl LetterState {
    /// Emoji square used for sharing and terminal output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a full row, one state per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterState; WORD_LENGTH]);

impl Feedback {
    /// All positions correct
    pub const SOLVED: Self = Self([LetterState::Correct; WORD_LENGTH]);

    /// Evaluate `guess` against `target`
    ///
    /// Pure: the same pair always yields the same feedback.
    ///
    /// # Examples
    /// ```
    /// use logicline::core::{Feedback, LetterState, Word};
    ///
    /// let guess = Word::new("paper").unwrap();
    /// let target = Word::new("apple").unwrap();
    /// let feedback = Feedback::evaluate(&guess, &target);
    ///
    /// use LetterState::{Absent, Correct, Present};
    /// assert_eq!(feedback.states(), &[Present, Present, Correct, Present, Absent]);
    /// ```
    #[must_use]
    pub fn evaluate(guess: &Word, target: &Word) -> Self {
        let mut states = [LetterState::Absent; WORD_LENGTH];

        for (i, state) in states.iter_mut().enumerate() {
            let letter = guess.char_at(i);
            *state = if letter == target.char_at(i) {
                LetterState::Correct
            } else if target.has_letter(letter) {
                LetterState::Present
            } else {
                LetterState::Absent
            };
        }

        Self(states)
    }

    #[inline]
    #[must_use]
    pub const fn states(&self) -> &[LetterState; WORD_LENGTH] {
        &self.0
    }

    /// Check if every position is correct
    #[inline]
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::SOLVED
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|s| s.emoji()).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}
