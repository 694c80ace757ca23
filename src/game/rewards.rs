//! Per-game reward bookkeeping
//!
//! A letter earns points the first time it shows up `Present` and the first time it
//! shows up `Correct` in a game, keyed by letter value rather than position.

use crate::core::{Feedback, LetterState, Word};
use rustc_hash::FxHashSet;

/// Points for a letter's first `Present`
pub const PRESENT_REWARD: u32 = 1;
/// Points for a letter's first `Correct`
pub const CORRECT_REWARD: u32 = 2;
/// Flat points for solving a row
pub const SOLVE_REWARD: u32 = 5;
/// Points per unused row when solving
pub const ROW_BONUS: u32 = 2;

/// Letters already credited this game
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewardLedger {
    present: FxHashSet<u8>,
    correct: FxHashSet<u8>,
}

impl RewardLedger {
    /// Credit a row left to right; returns the points earned
    ///
    /// # Examples
    /// ```
    /// use logicline::core::{Feedback, Word};
    /// use logicline::game::RewardLedger;
    ///
    /// let guess = Word::new("PAPER").unwrap();
    /// let target = Word::new("APPLE").unwrap();
    /// let mut ledger = RewardLedger::default();
    ///
    /// let feedback = Feedback::evaluate(&guess, &target);
    /// assert_eq!(ledger.credit(&guess, &feedback), 5);
    /// assert_eq!(ledger.credit(&guess, &feedback), 0);
    /// ```
    pub fn credit(&mut self, guess: &Word, feedback: &Feedback) -> u32 {
        let mut points = 0;
        for (&letter, &state) in guess.chars().iter().zip(feedback.states()) {
            match state {
                LetterState::Correct if self.correct.insert(letter) => points += CORRECT_REWARD,
                LetterState::Present if self.present.insert(letter) => points += PRESENT_REWARD,
                _ => {}
            }
        }
        points
    }

    #[must_use]
    pub fn is_credited(&self, letter: u8, state: LetterState) -> bool {
        match state {
            LetterState::Correct => self.correct.contains(&letter),
            LetterState::Present => self.present.contains(&letter),
            LetterState::Absent => false,
        }
    }

    /// Letters credited as present, sorted
    #[must_use]
    pub fn present_letters(&self) -> Vec<u8> {
        sorted(&self.present)
    }

    /// Letters credited as correct, sorted
    #[must_use]
    pub fn correct_letters(&self) -> Vec<u8> {
        sorted(&self.correct)
    }

    pub fn clear(&mut self) {
        self.present.clear();
        self.correct.clear();
    }
}

fn sorted(set: &FxHashSet<u8>) -> Vec<u8> {
    let mut letters: Vec<u8> = set.iter().copied().collect();
    letters.sort_unstable();
    letters
}

/// Bonus for solving on 0-indexed `row` of a `max_rows` board
///
/// The first row earns the most; the last allowed row earns `ROW_BONUS`.
#[must_use]
pub fn solve_bonus(row: usize, max_rows: usize) -> u32 {
    (max_rows.saturating_sub(row) as u32) * ROW_BONUS
}
