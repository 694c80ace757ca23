//! Clue exchange
//!
//! Points buy hints about the target. What counts as already revealed comes from the
//! session's own bookkeeping: positions guessed correctly and letters typed so far.

use crate::config::ClueCosts;
use crate::core::{WORD_LENGTH, Word};
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::FxHashSet;
use std::fmt;

const VOWELS: [u8; 5] = *b"AEIOU";

/// The kinds of clue on offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClueKind {
    /// A letter and its position, from positions not yet solved
    RevealPosition,
    /// A target letter that has not been typed in any guess
    RevealRandom,
    /// One of the target's vowels
    RevealVowel,
}

impl ClueKind {
    pub const ALL: [Self; 3] = [Self::RevealPosition, Self::RevealRandom, Self::RevealVowel];

    #[must_use]
    pub const fn cost(self, costs: &ClueCosts) -> u32 {
        match self {
            Self::RevealPosition => costs.reveal_position,
            Self::RevealRandom => costs.reveal_random,
            Self::RevealVowel => costs.reveal_vowel,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::RevealPosition => "Reveal position",
            Self::RevealRandom => "Reveal letter",
            Self::RevealVowel => "Reveal vowel",
        }
    }
}

/// What a purchased clue revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clue {
    /// 0-indexed position and the letter there
    Position { index: usize, letter: char },
    Letter(char),
    Vowel(char),
    NothingLeft,
    NoVowels,
}

impl fmt::Display for Clue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Position { index, letter } => {
                write!(f, "Letter at position {}: {letter}", index + 1)
            }
            Self::Letter(letter) => write!(f, "Random letter: {letter}"),
            Self::Vowel(letter) => write!(f, "Vowel in word: {letter}"),
            Self::NothingLeft => write!(f, "No new letters left to reveal!"),
            Self::NoVowels => write!(f, "No vowels in this word!"),
        }
    }
}

/// Pick a clue of `kind` for `target`
///
/// Repeated target letters stay in the draw once per occurrence, so a doubled
/// letter is twice as likely to be revealed.
pub(crate) fn draw<R: Rng + ?Sized>(
    kind: ClueKind,
    target: &Word,
    solved_positions: &[bool; WORD_LENGTH],
    guessed_letters: &FxHashSet<u8>,
    rng: &mut R,
) -> Clue {
    match kind {
        ClueKind::RevealPosition => {
            let open: Vec<usize> = (0..WORD_LENGTH).filter(|&i| !solved_positions[i]).collect();
            open.choose(rng).map_or(Clue::NothingLeft, |&index| Clue::Position {
                index,
                letter: char::from(target.char_at(index)),
            })
        }
        ClueKind::RevealRandom => {
            let unseen: Vec<u8> = target
                .chars()
                .iter()
                .copied()
                .filter(|c| !guessed_letters.contains(c))
                .collect();
            unseen
                .choose(rng)
                .map_or(Clue::NothingLeft, |&c| Clue::Letter(char::from(c)))
        }
        ClueKind::RevealVowel => {
            let vowels: Vec<u8> = target
                .chars()
                .iter()
                .copied()
                .filter(|c| VOWELS.contains(c))
                .collect();
            vowels
                .choose(rng)
                .map_or(Clue::NoVowels, |&c| Clue::Vowel(char::from(c)))
        }
    }
}
