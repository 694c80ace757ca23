//! Conditions signaled by game operations

use crate::core::WordError;
use chrono::NaiveDate;
use thiserror::Error;

/// A refused game operation; the session is left unchanged
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid guess {guess:?}: {reason}")]
    InvalidGuess {
        guess: String,
        reason: GuessRejection,
    },
    #[error("not enough points: costs {cost}, have {score}")]
    InsufficientFunds { cost: u32, score: u32 },
    #[error("the daily puzzle for {0} has already been played")]
    DailyAlreadyPlayed(NaiveDate),
    #[error("no game in progress")]
    NotInProgress,
    #[error("the current game is not over")]
    GameNotOver,
    #[error("the word list is empty")]
    EmptyWordList,
}

/// Why a guess was not accepted
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessRejection {
    #[error(transparent)]
    Malformed(#[from] WordError),
    #[error("not in the word list")]
    NotInWordList,
}
