//! Daily rollover checks
//!
//! A ticker fires at a fixed interval; on each tick the expected daily word is
//! compared with the session's target and, if it moved on, a new game starts through
//! the same [`SessionState::new_game`] path a manual restart uses.

use super::daily::daily_word;
use super::error::GameError;
use super::session::{Mode, SessionState};
use crate::wordlists::WordList;
use chrono::NaiveDate;
use rand::Rng;
use std::time::{Duration, Instant};

/// What a rollover check did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rollover {
    /// Random mode: nothing to check
    NotDaily,
    /// The session already has today's word
    Unchanged,
    /// A new daily game was started
    Started,
    /// The new game was refused
    Refused(GameError),
}

/// Compare the session with today's daily word and start a new game if it changed
pub fn check_rollover<R: Rng + ?Sized>(
    session: &mut SessionState,
    words: &WordList,
    today: NaiveDate,
    rng: &mut R,
) -> Rollover {
    if session.mode() != Mode::Daily {
        return Rollover::NotDaily;
    }
    let Some(expected) = daily_word(words, today) else {
        return Rollover::Unchanged;
    };
    if session.target() == Some(expected) {
        return Rollover::Unchanged;
    }

    match session.new_game(words, today, rng) {
        Ok(_) => {
            log::info!("New daily puzzle for {today}");
            Rollover::Started
        }
        Err(e) => Rollover::Refused(e),
    }
}

/// Fixed-interval timer driven by the caller's event loop
#[derive(Debug, Clone)]
pub struct DailyTicker {
    interval: Duration,
    last: Instant,
}

impl DailyTicker {
    #[must_use]
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last: now,
        }
    }

    /// True at most once per interval
    pub fn due(&mut self, now: Instant) -> bool {
        if now.duration_since(self.last) >= self.interval {
            self.last = now;
            true
        } else {
            false
        }
    }

    /// Time left until the next tick
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.interval.saturating_sub(now.duration_since(self.last))
    }
}
