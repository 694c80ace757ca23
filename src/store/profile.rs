//! Typed access to the player's stored data

use super::records::{HistoryRecord, LeaderboardEntry, insert_ranked};
use super::{
    DAILY_PLAYED_KEY, HISTORY_KEY, KeyValueStore, LEADERBOARD_KEY, SCORE_KEY, STREAK_KEY,
};
use crate::game::{GameSummary, Progress, SessionState};
use chrono::NaiveDate;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A player's persisted data on top of a key-value store
///
/// Values that fail to parse read back as their defaults.
#[derive(Debug, Clone)]
pub struct Profile<S> {
    store: S,
    leaderboard_size: usize,
}

impl<S: KeyValueStore> Profile<S> {
    #[must_use]
    pub const fn new(store: S, leaderboard_size: usize) -> Self {
        Self {
            store,
            leaderboard_size,
        }
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Score, streak and daily-played date as last saved
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            score: self.read_number(SCORE_KEY),
            streak: self.read_number(STREAK_KEY),
            daily_played: self
                .store
                .get(DAILY_PLAYED_KEY)
                .and_then(|s| s.trim().parse().ok()),
        }
    }

    /// Write score, streak and daily-played date from the session
    pub fn save_progress(&mut self, session: &SessionState) {
        let progress = session.progress();
        self.store.set(SCORE_KEY, progress.score.to_string());
        self.store.set(STREAK_KEY, progress.streak.to_string());
        if let Some(date) = progress.daily_played {
            self.store.set(DAILY_PLAYED_KEY, date.format("%Y-%m-%d").to_string());
        }
    }

    /// Entries sorted by descending score
    #[must_use]
    pub fn leaderboard(&self) -> Vec<LeaderboardEntry> {
        self.read_json(LEADERBOARD_KEY)
    }

    /// Add a named score to the leaderboard
    ///
    /// Blank names are ignored. Returns the 0-indexed rank when the score placed.
    pub fn submit_score(&mut self, name: &str, score: u32) -> Option<usize> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let mut board = self.leaderboard();
        let entry = LeaderboardEntry {
            name: name.to_string(),
            score,
        };
        let rank = insert_ranked(&mut board, entry, self.leaderboard_size);
        self.write_json(LEADERBOARD_KEY, &board);
        rank
    }

    /// Finished games, newest first
    #[must_use]
    pub fn history(&self) -> Vec<HistoryRecord> {
        self.read_json(HISTORY_KEY)
    }

    /// Prepend a finished game to the history log
    pub fn record_game(&mut self, summary: &GameSummary, date: NaiveDate) {
        let mut history = self.history();
        history.insert(0, HistoryRecord::from_summary(summary, date));
        self.write_json(HISTORY_KEY, &history);
    }

    fn read_number(&self, key: &str) -> u32 {
        self.store
            .get(key)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or(0)
    }

    fn read_json<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.store
            .get(key)
            .and_then(|s| match serde_json::from_str(&s) {
                Ok(value) => Some(value),
                Err(e) => {
                    log::warn!("Ignoring unreadable {key}: {e}");
                    None
                }
            })
            .unwrap_or_default()
    }

    fn write_json<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(json) => self.store.set(key, json),
            Err(e) => log::warn!("Failed to encode {key}: {e}"),
        }
    }
}
