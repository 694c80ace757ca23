//! Persistence adapter
//!
//! Score, streak, daily-played date, leaderboard and game history live in a
//! string-keyed store. Writes are best-effort and independent per key.

mod file;
mod memory;
mod profile;
mod records;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use profile::Profile;
pub use records::{HistoryRecord, LeaderboardEntry, insert_ranked};

pub const SCORE_KEY: &str = "score";
pub const STREAK_KEY: &str = "streak";
pub const LEADERBOARD_KEY: &str = "leaderboard";
pub const HISTORY_KEY: &str = "gameHistory";
pub const DAILY_PLAYED_KEY: &str = "dailyPlayed";

/// String key-value storage
///
/// `set` never fails from the caller's point of view; implementations log and drop
/// write errors.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) {
        (**self).set(key, value);
    }
}
