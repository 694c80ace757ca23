//! Leaderboard and history records as stored

use crate::game::GameSummary;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub name: String,
    pub score: u32,
}

/// One finished game, newest first in the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub date: NaiveDate,
    pub win: bool,
    pub attempts: usize,
    pub score_earned: u32,
    pub daily: bool,
}

impl HistoryRecord {
    #[must_use]
    pub const fn from_summary(summary: &GameSummary, date: NaiveDate) -> Self {
        Self {
            date,
            win: summary.win,
            attempts: summary.attempts,
            score_earned: summary.score_earned,
            daily: summary.daily,
        }
    }
}

/// Insert into a descending board capped at `cap` entries
///
/// The board is re-sorted, so an out-of-order stored board comes back descending.
/// Ties keep earlier entries ahead. Returns the 0-indexed rank, or `None` when the
/// entry did not make the cut.
pub fn insert_ranked(
    board: &mut Vec<LeaderboardEntry>,
    entry: LeaderboardEntry,
    cap: usize,
) -> Option<usize> {
    // Stable sort with the new entry last: it lands after every score >= its own
    let rank = board.iter().filter(|e| e.score >= entry.score).count();
    board.push(entry);
    board.sort_by(|a, b| b.score.cmp(&a.score));
    board.truncate(cap);
    (rank < cap).then_some(rank)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, score: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            name: name.to_string(),
            score,
        }
    }

    #[test]
    fn insert_keeps_descending_order() {
        let mut board = vec![entry("ada", 50), entry("bob", 20)];
        assert_eq!(insert_ranked(&mut board, entry("cy", 30), 10), Some(1));
        let scores: Vec<u32> = board.iter().map(|e| e.score).collect();
        assert_eq!(scores, [50, 30, 20]);
    }

    #[test]
    fn unsorted_board_is_sorted_on_insert() {
        let mut board = vec![entry("low", 5), entry("high", 50)];
        assert_eq!(insert_ranked(&mut board, entry("mid", 30), 10), Some(1));
        let names: Vec<&str> = board.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["high", "mid", "low"]);
    }

    #[test]
    fn ties_go_after_existing_entries() {
        let mut board = vec![entry("ada", 30)];
        assert_eq!(insert_ranked(&mut board, entry("bob", 30), 10), Some(1));
        assert_eq!(board[0].name, "ada");
    }

    #[test]
    fn board_is_capped() {
        let mut board: Vec<_> = (0..10).map(|i| entry("p", 100 - i)).collect();
        assert_eq!(insert_ranked(&mut board, entry("low", 1), 10), None);
        assert_eq!(board.len(), 10);
        assert_eq!(insert_ranked(&mut board, entry("top", 500), 10), Some(0));
        assert_eq!(board.len(), 10);
        assert_eq!(board[9].score, 92);
    }

    #[test]
    fn history_record_uses_camel_case_keys() {
        let record = HistoryRecord {
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            win: true,
            attempts: 3,
            score_earned: 11,
            daily: false,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"date":"2026-10-16","win":true,"attempts":3,"scoreEarned":11,"daily":false}"#
        );
    }
}
