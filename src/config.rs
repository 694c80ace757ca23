//! Game tunables
//!
//! Every field has a default; a JSON file may override any subset of them.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Upper bound on board height accepted by [`GameConfig::validate`]
pub const MAX_ROWS_LIMIT: usize = 12;

/// Scoring, cost and limit settings for a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Guesses allowed per game
    pub max_rows: usize,
    /// Points charged to keep playing after a loss
    pub continue_cost: u32,
    pub clue_costs: ClueCosts,
    /// Leaderboard entries kept
    pub leaderboard_size: usize,
    /// Seconds between daily rollover checks
    pub tick_seconds: u64,
}

/// Point cost of each clue kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClueCosts {
    pub reveal_position: u32,
    pub reveal_random: u32,
    pub reveal_vowel: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_rows: 6,
            continue_cost: 20,
            clue_costs: ClueCosts::default(),
            leaderboard_size: 10,
            tick_seconds: 60,
        }
    }
}

impl Default for ClueCosts {
    fn default() -> Self {
        Self {
            reveal_position: 5,
            reveal_random: 3,
            reveal_vowel: 2,
        }
    }
}

/// Errors raised when configuration invariants are violated or the file is unusable.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be between {min} and {max} (got {value})")]
    RangeViolation {
        field: &'static str,
        min: u64,
        max: u64,
        value: u64,
    },
    #[error("{field} must be at least {min} (got {value})")]
    MinViolation {
        field: &'static str,
        min: u64,
        value: u64,
    },
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GameConfig {
    /// Read a JSON config file; missing fields keep their defaults
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when the file cannot be read, does not parse, or fails
    /// [`GameConfig::validate`].
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns `ConfigError` when any field violates the documented bounds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rows == 0 || self.max_rows > MAX_ROWS_LIMIT {
            return Err(ConfigError::RangeViolation {
                field: "max_rows",
                min: 1,
                max: MAX_ROWS_LIMIT as u64,
                value: self.max_rows as u64,
            });
        }
        if self.leaderboard_size == 0 {
            return Err(ConfigError::MinViolation {
                field: "leaderboard_size",
                min: 1,
                value: 0,
            });
        }
        if self.tick_seconds == 0 {
            return Err(ConfigError::MinViolation {
                field: "tick_seconds",
                min: 1,
                value: 0,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_rows, 6);
        assert_eq!(config.continue_cost, 20);
        assert_eq!(config.leaderboard_size, 10);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: GameConfig =
            serde_json::from_str(r#"{"continue_cost": 5, "clue_costs": {"reveal_vowel": 1}}"#)
                .unwrap();
        assert_eq!(config.continue_cost, 5);
        assert_eq!(config.clue_costs.reveal_vowel, 1);
        assert_eq!(config.clue_costs.reveal_position, 5);
        assert_eq!(config.max_rows, 6);
    }

    #[test]
    fn zero_rows_rejected() {
        let config = GameConfig {
            max_rows: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RangeViolation {
                field: "max_rows",
                ..
            })
        ));
    }

    #[test]
    fn zero_tick_rejected() {
        let config = GameConfig {
            tick_seconds: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MinViolation {
                field: "tick_seconds",
                ..
            })
        ));
    }

    #[test]
    fn from_file_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let result = GameConfig::from_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn from_file_rejects_out_of_range_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "max_rows": 40 }"#).unwrap();
        assert!(matches!(
            GameConfig::from_file(&path),
            Err(ConfigError::RangeViolation { field: "max_rows", value: 40, .. })
        ));

        fs::write(&path, r#"{ "max_rows": 4, "continue_cost": 5 }"#).unwrap();
        let config = GameConfig::from_file(&path).unwrap();
        assert_eq!(config.max_rows, 4);
        assert_eq!(config.continue_cost, 5);
        assert_eq!(config.leaderboard_size, GameConfig::default().leaderboard_size);
    }
}
