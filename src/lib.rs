//! Logicline
//!
//! A five-letter word puzzle: daily and random games, letter rewards, a clue shop,
//! streaks and a local leaderboard.
//!
//! # Quick Start
//!
//! ```rust
//! use logicline::core::{Feedback, LetterState, Word};
//!
//! let guess = Word::new("paper").unwrap();
//! let target = Word::new("apple").unwrap();
//!
//! let feedback = Feedback::evaluate(&guess, &target);
//! assert_eq!(feedback.states()[2], LetterState::Correct);
//! println!("{}", feedback.to_emoji());
//! ```

// Core domain types
pub mod core;

// Game tunables
pub mod config;

// Word lists
pub mod wordlists;

// Game rules and session state
pub mod game;

// Persistence of score, streak, leaderboard and history
pub mod store;

// Session plus persistence, shared by the front ends
pub mod driver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
