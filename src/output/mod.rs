//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_calendar_report, print_history, print_leaderboard, print_summary,
};
