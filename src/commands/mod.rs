//! Command implementations

pub mod calendar;
pub mod simple;

pub use calendar::{CalendarDay, CalendarReport, run_calendar};
pub use simple::{Command, dictionary_notice, parse_command, run_simple};
