//! Daily puzzle selection
//!
//! The date (UTC) is folded into an integer seed `year*10000 + month*100 + day`,
//! hashed through `fract(sin(seed) * 10000)` into [0, 1), and scaled onto the word
//! list. Same date and same list always give the same word.

use crate::core::Word;
use crate::wordlists::WordList;
use chrono::{Datelike, NaiveDate, Utc};

/// Source of the current UTC calendar date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Integer seed for a calendar date
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use logicline::game::daily_seed;
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// assert_eq!(daily_seed(date), 20_240_309);
/// ```
#[must_use]
pub fn daily_seed(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}

/// Map a seed onto [0, 1) with the sine hash
#[must_use]
pub fn seeded_fraction(seed: i64) -> f64 {
    let x = (seed as f64).sin() * 10_000.0;
    x - x.floor()
}

/// Index of the daily word in a list of `len` words, `None` for an empty list
#[must_use]
pub fn daily_index(date: NaiveDate, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let index = (seeded_fraction(daily_seed(date)) * len as f64).floor() as usize;
    Some(index.min(len - 1))
}

/// The daily target word for `date`
#[must_use]
pub fn daily_word(words: &WordList, date: NaiveDate) -> Option<&Word> {
    daily_index(date, words.len()).and_then(|i| words.get(i))
}
