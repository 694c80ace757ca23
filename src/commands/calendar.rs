//! Daily word calendar
//!
//! Computes the daily word over a range of dates and summarizes how often words
//! repeat.

use crate::game::daily_index;
use crate::wordlists::WordList;
use chrono::{Days, NaiveDate};
use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// One day in the calendar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub word: String,
}

/// Summary over a range of days
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarReport {
    pub start: NaiveDate,
    pub days: Vec<CalendarDay>,
    pub distinct_words: usize,
    /// Most frequent word and its count; earliest first-appearance wins ties
    pub most_repeated: Option<(String, usize)>,
    /// Longest run of consecutive days with the same word: (word, length)
    pub longest_run: Option<(String, usize)>,
    /// Appearance counts, descending, ties in first-appearance order
    pub counts: Vec<(String, usize)>,
}

/// Build the calendar for `days` days from `start`
///
/// Dates past the end of the calendar are dropped. With `show_progress` a bar is
/// drawn on stderr.
///
/// # Panics
///
/// Panics if the hardcoded progress template is invalid.
#[must_use]
pub fn run_calendar(
    words: &WordList,
    start: NaiveDate,
    days: usize,
    show_progress: bool,
) -> CalendarReport {
    let pb = if show_progress {
        let pb = ProgressBar::new(days as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} days")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let entries: Vec<CalendarDay> = (0..days)
        .into_par_iter()
        .progress_with(pb.clone())
        .filter_map(|offset| {
            let date = start.checked_add_days(Days::new(offset as u64))?;
            let index = daily_index(date, words.len())?;
            let word = words.get(index)?;
            Some(CalendarDay {
                date,
                word: word.text().to_string(),
            })
        })
        .collect();

    pb.finish_and_clear();
    summarize(start, entries)
}

fn summarize(start: NaiveDate, days: Vec<CalendarDay>) -> CalendarReport {
    let mut first_seen: FxHashMap<&str, usize> = FxHashMap::default();
    let mut counts: Vec<(String, usize)> = Vec::new();
    for day in &days {
        if let Some(&slot) = first_seen.get(day.word.as_str()) {
            counts[slot].1 += 1;
        } else {
            first_seen.insert(day.word.as_str(), counts.len());
            counts.push((day.word.clone(), 1));
        }
    }

    let mut longest_run: Option<(String, usize)> = None;
    let mut run = 0;
    for (i, day) in days.iter().enumerate() {
        if i > 0 && days[i - 1].word == day.word {
            run += 1;
        } else {
            run = 1;
        }
        if longest_run.as_ref().is_none_or(|(_, best)| run > *best) {
            longest_run = Some((day.word.clone(), run));
        }
    }

    // Stable sort keeps first-appearance order among equal counts
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    let most_repeated = counts.first().cloned();
    let distinct_words = counts.len();

    CalendarReport {
        start,
        days,
        distinct_words,
        most_repeated,
        longest_run,
        counts,
    }
}
