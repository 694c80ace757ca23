//! Display functions for command results

use super::formatters::{colored_row, create_progress_bar, history_line, letter_tile};
use crate::commands::CalendarReport;
use crate::game::{GameSummary, SessionState};
use crate::store::{HistoryRecord, LeaderboardEntry};
use colored::Colorize;

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Print the leaderboard, best first
pub fn print_leaderboard(entries: &[LeaderboardEntry]) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {}", "LEADERBOARD".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    if entries.is_empty() {
        println!("  No scores yet.");
    }
    for (i, entry) in entries.iter().enumerate() {
        let rank = format!("{:>2}.", i + 1);
        let line = format!("{rank} {:<24} {:>6}", entry.name, entry.score);
        match i {
            0 => println!("  {}", line.bright_yellow().bold()),
            1 | 2 => println!("  {}", line.bright_white()),
            _ => println!("  {line}"),
        }
    }
    println!();
}

/// Print the most recent `limit` games
pub fn print_history(records: &[HistoryRecord], limit: usize) {
    println!("\n{}", "─".repeat(50).cyan());
    println!(" {}", "GAME HISTORY".bright_cyan().bold());
    println!("{}", "─".repeat(50).cyan());

    if records.is_empty() {
        println!("  No games played yet.");
    }
    for record in records.iter().take(limit) {
        let line = history_line(record);
        if record.win {
            println!("  {}", line.green());
        } else {
            println!("  {}", line.red());
        }
    }

    let wins = records.iter().filter(|r| r.win).count();
    if !records.is_empty() {
        println!(
            "\n  {} games, {} won ({:.0}%)",
            records.len(),
            wins,
            wins as f64 / records.len() as f64 * 100.0
        );
    }
    println!();
}

/// Print a calendar summary and the most frequent words
pub fn print_calendar_report(report: &CalendarReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} days from {}",
        "DAILY CALENDAR:".bright_cyan().bold(),
        report.days.len(),
        report.start.format("%Y-%m-%d")
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n  Distinct words:  {}", report.distinct_words);
    if let Some((word, count)) = &report.most_repeated {
        println!("  Most repeated:   {} ({count} days)", word.bright_yellow());
    }
    if let Some((word, run)) = &report.longest_run {
        println!("  Longest run:     {} ({run} days in a row)", word.bright_yellow());
    }

    let max = report.counts.first().map_or(1, |(_, n)| *n);
    println!("\n  Top words:");
    for (word, count) in report.counts.iter().take(10) {
        let bar = create_progress_bar(*count as f64, max as f64, 30);
        println!("    {word}  {} {count}", bar.cyan());
    }

    if let (Some(first), Some(last)) = (report.days.first(), report.days.last()) {
        println!(
            "\n  {} {}  ...  {} {}",
            first.date.format("%Y-%m-%d").to_string().bright_black(),
            first.word,
            last.date.format("%Y-%m-%d").to_string().bright_black(),
            last.word
        );
    }
    println!();
}

/// Print the guesses so far, the keyboard and the running totals
pub fn print_board(session: &SessionState) {
    println!();
    for (i, row) in session.rows().iter().enumerate() {
        println!(
            "  {} {}  {}",
            (i + 1).to_string().bright_black(),
            colored_row(&row.guess, &row.feedback),
            row.feedback.to_emoji()
        );
    }
    let max_rows = session.config().max_rows;
    for i in session.rows().len()..max_rows {
        println!("  {} {}", (i + 1).to_string().bright_black(), " _ ".repeat(5).bright_black());
    }

    println!();
    for keys in KEYBOARD_ROWS {
        let line: String = keys
            .bytes()
            .map(|c| letter_tile(c, session.key_state(c)).to_string())
            .collect();
        println!("  {line}");
    }

    println!(
        "\n  Score: {}  Streak: {}  Mode: {}  Row: {}/{max_rows}\n",
        session.score().to_string().bright_green().bold(),
        session.streak().to_string().bright_cyan(),
        session.mode().label(),
        session.current_row().min(max_rows)
    );
}

/// Print the end-of-game banner
pub fn print_summary(summary: &GameSummary) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    if summary.win {
        println!(
            "{}",
            "    🎉  S O L V E D !  🎉    ".bright_green().bold()
        );
        println!(
            "\n  {} in {} {}, +{} points",
            summary.target.text().bright_yellow().bold(),
            summary.attempts.to_string().bright_cyan().bold(),
            if summary.attempts == 1 { "guess" } else { "guesses" },
            summary.score_earned
        );
    } else {
        println!("{}", "    Out of guesses    ".red().bold());
        println!(
            "\n  The word was {}",
            summary.target.text().bright_yellow().bold()
        );
    }
    println!("{}", "═".repeat(60).bright_cyan());
}
