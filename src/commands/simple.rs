//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: type a guess or a command at the prompt.

use crate::driver::GameDriver;
use crate::game::{Clock, ClueKind, ContinueOutcome, GameError, GameStatus, Mode, Rollover};
use crate::output::{print_board, print_leaderboard, print_summary};
use crate::store::KeyValueStore;
use crate::wordlists::{DICTIONARY_FALLBACK, DictionaryUnavailable};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// A line of input at the game prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    Clue(ClueKind),
    New,
    ToggleMode,
    Continue,
    Restart,
    Leaderboard,
    Help,
    Quit,
    Unknown(String),
}

/// Parse one line of prompt input; anything that is not a command is a guess
#[must_use]
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    let lower = input.to_lowercase();
    let parts: Vec<&str> = lower.split_whitespace().collect();

    match parts.as_slice() {
        ["quit" | "q" | "exit"] => Command::Quit,
        ["help" | "h" | "?"] => Command::Help,
        ["new" | "n"] => Command::New,
        ["mode" | "m"] => Command::ToggleMode,
        ["continue" | "c"] => Command::Continue,
        ["restart" | "r"] => Command::Restart,
        ["leaderboard" | "top"] => Command::Leaderboard,
        ["clue", "1" | "position"] => Command::Clue(ClueKind::RevealPosition),
        ["clue", "2" | "letter"] => Command::Clue(ClueKind::RevealRandom),
        ["clue", "3" | "vowel"] => Command::Clue(ClueKind::RevealVowel),
        [_] => Command::Guess(input.to_string()),
        _ => Command::Unknown(input.to_string()),
    }
}

/// First line printed when the dictionary file could not be read
#[must_use]
pub fn dictionary_notice(warning: &DictionaryUnavailable) -> String {
    format!("⚠ {DICTIONARY_FALLBACK} ({warning})")
}

/// Run the simple interactive CLI mode
///
/// Returns when the player quits or stdin closes. A dictionary warning is printed
/// before anything else.
///
/// # Errors
///
/// Returns an error if reading stdin or flushing stdout fails.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple<S: KeyValueStore, C: Clock>(
    driver: &mut GameDriver<S, C>,
    dictionary_warning: Option<&DictionaryUnavailable>,
) -> Result<()> {
    if let Some(warning) = dictionary_warning {
        println!("{}", dictionary_notice(warning).yellow());
    }
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Logicline - Simple Mode                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_help(driver);

    report_start(driver.start_game(), driver.session().mode());

    loop {
        if driver.tick() == Rollover::Started {
            println!("\n🌅 A new daily puzzle is available, starting it now.");
        }
        if driver.session().status() == GameStatus::InProgress {
            print_board(driver.session());
        }

        let Some(input) = get_user_input("Guess or command")? else {
            break;
        };

        match parse_command(&input) {
            Command::Quit => break,
            Command::Help => print_help(driver),
            Command::Leaderboard => print_leaderboard(&driver.profile().leaderboard()),
            Command::New => {
                let mode = driver.session().mode();
                report_start(driver.start_game(), mode);
            }
            Command::ToggleMode => {
                let mode = driver.session().mode().toggled();
                report_start(driver.toggle_mode().map(|_| ()), mode);
            }
            Command::Restart => match driver.restart() {
                Ok(()) => println!("\n🔄 Score and streak reset, new game started."),
                Err(e) => println!("{}", format!("❌ {e}").red()),
            },
            Command::Continue => match driver.continue_game() {
                Ok(ContinueOutcome::Started { cost: 0 }) => println!("\n▶ Next game started."),
                Ok(ContinueOutcome::Started { cost }) => {
                    println!("\n▶ Paid {cost} points, next game started.");
                }
                Ok(ContinueOutcome::Bankrupt) => {
                    println!(
                        "{}",
                        "💸 Not enough points to continue. Score and streak are gone; type 'restart'."
                            .red()
                    );
                }
                Err(e) => println!("{}", format!("❌ {e}").red()),
            },
            Command::Clue(kind) => match driver.buy_clue(kind) {
                Ok(clue) => println!("\n💡 {clue}"),
                Err(e) => println!("{}", format!("❌ {e}").red()),
            },
            Command::Unknown(text) => {
                println!("{}", format!("❌ Unknown command: {text}").red());
            }
            Command::Guess(text) => {
                let outcome = match driver.guess(&text) {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        println!("{}", format!("❌ {e}").red());
                        continue;
                    }
                };

                if outcome.points > 0 {
                    println!("\n✨ +{} for new letters", outcome.points);
                }
                let Some(summary) = outcome.summary else {
                    continue;
                };

                print_board(driver.session());
                print_summary(&summary);
                if summary.win {
                    let name = get_user_input("Name for the leaderboard (blank to skip)")?
                        .unwrap_or_default();
                    if let Some(rank) = driver.save_to_leaderboard(&name) {
                        println!("🏆 Leaderboard rank #{}", rank + 1);
                    }
                    println!("\nType 'continue' for the next game, or 'quit'.");
                } else {
                    let cost = driver.session().config().continue_cost;
                    println!(
                        "\nType 'continue' to pay {cost} points and keep going, 'restart' to start over, or 'quit'."
                    );
                }
            }
        }
    }

    println!("\n👋 Thanks for playing!\n");
    Ok(())
}

fn report_start(result: Result<(), GameError>, mode: Mode) {
    match result {
        Ok(()) => println!("\n🎯 New {} game started!", mode.label()),
        Err(GameError::DailyAlreadyPlayed(date)) => {
            println!(
                "\n📅 You already played the daily puzzle for {date}. Type 'mode' for random games."
            );
        }
        Err(e) => println!("{}", format!("❌ {e}").red()),
    }
}

fn print_help<S: KeyValueStore, C: Clock>(driver: &GameDriver<S, C>) {
    let costs = &driver.session().config().clue_costs;
    println!("Guess the five-letter word. Each row shows:");
    println!("  🟩 right letter, right place   🟨 in the word   ⬜ not in the word\n");
    println!("Commands:");
    println!("  new, mode (daily/random), continue, restart, leaderboard, help, quit");
    for (i, kind) in ClueKind::ALL.iter().enumerate() {
        println!(
            "  clue {}  {} ({} points)",
            i + 1,
            kind.label(),
            kind.cost(costs)
        );
    }
    println!();
}

/// Get user input with a prompt; `None` once stdin is closed
fn get_user_input(prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }

    Ok(Some(input.trim().to_string()))
}
