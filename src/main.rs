//! Logicline - CLI
//!
//! Five-letter word puzzle with TUI and line-based modes, plus leaderboard, history
//! and daily calendar reports.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use logicline::{
    commands::{run_calendar, run_simple},
    config::GameConfig,
    driver::GameDriver,
    game::{Clock, Mode, SystemClock},
    output::{print_calendar_report, print_history, print_leaderboard},
    store::{JsonFileStore, Profile},
    wordlists::{DictionaryUnavailable, WordList},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "logicline",
    about = "Five-letter word puzzle with daily and random games",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game mode: daily (default) or random
    #[arg(short, long, global = true, value_enum, default_value_t = ModeArg::Daily)]
    mode: ModeArg,

    /// Extra dictionary file, one word per line; 5-letter entries are added
    #[arg(short, long, global = true)]
    dictionary: Option<PathBuf>,

    /// JSON file holding score, streak, leaderboard and history
    #[arg(short, long, global = true, default_value = "logicline.json")]
    store: PathBuf,

    /// JSON file overriding game settings
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Show the leaderboard
    Leaderboard,

    /// Show recent games
    History {
        /// Number of games to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Show the daily words for a range of dates
    Calendar {
        /// Number of days to cover
        #[arg(short = 'n', long, default_value = "365")]
        days: usize,

        /// First date, YYYY-MM-DD (default: today, UTC)
        #[arg(long)]
        start: Option<NaiveDate>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Daily,
    Random,
}

impl From<ModeArg> for Mode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Daily => Self::Daily,
            ModeArg::Random => Self::Random,
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    GameConfig::from_file(path)
        .with_context(|| format!("loading config from {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    // A missing dictionary is not fatal; the game front ends report it
    let (words, warning) = WordList::load(cli.dictionary.as_deref());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let driver = new_driver(config, cli.mode.into(), words, &cli.store);
            run_play_command(driver, warning.as_ref())
        }
        Commands::Simple => {
            let mut driver = new_driver(config, cli.mode.into(), words, &cli.store);
            run_simple(&mut driver, warning.as_ref())
        }
        Commands::Leaderboard => {
            let profile = Profile::new(JsonFileStore::open(&cli.store), config.leaderboard_size);
            print_leaderboard(&profile.leaderboard());
            Ok(())
        }
        Commands::History { limit } => {
            let profile = Profile::new(JsonFileStore::open(&cli.store), config.leaderboard_size);
            print_history(&profile.history(), limit);
            Ok(())
        }
        Commands::Calendar { days, start } => {
            let start = start.unwrap_or_else(|| SystemClock.today());
            let report = run_calendar(&words, start, days, true);
            print_calendar_report(&report);
            Ok(())
        }
    }
}

fn new_driver(
    config: GameConfig,
    mode: Mode,
    words: WordList,
    store: &Path,
) -> GameDriver<JsonFileStore, SystemClock> {
    GameDriver::new(
        config,
        mode,
        words,
        JsonFileStore::open(store),
        SystemClock,
        StdRng::from_os_rng(),
    )
}

fn run_play_command(
    driver: GameDriver<JsonFileStore, SystemClock>,
    warning: Option<&DictionaryUnavailable>,
) -> Result<()> {
    use logicline::interactive::{App, run_tui};

    run_tui(App::new(driver, warning))
}
