//! Full games through the driver, with persistence across runs

use chrono::NaiveDate;
use logicline::config::GameConfig;
use logicline::driver::GameDriver;
use logicline::game::{
    Clock, ContinueOutcome, FixedClock, GameError, GameStatus, Mode, Rollover,
};
use logicline::store::{JsonFileStore, KeyValueStore, MemoryStore};
use logicline::wordlists::WordList;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::Cell;
use std::rc::Rc;

const TEN: [&str; 10] = [
    "FRAME", "CLOUD", "MUSIC", "LIGHT", "RIVER", "STORM", "BRAVE", "WORLD", "TABLE", "WATER",
];

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// Daily words from TEN: 2026-10-16 is RIVER, 2026-10-17 is STORM
fn day_one() -> NaiveDate {
    date(2026, 10, 16)
}

fn day_two() -> NaiveDate {
    date(2026, 10, 17)
}

/// Clock the test can move forward
#[derive(Clone)]
struct SharedClock(Rc<Cell<NaiveDate>>);

impl Clock for SharedClock {
    fn today(&self) -> NaiveDate {
        self.0.get()
    }
}

fn driver<S: KeyValueStore, C: Clock>(mode: Mode, store: S, clock: C) -> GameDriver<S, C> {
    GameDriver::new(
        GameConfig::default(),
        mode,
        WordList::from_slice(&TEN),
        store,
        clock,
        StdRng::seed_from_u64(2026),
    )
}

#[test]
fn daily_win_is_saved_and_locks_the_day() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logicline.json");

    {
        let mut game = driver(Mode::Daily, JsonFileStore::open(&path), FixedClock(day_one()));
        game.start_game().unwrap();
        assert_eq!(game.session().target().unwrap().text(), "RIVER");

        let first = game.guess("light").unwrap();
        assert_eq!(first.points, 2);
        assert!(first.summary.is_none());

        let second = game.guess("RIVER").unwrap();
        assert_eq!(second.status, GameStatus::Won);
        assert_eq!(second.points, 6);
        let summary = second.summary.unwrap();
        assert_eq!(summary.attempts, 2);
        assert_eq!(summary.score_earned, 15);
        assert_eq!(game.session().score(), 23);
        assert_eq!(game.save_to_leaderboard("ada"), Some(0));
    }

    // Same day, fresh process
    let mut game = driver(Mode::Daily, JsonFileStore::open(&path), FixedClock(day_one()));
    assert_eq!(game.session().score(), 23);
    assert_eq!(game.session().streak(), 1);
    assert!(game.session().has_played(day_one()));
    assert_eq!(
        game.start_game(),
        Err(GameError::DailyAlreadyPlayed(day_one()))
    );
    assert_eq!(game.session().status(), GameStatus::NotStarted);

    let history = game.profile().history();
    assert_eq!(history.len(), 1);
    assert!(history[0].win);
    assert!(history[0].daily);
    assert_eq!(history[0].date, day_one());
    assert_eq!(game.profile().leaderboard()[0].score, 23);

    // Next day the lock is gone
    let mut game = driver(Mode::Daily, JsonFileStore::open(&path), FixedClock(day_two()));
    game.start_game().unwrap();
    assert_eq!(game.session().target().unwrap().text(), "STORM");
}

#[test]
fn loss_is_recorded_and_continue_costs_points() {
    let mut game = driver(Mode::Random, MemoryStore::new(), FixedClock(day_one()));
    game.start_game().unwrap();
    let target = game.session().target().unwrap().text().to_string();
    let miss = TEN.iter().find(|w| **w != target).unwrap();

    let mut last = None;
    for _ in 0..6 {
        last = Some(game.guess(miss).unwrap());
    }
    let summary = last.unwrap().summary.unwrap();
    assert!(!summary.win);
    assert_eq!(summary.attempts, 6);
    assert_eq!(summary.target.text(), target);
    assert_eq!(game.session().streak(), 0);

    let history = game.profile().history();
    assert_eq!(history.len(), 1);
    assert!(!history[0].win);
    assert!(!history[0].daily);

    // Letter rewards alone never reach the continue cost with one repeated word
    assert!(game.session().score() < 20);
    assert_eq!(game.continue_game(), Ok(ContinueOutcome::Bankrupt));
    assert_eq!(game.session().score(), 0);
    assert_eq!(game.session().status(), GameStatus::Lost);

    game.restart().unwrap();
    assert_eq!(game.session().status(), GameStatus::InProgress);
}

#[test]
fn random_mode_ignores_daily_lock() {
    let mut game = driver(Mode::Daily, MemoryStore::new(), FixedClock(day_one()));
    game.start_game().unwrap();
    game.guess("CLOUD").unwrap();

    assert!(matches!(
        game.start_game(),
        Err(GameError::DailyAlreadyPlayed(_))
    ));
    assert_eq!(game.toggle_mode(), Ok(Mode::Random));
    assert_eq!(game.session().status(), GameStatus::InProgress);
    assert_eq!(game.session().current_row(), 0);

    // Switching back is refused but the mode still changes
    assert!(game.toggle_mode().is_err());
    assert_eq!(game.session().mode(), Mode::Daily);
}

#[test]
fn rollover_starts_the_next_daily_puzzle() {
    let now = Rc::new(Cell::new(day_one()));
    let mut game = driver(Mode::Daily, MemoryStore::new(), SharedClock(Rc::clone(&now)));
    game.start_game().unwrap();
    assert_eq!(game.tick(), Rollover::Unchanged);

    game.guess("RIVER").unwrap();
    assert_eq!(game.tick(), Rollover::Unchanged);

    now.set(day_two());
    assert_eq!(game.tick(), Rollover::Started);
    assert_eq!(game.session().target().unwrap().text(), "STORM");
    assert_eq!(game.session().status(), GameStatus::InProgress);
    assert_eq!(game.session().streak(), 1);
    assert_eq!(game.tick(), Rollover::Unchanged);
}

#[test]
fn rollover_does_nothing_in_random_mode() {
    let now = Rc::new(Cell::new(day_one()));
    let mut game = driver(Mode::Random, MemoryStore::new(), SharedClock(Rc::clone(&now)));
    game.start_game().unwrap();
    let target = game.session().target().cloned();

    now.set(day_two());
    assert_eq!(game.tick(), Rollover::NotDaily);
    assert_eq!(game.session().target().cloned(), target);
}

#[test]
fn clues_never_push_score_below_zero() {
    let mut game = driver(Mode::Daily, MemoryStore::new(), FixedClock(day_one()));
    game.start_game().unwrap();
    game.guess("LIGHT").unwrap();
    assert_eq!(game.session().score(), 2);

    assert!(game.buy_clue(logicline::game::ClueKind::RevealVowel).is_ok());
    assert_eq!(game.session().score(), 0);
    assert_eq!(
        game.buy_clue(logicline::game::ClueKind::RevealRandom),
        Err(GameError::InsufficientFunds { cost: 3, score: 0 })
    );
    assert_eq!(game.session().score(), 0);
}

#[test]
fn leaderboard_keeps_configured_size() {
    let config = GameConfig {
        leaderboard_size: 2,
        ..GameConfig::default()
    };
    let mut game = GameDriver::new(
        config,
        Mode::Random,
        WordList::from_slice(&TEN),
        MemoryStore::new(),
        FixedClock(day_one()),
        StdRng::seed_from_u64(1),
    );
    assert_eq!(game.save_to_leaderboard("first"), Some(0));
    assert_eq!(game.save_to_leaderboard("second"), Some(1));
    assert_eq!(game.save_to_leaderboard("third"), None);
    assert_eq!(game.profile().leaderboard().len(), 2);
}
