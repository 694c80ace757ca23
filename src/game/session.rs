//! Game session state machine
//!
//! `NotStarted -> InProgress -> (Won | Lost) -> InProgress`. Every operation is a
//! single synchronous mutation; a refused operation returns a [`GameError`] and
//! leaves the session untouched.

use super::clue::{self, Clue, ClueKind};
use super::daily::daily_word;
use super::error::{GameError, GuessRejection};
use super::rewards::{RewardLedger, SOLVE_REWARD, solve_bonus};
use crate::config::GameConfig;
use crate::core::{Feedback, LetterState, WORD_LENGTH, Word};
use crate::wordlists::WordList;
use chrono::NaiveDate;
use rand::Rng;
use rand::seq::IndexedRandom;
use rustc_hash::{FxHashMap, FxHashSet};

/// How targets are chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// One deterministic puzzle per UTC date
    #[default]
    Daily,
    /// A fresh random word every game
    Random,
}

impl Mode {
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Daily => Self::Random,
            Self::Random => Self::Daily,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Random => "random",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Values carried between games and persisted by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    pub score: u32,
    pub streak: u32,
    pub daily_played: Option<NaiveDate>,
}

/// An accepted guess and its feedback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub guess: Word,
    pub feedback: Feedback,
}

/// How a finished game went
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSummary {
    pub win: bool,
    pub attempts: usize,
    /// Solve reward plus row bonus; zero on a loss
    pub score_earned: u32,
    pub daily: bool,
    pub target: Word,
}

/// Result of an accepted guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    /// 0-indexed row the guess landed in
    pub row: usize,
    pub feedback: Feedback,
    /// Letter rewards earned by this row
    pub points: u32,
    /// Unused-row bonus when the row solved the puzzle
    pub bonus: u32,
    pub status: GameStatus,
    /// Present once the game has ended
    pub summary: Option<GameSummary>,
}

/// Result of asking to keep playing after a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContinueOutcome {
    /// A new game started; `cost` points were paid
    Started { cost: u32 },
    /// Not enough points after a loss: score and streak were wiped
    Bankrupt,
}

/// Mutable state of one player's session
#[derive(Debug, Clone)]
pub struct SessionState {
    config: GameConfig,
    mode: Mode,
    status: GameStatus,
    target: Option<Word>,
    current_row: usize,
    score: u32,
    streak: u32,
    rewards: RewardLedger,
    rows: Vec<Row>,
    keyboard: FxHashMap<u8, LetterState>,
    guessed_letters: FxHashSet<u8>,
    solved_positions: [bool; WORD_LENGTH],
    daily_played: Option<NaiveDate>,
}

impl SessionState {
    #[must_use]
    pub fn new(config: GameConfig, mode: Mode, progress: Progress) -> Self {
        Self {
            config,
            mode,
            status: GameStatus::NotStarted,
            target: None,
            current_row: 0,
            score: progress.score,
            streak: progress.streak,
            rewards: RewardLedger::default(),
            rows: Vec::new(),
            keyboard: FxHashMap::default(),
            guessed_letters: FxHashSet::default(),
            solved_positions: [false; WORD_LENGTH],
            daily_played: progress.daily_played,
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    #[must_use]
    pub const fn target(&self) -> Option<&Word> {
        self.target.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn current_row(&self) -> usize {
        self.current_row
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }

    #[inline]
    #[must_use]
    pub const fn rewards(&self) -> &RewardLedger {
        &self.rewards
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Best known state of a letter for keyboard hints
    #[must_use]
    pub fn key_state(&self, letter: u8) -> Option<LetterState> {
        self.keyboard.get(&letter).copied()
    }

    #[must_use]
    pub const fn progress(&self) -> Progress {
        Progress {
            score: self.score,
            streak: self.streak,
            daily_played: self.daily_played,
        }
    }

    /// Whether the daily puzzle for `today` has been played
    #[must_use]
    pub fn has_played(&self, today: NaiveDate) -> bool {
        self.daily_played == Some(today)
    }

    fn ensure_can_start(&self, today: NaiveDate) -> Result<(), GameError> {
        if self.mode == Mode::Daily && self.has_played(today) {
            log::debug!("New game refused: daily puzzle for {today} already played");
            return Err(GameError::DailyAlreadyPlayed(today));
        }
        Ok(())
    }

    /// Start a new game, choosing the target according to the mode
    ///
    /// Abandons any game in progress.
    ///
    /// # Errors
    ///
    /// - `DailyAlreadyPlayed` in daily mode once today's puzzle was played
    /// - `EmptyWordList` when there is nothing to pick from
    pub fn new_game<R: Rng + ?Sized>(
        &mut self,
        words: &WordList,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<&Word, GameError> {
        self.ensure_can_start(today)?;

        let target = match self.mode {
            Mode::Daily => daily_word(words, today),
            Mode::Random => words.words().choose(rng),
        }
        .cloned()
        .ok_or(GameError::EmptyWordList)?;

        self.current_row = 0;
        self.rewards.clear();
        self.rows.clear();
        self.keyboard.clear();
        self.guessed_letters.clear();
        self.solved_positions = [false; WORD_LENGTH];
        self.status = GameStatus::InProgress;

        log::debug!("New {} game started", self.mode.label());
        Ok(self.target.insert(target))
    }

    /// Submit a guess for the current row
    ///
    /// # Errors
    ///
    /// - `NotInProgress` unless a game is running
    /// - `InvalidGuess` for malformed words or words outside `words`
    pub fn submit_guess(
        &mut self,
        text: &str,
        words: &WordList,
        today: NaiveDate,
    ) -> Result<GuessOutcome, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::NotInProgress);
        }
        let target = self.target.as_ref().ok_or(GameError::NotInProgress)?;

        let guess = Word::new(text).map_err(|e| GameError::InvalidGuess {
            guess: text.trim().to_uppercase(),
            reason: GuessRejection::Malformed(e),
        })?;
        if !words.contains(&guess) {
            return Err(GameError::InvalidGuess {
                guess: guess.text().to_string(),
                reason: GuessRejection::NotInWordList,
            });
        }

        let feedback = Feedback::evaluate(&guess, target);
        let target = target.clone();

        let points = self.rewards.credit(&guess, &feedback);
        self.score = self.score.saturating_add(points);
        self.record_row(&guess, &feedback);
        if self.mode == Mode::Daily {
            self.daily_played = Some(today);
        }

        let row = self.current_row;
        let mut bonus = 0;
        let mut summary = None;

        if feedback.is_solved() {
            bonus = solve_bonus(row, self.config.max_rows);
            let earned = SOLVE_REWARD + bonus;
            self.streak = self.streak.saturating_add(1);
            self.score = self.score.saturating_add(earned);
            self.status = GameStatus::Won;
            log::info!("Solved in {} rows, earned {earned}", row + 1);
            summary = Some(GameSummary {
                win: true,
                attempts: row + 1,
                score_earned: earned,
                daily: self.mode == Mode::Daily,
                target,
            });
        } else if row + 1 >= self.config.max_rows {
            self.streak = 0;
            self.status = GameStatus::Lost;
            log::info!("Out of rows, streak reset");
            summary = Some(GameSummary {
                win: false,
                attempts: self.config.max_rows,
                score_earned: 0,
                daily: self.mode == Mode::Daily,
                target,
            });
        }

        self.current_row += 1;

        Ok(GuessOutcome {
            row,
            feedback,
            points,
            bonus,
            status: self.status,
            summary,
        })
    }

    fn record_row(&mut self, guess: &Word, feedback: &Feedback) {
        for (i, (&letter, &state)) in guess.chars().iter().zip(feedback.states()).enumerate() {
            self.guessed_letters.insert(letter);
            if state == LetterState::Correct {
                self.solved_positions[i] = true;
            }
            let key = self.keyboard.entry(letter).or_insert(state);
            if *key != LetterState::Correct {
                *key = state;
            }
        }
        self.rows.push(Row {
            guess: guess.clone(),
            feedback: *feedback,
        });
    }

    /// Keep playing after a finished game
    ///
    /// After a win the next game is free. After a loss it costs
    /// `continue_cost`; without enough points the player goes bankrupt instead:
    /// score and streak drop to zero and the session stays lost.
    ///
    /// # Errors
    ///
    /// - `GameNotOver` unless the game is won or lost
    /// - `DailyAlreadyPlayed` / `EmptyWordList` as for [`SessionState::new_game`]
    pub fn continue_game<R: Rng + ?Sized>(
        &mut self,
        words: &WordList,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<ContinueOutcome, GameError> {
        match self.status {
            GameStatus::Won => {
                self.new_game(words, today, rng)?;
                Ok(ContinueOutcome::Started { cost: 0 })
            }
            GameStatus::Lost => {
                self.ensure_can_start(today)?;
                if words.is_empty() {
                    return Err(GameError::EmptyWordList);
                }
                let cost = self.config.continue_cost;
                if self.score >= cost {
                    self.score -= cost;
                    self.new_game(words, today, rng)?;
                    Ok(ContinueOutcome::Started { cost })
                } else {
                    log::info!("Cannot pay {cost} to continue, score and streak wiped");
                    self.score = 0;
                    self.streak = 0;
                    Ok(ContinueOutcome::Bankrupt)
                }
            }
            GameStatus::NotStarted | GameStatus::InProgress => Err(GameError::GameNotOver),
        }
    }

    /// Wipe score and streak, then start a new game
    ///
    /// # Errors
    ///
    /// As for [`SessionState::new_game`]; a refused restart keeps score and streak.
    pub fn restart<R: Rng + ?Sized>(
        &mut self,
        words: &WordList,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<&Word, GameError> {
        self.ensure_can_start(today)?;
        if words.is_empty() {
            return Err(GameError::EmptyWordList);
        }
        self.score = 0;
        self.streak = 0;
        self.new_game(words, today, rng)
    }

    /// Switch mode and request a new game under it
    ///
    /// The mode changes even when the new game is refused.
    ///
    /// # Errors
    ///
    /// As for [`SessionState::new_game`].
    pub fn set_mode<R: Rng + ?Sized>(
        &mut self,
        mode: Mode,
        words: &WordList,
        today: NaiveDate,
        rng: &mut R,
    ) -> Result<&Word, GameError> {
        self.mode = mode;
        self.new_game(words, today, rng)
    }

    /// Spend points on a clue about the current target
    ///
    /// The cost is paid even when the clue has nothing new to reveal.
    ///
    /// # Errors
    ///
    /// - `NotInProgress` unless a game is running
    /// - `InsufficientFunds` when the score does not cover the cost
    pub fn purchase_clue<R: Rng + ?Sized>(
        &mut self,
        kind: ClueKind,
        rng: &mut R,
    ) -> Result<Clue, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::NotInProgress);
        }
        let target = self.target.as_ref().ok_or(GameError::NotInProgress)?;

        let cost = kind.cost(&self.config.clue_costs);
        if self.score < cost {
            log::debug!("Clue refused: costs {cost}, score {}", self.score);
            return Err(GameError::InsufficientFunds {
                cost,
                score: self.score,
            });
        }

        let clue = clue::draw(
            kind,
            target,
            &self.solved_positions,
            &self.guessed_letters,
            rng,
        );
        self.score -= cost;
        Ok(clue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterState::{Absent, Correct, Present};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const WORDS: [&str; 12] = [
        "FRAME", "CLOUD", "MUSIC", "LIGHT", "RIVER", "STORM", "BRAVE", "WORLD", "TABLE", "WATER",
        "APPLE", "PAPER",
    ];

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn words() -> WordList {
        WordList::from_slice(&WORDS)
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    /// A random-mode session whose target is forced to `target`
    fn session_with_target(target: &str, progress: Progress) -> SessionState {
        let list = WordList::from_slice(&[target]);
        let mut session = SessionState::new(GameConfig::default(), Mode::Random, progress);
        session.new_game(&list, today(), &mut rng()).unwrap();
        session
    }

    #[test]
    fn starts_not_started() {
        let session = SessionState::new(GameConfig::default(), Mode::Daily, Progress::default());
        assert_eq!(session.status(), GameStatus::NotStarted);
        assert_eq!(session.target(), None);
        assert!(matches!(
            SessionState::new(GameConfig::default(), Mode::Daily, Progress::default())
                .submit_guess("LIGHT", &words(), today()),
            Err(GameError::NotInProgress)
        ));
    }

    #[test]
    fn first_row_win_scores_seventeen_plus_letters() {
        let mut session = session_with_target("LIGHT", Progress::default());
        let outcome = session.submit_guess("light", &words(), today()).unwrap();

        assert!(outcome.feedback.is_solved());
        assert_eq!(outcome.points, 10);
        assert_eq!(outcome.bonus, 12);
        assert_eq!(outcome.status, GameStatus::Won);
        let summary = outcome.summary.unwrap();
        assert!(summary.win);
        assert_eq!(summary.attempts, 1);
        assert_eq!(summary.score_earned, 17);
        assert_eq!(session.score(), 27);
        assert_eq!(session.streak(), 1);
        assert_eq!(session.current_row(), 1);
    }

    #[test]
    fn paper_against_apple() {
        let mut session = session_with_target("APPLE", Progress::default());
        let outcome = session.submit_guess("PAPER", &words(), today()).unwrap();

        assert_eq!(
            outcome.feedback.states(),
            &[Present, Present, Correct, Present, Absent]
        );
        assert_eq!(outcome.points, 5);
        assert_eq!(session.score(), 5);
        assert_eq!(session.status(), GameStatus::InProgress);
        assert_eq!(session.key_state(b'P'), Some(Correct));
        assert_eq!(session.key_state(b'R'), Some(Absent));
    }

    #[test]
    fn six_misses_lose_and_reset_streak() {
        let progress = Progress {
            score: 3,
            streak: 4,
            daily_played: None,
        };
        let mut session = session_with_target("LIGHT", progress);
        let mut last = None;
        for _ in 0..6 {
            last = Some(session.submit_guess("FRAME", &words(), today()).unwrap());
        }
        let last = last.unwrap();

        assert_eq!(last.row, 5);
        assert_eq!(last.bonus, 0);
        assert_eq!(last.status, GameStatus::Lost);
        let summary = last.summary.unwrap();
        assert!(!summary.win);
        assert_eq!(summary.attempts, 6);
        assert_eq!(summary.score_earned, 0);
        assert_eq!(session.streak(), 0);
        assert_eq!(session.score(), 3);
        assert_eq!(session.current_row(), 6);
        assert!(matches!(
            session.submit_guess("LIGHT", &words(), today()),
            Err(GameError::NotInProgress)
        ));
    }

    #[test]
    fn last_row_win_earns_smallest_bonus() {
        let mut session = session_with_target("LIGHT", Progress::default());
        for _ in 0..5 {
            session.submit_guess("STORM", &words(), today()).unwrap();
        }
        let outcome = session.submit_guess("LIGHT", &words(), today()).unwrap();
        assert_eq!(outcome.bonus, 2);
        assert_eq!(outcome.summary.unwrap().score_earned, 7);
        assert_eq!(session.current_row(), 6);
    }

    #[test]
    fn invalid_guesses_leave_state_untouched() {
        let mut session = session_with_target("LIGHT", Progress::default());

        let err = session.submit_guess("LIGH", &words(), today()).unwrap_err();
        assert!(matches!(
            err,
            GameError::InvalidGuess {
                reason: GuessRejection::Malformed(_),
                ..
            }
        ));

        let err = session.submit_guess("zzzzz", &words(), today()).unwrap_err();
        assert_eq!(
            err,
            GameError::InvalidGuess {
                guess: "ZZZZZ".to_string(),
                reason: GuessRejection::NotInWordList,
            }
        );

        assert_eq!(session.current_row(), 0);
        assert_eq!(session.score(), 0);
        assert!(session.rows().is_empty());
    }

    #[test]
    fn rewards_are_once_per_letter_per_game() {
        let mut session = session_with_target("LIGHT", Progress::default());
        // MUSIC: I present (+1)
        assert_eq!(session.submit_guess("MUSIC", &words(), today()).unwrap().points, 1);
        assert_eq!(session.submit_guess("MUSIC", &words(), today()).unwrap().points, 0);
        // WATER: T present (+1)
        assert_eq!(session.submit_guess("WATER", &words(), today()).unwrap().points, 1);
        assert!(session.rewards().is_credited(b'I', Present));
    }

    #[test]
    fn new_game_clears_board_but_keeps_score() {
        let mut session = session_with_target("LIGHT", Progress::default());
        session.submit_guess("MUSIC", &words(), today()).unwrap();
        let score = session.score();

        session.new_game(&words(), today(), &mut rng()).unwrap();
        assert_eq!(session.current_row(), 0);
        assert!(session.rows().is_empty());
        assert_eq!(session.key_state(b'I'), None);
        assert!(session.rewards().present_letters().is_empty());
        assert_eq!(session.score(), score);
    }

    #[test]
    fn daily_game_uses_daily_word_and_locks_after_a_guess() {
        let list = words();
        let mut session = SessionState::new(GameConfig::default(), Mode::Daily, Progress::default());
        let target = session.new_game(&list, today(), &mut rng()).unwrap().clone();
        assert_eq!(Some(&target), daily_word(&list, today()));

        assert!(!session.has_played(today()));
        session.submit_guess("FRAME", &list, today()).unwrap();
        assert!(session.has_played(today()));

        let before = session.clone();
        assert_eq!(
            session.new_game(&list, today(), &mut rng()).unwrap_err(),
            GameError::DailyAlreadyPlayed(today())
        );
        assert_eq!(session.current_row(), before.current_row());
        assert_eq!(session.rows(), before.rows());

        let tomorrow = today().succ_opt().unwrap();
        assert!(session.new_game(&list, tomorrow, &mut rng()).is_ok());
    }

    #[test]
    fn random_mode_ignores_daily_lock() {
        let progress = Progress {
            daily_played: Some(today()),
            ..Progress::default()
        };
        let mut session = SessionState::new(GameConfig::default(), Mode::Random, progress);
        assert!(session.new_game(&words(), today(), &mut rng()).is_ok());
        session.submit_guess("FRAME", &words(), today()).unwrap();
        assert_eq!(session.progress().daily_played, Some(today()));
    }

    #[test]
    fn empty_word_list_is_refused() {
        let mut session = SessionState::new(GameConfig::default(), Mode::Random, Progress::default());
        assert_eq!(
            session.new_game(&WordList::default(), today(), &mut rng()).unwrap_err(),
            GameError::EmptyWordList
        );
        assert_eq!(session.status(), GameStatus::NotStarted);
    }

    #[test]
    fn continue_after_loss_pays_or_goes_bankrupt() {
        let lose = |score| {
            let progress = Progress {
                score,
                streak: 2,
                daily_played: None,
            };
            let mut session = session_with_target("LIGHT", progress);
            for _ in 0..6 {
                session.submit_guess("FRAME", &words(), today()).unwrap();
            }
            session
        };

        let mut rich = lose(25);
        assert_eq!(
            rich.continue_game(&words(), today(), &mut rng()).unwrap(),
            ContinueOutcome::Started { cost: 20 }
        );
        assert_eq!(rich.score(), 5);
        assert_eq!(rich.status(), GameStatus::InProgress);

        let mut poor = lose(10);
        assert_eq!(
            poor.continue_game(&words(), today(), &mut rng()).unwrap(),
            ContinueOutcome::Bankrupt
        );
        assert_eq!(poor.score(), 0);
        assert_eq!(poor.streak(), 0);
        assert_eq!(poor.status(), GameStatus::Lost);
    }

    #[test]
    fn continue_after_win_is_free_and_mid_game_is_refused() {
        let mut session = session_with_target("LIGHT", Progress::default());
        assert_eq!(
            session.continue_game(&words(), today(), &mut rng()).unwrap_err(),
            GameError::GameNotOver
        );
        session.submit_guess("LIGHT", &words(), today()).unwrap();
        let score = session.score();
        assert_eq!(
            session.continue_game(&words(), today(), &mut rng()).unwrap(),
            ContinueOutcome::Started { cost: 0 }
        );
        assert_eq!(session.score(), score);
        assert_eq!(session.streak(), 1);
    }

    #[test]
    fn restart_wipes_progress() {
        let progress = Progress {
            score: 40,
            streak: 3,
            daily_played: None,
        };
        let mut session = session_with_target("LIGHT", progress);
        session.restart(&words(), today(), &mut rng()).unwrap();
        assert_eq!(session.score(), 0);
        assert_eq!(session.streak(), 0);
        assert_eq!(session.status(), GameStatus::InProgress);
    }

    #[test]
    fn refused_restart_keeps_score() {
        let progress = Progress {
            score: 40,
            streak: 3,
            daily_played: Some(today()),
        };
        let mut session = SessionState::new(GameConfig::default(), Mode::Daily, progress);
        assert_eq!(
            session.restart(&words(), today(), &mut rng()).unwrap_err(),
            GameError::DailyAlreadyPlayed(today())
        );
        assert_eq!(session.score(), 40);
        assert_eq!(session.streak(), 3);
    }

    #[test]
    fn set_mode_switches_and_starts() {
        let progress = Progress {
            daily_played: Some(today()),
            ..Progress::default()
        };
        let mut session = SessionState::new(GameConfig::default(), Mode::Daily, progress);
        assert!(session.set_mode(Mode::Random, &words(), today(), &mut rng()).is_ok());
        assert_eq!(session.mode(), Mode::Random);
        assert!(session.set_mode(Mode::Daily, &words(), today(), &mut rng()).is_err());
        assert_eq!(session.mode(), Mode::Daily);
    }

    #[test]
    fn clue_purchase_checks_funds_and_never_goes_negative() {
        let progress = Progress {
            score: 6,
            ..Progress::default()
        };
        let mut session = session_with_target("LIGHT", progress);
        let mut rng = rng();

        assert!(session.purchase_clue(ClueKind::RevealPosition, &mut rng).is_ok());
        assert_eq!(session.score(), 1);
        assert_eq!(
            session.purchase_clue(ClueKind::RevealRandom, &mut rng).unwrap_err(),
            GameError::InsufficientFunds { cost: 3, score: 1 }
        );
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn clue_uses_session_bookkeeping() {
        let progress = Progress {
            score: 100,
            ..Progress::default()
        };
        let mut session = session_with_target("LIGHT", progress);
        // MUSIC types I; L G H T stay unseen
        session.submit_guess("MUSIC", &words(), today()).unwrap();
        let mut rng = rng();
        for _ in 0..10 {
            let clue = session.purchase_clue(ClueKind::RevealRandom, &mut rng).unwrap();
            assert!(matches!(clue, Clue::Letter('L' | 'G' | 'H' | 'T')));
        }
    }

    #[test]
    fn keyboard_keeps_correct_over_later_states() {
        let mut session = session_with_target("STORM", Progress::default());
        session.submit_guess("STONE", &words_with(&["STONE"]), today()).unwrap();
        session.submit_guess("TOAST", &words_with(&["TOAST"]), today()).unwrap();
        assert_eq!(session.key_state(b'S'), Some(Correct));
        assert_eq!(session.key_state(b'T'), Some(Correct));
        assert_eq!(session.key_state(b'A'), Some(Absent));
    }

    fn words_with(extra: &[&str]) -> WordList {
        words().merged(extra.iter().filter_map(|w| Word::new(w).ok()))
    }
}
