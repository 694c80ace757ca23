//! Session driver shared by the terminal front ends
//!
//! Owns the session, the word list and the player's profile, and persists after
//! every mutation so the front ends only deal with input and rendering.

use crate::config::GameConfig;
use crate::game::{
    Clock, Clue, ClueKind, ContinueOutcome, GameError, GuessOutcome, Mode, Rollover, SessionState,
    check_rollover,
};
use crate::store::{KeyValueStore, Profile};
use crate::wordlists::WordList;
use chrono::NaiveDate;
use rand::rngs::StdRng;

pub struct GameDriver<S, C> {
    session: SessionState,
    profile: Profile<S>,
    words: WordList,
    clock: C,
    rng: StdRng,
}

impl<S: KeyValueStore, C: Clock> GameDriver<S, C> {
    /// Build a driver, restoring score, streak and daily-played date from `store`
    ///
    /// No game is started; call [`GameDriver::start_game`].
    #[must_use]
    pub fn new(
        config: GameConfig,
        mode: Mode,
        words: WordList,
        store: S,
        clock: C,
        rng: StdRng,
    ) -> Self {
        let profile = Profile::new(store, config.leaderboard_size);
        let session = SessionState::new(config, mode, profile.progress());
        Self {
            session,
            profile,
            words,
            clock,
            rng,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub const fn profile(&self) -> &Profile<S> {
        &self.profile
    }

    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Start a new game in the current mode
    ///
    /// # Errors
    ///
    /// See [`SessionState::new_game`].
    pub fn start_game(&mut self) -> Result<(), GameError> {
        let today = self.clock.today();
        self.session.new_game(&self.words, today, &mut self.rng)?;
        Ok(())
    }

    /// Submit a guess; finished games are appended to the history log
    ///
    /// # Errors
    ///
    /// See [`SessionState::submit_guess`].
    pub fn guess(&mut self, text: &str) -> Result<GuessOutcome, GameError> {
        let today = self.clock.today();
        let outcome = self.session.submit_guess(text, &self.words, today)?;
        self.profile.save_progress(&self.session);
        if let Some(summary) = &outcome.summary {
            self.profile.record_game(summary, today);
        }
        Ok(outcome)
    }

    /// # Errors
    ///
    /// See [`SessionState::continue_game`].
    pub fn continue_game(&mut self) -> Result<ContinueOutcome, GameError> {
        let today = self.clock.today();
        let outcome = self
            .session
            .continue_game(&self.words, today, &mut self.rng)?;
        self.profile.save_progress(&self.session);
        Ok(outcome)
    }

    /// # Errors
    ///
    /// See [`SessionState::restart`].
    pub fn restart(&mut self) -> Result<(), GameError> {
        let today = self.clock.today();
        self.session.restart(&self.words, today, &mut self.rng)?;
        self.profile.save_progress(&self.session);
        Ok(())
    }

    /// Flip between daily and random mode and start a game in the new mode
    ///
    /// # Errors
    ///
    /// See [`SessionState::set_mode`].
    pub fn toggle_mode(&mut self) -> Result<Mode, GameError> {
        let today = self.clock.today();
        let mode = self.session.mode().toggled();
        self.session
            .set_mode(mode, &self.words, today, &mut self.rng)?;
        Ok(mode)
    }

    /// # Errors
    ///
    /// See [`SessionState::purchase_clue`].
    pub fn buy_clue(&mut self, kind: ClueKind) -> Result<Clue, GameError> {
        let clue = self.session.purchase_clue(kind, &mut self.rng)?;
        self.profile.save_progress(&self.session);
        Ok(clue)
    }

    /// Daily rollover check, run from the front end's timer
    pub fn tick(&mut self) -> Rollover {
        let today = self.clock.today();
        check_rollover(&mut self.session, &self.words, today, &mut self.rng)
    }

    /// Put the current score on the leaderboard under `name`
    pub fn save_to_leaderboard(&mut self, name: &str) -> Option<usize> {
        let score = self.session.score();
        self.profile.submit_score(name, score)
    }
}
