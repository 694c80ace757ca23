//! Game engine: daily selection, evaluation rewards, the session state machine,
//! clues and the daily rollover ticker.

mod clue;
pub mod daily;
mod error;
mod rewards;
mod session;
pub mod ticker;

pub use clue::{Clue, ClueKind};
pub use daily::{
    Clock, FixedClock, SystemClock, daily_index, daily_seed, daily_word, seeded_fraction,
};
pub use error::{GameError, GuessRejection};
pub use rewards::{
    CORRECT_REWARD, PRESENT_REWARD, ROW_BONUS, RewardLedger, SOLVE_REWARD, solve_bonus,
};
pub use session::{
    ContinueOutcome, GameStatus, GameSummary, GuessOutcome, Mode, Progress, Row, SessionState,
};
pub use ticker::{DailyTicker, Rollover, check_rollover};
