//! Round engine
//!
//! Composes the core types into the lifecycle of one round: actions, timed
//! callbacks, assists, outcome and share text.

pub mod assist;
mod round;
pub mod schedule;
mod share;
mod snapshot;

pub use round::{
    Action, ActionOutcome, ERROR_DURATION, HINT_DURATION, REVEAL_DELAY, Round, RoundError,
    TICK_INTERVAL,
};
pub use share::{format_time, set_locator, share_message};
pub use snapshot::{CellState, RoundOutcome, RoundSnapshot};
