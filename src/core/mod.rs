//! Core domain types for the puzzle
//!
//! Words, word sets, the letter grid, the selection state machine and the
//! round timer. Everything here is deterministic apart from the injected
//! random number generator, and knows nothing about time or presentation.

mod grid;
mod selection;
mod timer;
mod word;
mod word_set;

pub use grid::{Grid, GridError};
pub use selection::{Selection, SelectionPhase, Toggle};
pub use timer::{RoundTimer, TIME_LIMIT_SECS, Tick, TimerState};
pub use word::{WORD_LEN, Word, WordError};
pub use word_set::{GRID_SIZE, WORDS_PER_SET, WordSetDefinition, WordSetError};
