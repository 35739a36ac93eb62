//! QuizWordz 5x5
//!
//! A timed word-finding puzzle: five themed five-letter words are shuffled
//! into a 5x5 grid and the player spells them out one at a time.
//!
//! # Quick Start
//!
//! ```rust
//! use quizwordz::catalog::Catalog;
//! use quizwordz::engine::{Action, ActionOutcome, Round};
//! use std::time::Duration;
//!
//! let catalog = Catalog::embedded().unwrap();
//! let set = catalog.by_id("colors").unwrap().clone();
//! let mut round = Round::with_seed(set, 7);
//!
//! // Let the assist find every word
//! for _ in 0..5 {
//!     assert!(matches!(round.apply(Action::Solve).unwrap(), ActionOutcome::Solved(_)));
//! }
//! round.advance(Duration::from_secs(1));
//! assert!(round.outcome().is_some());
//! ```

// Core domain types
pub mod core;

// Round lifecycle and timed tasks
pub mod engine;

// Word set catalog
pub mod catalog;

// Player preferences
pub mod prefs;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
