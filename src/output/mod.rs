//! Terminal output formatting
//!
//! Display utilities for line mode and command results.

pub mod display;
pub mod formatters;

pub use display::{print_catalog, print_check_result, print_outcome, print_round};
