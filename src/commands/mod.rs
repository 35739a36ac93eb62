//! Command implementations

pub mod check;
pub mod list;
pub mod simple;

pub use check::{CheckConfig, CheckFailure, CheckResult, run_check, verify_round};
pub use list::{CatalogEntry, list_sets};
pub use simple::run_simple;
