//! Share payload for a finished round

use crate::core::WordSetDefinition;

/// Format seconds as `m:ss`
///
/// # Examples
/// ```
/// use quizwordz::engine::format_time;
///
/// assert_eq!(format_time(0), "0:00");
/// assert_eq!(format_time(75), "1:15");
/// assert_eq!(format_time(240), "4:00");
/// ```
#[must_use]
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Link that re-opens the same word set
#[must_use]
pub fn set_locator(base_url: &str, set_id: &str) -> String {
    format!("{base_url}?set={set_id}")
}

/// Text the player can copy after solving every word
#[must_use]
pub fn share_message(set: &WordSetDefinition, time_taken: u32, base_url: &str) -> String {
    format!(
        "I completed \"{}\" in {} on QuizWordz 5x5!\n\nCan you beat my time? Try it here: {}",
        set.theme(),
        format_time(time_taken),
        set_locator(base_url, set.id())
    )
}
