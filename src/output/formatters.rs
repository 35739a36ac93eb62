//! Formatting utilities for terminal output

use crate::engine::CellState;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how much of the round's time is left
#[must_use]
pub fn time_bar(time_left: u32, limit: u32, width: usize) -> String {
    create_progress_bar(f64::from(time_left), f64::from(limit.max(1)), width)
}

/// Text for one grid cell in line mode
///
/// The cell number is 1-based. Markers: `(X)` solved, `[X]` selected,
/// `!X!` rejected, `<X>` hinted.
#[must_use]
pub fn cell_text(position: usize, letter: char, state: CellState) -> String {
    let (open, close) = match state {
        CellState::Solved => ('(', ')'),
        CellState::Selected => ('[', ']'),
        CellState::Error => ('!', '!'),
        CellState::Hinted => ('<', '>'),
        CellState::Plain => (' ', ' '),
    };
    format!("{:>2}{open}{letter}{close}", position + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn time_bar_tracks_remaining_time() {
        assert_eq!(time_bar(240, 240, 8), "████████");
        assert_eq!(time_bar(60, 240, 8), "██░░░░░░");
        assert_eq!(time_bar(0, 240, 8), "░░░░░░░░");
    }

    #[test]
    fn cell_markers() {
        assert_eq!(cell_text(0, 'B', CellState::Solved), " 1(B)");
        assert_eq!(cell_text(9, 'A', CellState::Selected), "10[A]");
        assert_eq!(cell_text(14, 'K', CellState::Error), "15!K!");
        assert_eq!(cell_text(24, 'G', CellState::Hinted), "25<G>");
        assert_eq!(cell_text(4, 'E', CellState::Plain), " 5 E ");
    }
}
