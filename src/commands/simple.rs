//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Cells are numbered 1-25; several
//! numbers can be entered on one line.

use crate::catalog::Catalog;
use crate::core::GRID_SIZE;
use crate::engine::{Action, ActionOutcome, Round, RoundError};
use crate::output::display::{print_outcome, print_round};
use anyhow::{Context, Result};
use log::debug;
use std::io::{self, Write};
use std::thread;
use std::time::Instant;

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Zero-based cell positions, in the order typed
    Cells(Vec<usize>),
    Hint,
    Solve,
    Shuffle,
    Pause,
    New,
    Rules,
    Quit,
}

impl Command {
    /// Parse one line of input
    ///
    /// Returns `None` for unknown words and for cell numbers outside 1-25.
    ///
    /// # Examples
    /// ```
    /// use quizwordz::commands::simple::Command;
    ///
    /// assert_eq!(Command::parse("1 2, 3"), Some(Command::Cells(vec![0, 1, 2])));
    /// assert_eq!(Command::parse("H"), Some(Command::Hint));
    /// assert_eq!(Command::parse("26"), None);
    /// ```
    #[must_use]
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim().to_lowercase();
        let command = match input.as_str() {
            "h" | "hint" => Self::Hint,
            "s" | "solve" => Self::Solve,
            "r" | "shuffle" => Self::Shuffle,
            "p" | "pause" | "resume" => Self::Pause,
            "n" | "new" => Self::New,
            "?" | "rules" | "help" => Self::Rules,
            "q" | "quit" | "exit" => Self::Quit,
            _ => {
                let cells = input
                    .split(|c: char| c.is_whitespace() || c == ',')
                    .filter(|token| !token.is_empty())
                    .map(|token| match token.parse::<usize>() {
                        Ok(n @ 1..=GRID_SIZE) => Some(n - 1),
                        _ => None,
                    })
                    .collect::<Option<Vec<usize>>>()?;
                if cells.is_empty() {
                    return None;
                }
                Self::Cells(cells)
            }
        };
        Some(command)
    }
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error on I/O failure or if a round's grid becomes corrupted.
pub fn run_simple(catalog: &Catalog, start_id: Option<&str>, share_url: &str) -> Result<()> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   QuizWordz 5x5 - Line Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    print_rules();

    let mut rng = rand::rng();
    let mut round = Round::new(catalog.select(start_id, &mut rng).clone());
    let mut clock = Instant::now();

    loop {
        round.advance(clock.elapsed());
        clock = Instant::now();

        // The reveal follows the final word after a short delay
        if round.is_finished() && round.outcome().is_none() {
            if let Some(wait) = round.time_to_next_event() {
                thread::sleep(wait);
            }
            round.advance(clock.elapsed());
            clock = Instant::now();
        }

        let position = catalog.position(round.set().id()).unwrap_or(0) + 1;
        print_round(&round.snapshot(), position, catalog.len());

        if let Some(outcome) = round.outcome() {
            print_outcome(outcome, round.share_message(share_url).as_deref());
            if !ask_yes_no("Play again? (yes/no)")? {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            let next = catalog.pick_other(round.set().id(), &mut rng).clone();
            round.start_round(next);
            clock = Instant::now();
            continue;
        }

        let input = get_user_input("Cells (1-25), hint, solve, shuffle, pause, new, rules, quit")?;
        round.advance(clock.elapsed());
        clock = Instant::now();

        let Some(command) = Command::parse(&input) else {
            println!("❌ Unrecognized input. Enter cell numbers 1-25 or a command.\n");
            continue;
        };
        debug!("Line command: {command:?}");

        match command {
            Command::Quit => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            Command::New => {
                let next = catalog.pick_other(round.set().id(), &mut rng).clone();
                round.start_round(next);
                clock = Instant::now();
                println!("\n🔄 New round started!\n");
            }
            Command::Rules => print_rules(),
            Command::Hint => report(round.apply(Action::Hint)?, &round),
            Command::Solve => report(round.apply(Action::Solve)?, &round),
            Command::Shuffle => report(round.apply(Action::Shuffle)?, &round),
            Command::Pause => report(round.apply(Action::TogglePause)?, &round),
            Command::Cells(cells) => {
                let skipped = select_cells(&mut round, &cells)?;
                if skipped > 0 {
                    println!("⏳ Skipped {skipped} more cell(s) while the wrong word is shown");
                }
            }
        }
    }
}

/// Select `cells` in order, stopping at a rejected attempt
///
/// Returns how many cells were left unplayed; they would be ignored while
/// the rejected attempt is on show.
fn select_cells(round: &mut Round, cells: &[usize]) -> Result<usize, RoundError> {
    for (index, &position) in cells.iter().enumerate() {
        let outcome = round.apply(Action::SelectCell(position))?;
        let rejected = matches!(outcome, ActionOutcome::Rejected(_));
        report(outcome, round);
        if rejected {
            return Ok(cells.len() - index - 1);
        }
    }
    Ok(0)
}

fn report(outcome: ActionOutcome, round: &Round) {
    match outcome {
        ActionOutcome::Ignored => {
            if round.is_paused() {
                println!("⏸  Game paused. Type 'pause' to resume.");
            }
        }
        ActionOutcome::Selected | ActionOutcome::Deselected => {}
        ActionOutcome::Solved(word) => println!("✅ {word}"),
        ActionOutcome::Rejected(attempt) => println!("❌ {attempt} is not one of the words"),
        ActionOutcome::Hinted(Some(position)) => {
            println!("💡 A word starts at cell {}", position + 1);
        }
        ActionOutcome::Hinted(None) => println!("💡 No hint available"),
        ActionOutcome::Shuffled => println!("🔀 Shuffled"),
        ActionOutcome::Paused => println!("⏸  Paused"),
        ActionOutcome::Resumed => println!("▶  Resumed"),
    }
}

fn print_rules() {
    println!("Find the five themed words hidden in the 5x5 grid.");
    println!("Select five cells to spell a word; found words move to the top.");
    println!("You have 4 minutes.\n");
    println!("  - Enter cell numbers, e.g. '3 7 12 18 21' (select again to deselect)");
    println!("  - 'hint' highlights the first letter of a remaining word");
    println!("  - 'solve' reveals a remaining word");
    println!("  - 'shuffle' rearranges the unsolved letters");
    println!("  - 'pause' stops the clock and hides the grid\n");
}

fn ask_yes_no(prompt: &str) -> Result<bool> {
    let answer = get_user_input(prompt)?.to_lowercase();
    Ok(matches!(answer.as_str(), "yes" | "y"))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordSetDefinition;

    fn colors_round() -> Round {
        let set = WordSetDefinition::new(
            "t1",
            "Colors",
            &["BLACK", "WHITE", "GREEN", "BROWN", "AMBER"],
        )
        .unwrap();
        let mut round = Round::with_seed(set, 5);
        assert!(round.set_layout(b"WHITEBLACKGREENBROWNAMBER"));
        round
    }

    #[test]
    fn cells_after_rejected_attempt_are_skipped() {
        let mut round = colors_round();
        // B L A C W, then three more cells
        let skipped = select_cells(&mut round, &[5, 6, 7, 8, 0, 1, 2, 3]).unwrap();
        assert_eq!(skipped, 3);
        assert!(round.selection().has_error());
        assert_eq!(round.selection().positions(), &[5, 6, 7, 8, 0]);
    }

    #[test]
    fn cells_for_two_words_on_one_line() {
        let mut round = colors_round();
        let skipped = select_cells(&mut round, &[5, 6, 7, 8, 9, 5, 6, 7, 8, 9]).unwrap();
        assert_eq!(skipped, 0);
        assert_eq!(round.solved_words().len(), 2);
    }

    #[test]
    fn parses_cell_lists() {
        assert_eq!(
            Command::parse(" 25 1,13 "),
            Some(Command::Cells(vec![24, 0, 12]))
        );
    }

    #[test]
    fn rejects_out_of_range_and_junk() {
        assert_eq!(Command::parse("0"), None);
        assert_eq!(Command::parse("1 x"), None);
        assert_eq!(Command::parse(""), None);
        assert_eq!(Command::parse(",,"), None);
    }

    #[test]
    fn parses_keywords() {
        assert_eq!(Command::parse("Solve"), Some(Command::Solve));
        assert_eq!(Command::parse("r"), Some(Command::Shuffle));
        assert_eq!(Command::parse("resume"), Some(Command::Pause));
        assert_eq!(Command::parse("?"), Some(Command::Rules));
        assert_eq!(Command::parse("exit"), Some(Command::Quit));
    }
}
