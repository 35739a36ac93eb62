//! Display functions for command results

use super::formatters::{cell_text, time_bar};
use crate::commands::{CatalogEntry, CheckResult};
use crate::core::{GRID_SIZE, TIME_LIMIT_SECS, WORD_LEN};
use crate::engine::{CellState, RoundOutcome, RoundSnapshot, format_time};
use colored::Colorize;

/// Print the grid and status of a round in line mode
pub fn print_round(snapshot: &RoundSnapshot, position: usize, total: usize) {
    println!("{}", "─".repeat(60).cyan());
    println!(
        "Theme: {}   {}",
        snapshot.theme.bright_yellow().bold(),
        format!("Set {position} of {total}").bright_black()
    );

    let clock = format_time(snapshot.time_left);
    let clock = if snapshot.time_left <= 30 {
        clock.red().bold()
    } else {
        clock.bright_white().bold()
    };
    println!(
        "Time:  {clock} [{}] {}",
        time_bar(snapshot.time_left, TIME_LIMIT_SECS, 30).green(),
        snapshot.timer_state.label().bright_black()
    );
    println!("{}", "─".repeat(60).cyan());

    if snapshot.is_paused() {
        println!("\n   {}\n", "Game Paused".bright_yellow().bold());
    } else {
        println!();
        for row in 0..GRID_SIZE / WORD_LEN {
            let cells: Vec<String> = (row * WORD_LEN..(row + 1) * WORD_LEN)
                .map(|p| colored_cell(snapshot, p))
                .collect();
            println!("   {}", cells.join(" "));
        }
        println!();
    }

    if !snapshot.solved_words.is_empty() {
        println!("Found: {}", snapshot.solved_words.join(", ").green());
    }
    if !snapshot.selected.is_empty() {
        println!("Selected: {}", snapshot.attempt().bright_yellow());
    }
}

fn colored_cell(snapshot: &RoundSnapshot, position: usize) -> String {
    let state = snapshot.cell_state(position);
    let text = cell_text(position, snapshot.letters[position], state);
    match state {
        CellState::Solved => text.green().to_string(),
        CellState::Selected => text.bright_yellow().bold().to_string(),
        CellState::Error => text.red().bold().to_string(),
        CellState::Hinted => text.bright_magenta().bold().to_string(),
        CellState::Plain => text,
    }
}

/// Print the end-of-round banner
pub fn print_outcome(outcome: &RoundOutcome, share: Option<&str>) {
    println!("\n{}", "═".repeat(60).bright_cyan());
    if outcome.timed_out {
        println!("{}", "    ⏰  T I M E ' S   U P  ⏰    ".red().bold());
    } else {
        println!("{}", "    🎉  A L L   W O R D S   F O U N D !  🎉    ".bright_green().bold());
    }
    println!("{}", "═".repeat(60).bright_cyan());

    println!(
        "\n  Time: {}",
        format_time(outcome.time_taken).bright_cyan().bold()
    );
    println!("  Words found: {} of 5", outcome.solved_words.len());
    for (i, word) in outcome.solved_words.iter().enumerate() {
        println!(
            "    {}. {}",
            (i + 1).to_string().bright_black(),
            word.text().bright_white().bold()
        );
    }

    if let Some(share) = share {
        println!("\n  Share your result:\n");
        for line in share.lines() {
            println!("  {line}");
        }
    }
    println!("\n{}", "═".repeat(60).bright_cyan());
    println!();
}

/// Print the catalog listing
pub fn print_catalog(entries: &[CatalogEntry]) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD SETS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    for entry in entries {
        println!(
            "  {:>3}. {:<14} {}",
            entry.number.to_string().bright_black(),
            entry.id.bright_yellow(),
            entry.theme
        );
    }
    println!();
}

/// Print the result of a catalog check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "CHECK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Simulation:".bright_cyan().bold());
    println!("   Sets checked:     {}", result.sets_checked);
    println!("   Rounds played:    {}", result.rounds);
    println!("   Actions applied:  {}", result.actions);
    println!("   Solved:           {}", result.solved.to_string().green());
    println!("   Timed out:        {}", result.timed_out.to_string().yellow());
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    println!();
    if result.passed() {
        println!("{}", "✅ All invariants held".green().bold());
    } else {
        println!(
            "{}",
            format!("❌ {} invariant violations", result.failures.len())
                .red()
                .bold()
        );
        for failure in result.failures.iter().take(20) {
            println!(
                "   {} round {}: {}",
                failure.set_id.yellow(),
                failure.round,
                failure.message
            );
        }
    }
}
