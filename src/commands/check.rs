//! Catalog self-check
//!
//! Plays randomized rounds against every word set and verifies the round
//! invariants after each step. Wrong attempts, shuffles, hints, pauses,
//! manual solutions and assisted solves are mixed with random clock jumps.

use crate::catalog::Catalog;
use crate::core::{Grid, TIME_LIMIT_SECS, WORD_LEN, WORDS_PER_SET, Word, WordSetDefinition};
use crate::engine::{Action, Round};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::time::{Duration, Instant};

/// Upper bound on actions per simulated round
const MAX_ACTIONS: usize = 400;
/// Largest clock jump between two actions
const MAX_STEP_MS: u64 = 1_500;

/// Settings for a check run
#[derive(Debug, Clone, Copy)]
pub struct CheckConfig {
    pub rounds_per_set: usize,
    pub seed: u64,
    pub show_progress: bool,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            rounds_per_set: 20,
            seed: 0,
            show_progress: true,
        }
    }
}

/// A violated invariant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckFailure {
    pub set_id: String,
    pub round: usize,
    pub message: String,
}

/// Totals over the whole catalog
#[derive(Debug, Default)]
pub struct CheckResult {
    pub sets_checked: usize,
    pub rounds: usize,
    pub actions: usize,
    pub solved: usize,
    pub timed_out: usize,
    pub failures: Vec<CheckFailure>,
    pub duration: Duration,
}

impl CheckResult {
    #[must_use]
    pub fn passed(&self) -> bool {
        self.failures.is_empty()
    }
}

#[derive(Debug, Default)]
struct SetReport {
    rounds: usize,
    actions: usize,
    solved: usize,
    timed_out: usize,
    failures: Vec<CheckFailure>,
}

/// Simulate rounds for every set in parallel
///
/// # Panics
///
/// Panics if the progress bar template is invalid.
#[must_use]
pub fn run_check(catalog: &Catalog, config: CheckConfig) -> CheckResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(catalog.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .expect("progress template is valid")
            .progress_chars("█▓▒░"),
    );

    let reports: Vec<SetReport> = catalog
        .sets()
        .par_iter()
        .enumerate()
        .map(|(index, set)| {
            let report = check_set(set, index, config);
            pb.set_message(set.id().to_string());
            pb.inc(1);
            report
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut result = CheckResult {
        sets_checked: reports.len(),
        duration: start.elapsed(),
        ..CheckResult::default()
    };
    for report in reports {
        result.rounds += report.rounds;
        result.actions += report.actions;
        result.solved += report.solved;
        result.timed_out += report.timed_out;
        result.failures.extend(report.failures);
    }
    result
}

fn check_set(set: &WordSetDefinition, index: usize, config: CheckConfig) -> SetReport {
    let mut report = SetReport::default();

    for round_no in 0..config.rounds_per_set {
        let seed = config
            .seed
            .wrapping_add((index * config.rounds_per_set + round_no) as u64);
        let mut round = Round::with_seed(set.clone(), seed);
        let mut rng = StdRng::seed_from_u64(seed.rotate_left(32));

        match play_round(&mut round, &mut rng) {
            Ok(actions) => {
                report.actions += actions;
                match round.outcome() {
                    Some(outcome) if outcome.timed_out => report.timed_out += 1,
                    Some(_) => report.solved += 1,
                    None => {}
                }
            }
            Err(message) => {
                warn!("Set {} round {round_no}: {message}", set.id());
                report.failures.push(CheckFailure {
                    set_id: set.id().to_string(),
                    round: round_no,
                    message,
                });
            }
        }
        report.rounds += 1;
    }

    debug!(
        "Set {}: {} rounds, {} actions",
        set.id(),
        report.rounds,
        report.actions
    );
    report
}

/// Drive one round to its outcome, returning the number of actions applied
fn play_round(round: &mut Round, rng: &mut StdRng) -> Result<usize, String> {
    verify_round(round)?;
    let mut actions = 0;

    while round.outcome().is_none() && actions < MAX_ACTIONS {
        for action in plan_actions(round, rng) {
            round.apply(action).map_err(|e| e.to_string())?;
            actions += 1;
            verify_round(round)?;
        }
        round.advance(Duration::from_millis(rng.random_range(0..=MAX_STEP_MS)));
        verify_round(round)?;
    }

    if round.is_paused() {
        round.apply(Action::TogglePause).map_err(|e| e.to_string())?;
    }
    round.advance(Duration::from_secs(u64::from(TIME_LIMIT_SECS) + 2));
    verify_round(round)?;

    if round.outcome().is_none() {
        return Err("round never produced an outcome".to_string());
    }
    Ok(actions)
}

/// Pick the next move, weighted towards plain cell selection
fn plan_actions(round: &Round, rng: &mut StdRng) -> Vec<Action> {
    match rng.random_range(0..20) {
        0 => vec![Action::Hint],
        1 => vec![Action::Shuffle],
        2 => vec![Action::TogglePause],
        3 => vec![Action::Solve],
        4..=6 if round.selection().positions().is_empty() => {
            let Some(word) = round.remaining_words().choose(rng).copied() else {
                return Vec::new();
            };
            positions_for(round.grid(), word)
                .map(|positions| positions.into_iter().map(Action::SelectCell).collect())
                .unwrap_or_default()
        }
        _ => vec![Action::SelectCell(rng.random_range(0..crate::core::GRID_SIZE + 2))],
    }
}

/// Active positions spelling `word`, each cell used once
#[must_use]
pub fn positions_for(grid: &Grid, word: &Word) -> Option<Vec<usize>> {
    let mut used = FxHashSet::default();
    word.chars()
        .iter()
        .map(|&letter| {
            let position = (grid.prefix_len()..grid.letters().len())
                .find(|&p| grid.letters()[p] == letter && !used.contains(&p))?;
            used.insert(position);
            Some(position)
        })
        .collect()
}

/// Check every invariant of a round's current state
///
/// # Errors
///
/// Returns a description of the first violated invariant.
pub fn verify_round(round: &Round) -> Result<(), String> {
    let grid = round.grid();
    let set = round.set();
    let solved = round.solved_words();

    if !grid.is_permutation_of(set) {
        return Err(format!(
            "grid {} is not a permutation of the set letters",
            String::from_utf8_lossy(grid.letters())
        ));
    }

    if grid.solved_count() != solved.len() || solved.len() > WORDS_PER_SET {
        return Err(format!(
            "solved count {} does not match {} solved words",
            grid.solved_count(),
            solved.len()
        ));
    }

    let mut distinct = FxHashSet::default();
    for (i, word) in solved.iter().enumerate() {
        if !set.contains(word) || !distinct.insert(word.text()) {
            return Err(format!("solved word {word} is foreign or repeated"));
        }
        let row = &grid.letters()[i * WORD_LEN..(i + 1) * WORD_LEN];
        if row != word.chars() {
            return Err(format!(
                "solved row {i} reads {} instead of {word}",
                String::from_utf8_lossy(row)
            ));
        }
    }

    let selection = round.selection();
    let positions = selection.positions();
    let unique: FxHashSet<usize> = positions.iter().copied().collect();
    if positions.len() > WORD_LEN
        || unique.len() != positions.len()
        || positions.iter().any(|&p| !grid.is_active(p))
    {
        return Err(format!("invalid selection {positions:?}"));
    }
    if selection.has_error() && positions.len() != WORD_LEN {
        return Err("error shown without a complete attempt".to_string());
    }

    if let Some(hint) = round.hint().filter(|&p| !grid.is_active(p)) {
        return Err(format!("hint points at inactive cell {hint}"));
    }

    let timer = round.timer();
    if timer.elapsed() > timer.limit() {
        return Err(format!("elapsed {} exceeds the limit", timer.elapsed()));
    }

    if let Some(outcome) = round.outcome() {
        if outcome.timed_out && timer.elapsed() != timer.limit() {
            return Err("timed out before the limit".to_string());
        }
        if !outcome.timed_out && outcome.solved_words.len() != WORDS_PER_SET {
            return Err("solved outcome with missing words".to_string());
        }
        if outcome.solved_words != solved {
            return Err("outcome words differ from the solved words".to_string());
        }
    }

    Ok(())
}
