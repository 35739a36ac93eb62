//! QuizWordz 5x5 - CLI
//!
//! Timed themed word puzzle with TUI and line modes.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use env_logger::{Env, Target};
use log::info;
use quizwordz::{
    catalog::Catalog,
    commands::{CheckConfig, list_sets, run_check, run_simple},
    output::{print_catalog, print_check_result},
    prefs::FilePreferences,
};
use std::fs::File;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "quizwordz",
    about = "Find five themed words hidden in a 5x5 letter grid before the clock runs out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word set id to start with (random if missing or unknown)
    #[arg(short, long, global = true)]
    set: Option<String>,

    /// Catalog file to use instead of the built-in word sets
    #[arg(short, long, global = true)]
    catalog: Option<PathBuf>,

    /// Preference file
    #[arg(long, global = true, default_value = ".quizwordz.json")]
    prefs: PathBuf,

    /// Base address used in share messages
    #[arg(long, global = true, default_value = "https://quizwordz.app/")]
    share_url: String,

    /// Write log output to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line-based mode without the TUI
    Simple,

    /// List the word sets in the catalog
    List,

    /// Validate the catalog and simulate rounds against every set
    Check {
        /// Rounds to simulate per set
        #[arg(short, long, default_value = "20")]
        rounds: usize,

        /// Seed for the simulated rounds
        #[arg(long, default_value = "0")]
        seed: u64,
    },
}

/// Install the logger
///
/// The TUI owns the screen, so logging there is off unless it goes to a file.
fn init_logging(command: Commands, log_file: Option<&Path>) -> Result<()> {
    let default_filter = match (command, log_file) {
        (Commands::Play, None) => "off",
        (_, Some(_)) => "info",
        _ => "warn",
    };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(default_filter));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => Catalog::from_file(path)
            .with_context(|| format!("failed to load catalog {}", path.display())),
        None => Catalog::embedded().context("built-in catalog is invalid"),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);
    init_logging(command, cli.log_file.as_deref())?;

    let catalog = load_catalog(cli.catalog.as_deref())?;
    info!("Loaded {} word sets", catalog.len());

    match command {
        Commands::Play => run_play_command(&catalog, cli.set.as_deref(), &cli.prefs, &cli.share_url),
        Commands::Simple => run_simple(&catalog, cli.set.as_deref(), &cli.share_url),
        Commands::List => {
            print_catalog(&list_sets(&catalog));
            Ok(())
        }
        Commands::Check { rounds, seed } => run_check_command(&catalog, rounds, seed),
    }
}

fn run_check_command(catalog: &Catalog, rounds: usize, seed: u64) -> Result<()> {
    println!(
        "🧪 Simulating {rounds} rounds for each of {} word sets...",
        catalog.len()
    );
    let config = CheckConfig {
        rounds_per_set: rounds,
        seed,
        show_progress: true,
    };
    let result = run_check(catalog, config);
    print_check_result(&result);

    if !result.passed() {
        bail!("{} invariant violations", result.failures.len());
    }
    Ok(())
}

fn run_play_command(
    catalog: &Catalog,
    set_id: Option<&str>,
    prefs_path: &Path,
    share_url: &str,
) -> Result<()> {
    use quizwordz::interactive::{App, run_tui};

    let prefs = FilePreferences::open(prefs_path)
        .with_context(|| format!("failed to load preferences {}", prefs_path.display()))?;
    info!("Preferences: {}", prefs.path().display());
    let set = catalog.select(set_id, &mut rand::rng()).clone();

    let app = App::new(catalog, set, Box::new(prefs), share_url);
    run_tui(app)
}
