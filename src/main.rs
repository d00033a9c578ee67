//! Binary entry point for repartee.
//!
//! This binary provides the CLI interface for the repartee chat responder.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]
// Allow print_stderr in main binary for CLI output
#![allow(clippy::print_stderr)]
#![allow(clippy::print_stdout)]
// Allow needless_pass_by_value for command functions
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use repartee::cli::{CorpusCommand, NormalizeCommand, run_session};
use repartee::config::{ReparteeConfig, SkippedConfig};
use repartee::services::load_corpus;
use repartee::{
    Responder, RustSyntaxCheck, SqliteCorpusSource, SubstitutionTable, observability,
};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Repartee - a pattern-matching chat responder backed by a `SQLite` corpus.
#[derive(Parser)]
#[command(name = "repartee")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file.
    #[arg(short, long, global = true, env = "REPARTEE_CONFIG_PATH")]
    config: Option<PathBuf>,

    /// Path to the corpus database (overrides config).
    #[arg(long, global = true, env = "REPARTEE_DB")]
    db: Option<PathBuf>,

    /// Table holding the corpus (overrides config).
    #[arg(long, global = true)]
    table: Option<String>,

    /// PRNG seed for reproducible choices among matches.
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Chat interactively against the corpus (default).
    Chat,

    /// Print the normalized form of a text.
    Normalize {
        /// The text to normalize.
        text: String,
    },

    /// Load the corpus and print it after normalization.
    Corpus,
}

/// Main entry point.
fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let (config, skipped) = match load_config(&cli) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        },
    };

    if let Err(e) = observability::init(&config.logging, cli.verbose) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    for SkippedConfig { path, error } in &skipped {
        tracing::warn!(path = %path.display(), error = %error, "skipped config file");
    }

    match run_command(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        },
    }
}

/// Loads configuration and applies command-line overrides.
///
/// Default-location files that failed to load are returned so they can be
/// reported once logging is up.
fn load_config(cli: &Cli) -> repartee::Result<(ReparteeConfig, Vec<SkippedConfig>)> {
    let (mut config, skipped) = match &cli.config {
        Some(path) => (ReparteeConfig::load_from_file(path)?, Vec::new()),
        None => ReparteeConfig::load_default(),
    };

    if let Some(db) = &cli.db {
        config = config.with_db_path(db);
    }
    if let Some(table) = &cli.table {
        config = config.with_table(table);
    }

    Ok((config, skipped))
}

/// Runs the selected command.
fn run_command(cli: Cli, config: ReparteeConfig) -> repartee::Result<()> {
    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => cmd_chat(config, cli.seed),
        Commands::Normalize { text } => NormalizeCommand::new().run(&text, io::stdout().lock()),
        Commands::Corpus => {
            let source = SqliteCorpusSource::new(config.store)?;
            CorpusCommand::new()
                .run(&source, io::stdout().lock())
                .map(|_| ())
        },
    }
}

/// Loads the corpus once, then answers stdin until it closes.
fn cmd_chat(config: ReparteeConfig, seed: Option<u64>) -> repartee::Result<()> {
    let table = SubstitutionTable::default();
    let source = SqliteCorpusSource::new(config.store)?;
    let mut corpus = load_corpus(&source, &table)?;

    let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
    let mut responder = Responder::new(table, RustSyntaxCheck, rng);

    let stats = run_session(
        &mut responder,
        &mut corpus,
        io::stdin().lock(),
        io::stdout().lock(),
    )?;
    tracing::info!(
        turns = stats.turns,
        matched = stats.matched,
        fallbacks = stats.fallbacks,
        corpus_len = corpus.len(),
        "session ended"
    );

    Ok(())
}
