// ABOUTME: Forja CLI - command-line front end for the training log pipeline
// ABOUTME: Processes raw batches through validation and estimates one-rep maxes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forja Labs
//!
//! Usage:
//! ```bash
//! # Process a batch of raw log rows (JSON array of entries)
//! forja-cli process --input batch.json
//!
//! # Same, pre-confirming rules the operator already reviewed
//! forja-cli process --input batch.json --confirm high_weight --confirm high_reps
//!
//! # With reference data for bodyweight interpolation and muscle fan-out
//! forja-cli process --input batch.json --bodyweight bw.json --muscles muscles.json
//!
//! # Estimate a one-rep max from a logged set
//! forja-cli one-rm --weight 100 --reps 5 --rir 2
//!
//! # Bodyweight exercise with a second calibration sample
//! forja-cli one-rm --weight 20 --reps 5 --rir 2 \
//!     --second-weight 25 --second-reps 3 --second-rir 1 --bodyweight 80
//! ```

mod commands;

use clap::{Parser, Subcommand};
use forja::errors::{AppError, AppResult};
use forja::logging::LoggingConfig;
use forja_analytics::validation::RuleCategory;
use std::path::PathBuf;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "forja-cli",
    about = "Forja training log pipeline CLI",
    long_about = "Command-line tool for running raw training log batches through \
                  validation, enrichment, and muscle attribution, and for one-off \
                  one-rep-max estimation."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Process a raw batch through the full pipeline
    Process {
        /// Path to a JSON array of raw log entries
        #[arg(long)]
        input: PathBuf,

        /// Rule categories to confirm without prompting (repeatable)
        #[arg(long, value_name = "RULE")]
        confirm: Vec<RuleCategory>,

        /// Path to a JSON array of bodyweight samples
        #[arg(long)]
        bodyweight: Option<PathBuf>,

        /// Path to a JSON array of exercise→muscle role mappings
        #[arg(long)]
        muscles: Option<PathBuf>,
    },

    /// Estimate a one-rep max from one or two logged sets
    OneRm {
        /// External load lifted (kg)
        #[arg(long)]
        weight: f64,

        /// Repetitions performed
        #[arg(long)]
        reps: u32,

        /// Reps left in reserve
        #[arg(long, default_value = "0")]
        rir: u32,

        /// Second sample weight (kg)
        #[arg(long, requires = "second_reps")]
        second_weight: Option<f64>,

        /// Second sample reps
        #[arg(long, requires = "second_weight")]
        second_reps: Option<u32>,

        /// Second sample RIR
        #[arg(long, default_value = "0")]
        second_rir: u32,

        /// Bodyweight to include in the lifted total (kg)
        #[arg(long)]
        bodyweight: Option<f64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging
        .init()
        .map_err(|err| AppError::internal(format!("initializing logging: {err:#}")))?;

    match cli.command {
        Command::Process {
            input,
            confirm,
            bodyweight,
            muscles,
        } => commands::process::run(&input, &confirm, bodyweight.as_deref(), muscles.as_deref()).await,
        Command::OneRm {
            weight,
            reps,
            rir,
            second_weight,
            second_reps,
            second_rir,
            bodyweight,
        } => commands::one_rm::run(
            weight,
            reps,
            rir,
            second_weight.zip(second_reps).map(|(w, r)| (w, r, second_rir)),
            bodyweight,
        ),
    }
}
