// ABOUTME: Strength CLI - command-line front end for the strength analytics engine
// ABOUTME: Estimation, classification, balance, record review, and program progression as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Estimate a one-rep max from a set
//! strength-cli estimate --weight 225 --reps 5
//!
//! # Classify a squat for a 200 lb male lifter
//! strength-cli classify --exercise squat --one-rep-max 185 --bodyweight 200 --sex male
//!
//! # Balance analysis with the Wilks-variance strategy
//! strength-cli balance --squat 315 --bench 225 --deadlift 405 --bodyweight 198 --scoring wilks_variance
//!
//! # Personal records in a workout stored in a snapshot file
//! strength-cli prs --input data.json --workout 6f1c...
//!
//! # Next prescribed workout, then advance the program in place
//! strength-cli program next --input data.json --program 0a2b...
//! strength-cli program advance --input data.json --program 0a2b...
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pierre_strength::logging::LoggingConfig;
use pierre_strength::{AppResult, StrengthConfig};
use strength_core::errors::ErrorResponse;
use strength_intelligence::balance::BigFourLifts;
use strength_intelligence::config::BalanceScoring;
use tracing::debug;
use uuid::Uuid;

use helpers::input::profile_from_flags;

#[derive(Parser)]
#[command(
    name = "strength-cli",
    about = "Strength analytics and program progression",
    long_about = "Estimate one-rep maxes, classify and balance lifts, review personal records, and drive training programs. All output is JSON."
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
    /// Estimate a one-rep max from weight and reps
    Estimate {
        /// Load lifted
        #[arg(long)]
        weight: f64,

        /// Completed reps
        #[arg(long)]
        reps: u32,
    },

    /// Wilks points for a squat + bench + deadlift total
    Wilks {
        /// Total lifted
        #[arg(long)]
        total: f64,

        /// Lifter bodyweight
        #[arg(long)]
        bodyweight: f64,

        /// Sex code (male, female)
        #[arg(long, default_value = "male")]
        sex: String,

        /// Unit system for total and bodyweight (lb, kg)
        #[arg(long, default_value = "lb")]
        units: String,
    },

    /// Classify a one-rep max against population standards
    Classify {
        /// Exercise name (squat, bench press, deadlift, overhead press, or a synonym)
        #[arg(long)]
        exercise: String,

        /// Estimated one-rep max
        #[arg(long)]
        one_rep_max: f64,

        #[command(flatten)]
        lifter: LifterArgs,
    },

    /// Score balance between squat, bench press, deadlift, and overhead press
    Balance {
        /// Squat one-rep max
        #[arg(long)]
        squat: Option<f64>,

        /// Bench press one-rep max
        #[arg(long)]
        bench: Option<f64>,

        /// Deadlift one-rep max
        #[arg(long)]
        deadlift: Option<f64>,

        /// Overhead press one-rep max
        #[arg(long)]
        ohp: Option<f64>,

        /// Scoring strategy (range, wilks_variance); defaults to configuration
        #[arg(long)]
        scoring: Option<BalanceScoring>,

        /// Lifter bodyweight, required for Wilks-variance scoring
        #[arg(long)]
        bodyweight: Option<f64>,

        /// Sex code (male, female)
        #[arg(long, default_value = "male")]
        sex: String,

        /// Unit system (lb, kg)
        #[arg(long, default_value = "lb")]
        units: String,

        /// Lifter age in years
        #[arg(long)]
        age: Option<u32>,
    },

    /// Strength profile of a user in a snapshot file
    Profile {
        /// Snapshot file
        #[arg(long)]
        input: PathBuf,

        /// User id
        #[arg(long)]
        user: Uuid,
    },

    /// Personal records set in a workout from a snapshot file
    Prs {
        /// Snapshot file
        #[arg(long)]
        input: PathBuf,

        /// Workout id
        #[arg(long)]
        workout: Uuid,
    },

    /// Program prescription and progression
    Program {
        #[command(subcommand)]
        action: ProgramCommand,
    },
}

/// Lifter attributes shared by classification commands
#[derive(Args)]
struct LifterArgs {
    /// Lifter bodyweight
    #[arg(long)]
    bodyweight: f64,

    /// Sex code (male, female)
    #[arg(long, default_value = "male")]
    sex: String,

    /// Unit system for bodyweight and loads (lb, kg)
    #[arg(long, default_value = "lb")]
    units: String,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProgramCommand {
    /// Print the next prescribed workout
    Next {
        /// Snapshot file
        #[arg(long)]
        input: PathBuf,

        /// Program id
        #[arg(long)]
        program: Uuid,
    },

    /// Advance the program and save the snapshot
    Advance {
        /// Snapshot file, rewritten with the new program state
        #[arg(long)]
        input: PathBuf,

        /// Program id
        #[arg(long)]
        program: Uuid,

        /// Print the next state without saving it
        #[arg(long)]
        dry_run: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    match run(cli.command, StrengthConfig::global()).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(error) => {
            debug!(code = ?error.code, status = error.http_status(), "Command failed");
            eprintln!(
                "{}",
                serde_json::to_string_pretty(&ErrorResponse::from(error))?
            );
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn run(command: Command, config: &StrengthConfig) -> AppResult<()> {
    match command {
        Command::Estimate { weight, reps } => commands::analytics::estimate(weight, reps),
        Command::Wilks {
            total,
            bodyweight,
            sex,
            units,
        } => commands::analytics::wilks(total, bodyweight, &sex, &units),
        Command::Classify {
            exercise,
            one_rep_max,
            lifter,
        } => {
            let profile = profile_from_flags(lifter.bodyweight, &lifter.sex, &lifter.units, None);
            commands::analytics::classify(&exercise, one_rep_max, &profile)
        }
        Command::Balance {
            squat,
            bench,
            deadlift,
            ohp,
            scoring,
            bodyweight,
            sex,
            units,
            age,
        } => {
            let lifts = BigFourLifts {
                squat,
                bench,
                deadlift,
                ohp,
            };
            let profile = bodyweight.map(|bw| profile_from_flags(bw, &sex, &units, age));
            let mut config = config.clone();
            if let Some(scoring) = scoring {
                config.balance.scoring = scoring;
            }
            commands::analytics::balance(&lifts, profile.as_ref(), &config)
        }
        Command::Profile { input, user } => {
            commands::analytics::profile(&input, user, config).await
        }
        Command::Prs { input, workout } => commands::analytics::prs(&input, workout).await,
        Command::Program { action } => match action {
            ProgramCommand::Next { input, program } => {
                commands::program::next(&input, program, config).await
            }
            ProgramCommand::Advance {
                input,
                program,
                dry_run,
            } => commands::program::advance(&input, program, dry_run, config).await,
        },
    }
}
