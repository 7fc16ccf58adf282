// ABOUTME: Command-line entry point for the Spot workout coach
// ABOUTME: Parses flags, initializes logging, and runs the coach or prints stored history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Spot Coach Binary
//!
//! `spot` runs one interactive coaching session. `spot history --part <PART>`
//! prints the stored session logs and progress for a body part without
//! changing anything.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spot_coach::{
    coach::Coach,
    config::CoachConfig,
    logging::LoggingConfig,
    models::{BodyPart, MemoryDocument, WorkoutRecord},
    session::display::render_progress,
    storage::{JsonFileStore, MemoryStore},
};
use std::path::PathBuf;
use std::time::Duration;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "spot")]
#[command(about = "Spot - voice-guided workout coach with live form feedback")]
#[command(version)]
struct Args {
    /// JSON memory document path
    #[arg(long, global = true)]
    memory_file: Option<PathBuf>,

    /// Milliseconds between session ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for reproducible simulated telemetry
    #[arg(long)]
    seed: Option<u64>,

    /// Text-to-speech program (the text is appended as the last argument)
    #[arg(long)]
    voice_command: Option<String>,

    /// Skip the offer to chat before the workout
    #[arg(long)]
    no_chat: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print stored workouts, session logs, and progress for a body part
    History {
        /// Body part (Arms, Legs, Chest, Back, Core, Cardio)
        #[arg(long)]
        part: BodyPart,

        /// Only this workout (matched case-insensitively)
        #[arg(long)]
        workout: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let logging = LoggingConfig::from_env();
    let logging = if args.verbose {
        logging.verbose()
    } else {
        logging
    };
    logging.init()?;

    let mut config = CoachConfig::from_env()?;
    apply_overrides(&mut config, &args);

    match args.command {
        Some(Command::History { part, workout }) => {
            print_history(&config, part, workout.as_deref()).await
        }
        None => {
            let mut coach = Coach::from_config(&config).context("Failed to set up the coach")?;
            if args.no_chat {
                coach = coach.without_chat();
            }
            match coach.run().await {
                Ok(outcome) => {
                    info!(?outcome, "Spot finished");
                    Ok(())
                }
                Err(e) => {
                    error!(error = %e, "Spot stopped");
                    Err(e.into())
                }
            }
        }
    }
}

fn apply_overrides(config: &mut CoachConfig, args: &Args) {
    if let Some(path) = &args.memory_file {
        config.memory_file.clone_from(path);
    }
    if let Some(ms) = args.tick_ms {
        config.tick_interval = Duration::from_millis(ms);
    }
    if args.seed.is_some() {
        config.telemetry_seed = args.seed;
    }
    if let Some(command) = &args.voice_command {
        config.voice.command = Some(command.clone());
    }
}

async fn print_history(config: &CoachConfig, part: BodyPart, workout: Option<&str>) -> Result<()> {
    let store = JsonFileStore::new(config.memory_file.clone());
    let document = store
        .load()
        .await
        .with_context(|| format!("Failed to read {}", store.path().display()))?;

    let selected = selected_workouts(&document, part, workout);
    if selected.is_empty() {
        println!("No workouts stored under {part}.");
        return Ok(());
    }

    for (name, record) in selected {
        println!("{name} ({}) - done {} times", record.muscle_groups, record.times_done);
        if record.history.is_empty() {
            println!("  No sessions logged yet.");
        }
        for log in &record.history {
            println!(
                "  {}  {} kg x {} reps x {} sets  {}  {:.2} kcal",
                log.date, log.weight, log.reps, log.sets, log.duration, log.calories_burned
            );
        }
        println!("{}\n", render_progress(record.progress.as_ref()));
    }
    Ok(())
}

fn selected_workouts<'a>(
    document: &'a MemoryDocument,
    part: BodyPart,
    workout: Option<&str>,
) -> Vec<(&'a str, &'a WorkoutRecord)> {
    let Some(workouts) = document.workouts(part) else {
        return Vec::new();
    };
    match workout {
        Some(name) => document
            .find_workout_key(part, name)
            .and_then(|key| workouts.get_key_value(key))
            .map(|(key, record)| vec![(key.as_str(), record)])
            .unwrap_or_default(),
        None => workouts
            .iter()
            .map(|(key, record)| (key.as_str(), record))
            .collect(),
    }
}
