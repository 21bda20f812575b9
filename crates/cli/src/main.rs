//! Pulse CLI - readiness engine driver.
//!
//! Loads user/onboarding/goal snapshots from JSON files and prints what the
//! engines derive from them. All persistence stays outside; this binary
//! only reads inputs and writes to stdout.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::Level;

use pulse_confidence::{average_confidence, confidence_percentage};
use pulse_core::{GoalSnapshot, OnboardingRecord, StepCatalog, Time, UserSnapshot};
use pulse_journey::JourneyEngine;

#[derive(Parser)]
#[command(name = "pulse")]
#[command(about = "User progression and goal readiness engines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the full journey state for a user
    Journey {
        /// User snapshot JSON file
        #[arg(long)]
        user: PathBuf,
        /// Onboarding record JSON file (omit for a brand-new user)
        #[arg(long)]
        onboarding: Option<PathBuf>,
        /// Custom step catalog JSON file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Print the completion summary label
    Summary {
        /// User snapshot JSON file
        #[arg(long)]
        user: PathBuf,
        /// Onboarding record JSON file
        #[arg(long)]
        onboarding: Option<PathBuf>,
        /// Custom step catalog JSON file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
    /// Project the confidence percentage for a goal
    Confidence {
        /// Goal snapshot JSON file
        #[arg(long)]
        goal: PathBuf,
        /// Evaluation instant (RFC 3339); defaults to the current time
        #[arg(long)]
        now: Option<String>,
    },
    /// Average the stored confidence levels of a goal list
    Average {
        /// JSON file with an array of goal snapshots
        #[arg(long)]
        goals: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Journey {
            user,
            onboarding,
            catalog,
        } => {
            let engine = build_engine(catalog.as_deref())?;
            let state = engine.journey_state(
                &load_json::<UserSnapshot>(&user)?,
                load_onboarding(onboarding.as_deref())?.as_ref(),
            );
            println!("{}", serde_json::to_string_pretty(&state)?);
        }
        Commands::Summary {
            user,
            onboarding,
            catalog,
        } => {
            let engine = build_engine(catalog.as_deref())?;
            let state = engine.journey_state(
                &load_json::<UserSnapshot>(&user)?,
                load_onboarding(onboarding.as_deref())?.as_ref(),
            );
            let summary = engine.summarize(&state);
            println!(
                "{} (all complete: {})",
                summary.next_status.as_str(),
                summary.all_complete
            );
        }
        Commands::Confidence { goal, now } => {
            let goal = load_json::<GoalSnapshot>(&goal)?;
            let now = parse_now(now.as_deref())?;
            println!("{}", confidence_percentage(now, &goal));
        }
        Commands::Average { goals } => {
            let goals = load_json::<Vec<GoalSnapshot>>(&goals)?;
            println!("{}", average_confidence(&goals));
        }
    }

    Ok(())
}

fn build_engine(catalog: Option<&Path>) -> Result<JourneyEngine> {
    match catalog {
        Some(path) => {
            let catalog = load_json::<StepCatalog>(path)?;
            catalog
                .validate()
                .with_context(|| format!("invalid step catalog: {}", path.display()))?;
            Ok(JourneyEngine::new(catalog))
        }
        None => Ok(JourneyEngine::default()),
    }
}

fn load_onboarding(path: Option<&Path>) -> Result<Option<OnboardingRecord>> {
    path.map(load_json::<OnboardingRecord>).transpose()
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}

fn parse_now(now: Option<&str>) -> Result<Time> {
    match now {
        Some(raw) => {
            let parsed = chrono::DateTime::parse_from_rfc3339(raw)
                .with_context(|| format!("invalid --now timestamp: {raw}"))?;
            Ok(parsed.with_timezone(&Utc))
        }
        None => Ok(Utc::now()),
    }
}
