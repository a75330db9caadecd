//! duel_sim - run one seeded player-versus-boss battle and print the timeline

mod report;

use clap::{Parser, ValueEnum};
use duel_core::config::{load_constants, load_roster, ConfigError};
use duel_core::{default_roster, resolve_battle, BattleConstants, DuelError, RedrawPolicy, Seed, SeedRandom};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// Deterministic battle simulator
#[derive(Parser, Debug)]
#[command(name = "duel_sim")]
#[command(about = "Simulate a seeded player-versus-boss battle")]
struct Args {
    /// Seed text; identical seeds replay identical battles
    #[arg(long)]
    seed: Option<String>,

    /// Roster TOML with [player] and [boss] tables (defaults to the reference encounter)
    #[arg(long)]
    roster: Option<PathBuf>,

    /// Battle constants TOML
    #[arg(long)]
    constants: Option<PathBuf>,

    /// Follow-up skill draw rule
    #[arg(long, value_enum)]
    redraw: Option<RedrawArg>,

    /// Print the outcome as JSON instead of a narrative
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RedrawArg {
    Legacy,
    ExcludeLast,
}

impl From<RedrawArg> for RedrawPolicy {
    fn from(arg: RedrawArg) -> Self {
        match arg {
            RedrawArg::Legacy => RedrawPolicy::Legacy,
            RedrawArg::ExcludeLast => RedrawPolicy::ExcludeLast,
        }
    }
}

#[derive(Error, Debug)]
enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Duel(#[from] DuelError),
    #[error("failed to encode outcome: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(%err, "battle failed");
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), SimError> {
    let roster = match &args.roster {
        Some(path) => load_roster(path)?,
        None => default_roster()?,
    };

    let mut constants = match &args.constants {
        Some(path) => load_constants(path)?,
        None => BattleConstants::default(),
    };
    if let Some(redraw) = args.redraw {
        constants.redraw = redraw.into();
    }

    // --seed wins over a seed stored in the roster
    let seed = match (args.seed, roster.seed) {
        (Some(text), _) => Seed::Text(text),
        (None, Some(seed)) => seed,
        (None, None) => time_seed(),
    };
    let seed_text = seed.to_string();
    tracing::info!(seed = %seed_text, redraw = ?constants.redraw, "starting battle");

    let mut rng = SeedRandom::new(seed);
    let outcome = resolve_battle(roster.player, roster.boss, &constants, &mut rng)?;

    if args.json {
        println!("{}", outcome.to_json()?);
    } else {
        print!("{}", report::render(&outcome, &seed_text));
    }
    Ok(())
}

/// Millisecond wall clock as seed text
fn time_seed() -> Seed {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    Seed::Text(millis.to_string())
}
