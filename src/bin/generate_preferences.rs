//! Writes a synthetic user preference CSV.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::info;

use preference_graph::adapters::write_records;
use preference_graph::domain::synthetic::{GeneratorSettings, SyntheticGenerator};
use preference_graph::telemetry;

/// Generate randomized users and their preferences
#[derive(Parser, Debug)]
#[command(name = "generate-preferences")]
#[command(version)]
struct Cli {
    /// Output CSV path
    #[arg(short, long, default_value = "user_preferences.csv")]
    output: PathBuf,

    /// Number of users to generate
    #[arg(short, long, default_value_t = 2000)]
    users: u32,

    /// Seed for reproducible output (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init_tracing("info");

    let rng = match cli.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let settings = GeneratorSettings {
        users: cli.users,
        ..Default::default()
    };

    let records = SyntheticGenerator::new(rng, settings)
        .context("Invalid generator settings")?
        .generate()
        .context("Failed to generate rows")?;
    write_records(&cli.output, &records)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    info!(
        users = cli.users,
        rows = records.len(),
        path = %cli.output.display(),
        "Wrote synthetic preferences"
    );
    Ok(())
}
