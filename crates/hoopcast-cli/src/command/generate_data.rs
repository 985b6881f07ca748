use std::path::PathBuf;

use hoopcast_data::Dataset;
use rand::{SeedableRng as _, rngs::StdRng};

use crate::util::Output;

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct GenerateDataArg {
    /// Seed for reproducible logs
    #[arg(long)]
    seed: Option<u64>,
    /// Number of games generated per player
    #[arg(long, default_value_t = 25)]
    games: usize,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: &GenerateDataArg) -> anyhow::Result<()> {
    let GenerateDataArg {
        seed,
        games,
        output,
    } = arg;

    let dataset = match seed {
        Some(seed) => Dataset::sample(&mut StdRng::seed_from_u64(*seed), *games),
        None => Dataset::sample(&mut rand::rng(), *games),
    };
    tracing::info!(
        players = dataset.players.len(),
        teams = dataset.teams.len(),
        games,
        "generated sample dataset"
    );

    Output::save_json(&dataset, output.clone())?;
    Ok(())
}
