use std::{collections::BTreeMap, fmt::Write as _, path::PathBuf};

use anyhow::Context as _;
use chrono::Utc;
use hoopcast_engine::{
    CategoryModifiers, ModifierPolicy, ProjectionSummary, SimulationConfig, Simulator,
    StatCategory, profile,
    simulation::DEFAULT_SIMULATION_COUNT,
    summary::{self, DEFAULT_HISTOGRAM_BINS},
};
use hoopcast_stats::descriptive::DescriptiveStats;

use crate::{
    report::{self, LineProbability, ProjectionReport},
    util::{self, Output},
};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ProjectArg {
    /// Dataset JSON file
    #[arg(long)]
    data: PathBuf,
    /// Player id
    #[arg(long)]
    player: String,
    /// Opponent team id or abbreviation
    #[arg(long)]
    opponent: String,
    /// Number of simulated games
    #[arg(long, default_value_t = DEFAULT_SIMULATION_COUNT)]
    simulations: usize,
    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
    /// Number of worker threads
    #[arg(long, default_value_t = 1)]
    workers: usize,
    /// How opponent context becomes modifiers (`per-category` or `positional`)
    #[arg(long, default_value = "per-category")]
    policy: ModifierPolicy,
    /// League benchmark JSON replacing the dataset's league averages
    #[arg(long)]
    league: Option<PathBuf>,
    /// Category for the line and the histogram
    #[arg(long, default_value = "PTS")]
    category: StatCategory,
    /// Betting line for the over/under split
    #[arg(long)]
    line: Option<f64>,
    /// Number of histogram bins
    #[arg(long, default_value_t = DEFAULT_HISTOGRAM_BINS)]
    bins: usize,
    /// Write a JSON report to this path
    #[arg(long)]
    output: Option<PathBuf>,
    /// Include every simulated game in the JSON report
    #[arg(long)]
    include_results: bool,
}

pub(crate) fn run(arg: &ProjectArg) -> anyhow::Result<()> {
    let dataset = util::read_dataset_file(&arg.data)?;
    let player = dataset.player(&arg.player).context("Unknown player")?;
    let team = dataset.team(&arg.opponent).context("Unknown opponent")?;
    let logs = dataset.logs(&player.id).context("Unknown player")?;
    let league = match &arg.league {
        Some(path) => {
            let league = util::read_league_file(path)?;
            for (category, value) in league.iter() {
                tracing::debug!(%category, value, "league average override");
            }
            league
        }
        None => dataset.league_averages.clone(),
    };

    let profile = profile::build_profile(logs);
    let games_profiled = logs.iter().filter(|log| log.has_minutes()).count();
    if games_profiled == 0 {
        tracing::warn!(
            player = %player.id,
            "no games with minutes, projecting from a degenerate profile"
        );
    }

    let simulator = Simulator::new(SimulationConfig {
        count: arg.simulations,
        policy: arg.policy,
        ..SimulationConfig::default()
    })
    .context("Invalid simulation config")?;

    tracing::info!(
        player = %player.id,
        opponent = %team.abbreviation,
        simulations = simulator.config().count,
        workers = arg.workers,
        "running projection"
    );
    let results = match (arg.seed, arg.workers) {
        (None, 0 | 1) => {
            simulator.simulate(&mut rand::rng(), player, &profile, &team.defense, &league)
        }
        (seed, workers) => simulator.simulate_parallel(
            seed.unwrap_or_else(rand::random),
            workers,
            player,
            &profile,
            &team.defense,
            &league,
        ),
    };

    let projection = ProjectionSummary::from_results(&results)
        .context("No simulations were run; pass --simulations greater than 0")?;
    let modifiers = CategoryModifiers::compute(arg.policy, player, &team.defense, &league);
    let line = arg.line.map(|line| {
        let over = summary::probability_over(&results, arg.category, line);
        LineProbability::new(arg.category, line, over)
    });

    let mut text = String::new();
    report::write_matchup(&mut text, team, player, &modifiers)?;
    writeln!(text)?;
    report::write_summary(&mut text, &projection)?;
    if let Some(minutes) = DescriptiveStats::new(results.iter().map(|r| r.minutes)) {
        report::write_minutes(&mut text, &minutes)?;
    }
    if let Some(line) = &line {
        writeln!(text)?;
        report::write_line(&mut text, line)?;
    }
    writeln!(text)?;
    let histogram = summary::distribution(&results, arg.category, arg.bins);
    report::write_histogram(&mut text, arg.category, &histogram)?;
    print!("{text}");

    if let Some(path) = &arg.output {
        let document = ProjectionReport {
            generated_at: Utc::now(),
            player,
            opponent: &team.abbreviation,
            policy: arg.policy,
            games_profiled,
            profile: &profile,
            modifiers: modifiers.iter().collect::<BTreeMap<_, _>>(),
            summary: &projection,
            line,
            results: arg.include_results.then_some(results.as_slice()),
        };
        Output::save_json(&document, Some(path.clone()))?;
        tracing::info!(path = %path.display(), "saved projection report");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Debug, Parser)]
    struct Cli {
        #[clap(flatten)]
        arg: ProjectArg,
    }

    #[test]
    fn test_parse_project_arguments() {
        let cli = Cli::try_parse_from([
            "project",
            "--data",
            "league.json",
            "--player",
            "1",
            "--opponent",
            "bos",
            "--category",
            "reb",
            "--line",
            "8.5",
            "--policy",
            "positional",
        ])
        .unwrap();
        assert_eq!(cli.arg.player, "1");
        assert_eq!(cli.arg.opponent, "bos");
        assert_eq!(cli.arg.category, StatCategory::Rebounds);
        assert_eq!(cli.arg.line, Some(8.5));
        assert!(cli.arg.policy.is_positional());
        assert_eq!(cli.arg.simulations, DEFAULT_SIMULATION_COUNT);
        assert_eq!(cli.arg.bins, DEFAULT_HISTOGRAM_BINS);
        assert!(!cli.arg.include_results);
    }

    #[test]
    fn test_defaults_to_per_category_points() {
        let cli = Cli::try_parse_from([
            "project", "--data", "d.json", "--player", "1", "--opponent", "was",
        ])
        .unwrap();
        assert_eq!(cli.arg.policy, ModifierPolicy::PerCategory);
        assert_eq!(cli.arg.category, StatCategory::Points);
        assert_eq!(cli.arg.workers, 1);
        assert_eq!(cli.arg.seed, None);
    }

    #[test]
    fn test_rejects_unknown_category() {
        let result = Cli::try_parse_from([
            "project", "--data", "d.json", "--player", "1", "--opponent", "was", "--category",
            "dunks",
        ]);
        assert!(result.is_err());
    }
}
