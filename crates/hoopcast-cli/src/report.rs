use std::{collections::BTreeMap, fmt};

use chrono::{DateTime, Utc};
use hoopcast_data::Team;
use hoopcast_engine::{
    CategoryModifiers, Matchup, ModifierPolicy, PerMinuteProfile, Player, ProjectionSummary,
    SimulationResult, StatCategory,
};
use hoopcast_stats::{descriptive::DescriptiveStats, histogram::Histogram};
use serde::Serialize;

const BAR_WIDTH: u64 = 40;

/// Over/under split for a betting line.
#[derive(Debug, Clone, Serialize)]
pub struct LineProbability {
    pub category: StatCategory,
    pub line: f64,
    pub over: f64,
    pub under: f64,
}

impl LineProbability {
    pub fn new(category: StatCategory, line: f64, over: f64) -> Self {
        Self {
            category,
            line,
            over,
            under: 1.0 - over,
        }
    }
}

/// JSON document written by `project --output`.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectionReport<'a> {
    pub generated_at: DateTime<Utc>,
    pub player: &'a Player,
    pub opponent: &'a str,
    pub policy: ModifierPolicy,
    pub games_profiled: usize,
    pub profile: &'a PerMinuteProfile,
    pub modifiers: BTreeMap<StatCategory, f64>,
    pub summary: &'a ProjectionSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<LineProbability>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<&'a [SimulationResult]>,
}

pub fn write_profile(
    out: &mut dyn fmt::Write,
    player: &Player,
    games: usize,
    profile: &PerMinuteProfile,
) -> fmt::Result {
    writeln!(
        out,
        "{} ({}, {}) - {games} games with minutes",
        player.name, player.team, player.position
    )?;
    writeln!(out, "  {:<8} {:>9} {:>9}", "", "median", "std dev")?;
    writeln!(
        out,
        "  {:<8} {:>9.2} {:>9.2}",
        "MIN", profile.minutes.median, profile.minutes.std_dev
    )?;
    for category in StatCategory::ALL {
        let dist = profile.rate(category);
        writeln!(
            out,
            "  {:<8} {:>9.4} {:>9.4}",
            format!("{category}/min"),
            dist.median,
            dist.std_dev
        )?;
    }
    Ok(())
}

pub fn write_matchup(
    out: &mut dyn fmt::Write,
    team: &Team,
    player: &Player,
    modifiers: &CategoryModifiers,
) -> fmt::Result {
    writeln!(out, "{} vs {} ({})", player.name, team.name, team.abbreviation)?;
    for (category, modifier) in modifiers.iter() {
        writeln!(
            out,
            "  {:<5} {modifier:>6.3}  {}",
            category.to_string(),
            Matchup::classify(modifier)
        )?;
    }
    Ok(())
}

pub fn write_summary(out: &mut dyn fmt::Write, summary: &ProjectionSummary) -> fmt::Result {
    writeln!(
        out,
        "Projection over {} simulations (avg minutes {:.1})",
        summary.simulations, summary.minutes_mean
    )?;
    writeln!(
        out,
        "  {:<5} {:>8} {:>8} {:>8} {:>8}",
        "", "mean", "floor", "median", "ceiling"
    )?;
    for s in &summary.categories {
        writeln!(
            out,
            "  {:<5} {:>8.1} {:>8.1} {:>8.1} {:>8.1}",
            s.category.to_string(),
            s.mean,
            s.floor,
            s.median,
            s.ceiling
        )?;
    }
    Ok(())
}

pub fn write_minutes(out: &mut dyn fmt::Write, minutes: &DescriptiveStats) -> fmt::Result {
    writeln!(
        out,
        "Minutes: median {:.1}, std dev {:.1}, range {:.1} - {:.1}",
        minutes.median, minutes.std_dev, minutes.min, minutes.max
    )
}

pub fn write_line(out: &mut dyn fmt::Write, line: &LineProbability) -> fmt::Result {
    writeln!(
        out,
        "{} line {:.1}: over {:.1}% / under {:.1}%",
        line.category,
        line.line,
        line.over * 100.0,
        line.under * 100.0
    )
}

pub fn write_histogram(
    out: &mut dyn fmt::Write,
    category: StatCategory,
    histogram: &Histogram,
) -> fmt::Result {
    writeln!(out, "{} ({category}) distribution", category.name())?;
    let max = histogram.max_count().max(1);
    for bin in &histogram.bins {
        let width = bin.count * BAR_WIDTH / max;
        let bar = "#".repeat(usize::try_from(width).unwrap_or(0));
        writeln!(
            out,
            "  {:>6.1} - {:>6.1} | {:<40} {}",
            bin.range.start, bin.range.end, bar, bin.count
        )?;
    }
    Ok(())
}
