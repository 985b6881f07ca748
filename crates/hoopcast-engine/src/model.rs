use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Position, StatCategory};

/// A player being projected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: String,
    pub name: String,
    pub position: Position,
    /// Abbreviation of the player's own team.
    pub team: String,
}

/// One historical game's box score for a player.
///
/// Shooting attempt fields are carried through from the source data but do
/// not take part in projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameLog {
    pub game_id: String,
    pub date: NaiveDate,
    pub minutes: f64,
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
    pub stl: f64,
    pub blk: f64,
    pub tov: f64,
    pub fg3m: f64,
    #[serde(default)]
    pub fga: f64,
    #[serde(default)]
    pub fgm: f64,
    #[serde(default)]
    pub fta: f64,
    #[serde(default)]
    pub ftm: f64,
}

impl GameLog {
    /// Returns the raw counting stat for `category`.
    #[must_use]
    pub fn stat(&self, category: StatCategory) -> f64 {
        match category {
            StatCategory::Points => self.pts,
            StatCategory::Rebounds => self.reb,
            StatCategory::Assists => self.ast,
            StatCategory::Steals => self.stl,
            StatCategory::Blocks => self.blk,
            StatCategory::Turnovers => self.tov,
            StatCategory::ThreePointersMade => self.fg3m,
        }
    }

    /// Returns `true` if the log carries rate information.
    #[must_use]
    pub fn has_minutes(&self) -> bool {
        self.minutes > 0.0
    }
}

/// Median and population standard deviation of one profiled quantity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateDistribution {
    pub median: f64,
    pub std_dev: f64,
}

impl RateDistribution {
    pub const ZERO: Self = Self {
        median: 0.0,
        std_dev: 0.0,
    };

    #[must_use]
    pub const fn new(median: f64, std_dev: f64) -> Self {
        Self { median, std_dev }
    }
}

/// Per-minute statistical profile derived from a set of game logs.
///
/// `minutes` describes raw minutes played; every other field describes a
/// per-minute rate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerMinuteProfile {
    pub minutes: RateDistribution,
    pub pts_per_min: RateDistribution,
    pub reb_per_min: RateDistribution,
    pub ast_per_min: RateDistribution,
    pub stl_per_min: RateDistribution,
    pub blk_per_min: RateDistribution,
    pub tov_per_min: RateDistribution,
    pub fg3m_per_min: RateDistribution,
}

impl PerMinuteProfile {
    /// The "no information" profile: every pair is `(0, 0)`.
    pub const DEGENERATE: Self = Self {
        minutes: RateDistribution::ZERO,
        pts_per_min: RateDistribution::ZERO,
        reb_per_min: RateDistribution::ZERO,
        ast_per_min: RateDistribution::ZERO,
        stl_per_min: RateDistribution::ZERO,
        blk_per_min: RateDistribution::ZERO,
        tov_per_min: RateDistribution::ZERO,
        fg3m_per_min: RateDistribution::ZERO,
    };

    #[must_use]
    pub fn rate(&self, category: StatCategory) -> RateDistribution {
        match category {
            StatCategory::Points => self.pts_per_min,
            StatCategory::Rebounds => self.reb_per_min,
            StatCategory::Assists => self.ast_per_min,
            StatCategory::Steals => self.stl_per_min,
            StatCategory::Blocks => self.blk_per_min,
            StatCategory::Turnovers => self.tov_per_min,
            StatCategory::ThreePointersMade => self.fg3m_per_min,
        }
    }

    pub fn rate_mut(&mut self, category: StatCategory) -> &mut RateDistribution {
        match category {
            StatCategory::Points => &mut self.pts_per_min,
            StatCategory::Rebounds => &mut self.reb_per_min,
            StatCategory::Assists => &mut self.ast_per_min,
            StatCategory::Steals => &mut self.stl_per_min,
            StatCategory::Blocks => &mut self.blk_per_min,
            StatCategory::Turnovers => &mut self.tov_per_min,
            StatCategory::ThreePointersMade => &mut self.fg3m_per_min,
        }
    }

    /// Returns an iterator over every field, minutes first.
    pub fn iter(&self) -> impl Iterator<Item = RateDistribution> + '_ {
        std::iter::once(self.minutes).chain(StatCategory::ALL.into_iter().map(|c| self.rate(c)))
    }
}

/// One simulated game outcome.
///
/// `minutes` is the simulated playing time before any contextual adjustment;
/// category values include the opponent modifier.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub sim_id: usize,
    pub minutes: f64,
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
    pub stl: f64,
    pub blk: f64,
    pub tov: f64,
    pub fg3m: f64,
}

impl SimulationResult {
    #[must_use]
    pub fn get(&self, category: StatCategory) -> f64 {
        match category {
            StatCategory::Points => self.pts,
            StatCategory::Rebounds => self.reb,
            StatCategory::Assists => self.ast,
            StatCategory::Steals => self.stl,
            StatCategory::Blocks => self.blk,
            StatCategory::Turnovers => self.tov,
            StatCategory::ThreePointersMade => self.fg3m,
        }
    }

    pub fn set(&mut self, category: StatCategory, value: f64) {
        let slot = match category {
            StatCategory::Points => &mut self.pts,
            StatCategory::Rebounds => &mut self.reb,
            StatCategory::Assists => &mut self.ast,
            StatCategory::Steals => &mut self.stl,
            StatCategory::Blocks => &mut self.blk,
            StatCategory::Turnovers => &mut self.tov,
            StatCategory::ThreePointersMade => &mut self.fg3m,
        };
        *slot = value;
    }
}
