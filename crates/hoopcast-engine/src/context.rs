//! Opponent context: league benchmarks, what a team allows, and the
//! multiplicative modifiers derived from them.
//!
//! A modifier above 1.0 means the opponent gives up more than the league
//! average (favorable for the projected player), below 1.0 means it is
//! stingier.
//!
//! Two policies are available through [`ModifierPolicy`]:
//!
//! - [`ModifierPolicy::PerCategory`] (default) rates each category on its
//!   own: `allowed[c] / league[c]`, neutral when the opponent has no value
//!   for `c`. Turnovers are rated like every other category.
//! - [`ModifierPolicy::Positional`] picks one rating by the player's
//!   position and applies it to every category, inverting it for turnovers
//!   (`2 - modifier`) since stronger defense forces more of them.

use std::{collections::BTreeMap, str::FromStr};

use hoopcast_stats::numeric;
use serde::{Deserialize, Serialize};

use crate::{Player, Position, StatCategory};

/// League-average per-game values for each category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefensiveBenchmark {
    values: BTreeMap<StatCategory, f64>,
}

impl Default for DefensiveBenchmark {
    fn default() -> Self {
        Self::from_pairs([
            (StatCategory::Points, 115.0),
            (StatCategory::Rebounds, 44.0),
            (StatCategory::Assists, 26.0),
            (StatCategory::Steals, 7.5),
            (StatCategory::Blocks, 5.0),
            (StatCategory::Turnovers, 13.5),
            (StatCategory::ThreePointersMade, 12.5),
        ])
    }
}

impl DefensiveBenchmark {
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (StatCategory, f64)>,
    {
        Self {
            values: pairs.into_iter().collect(),
        }
    }

    /// Returns the league average for `category`, treating a missing entry as 0.
    #[must_use]
    pub fn get(&self, category: StatCategory) -> f64 {
        self.values.get(&category).copied().unwrap_or(0.0)
    }

    /// Returns a copy with `category` replaced by `value`.
    #[must_use]
    pub fn with(mut self, category: StatCategory, value: f64) -> Self {
        self.values.insert(category, value);
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatCategory, f64)> + '_ {
        self.values.iter().map(|(c, v)| (*c, *v))
    }
}

/// A team's overall and per-position defensive ratings.
///
/// A position without its own rating falls back to `overall`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PositionalRatings {
    pub overall: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vs_pg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vs_sg: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vs_sf: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vs_pf: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vs_c: Option<f64>,
}

impl PositionalRatings {
    /// Rating applied to every category for a player at `position`.
    #[must_use]
    pub fn against(&self, position: Position) -> f64 {
        let rating = match position {
            Position::PointGuard => self.vs_pg,
            Position::ShootingGuard => self.vs_sg,
            Position::SmallForward => self.vs_sf,
            Position::PowerForward => self.vs_pf,
            Position::Center => self.vs_c,
        };
        rating.unwrap_or(self.overall)
    }
}

/// What a specific opponent allows per game in each category.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpponentProfile {
    #[serde(default)]
    pub allowed: BTreeMap<StatCategory, f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positional: Option<PositionalRatings>,
}

impl OpponentProfile {
    pub fn from_allowed<I>(allowed: I) -> Self
    where
        I: IntoIterator<Item = (StatCategory, f64)>,
    {
        Self {
            allowed: allowed.into_iter().collect(),
            positional: None,
        }
    }

    #[must_use]
    pub fn with_positional(mut self, ratings: PositionalRatings) -> Self {
        self.positional = Some(ratings);
        self
    }

    #[must_use]
    pub fn allowed(&self, category: StatCategory) -> Option<f64> {
        self.allowed.get(&category).copied()
    }
}

/// How opponent context is turned into per-category modifiers.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "kebab-case")]
pub enum ModifierPolicy {
    #[default]
    PerCategory,
    Positional,
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown modifier policy: {input} (expected `per-category` or `positional`)")]
pub struct ParsePolicyError {
    pub input: String,
}

impl FromStr for ModifierPolicy {
    type Err = ParsePolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per-category" | "category" => Ok(Self::PerCategory),
            "positional" | "position" => Ok(Self::Positional),
            _ => Err(ParsePolicyError { input: s.to_owned() }),
        }
    }
}

/// One multiplicative modifier per category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CategoryModifiers {
    values: [f64; StatCategory::LEN],
}

impl Default for CategoryModifiers {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl CategoryModifiers {
    pub const NEUTRAL: Self = Self {
        values: [1.0; StatCategory::LEN],
    };

    /// Computes the modifiers for `player` facing `opponent`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hoopcast_engine::{
    ///     CategoryModifiers, DefensiveBenchmark, ModifierPolicy, OpponentProfile, Player,
    ///     Position, StatCategory,
    /// };
    ///
    /// let player = Player {
    ///     id: "1".to_owned(),
    ///     name: "Guard".to_owned(),
    ///     position: Position::PointGuard,
    ///     team: "DAL".to_owned(),
    /// };
    /// let opponent = OpponentProfile::from_allowed([(StatCategory::Points, 92.0)]);
    /// let league = DefensiveBenchmark::default().with(StatCategory::Points, 115.0);
    /// let modifiers =
    ///     CategoryModifiers::compute(ModifierPolicy::PerCategory, &player, &opponent, &league);
    /// assert_eq!(modifiers.get(StatCategory::Points), 0.8);
    /// assert_eq!(modifiers.get(StatCategory::Rebounds), 1.0);
    /// ```
    #[must_use]
    pub fn compute(
        policy: ModifierPolicy,
        player: &Player,
        opponent: &OpponentProfile,
        league: &DefensiveBenchmark,
    ) -> Self {
        match policy {
            ModifierPolicy::PerCategory => Self::per_category(opponent, league),
            ModifierPolicy::Positional => Self::positional(player.position, opponent),
        }
    }

    /// Rates every category independently against the league benchmark.
    #[must_use]
    pub fn per_category(opponent: &OpponentProfile, league: &DefensiveBenchmark) -> Self {
        let mut values = [1.0; StatCategory::LEN];
        for category in StatCategory::ALL {
            if let Some(allowed) = opponent.allowed(category) {
                values[category.as_index()] =
                    numeric::defensive_rating(allowed, league.get(category));
            }
        }
        Self { values }
    }

    /// Applies the opponent's rating against `position` to every category.
    #[must_use]
    pub fn positional(position: Position, opponent: &OpponentProfile) -> Self {
        let Some(ratings) = &opponent.positional else {
            tracing::debug!("opponent has no positional ratings, using neutral modifiers");
            return Self::NEUTRAL;
        };
        let rating = ratings.against(position);
        let mut values = [rating; StatCategory::LEN];
        values[StatCategory::Turnovers.as_index()] = 2.0 - rating;
        Self { values }
    }

    #[must_use]
    pub fn get(&self, category: StatCategory) -> f64 {
        self.values[category.as_index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (StatCategory, f64)> + '_ {
        StatCategory::ALL.into_iter().map(|c| (c, self.get(c)))
    }
}

/// Coarse label for a defensive modifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display, derive_more::IsVariant,
)]
pub enum Matchup {
    Favorable,
    Neutral,
    Tough,
}

impl Matchup {
    const FAVORABLE_ABOVE: f64 = 1.05;
    const TOUGH_BELOW: f64 = 0.95;

    #[must_use]
    pub fn classify(modifier: f64) -> Self {
        if modifier > Self::FAVORABLE_ABOVE {
            Self::Favorable
        } else if modifier < Self::TOUGH_BELOW {
            Self::Tough
        } else {
            Self::Neutral
        }
    }
}
