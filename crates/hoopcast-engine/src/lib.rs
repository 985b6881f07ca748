//! Monte Carlo projection of a basketball player's next game.
//!
//! The engine is a pipeline of pure functions over caller-owned inputs:
//!
//! 1. [`profile::build_profile`] turns historical [`GameLog`]s into a
//!    [`PerMinuteProfile`] (median and population standard deviation of
//!    minutes and of each per-minute rate).
//! 2. [`Simulator`] draws an ensemble of [`SimulationResult`]s from that
//!    profile, scaling each category by the opponent's [`CategoryModifiers`].
//! 3. [`summary`] reduces the ensemble into means, percentile bands and
//!    over/under probabilities.
//!
//! Nothing in the engine fails on numeric input: empty log sets, missing
//! opponent values and zero league averages all degrade to neutral values.
//!
//! # Example
//!
//! ```
//! use hoopcast_engine::{
//!     DefensiveBenchmark, OpponentProfile, Player, Position, ProjectionSummary, Simulator,
//!     StatCategory, profile, summary,
//! };
//! use rand::SeedableRng as _;
//!
//! let player = Player {
//!     id: "3".to_owned(),
//!     name: "Big".to_owned(),
//!     position: Position::Center,
//!     team: "DEN".to_owned(),
//! };
//! let profile = profile::build_profile(&[]);
//! let opponent = OpponentProfile::from_allowed([(StatCategory::Rebounds, 48.4)]);
//! let league = DefensiveBenchmark::default();
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(1);
//! let results = Simulator::default().simulate(&mut rng, &player, &profile, &opponent, &league);
//! let projection = ProjectionSummary::from_results(&results).unwrap();
//! assert_eq!(projection.minutes_mean, 10.0);
//! assert_eq!(summary::probability_over(&results, StatCategory::Points, 0.5), 0.0);
//! ```

pub use self::{
    category::{ParseCategoryError, Position, StatCategory},
    context::{
        CategoryModifiers, DefensiveBenchmark, Matchup, ModifierPolicy, OpponentProfile,
        ParsePolicyError, PositionalRatings,
    },
    model::{GameLog, PerMinuteProfile, Player, RateDistribution, SimulationResult},
    simulation::{ConfigError, SimulationConfig, Simulator},
    summary::{CategorySummary, ProjectionSummary},
};

pub mod category;
pub mod context;
pub mod model;
pub mod profile;
pub mod simulation;
pub mod summary;
