//! Monte Carlo simulation of a player's next game.
//!
//! Every simulated game is independent:
//!
//! 1. Minutes are drawn from the profile's minutes distribution and clamped to
//!    `[min_minutes, max_minutes]` (10 and 48 by default).
//! 2. One per-minute rate is drawn for each category, in
//!    [`StatCategory::ALL`] order, and floored at 0.
//! 3. Each category value is `minutes * rate * modifier`, where the modifier
//!    comes from [`CategoryModifiers`]. Minutes are stored unmodified.
//!
//! Modifiers depend only on the inputs, so they are computed once per run.
//!
//! # Randomness
//!
//! [`Simulator::simulate`] draws from an injected
//! [`UniformSource`](hoopcast_stats::gaussian::UniformSource), which makes runs
//! reproducible under a seeded or fixed source.
//! [`Simulator::simulate_parallel`] splits the games into contiguous chunks and
//! gives each worker thread its own `Pcg64Mcg` derived from a master seed.

use std::thread;

use hoopcast_stats::{
    gaussian::{self, UniformSource},
    numeric,
};
use rand::SeedableRng as _;
use rand_pcg::Pcg64Mcg;
use serde::{Deserialize, Serialize};

use crate::{
    CategoryModifiers, DefensiveBenchmark, ModifierPolicy, OpponentProfile, PerMinuteProfile,
    Player, SimulationResult, StatCategory,
};

/// Number of simulated games per run.
///
/// With 1000 games, sorted index 100 is the 10th percentile and index 900 the
/// 90th.
pub const DEFAULT_SIMULATION_COUNT: usize = 1000;
pub const DEFAULT_MIN_MINUTES: f64 = 10.0;
pub const DEFAULT_MAX_MINUTES: f64 = 48.0;

/// Parameters of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of games to simulate.
    pub count: usize,
    /// Lower bound on simulated minutes.
    pub min_minutes: f64,
    /// Upper bound on simulated minutes.
    pub max_minutes: f64,
    /// How opponent context becomes per-category modifiers.
    pub policy: ModifierPolicy,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_SIMULATION_COUNT,
            min_minutes: DEFAULT_MIN_MINUTES,
            max_minutes: DEFAULT_MAX_MINUTES,
            policy: ModifierPolicy::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum ConfigError {
    #[display("minutes bounds must be finite, got {min}..={max}")]
    NonFiniteMinutes { min: f64, max: f64 },
    #[display("minimum minutes {min} exceeds maximum minutes {max}")]
    InvertedMinutes { min: f64, max: f64 },
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let (min, max) = (self.min_minutes, self.max_minutes);
        if !min.is_finite() || !max.is_finite() {
            return Err(ConfigError::NonFiniteMinutes { min, max });
        }
        if min > max {
            return Err(ConfigError::InvertedMinutes { min, max });
        }
        Ok(())
    }
}

/// Runs simulations under a validated [`SimulationConfig`].
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Default for Simulator {
    fn default() -> Self {
        Self {
            config: SimulationConfig::default(),
        }
    }
}

impl Simulator {
    pub fn new(config: SimulationConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates `config.count` games, drawing every uniform from `source`.
    ///
    /// # Examples
    ///
    /// ```
    /// use hoopcast_engine::{
    ///     DefensiveBenchmark, OpponentProfile, PerMinuteProfile, Player, Position,
    ///     RateDistribution, Simulator,
    /// };
    /// use rand::SeedableRng as _;
    ///
    /// let player = Player {
    ///     id: "1".to_owned(),
    ///     name: "Wing".to_owned(),
    ///     position: Position::SmallForward,
    ///     team: "BOS".to_owned(),
    /// };
    /// let profile = PerMinuteProfile {
    ///     minutes: RateDistribution::new(34.0, 3.0),
    ///     pts_per_min: RateDistribution::new(0.75, 0.1),
    ///     ..PerMinuteProfile::DEGENERATE
    /// };
    /// let mut rng = rand::rngs::StdRng::seed_from_u64(3);
    /// let results = Simulator::default().simulate(
    ///     &mut rng,
    ///     &player,
    ///     &profile,
    ///     &OpponentProfile::default(),
    ///     &DefensiveBenchmark::default(),
    /// );
    /// assert_eq!(results.len(), 1000);
    /// assert!(results.iter().all(|r| (10.0..=48.0).contains(&r.minutes)));
    /// ```
    pub fn simulate<U>(
        &self,
        source: &mut U,
        player: &Player,
        profile: &PerMinuteProfile,
        opponent: &OpponentProfile,
        league: &DefensiveBenchmark,
    ) -> Vec<SimulationResult>
    where
        U: UniformSource + ?Sized,
    {
        let modifiers = self.modifiers(player, opponent, league);
        (0..self.config.count)
            .map(|sim_id| self.simulate_game(source, sim_id, profile, &modifiers))
            .collect()
    }

    /// Simulates `config.count` games across `workers` threads.
    ///
    /// Results keep their `sim_id` order. The output depends only on `seed`,
    /// `workers` and the inputs.
    pub fn simulate_parallel(
        &self,
        seed: u64,
        workers: usize,
        player: &Player,
        profile: &PerMinuteProfile,
        opponent: &OpponentProfile,
        league: &DefensiveBenchmark,
    ) -> Vec<SimulationResult> {
        let count = self.config.count;
        let workers = workers.clamp(1, count.max(1));
        let chunk_len = count.div_ceil(workers);
        let modifiers = self.modifiers(player, opponent, league);
        tracing::debug!(count, workers, chunk_len, "fanning out simulation");

        let mut results = vec![SimulationResult::default(); count];
        thread::scope(|s| {
            for (worker, chunk) in results.chunks_mut(chunk_len.max(1)).enumerate() {
                let modifiers = &modifiers;
                s.spawn(move || {
                    let mut rng = Pcg64Mcg::seed_from_u64(worker_seed(seed, worker));
                    let start = worker * chunk_len;
                    for (offset, slot) in chunk.iter_mut().enumerate() {
                        *slot = self.simulate_game(&mut rng, start + offset, profile, modifiers);
                    }
                });
            }
        });
        results
    }

    fn modifiers(
        &self,
        player: &Player,
        opponent: &OpponentProfile,
        league: &DefensiveBenchmark,
    ) -> CategoryModifiers {
        let modifiers = CategoryModifiers::compute(self.config.policy, player, opponent, league);
        tracing::debug!(
            player = %player.id,
            policy = ?self.config.policy,
            pts = modifiers.get(StatCategory::Points),
            "computed opponent modifiers"
        );
        modifiers
    }

    fn simulate_game<U>(
        &self,
        source: &mut U,
        sim_id: usize,
        profile: &PerMinuteProfile,
        modifiers: &CategoryModifiers,
    ) -> SimulationResult
    where
        U: UniformSource + ?Sized,
    {
        let minutes = numeric::clamp(
            gaussian::sample(source, profile.minutes.median, profile.minutes.std_dev),
            self.config.min_minutes,
            self.config.max_minutes,
        );

        let mut result = SimulationResult {
            sim_id,
            minutes,
            ..SimulationResult::default()
        };
        for category in StatCategory::ALL {
            let dist = profile.rate(category);
            let rate = gaussian::sample(source, dist.median, dist.std_dev).max(0.0);
            result.set(category, minutes * rate * modifiers.get(category));
        }
        result
    }
}

/// Simulates with the default configuration and the thread-local generator.
#[must_use]
pub fn simulate(
    player: &Player,
    profile: &PerMinuteProfile,
    opponent: &OpponentProfile,
    league: &DefensiveBenchmark,
) -> Vec<SimulationResult> {
    Simulator::default().simulate(&mut rand::rng(), player, profile, opponent, league)
}

fn worker_seed(seed: u64, worker: usize) -> u64 {
    seed ^ (worker as u64).wrapping_mul(0x9e37_79b9_7f4a_7c15)
}
