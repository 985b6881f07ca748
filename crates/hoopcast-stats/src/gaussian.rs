//! Normal (Gaussian) sampling over an injectable uniform source.
//!
//! The sampler never touches a global random generator. Callers hand in a
//! [`UniformSource`]: any [`rand::Rng`] works out of the box, and
//! [`FixedUniform`] replays a fixed sequence so that tests can pin every draw.
//!
//! # Draw order
//!
//! [`sample`] consumes exactly two uniforms per call, `u` first and `v`
//! second, and combines them with the Box-Muller transform:
//!
//! ```text
//! z = sqrt(-2 ln u) * cos(2 pi v)
//! x = mean + z * std_dev
//! ```
//!
//! Both uniforms lie in the open interval `(0, 1)`, so `ln u` is finite.
//!
//! # Concurrency
//!
//! A source is borrowed mutably for the whole call, so the two uniforms of one
//! Gaussian draw can never interleave with another thread's draws. Parallel
//! callers give every worker its own source.

use std::f64::consts::PI;

use rand::{Rng, distr::Open01};

/// A producer of uniform values in the open interval `(0, 1)`.
pub trait UniformSource {
    /// Returns the next uniform value, strictly between 0 and 1.
    fn next_open01(&mut self) -> f64;
}

impl<R> UniformSource for R
where
    R: Rng + ?Sized,
{
    fn next_open01(&mut self) -> f64 {
        self.sample(Open01)
    }
}

/// Error returned when a [`FixedUniform`] is built from unusable values.
#[derive(Debug, Clone, PartialEq, derive_more::Display, derive_more::Error)]
pub enum FixedUniformError {
    #[display("fixed uniform sequence must not be empty")]
    Empty,
    #[display("fixed uniform value {value} at index {index} is outside (0, 1)")]
    OutOfRange { index: usize, value: f64 },
}

/// A uniform source that replays a fixed sequence, wrapping around at the end.
///
/// # Examples
///
/// ```
/// use hoopcast_stats::gaussian::{FixedUniform, UniformSource};
///
/// let mut source = FixedUniform::new(vec![0.25, 0.75]).unwrap();
/// assert_eq!(source.next_open01(), 0.25);
/// assert_eq!(source.next_open01(), 0.75);
/// assert_eq!(source.next_open01(), 0.25);
/// ```
#[derive(Debug, Clone)]
pub struct FixedUniform {
    values: Vec<f64>,
    position: usize,
}

impl FixedUniform {
    /// Creates a source replaying `values`.
    ///
    /// Every value must lie strictly between 0 and 1.
    pub fn new(values: Vec<f64>) -> Result<Self, FixedUniformError> {
        if values.is_empty() {
            return Err(FixedUniformError::Empty);
        }
        if let Some((index, &value)) = values
            .iter()
            .enumerate()
            .find(|(_, v)| !(**v > 0.0 && **v < 1.0))
        {
            return Err(FixedUniformError::OutOfRange { index, value });
        }
        Ok(Self {
            values,
            position: 0,
        })
    }

    /// Returns how many values have been consumed so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.position
    }
}

impl UniformSource for FixedUniform {
    fn next_open01(&mut self) -> f64 {
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value
    }
}

/// Draws one sample from `Normal(mean, std_dev)`.
///
/// A zero `std_dev` returns `mean` exactly.
///
/// # Examples
///
/// ```
/// use hoopcast_stats::gaussian;
/// use rand::SeedableRng as _;
///
/// let mut rng = rand::rngs::StdRng::seed_from_u64(7);
/// let x = gaussian::sample(&mut rng, 10.0, 2.0);
/// assert!(x.is_finite());
/// ```
pub fn sample<U>(source: &mut U, mean: f64, std_dev: f64) -> f64
where
    U: UniformSource + ?Sized,
{
    let u = source.next_open01();
    let v = source.next_open01();
    let z = (-2.0 * u.ln()).sqrt() * (2.0 * PI * v).cos();
    z * std_dev + mean
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::descriptive;

    #[test]
    fn test_fixed_uniform_rejects_bounds() {
        assert_eq!(FixedUniform::new(vec![]).unwrap_err(), FixedUniformError::Empty);
        assert_eq!(
            FixedUniform::new(vec![0.5, 0.0]).unwrap_err(),
            FixedUniformError::OutOfRange {
                index: 1,
                value: 0.0
            }
        );
        assert!(FixedUniform::new(vec![1.0]).is_err());
    }

    #[test]
    fn test_sample_consumes_two_uniforms() {
        let mut source = FixedUniform::new(vec![0.3, 0.6, 0.9]).unwrap();
        let _ = sample(&mut source, 0.0, 1.0);
        assert_eq!(source.consumed(), 2);
        let _ = sample(&mut source, 0.0, 1.0);
        assert_eq!(source.consumed(), 4);
    }

    #[test]
    fn test_sample_matches_box_muller() {
        let mut source = FixedUniform::new(vec![0.5, 0.125]).unwrap();
        let expected = (-2.0 * 0.5_f64.ln()).sqrt() * (PI / 4.0).cos();
        let x = sample(&mut source, 1.0, 2.0);
        assert!((x - (1.0 + 2.0 * expected)).abs() < 1e-12);
    }

    #[test]
    fn test_zero_std_dev_returns_mean() {
        let mut rng = Pcg64Mcg::seed_from_u64(42);
        for _ in 0..100 {
            assert_eq!(sample(&mut rng, 0.8, 0.0), 0.8);
        }
    }

    #[test]
    fn test_sample_converges_to_parameters() {
        let mut rng = Pcg64Mcg::seed_from_u64(1234);
        let draws = (0..50_000)
            .map(|_| sample(&mut rng, 25.0, 4.0))
            .collect::<Vec<_>>();
        let mean = descriptive::mean(&draws);
        let std_dev = descriptive::population_std_dev(&draws, Some(mean));
        assert!((mean - 25.0).abs() < 0.1, "mean = {mean}");
        assert!((std_dev - 4.0).abs() < 0.1, "std_dev = {std_dev}");
    }

    #[test]
    fn test_rng_source_stays_in_open_interval() {
        let mut rng = Pcg64Mcg::seed_from_u64(9);
        for _ in 0..10_000 {
            let u = rng.next_open01();
            assert!(u > 0.0 && u < 1.0);
        }
    }
}
