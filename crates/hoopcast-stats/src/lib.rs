//! Statistical utilities for the hoopcast projection engine.
//!
//! This crate provides the numeric building blocks the engine is assembled from:
//!
//! - **Descriptive statistics**: median, mean, population standard deviation
//! - **Gaussian sampling**: Box-Muller draws over an injectable uniform source
//! - **Numeric helpers**: clamping and the defensive-rating ratio
//! - **Percentiles**: nearest-rank percentile lookup over simulated ensembles
//! - **Histogram generation**: fixed-width frequency distributions
//!
//! # Modules
//!
//! - [`descriptive`]: Descriptive statistics for summarizing datasets
//! - [`gaussian`]: Normal sampling and the [`UniformSource`](gaussian::UniformSource) seam
//! - [`numeric`]: Bound limiting and ratio helpers
//! - [`percentiles`]: Percentile computation and storage
//! - [`histogram`]: Histogram construction for visualizing data distributions
//!
//! # Examples
//!
//! ## Computing median and spread
//!
//! ```
//! use hoopcast_stats::descriptive;
//!
//! let values = [1.0, 2.0, 3.0, 4.0];
//! assert_eq!(descriptive::median(&values), 2.5);
//! assert_eq!(descriptive::population_std_dev(&[5.0], None), 0.0);
//! ```
//!
//! ## Drawing a Gaussian sample from a fixed source
//!
//! ```
//! use hoopcast_stats::gaussian::{self, FixedUniform};
//!
//! let mut source = FixedUniform::new(vec![0.5, 0.25]).unwrap();
//! // Zero deviation collapses the draw onto the mean.
//! assert_eq!(gaussian::sample(&mut source, 30.0, 0.0), 30.0);
//! ```
//!
//! ## Computing percentiles
//!
//! ```
//! use hoopcast_stats::percentiles::Percentiles;
//!
//! let values = [1.0, 2.0, 3.0, 4.0, 5.0];
//! let percentiles = Percentiles::new(&values, &[10.0, 50.0, 90.0]);
//! assert_eq!(percentiles.get(50.0), Some(3.0));
//! ```

pub mod descriptive;
pub mod gaussian;
pub mod histogram;
pub mod numeric;
pub mod percentiles;
