//! Data sourcing for hoopcast: the JSON dataset the engine's inputs are
//! read from, id lookups, and synthetic game logs.
//!
//! The engine never sees an unknown id. Lookups here fail with
//! [`LookupError`] and callers stop before projecting.

pub use self::dataset::{Dataset, DatasetError, LookupError, Team};

pub mod dataset;
pub mod synthetic;
