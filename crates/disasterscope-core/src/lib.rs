//! disasterscope-core: shared library for the disasterscope dashboard.
//!
//! Provides:
//! - `dataset`: disaster record model, CSV loading, dataset metadata
//! - `filter`: typed UI selection and the row predicate
//! - `charts`: the six per-chart aggregations and the combined dashboard
//!
//! With `api` feature:
//! - `api`: control schema served to web clients; chart types derive `ToSchema`

pub mod charts;
pub mod dataset;
pub mod filter;

#[cfg(feature = "api")]
pub mod api;

#[cfg(test)]
pub(crate) mod fixtures;

/// Crate version with the short git SHA (e.g. "0.1.0-abc1234").
pub const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "-", env!("GIT_SHA"));
