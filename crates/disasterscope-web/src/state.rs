//! Shared application state and global allocator.

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

use std::sync::Arc;

use axum::extract::State;

use disasterscope_core::dataset::Dataset;

/// The dataset is loaded once before the router starts and never mutated,
/// so handlers share it without a lock.
pub(crate) type SharedState = Arc<Dataset>;

pub(crate) type AppState = State<SharedState>;
