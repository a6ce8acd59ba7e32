//! Shared test fixtures for StopForge crates.
//!
//! This crate provides data and pure functions for testing. It does NOT
//! depend on `stopforge-criteria` to avoid circular dependencies; criteria
//! tests feed these trajectories into the criteria themselves.
//!
//! - [`trajectory`] - best-cost sequences as a search loop would report them
//! - [`params`] - reproducible samples of valid and invalid parameters
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! stopforge-test = { workspace = true }
//! ```

pub mod params;
pub mod trajectory;

pub use params::{positive_counts, positive_seconds};
pub use trajectory::{descending, plateau, random_walk, stalls_after};
