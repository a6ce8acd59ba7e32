//! StopForge Core - Core types and traits for stopping criteria
//!
//! This crate provides the fundamental abstractions shared by StopForge crates:
//! - The error type raised when a criterion is constructed with bad parameters
//! - The [`Cost`] bound for values reported by the search loop
//! - Injectable clocks for time-based criteria

pub mod clock;
pub mod cost;
pub mod error;


pub use clock::{Clock, ManualClock, MonotonicClock};
pub use cost::Cost;
pub use error::{Result, StopForgeError};
