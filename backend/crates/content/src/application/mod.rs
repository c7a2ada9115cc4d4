//! Application Layer
//!
//! Use cases.

pub mod stats;

pub use stats::{AdminStats, AdminStatsUseCase};
