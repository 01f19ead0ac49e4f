//! Client-side utilities for seeding market metrics.
//!
//! Includes the seeding routine, an in-memory ledger to run it against, scenario loading, and
//! logging helpers.

pub mod logs;
pub mod metrics;
pub mod scenario;
pub mod sim;
pub mod test_accounts;

pub use logs::LogColor;
pub use metrics::{
    seed,
    seed_default,
    AuthArgs,
    MetricsPair,
    SeedError,
    SeededMetrics,
};
