//! # Arbitrage Module
//!
//! This module contains the core detection and execution logic.
//! Two venue wallets are traded against each other whenever the price gap
//! between the venues exceeds both trading fees, and every tick is accounted
//! for in the run statistics.

/// Per-tick detection and execution
pub mod engine;
/// Validated fee and sizing parameters
pub mod params;
/// Index-aligned price series
pub mod series;
/// Run statistics and end-of-run figures
pub mod stats;
/// Test helpers and utilities
#[cfg(test)]
pub(crate) mod test_helpers;
/// Common type definitions
pub mod types;
/// Venue wallets
pub mod wallet;
