/*!
 * # Arbsim - Cross-Exchange Arbitrage Simulation
 *
 * Arbsim replays two tick-aligned price series of the same asset pair on two
 * venues and trades the fee-adjusted price gap between them against one wallet
 * per venue, collecting profit and trade statistics over the run.
 *
 * ## Core Features
 *
 * - **Opportunity Detection**: Checks both trade directions on every tick after fees
 * - **Execution**: Moves base and quote asset between the two venue wallets
 * - **Statistics**: Tracks profit, trade counts and missed opportunities
 * - **Price Simulation**: Seeded random-walk series for reproducible runs
 *
 * ## Module Structure
 *
 * - `arb`: Wallets, detection and execution engine, run statistics
 * - `config`: Configuration management for the system
 * - `error`: Input validation errors
 * - `report`: Logging, chart and JSON output of a run
 * - `simulator`: Random-walk price generation
 * - `utils`: Utility functions and helpers
 */

/// Arbitrage detection and execution logic
pub mod arb;
/// Configuration management for the system
pub mod config;
/// Input validation errors
pub mod error;
/// Reporting of finished runs
pub mod report;
/// Random-walk price generation
pub mod simulator;
/// Utility functions and helpers
pub mod utils;
