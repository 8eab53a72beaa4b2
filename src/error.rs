//! Error taxonomy of the simulator.
//!
//! Every variant is raised before the first tick is processed: either when a
//! [`PriceSeries`](crate::arb::series::PriceSeries) is assembled or when
//! [`TradingParams`](crate::arb::params::TradingParams) are constructed.
//! Once a run has started it cannot fail.

use derive_more::Display;

use crate::arb::types::Venue;

/// Errors raised while validating the inputs of a simulation run
#[derive(Debug, Clone, PartialEq, Display)]
pub enum SimulationError {
    /// The two price series do not have the same number of ticks
    #[display("Price series length mismatch: A has {a} ticks, B has {b} ticks")]
    SeriesLengthMismatch {
        /// Length of the venue A series
        a: usize,
        /// Length of the venue B series
        b: usize,
    },

    /// The fraction of the wallet risked per trade is outside `(0, 1]`
    #[display("Trade percent must be in (0, 1], got {_0}")]
    InvalidTradePercent(f64),

    /// A venue fee is negative or not a finite number
    #[display("Fee for venue {venue} must be a non-negative number, got {fee}")]
    NegativeFee {
        /// Venue the fee belongs to
        venue: Venue,
        /// Offending fee
        fee: f64,
    },

    /// A minimum trade amount is negative or not a finite number
    #[display("Minimum trade amount for venue {venue} must be a non-negative number, got {amount}")]
    NegativeMinTradeAmount {
        /// Venue the minimum belongs to
        venue: Venue,
        /// Offending amount
        amount: f64,
    },

    /// An initial wallet balance is not a finite number
    #[display("Initial balance for venue {venue} must be finite, got ({base}, {quote})")]
    InvalidInitialBalance {
        /// Venue the wallet belongs to
        venue: Venue,
        /// Offending base balance
        base: f64,
        /// Offending quote balance
        quote: f64,
    },

    /// The random walk probability of an up move is outside `[0, 1]`
    #[display("Up probability must be in [0, 1], got {_0}")]
    InvalidProbability(f64),
}

impl std::error::Error for SimulationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            SimulationError::SeriesLengthMismatch { a: 3, b: 2 }.to_string(),
            "Price series length mismatch: A has 3 ticks, B has 2 ticks"
        );
        assert_eq!(
            SimulationError::InvalidTradePercent(1.5).to_string(),
            "Trade percent must be in (0, 1], got 1.5"
        );
        assert_eq!(
            SimulationError::NegativeFee {
                venue: Venue::B,
                fee: -0.01
            }
            .to_string(),
            "Fee for venue B must be a non-negative number, got -0.01"
        );
    }
}
