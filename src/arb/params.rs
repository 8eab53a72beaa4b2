use serde::Serialize;

use super::types::Venue;
use super::wallet::Wallet;
use crate::error::SimulationError;

/// Fee and sizing parameters of a simulation run.
///
/// Always validated on construction, so a run never fails midway because of
/// its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TradingParams {
    /// Proportional trading fee on venue A (0.005 = 0.5%)
    pub fee_a: f64,
    /// Proportional trading fee on venue B
    pub fee_b: f64,
    /// Fraction of the buying wallet's base balance used per trade, in `(0, 1]`
    pub trade_percent: f64,
    /// Smallest trade, in base asset, allowed when buying on venue A
    pub min_trade_amount_a: f64,
    /// Smallest trade, in base asset, allowed when buying on venue B
    pub min_trade_amount_b: f64,
    /// Starting `(base, quote)` balance of the venue A wallet
    pub initial_a: (f64, f64),
    /// Starting `(base, quote)` balance of the venue B wallet
    pub initial_b: (f64, f64),
}

impl Default for TradingParams {
    fn default() -> Self {
        let balance = (Wallet::DEFAULT_BALANCE, Wallet::DEFAULT_BALANCE);
        Self {
            fee_a: 0.005,
            fee_b: 0.005,
            trade_percent: 0.1,
            min_trade_amount_a: 2.0,
            min_trade_amount_b: 2.0,
            initial_a: balance,
            initial_b: balance,
        }
    }
}

impl TradingParams {
    /// Creates a validated parameter set with default starting wallets.
    ///
    /// # Errors
    ///
    /// See [`TradingParams::validate`]
    pub fn new(
        fee_a: f64,
        fee_b: f64,
        trade_percent: f64,
        min_trade_amount_a: f64,
        min_trade_amount_b: f64,
    ) -> Result<Self, SimulationError> {
        Self {
            fee_a,
            fee_b,
            trade_percent,
            min_trade_amount_a,
            min_trade_amount_b,
            ..Self::default()
        }
        .validate()
    }

    /// Replaces the starting balances of both wallets.
    ///
    /// # Errors
    ///
    /// See [`TradingParams::validate`]
    pub fn with_initial_balances(
        self,
        initial_a: (f64, f64),
        initial_b: (f64, f64),
    ) -> Result<Self, SimulationError> {
        Self {
            initial_a,
            initial_b,
            ..self
        }
        .validate()
    }

    /// Checks every parameter and returns the set unchanged if it is usable.
    ///
    /// # Errors
    ///
    /// * `InvalidTradePercent` if `trade_percent` is outside `(0, 1]`
    /// * `NegativeFee` if a fee is negative or not finite
    /// * `NegativeMinTradeAmount` if a minimum is negative or not finite
    /// * `InvalidInitialBalance` if a starting balance is not finite
    pub fn validate(self) -> Result<Self, SimulationError> {
        if !(self.trade_percent > 0.0 && self.trade_percent <= 1.0) {
            return Err(SimulationError::InvalidTradePercent(self.trade_percent));
        }

        for (venue, fee) in [(Venue::A, self.fee_a), (Venue::B, self.fee_b)] {
            if !(fee.is_finite() && fee >= 0.0) {
                return Err(SimulationError::NegativeFee { venue, fee });
            }
        }

        for (venue, amount) in [
            (Venue::A, self.min_trade_amount_a),
            (Venue::B, self.min_trade_amount_b),
        ] {
            if !(amount.is_finite() && amount >= 0.0) {
                return Err(SimulationError::NegativeMinTradeAmount { venue, amount });
            }
        }

        for (venue, (base, quote)) in [(Venue::A, self.initial_a), (Venue::B, self.initial_b)] {
            if !(base.is_finite() && quote.is_finite()) {
                return Err(SimulationError::InvalidInitialBalance { venue, base, quote });
            }
        }

        Ok(self)
    }

    /// Trading fee charged by a venue
    #[must_use]
    pub const fn fee(&self, venue: Venue) -> f64 {
        match venue {
            Venue::A => self.fee_a,
            Venue::B => self.fee_b,
        }
    }

    /// Minimum trade size when buying on a venue
    #[must_use]
    pub const fn min_trade_amount(&self, venue: Venue) -> f64 {
        match venue {
            Venue::A => self.min_trade_amount_a,
            Venue::B => self.min_trade_amount_b,
        }
    }
}
