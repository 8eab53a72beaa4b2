use std::fmt::{self, Debug, Display};

use derive_more::Display as DeriveDisplay;
use serde::Serialize;

/// One of the two trading venues
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, DeriveDisplay, Serialize)]
pub enum Venue {
    /// Venue A, the first series
    A,
    /// Venue B, the second series
    B,
}

impl Venue {
    /// Returns the other venue.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// The direction of a round-trip arbitrage trade.
///
/// A trade always buys the quote asset on one venue and sells the same
/// quantity on the other one.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize)]
pub enum Direction {
    /// Buy on A, sell on B
    AToB,
    /// Buy on B, sell on A
    BToA,
}

impl Direction {
    /// Both directions in the order they are evaluated within a tick
    pub const EVALUATION_ORDER: [Self; 2] = [Self::AToB, Self::BToA];

    /// Venue the quote asset is bought on
    #[must_use]
    pub const fn buy_venue(self) -> Venue {
        match self {
            Self::AToB => Venue::A,
            Self::BToA => Venue::B,
        }
    }

    /// Venue the quote asset is sold on
    #[must_use]
    pub const fn sell_venue(self) -> Venue {
        self.buy_venue().other()
    }
}

impl Debug for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AToB => write!(f, "A->B"),
            Self::BToA => write!(f, "B->A"),
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}

/// One index-aligned observation of both venue prices
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PriceTick {
    /// Position of the tick in the series
    pub index: usize,
    /// Price on venue A
    pub price_a: f64,
    /// Price on venue B
    pub price_b: f64,
}

impl PriceTick {
    /// Creates a new tick.
    #[must_use]
    pub const fn new(index: usize, price_a: f64, price_b: f64) -> Self {
        Self {
            index,
            price_a,
            price_b,
        }
    }

    /// Raw price on the given venue
    #[must_use]
    pub const fn price(&self, venue: Venue) -> f64 {
        match venue {
            Venue::A => self.price_a,
            Venue::B => self.price_b,
        }
    }
}

/// An executed arbitrage trade.
///
/// Amounts are expressed in the asset named by the field: `amount_base` and
/// `proceeds_base` in X, `amount_quote` in Y.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TradeRecord {
    /// Index of the tick that triggered the trade
    pub tick: usize,
    /// Which way the trade went
    pub direction: Direction,
    /// Raw price on venue A at execution
    pub price_a: f64,
    /// Raw price on venue B at execution
    pub price_b: f64,
    /// Fee-adjusted price paid on the buy venue
    pub buy_price: f64,
    /// Fee-adjusted price received on the sell venue
    pub sell_price: f64,
    /// Base asset spent on the buy venue
    pub amount_base: f64,
    /// Quote asset bought and then sold
    pub amount_quote: f64,
    /// Base asset received on the sell venue
    pub proceeds_base: f64,
    /// `proceeds_base - amount_base`
    pub profit: f64,
    /// Profit relative to the trade size, in percent
    pub profit_percent: f64,
}

impl Display for TradeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let buy = self.direction.buy_venue();
        let sell = self.direction.sell_venue();
        let (buy_at, sell_at) = match self.direction {
            Direction::AToB => (self.price_a, self.price_b),
            Direction::BToA => (self.price_b, self.price_a),
        };
        write!(
            f,
            "Arbitrage Opportunity ({}): Buy from {buy} at {buy_at:.2}, Sell at {sell} at {sell_at:.2} - Profit: ${:.2} ({:.2}%) - Trade Amount: ${:.2}",
            self.direction, self.profit, self.profit_percent, self.amount_base
        )
    }
}

/// What happened on a single tick
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TickOutcome {
    /// The tick that was evaluated
    pub tick: PriceTick,
    /// Trades executed on this tick, in evaluation order (at most two)
    pub trades: Vec<TradeRecord>,
}

impl TickOutcome {
    /// Whether neither direction fired on this tick
    #[must_use]
    pub fn is_missed(&self) -> bool {
        self.trades.is_empty()
    }

    /// The trade executed in the given direction, if any
    #[must_use]
    pub fn trade(&self, direction: Direction) -> Option<&TradeRecord> {
        self.trades.iter().find(|t| t.direction == direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_venues() {
        assert_eq!(Direction::AToB.buy_venue(), Venue::A);
        assert_eq!(Direction::AToB.sell_venue(), Venue::B);
        assert_eq!(Direction::BToA.buy_venue(), Venue::B);
        assert_eq!(Direction::BToA.sell_venue(), Venue::A);
        assert_eq!(Direction::AToB.to_string(), "A->B");
        assert_eq!(Venue::A.to_string(), "A");
    }

    #[test]
    fn test_trade_display() {
        let trade = TradeRecord {
            tick: 0,
            direction: Direction::BToA,
            price_a: 110.0,
            price_b: 100.0,
            buy_price: 100.5,
            sell_price: 109.45,
            amount_base: 10.0,
            amount_quote: 0.1,
            proceeds_base: 10.945,
            profit: 0.95,
            profit_percent: 9.5,
        };
        assert_eq!(
            trade.to_string(),
            "Arbitrage Opportunity (B->A): Buy from B at 100.00, Sell at A at 110.00 - Profit: $0.95 (9.50%) - Trade Amount: $10.00"
        );
    }
}
