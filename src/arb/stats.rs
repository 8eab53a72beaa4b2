use serde::Serialize;

use super::series::PriceSeries;
use super::types::{Direction, TickOutcome, TradeRecord};
use super::wallet::Wallet;

/// Running totals of a simulation, updated once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct RunStatistics {
    /// Sum of the profit of every executed trade, in base asset
    pub total_profit: f64,
    /// Number of executed trades, both directions
    pub trade_count: usize,
    /// Number of A->B trades
    pub buy_count: usize,
    /// Number of B->A trades
    pub sell_count: usize,
    /// Number of ticks on which neither direction fired
    pub missed_count: usize,
    /// Number of ticks seen so far
    pub ticks_processed: usize,
}

impl RunStatistics {
    /// Folds the outcome of one tick into the totals.
    pub fn record(&mut self, outcome: &TickOutcome) {
        self.ticks_processed += 1;
        if outcome.is_missed() {
            self.missed_count += 1;
            return;
        }
        for trade in &outcome.trades {
            self.record_trade(trade);
        }
    }

    /// Accounts for a single executed trade
    fn record_trade(&mut self, trade: &TradeRecord) {
        self.total_profit += trade.profit;
        self.trade_count += 1;
        match trade.direction {
            Direction::AToB => self.buy_count += 1,
            Direction::BToA => self.sell_count += 1,
        }
    }
}

/// End-of-run figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RunSummary {
    /// Final state of the venue A wallet
    pub wallet_a: Wallet,
    /// Final state of the venue B wallet
    pub wallet_b: Wallet,
    /// Base asset held across both wallets at the end of the run
    pub final_base_total: f64,
    /// Base asset held across both wallets at the start of the run
    pub initial_base_total: f64,
    /// Sum of the profit of every trade
    pub total_profit: f64,
    /// `total_profit` relative to `initial_base_total`, in percent.
    /// Zero when the wallets started without base asset.
    pub total_profit_percent: f64,
    /// Counters accumulated over the run
    pub stats: RunStatistics,
}

impl RunSummary {
    /// Builds the summary from the final wallets and counters.
    #[must_use]
    pub fn new(wallet_a: Wallet, wallet_b: Wallet, stats: RunStatistics) -> Self {
        let initial_base_total = wallet_a.initial_base() + wallet_b.initial_base();
        let total_profit_percent = if initial_base_total == 0.0 {
            0.0
        } else {
            stats.total_profit / initial_base_total * 100.0
        };

        Self {
            wallet_a,
            wallet_b,
            final_base_total: wallet_a.base() + wallet_b.base(),
            initial_base_total,
            total_profit: stats.total_profit,
            total_profit_percent,
            stats,
        }
    }
}

/// Everything a run produces: the summary, the trade log and the series it
/// processed, unmodified and in original order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunReport {
    /// End-of-run figures
    pub summary: RunSummary,
    /// Executed trades in execution order
    pub trades: Vec<TradeRecord>,
    /// The processed price series
    pub series: PriceSeries,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arb::test_helpers::*;
    use crate::arb::types::PriceTick;

    #[test]
    fn test_record_counts() {
        let mut stats = RunStatistics::default();
        let tick = PriceTick::new(0, 100.0, 100.0);

        stats.record(&TickOutcome {
            tick,
            trades: vec![],
        });
        stats.record(&TickOutcome {
            tick,
            trades: vec![trade(Direction::AToB, 10.0, 0.5)],
        });
        stats.record(&TickOutcome {
            tick,
            trades: vec![
                trade(Direction::AToB, 10.0, 0.25),
                trade(Direction::BToA, 20.0, 1.0),
            ],
        });

        assert_eq!(stats.ticks_processed, 3);
        assert_eq!(stats.missed_count, 1);
        assert_eq!(stats.trade_count, 3);
        assert_eq!(stats.buy_count, 2);
        assert_eq!(stats.sell_count, 1);
        assert_eq!(stats.total_profit, 1.75);
    }

    #[test]
    fn test_summary_percent() {
        let stats = RunStatistics {
            total_profit: 5.0,
            ..RunStatistics::default()
        };
        let summary = RunSummary::new(Wallet::new(100.0, 1.0), Wallet::new(150.0, 2.0), stats);
        assert_eq!(summary.initial_base_total, 250.0);
        assert_eq!(summary.final_base_total, 250.0);
        assert_eq!(summary.total_profit, 5.0);
        assert_eq!(summary.total_profit_percent, 2.0);
    }

    #[test]
    fn test_summary_without_base() {
        let summary = RunSummary::new(
            Wallet::new(0.0, 1.0),
            Wallet::new(0.0, 1.0),
            RunStatistics::default(),
        );
        assert_eq!(summary.total_profit_percent, 0.0);
    }
}
