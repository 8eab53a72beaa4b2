//! Reporting sink for finished (or running) simulations.
//!
//! Nothing here feeds back into the engine. Outcomes are rendered through the
//! `log` facade, the price series can be turned into a `QuickChart` URL, and a
//! whole [`RunReport`] can be exported as JSON.

use std::path::Path;

use eyre::Result;
use itertools::{Itertools, MinMaxResult};
use log::{debug, info, trace};
use serde::Serialize;
use serde_json::json;
use url::Url;

use crate::arb::engine::SimulationRun;
use crate::arb::series::PriceSeries;
use crate::arb::stats::{RunReport, RunSummary};
use crate::arb::types::{TickOutcome, Venue};

/// Chart rendering endpoint
const CHART_ENDPOINT: &str = "https://quickchart.io/chart";

/// Logs the trades of one tick, or the missed opportunity, followed by the
/// wallet balances after the tick.
///
/// The signature matches the observer of [`SimulationRun::run_ticks`].
pub fn log_outcome(outcome: &TickOutcome, simulation: &SimulationRun) {
    if outcome.is_missed() {
        debug!(
            "No Arbitrage Opportunity: PriceA = {:.2}, PriceB = {:.2}",
            outcome.tick.price_a, outcome.tick.price_b
        );
    }
    for trade in &outcome.trades {
        info!("{trade}");
    }
    trace!(
        "Wallets after tick {}: A {:?}, B {:?}",
        outcome.tick.index,
        simulation.wallet(Venue::A),
        simulation.wallet(Venue::B)
    );
}

/// Logs the end-of-run figures.
pub fn log_summary(summary: &RunSummary) {
    let stats = &summary.stats;
    info!(
        "Final Wallet A: X={:.2}, Y={:.2}",
        summary.wallet_a.base(),
        summary.wallet_a.quote()
    );
    info!(
        "Final Wallet B: X={:.2}, Y={:.2}",
        summary.wallet_b.base(),
        summary.wallet_b.quote()
    );
    info!(
        "Total Profit: ${:.2} ({:.2}%)",
        summary.total_profit, summary.total_profit_percent
    );
    info!(
        "Total Trades: {} (Buy: {}, Sell: {}, Missed: {})",
        stats.trade_count, stats.buy_count, stats.sell_count, stats.missed_count
    );
}

/// Builds a `QuickChart` URL plotting both price series.
///
/// # Errors
///
/// * If the chart configuration cannot be encoded into a URL
pub fn chart_url(series: &PriceSeries) -> Result<Url> {
    let labels: Vec<usize> = (1..=series.len()).collect();
    let config = json!({
        "type": "line",
        "data": {
            "labels": labels,
            "datasets": [
                {
                    "label": "Price A",
                    "data": series.a(),
                    "borderColor": "rgba(75, 192, 192, 1)",
                    "borderWidth": 2,
                    "fill": false,
                },
                {
                    "label": "Price B",
                    "data": series.b(),
                    "borderColor": "rgba(153, 102, 255, 1)",
                    "borderWidth": 2,
                    "fill": false,
                },
            ],
        },
        "options": {
            "scales": {
                "x": { "title": { "display": true, "text": "Time" } },
                "y": { "title": { "display": true, "text": "Price" } },
            },
        },
    });

    Ok(Url::parse_with_params(
        CHART_ENDPOINT,
        &[("c", config.to_string())],
    )?)
}

/// Writes a run report as pretty-printed JSON.
///
/// # Errors
///
/// * If serialization fails
/// * If the file cannot be written
pub async fn write_json(report: &RunReport, path: &Path) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(report)?;
    tokio::fs::write(path, bytes).await?;
    info!("Run report saved as {}", path.display());
    Ok(())
}

/// Aggregate of many independent runs
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SweepSummary {
    /// Number of runs
    pub runs: usize,
    /// Mean total profit per run
    pub mean_profit: f64,
    /// Lowest total profit of any run
    pub min_profit: f64,
    /// Highest total profit of any run
    pub max_profit: f64,
    /// Mean number of trades per run
    pub mean_trades: f64,
}

impl SweepSummary {
    /// Aggregates run summaries; `None` when there are none.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(summaries: &[RunSummary]) -> Option<Self> {
        let (min_profit, max_profit) = match summaries
            .iter()
            .map(|summary| summary.total_profit)
            .minmax_by(f64::total_cmp)
        {
            MinMaxResult::NoElements => return None,
            MinMaxResult::OneElement(profit) => (profit, profit),
            MinMaxResult::MinMax(min, max) => (min, max),
        };

        let runs = summaries.len() as f64;
        let total_profit: f64 = summaries.iter().map(|summary| summary.total_profit).sum();
        let total_trades: usize = summaries
            .iter()
            .map(|summary| summary.stats.trade_count)
            .sum();

        Some(Self {
            runs: summaries.len(),
            mean_profit: total_profit / runs,
            min_profit,
            max_profit,
            mean_trades: total_trades as f64 / runs,
        })
    }

    /// Logs the aggregate.
    pub fn log(&self) {
        info!(
            "Sweep of {} runs: mean profit ${:.2} (min ${:.2}, max ${:.2}), mean trades {:.1}",
            self.runs, self.mean_profit, self.min_profit, self.max_profit, self.mean_trades
        );
    }
}
