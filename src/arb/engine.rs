//! The detection and execution engine.
//! A `SimulationRun` owns the two venue wallets and the running statistics and
//! walks the ticks one by one, trading whenever the fee-adjusted gap allows it.
use super::params::TradingParams;
use super::series::PriceSeries;
use super::stats::{RunReport, RunStatistics, RunSummary};
use super::types::{Direction, PriceTick, TickOutcome, TradeRecord, Venue};
use super::wallet::Wallet;
use crate::error::SimulationError;

/// State of a single simulation run.
///
/// Ticks must be fed in index order: within a tick the B->A check sizes its
/// trade from wallet B *after* the A->B leg has been applied, and every tick
/// starts from the balances the previous one left behind.
#[derive(Debug, Clone)]
pub struct SimulationRun {
    /// Fees and sizing rules
    params: TradingParams,
    /// Wallet on venue A
    wallet_a: Wallet,
    /// Wallet on venue B
    wallet_b: Wallet,
    /// Totals accumulated so far
    stats: RunStatistics,
}

impl SimulationRun {
    /// Starts a run with fresh wallets funded from `params`.
    #[must_use]
    pub const fn new(params: TradingParams) -> Self {
        Self {
            params,
            wallet_a: Wallet::new(params.initial_a.0, params.initial_a.1),
            wallet_b: Wallet::new(params.initial_b.0, params.initial_b.1),
            stats: RunStatistics {
                total_profit: 0.0,
                trade_count: 0,
                buy_count: 0,
                sell_count: 0,
                missed_count: 0,
                ticks_processed: 0,
            },
        }
    }

    /// Parameters of the run
    #[must_use]
    pub const fn params(&self) -> &TradingParams {
        &self.params
    }

    /// Current wallet on a venue
    #[must_use]
    pub const fn wallet(&self, venue: Venue) -> &Wallet {
        match venue {
            Venue::A => &self.wallet_a,
            Venue::B => &self.wallet_b,
        }
    }

    /// Totals accumulated so far
    #[must_use]
    pub const fn stats(&self) -> &RunStatistics {
        &self.stats
    }

    /// Evaluates both directions on one tick, A->B first, executing every
    /// trade whose conditions hold, and folds the result into the statistics.
    pub fn step(&mut self, tick: PriceTick) -> TickOutcome {
        let trades = Direction::EVALUATION_ORDER
            .into_iter()
            .filter_map(|direction| self.try_trade(direction, &tick))
            .collect();

        let outcome = TickOutcome { tick, trades };
        self.stats.record(&outcome);
        outcome
    }

    /// Feeds every tick to [`SimulationRun::step`], handing each outcome and
    /// the run state after it to `observer`. Returns the executed trades.
    pub fn run_ticks<I, F>(&mut self, ticks: I, mut observer: F) -> Vec<TradeRecord>
    where
        I: IntoIterator<Item = PriceTick>,
        F: FnMut(&TickOutcome, &Self),
    {
        let mut trades = Vec::new();
        for tick in ticks {
            let outcome = self.step(tick);
            observer(&outcome, self);
            trades.extend(outcome.trades);
        }
        trades
    }

    /// Closes the run and computes its end-of-run figures.
    #[must_use]
    pub fn finish(self) -> RunSummary {
        RunSummary::new(self.wallet_a, self.wallet_b, self.stats)
    }

    /// Checks one direction against the current wallets and executes it if
    /// profitable after fees and large enough.
    ///
    /// Only strictly positive, finite fee-adjusted prices are tradable. A zero
    /// or negative price on either side means no opportunity in this direction.
    fn try_trade(&mut self, direction: Direction, tick: &PriceTick) -> Option<TradeRecord> {
        let buy_venue = direction.buy_venue();
        let sell_venue = direction.sell_venue();

        let buy_price = tick.price(buy_venue) * (1.0 + self.params.fee(buy_venue));
        let sell_price = tick.price(sell_venue) * (1.0 - self.params.fee(sell_venue));
        if !(is_tradable(buy_price) && is_tradable(sell_price)) {
            return None;
        }

        let amount_base = self.wallet(buy_venue).base() * self.params.trade_percent;
        if !(sell_price > buy_price && amount_base >= self.params.min_trade_amount(buy_venue)) {
            return None;
        }

        let amount_quote = amount_base / buy_price;
        let proceeds_base = amount_quote * sell_price;
        self.wallet_mut(buy_venue).buy(amount_base, amount_quote);
        self.wallet_mut(sell_venue).sell(amount_quote, proceeds_base);

        let profit = proceeds_base - amount_base;
        let profit_percent = if amount_base == 0.0 {
            0.0
        } else {
            profit / amount_base * 100.0
        };

        Some(TradeRecord {
            tick: tick.index,
            direction,
            price_a: tick.price_a,
            price_b: tick.price_b,
            buy_price,
            sell_price,
            amount_base,
            amount_quote,
            proceeds_base,
            profit,
            profit_percent,
        })
    }

    /// Mutable access to a venue wallet
    fn wallet_mut(&mut self, venue: Venue) -> &mut Wallet {
        match venue {
            Venue::A => &mut self.wallet_a,
            Venue::B => &mut self.wallet_b,
        }
    }
}

/// Whether a fee-adjusted price can be traded at
fn is_tradable(price: f64) -> bool {
    price > 0.0 && price.is_finite()
}

/// Runs a whole series through a fresh [`SimulationRun`].
#[must_use]
pub fn run(series: PriceSeries, params: TradingParams) -> RunReport {
    run_with(series, params, |_, _| {})
}

/// Like [`run`], calling `observer` after every tick.
pub fn run_with<F>(series: PriceSeries, params: TradingParams, observer: F) -> RunReport
where
    F: FnMut(&TickOutcome, &SimulationRun),
{
    let mut simulation = SimulationRun::new(params);
    let trades = simulation.run_ticks(series.ticks(), observer);
    RunReport {
        summary: simulation.finish(),
        trades,
        series,
    }
}

/// Validates raw inputs and runs them.
///
/// # Errors
///
/// * `SeriesLengthMismatch` if `a` and `b` differ in length
/// * any parameter error from [`TradingParams::validate`]
///
/// No tick is processed when an error is returned.
pub fn simulate(
    a: Vec<f64>,
    b: Vec<f64>,
    params: TradingParams,
) -> Result<RunReport, SimulationError> {
    let params = params.validate()?;
    let series = PriceSeries::new(a, b)?;
    Ok(run(series, params))
}
