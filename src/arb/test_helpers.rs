#![allow(clippy::unwrap_used)]

use super::params::TradingParams;
use super::series::PriceSeries;
use super::types::{Direction, TradeRecord};

#[allow(dead_code)]
pub fn params(fee: f64, trade_percent: f64, min_trade_amount: f64) -> TradingParams {
    TradingParams::new(fee, fee, trade_percent, min_trade_amount, min_trade_amount).unwrap()
}

#[allow(dead_code)]
pub fn params_with_wallets(
    fee: f64,
    trade_percent: f64,
    min_trade_amount: f64,
    initial_a: (f64, f64),
    initial_b: (f64, f64),
) -> TradingParams {
    params(fee, trade_percent, min_trade_amount)
        .with_initial_balances(initial_a, initial_b)
        .unwrap()
}

#[allow(dead_code)]
pub fn series(ticks: &[(f64, f64)]) -> PriceSeries {
    let (a, b) = ticks.iter().copied().unzip();
    PriceSeries::new(a, b).unwrap()
}

#[allow(dead_code)]
pub fn flat_series(price: f64, len: usize) -> PriceSeries {
    PriceSeries::new(vec![price; len], vec![price; len]).unwrap()
}

/// A trade with only the fields the statistics care about filled in
#[allow(dead_code)]
pub fn trade(direction: Direction, amount_base: f64, profit: f64) -> TradeRecord {
    TradeRecord {
        tick: 0,
        direction,
        price_a: 100.0,
        price_b: 100.0,
        buy_price: 100.0,
        sell_price: 100.0,
        amount_base,
        amount_quote: amount_base / 100.0,
        proceeds_base: amount_base + profit,
        profit,
        profit_percent: profit / amount_base * 100.0,
    }
}

#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
