//! Environment configuration.
//!
//! Values are read from the process environment after loading an optional
//! `.env` file. Every variable is optional and falls back to the defaults of
//! [`TradingParams`] and [`RandomWalk`].

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use eyre::{eyre, Result};

use crate::arb::params::TradingParams;
use crate::simulator::RandomWalk;

/// Application configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Trading fee on venue A
    pub fee_a: f64,
    /// Trading fee on venue B
    pub fee_b: f64,
    /// Fraction of the buying wallet used per trade
    pub trade_percent: f64,
    /// Minimum trade size when buying on venue A
    pub min_trade_amount_a: f64,
    /// Minimum trade size when buying on venue B
    pub min_trade_amount_b: f64,
    /// Starting base balance of both wallets
    pub initial_base: f64,
    /// Starting quote balance of both wallets
    pub initial_quote: f64,
    /// Starting price of the random walk
    pub initial_price: f64,
    /// Probability of an up move in the random walk
    pub up_probability: f64,
    /// Number of ticks to simulate
    pub ticks: usize,
    /// Seed of the random walk
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        let params = TradingParams::default();
        let walk = RandomWalk::default();
        Self {
            fee_a: params.fee_a,
            fee_b: params.fee_b,
            trade_percent: params.trade_percent,
            min_trade_amount_a: params.min_trade_amount_a,
            min_trade_amount_b: params.min_trade_amount_b,
            initial_base: params.initial_a.0,
            initial_quote: params.initial_a.1,
            initial_price: walk.initial_price,
            up_probability: walk.up_probability,
            ticks: walk.steps,
            seed: walk.seed,
        }
    }
}

impl Config {
    /// Loads `.env` and reads the `ARBSIM_*` variables.
    ///
    /// # Errors
    ///
    /// * If a variable is set but cannot be parsed
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// * If a variable is set but cannot be parsed
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            fee_a: parse(&lookup, "ARBSIM_FEE_A", defaults.fee_a)?,
            fee_b: parse(&lookup, "ARBSIM_FEE_B", defaults.fee_b)?,
            trade_percent: parse(&lookup, "ARBSIM_TRADE_PERCENT", defaults.trade_percent)?,
            min_trade_amount_a: parse(&lookup, "ARBSIM_MIN_TRADE_A", defaults.min_trade_amount_a)?,
            min_trade_amount_b: parse(&lookup, "ARBSIM_MIN_TRADE_B", defaults.min_trade_amount_b)?,
            initial_base: parse(&lookup, "ARBSIM_INITIAL_BASE", defaults.initial_base)?,
            initial_quote: parse(&lookup, "ARBSIM_INITIAL_QUOTE", defaults.initial_quote)?,
            initial_price: parse(&lookup, "ARBSIM_INITIAL_PRICE", defaults.initial_price)?,
            up_probability: parse(&lookup, "ARBSIM_UP_PROBABILITY", defaults.up_probability)?,
            ticks: parse(&lookup, "ARBSIM_TICKS", defaults.ticks)?,
            seed: match lookup("ARBSIM_SEED") {
                Some(value) => Some(parse_value("ARBSIM_SEED", &value)?),
                None => defaults.seed,
            },
        })
    }

    /// Validated trading parameters, both wallets funded alike.
    ///
    /// # Errors
    ///
    /// * If any parameter is out of range
    pub fn trading_params(&self) -> Result<TradingParams> {
        let balance = (self.initial_base, self.initial_quote);
        Ok(TradingParams::new(
            self.fee_a,
            self.fee_b,
            self.trade_percent,
            self.min_trade_amount_a,
            self.min_trade_amount_b,
        )?
        .with_initial_balances(balance, balance)?)
    }

    /// Random walk described by this configuration
    #[must_use]
    pub const fn walk(&self) -> RandomWalk {
        RandomWalk {
            initial_price: self.initial_price,
            up_probability: self.up_probability,
            steps: self.ticks,
            seed: self.seed,
        }
    }
}

/// Parses `name` if it is set, otherwise returns `default`
fn parse<T, F>(lookup: &F, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(name).map_or(Ok(default), |value| parse_value(name, &value))
}

/// Parses a single variable value
fn parse_value<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| eyre!("{name} has an invalid value {value:?}: {e}"))
}
