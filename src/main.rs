use std::path::PathBuf;

use arbsim::arb::engine;
use arbsim::config::Config;
use arbsim::report::{self, SweepSummary};
use arbsim::utils::logger::setup_logger;
use clap::{Args, Parser, Subcommand};
use eyre::{bail, Result};
use futures_util::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use log::{error, info, LevelFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    overrides: Overrides,

    /// More output: -v logs missed ticks, -vv also wallet balances
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate one run and report it (default)
    Run {
        /// Also save the full run report as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Simulate many independently seeded runs in parallel
    Sweep {
        /// Number of runs
        #[arg(long, default_value_t = 20)]
        runs: usize,
    },
    /// Only generate prices and print the chart URL
    Chart,
}

/// Command line overrides of the environment configuration
#[derive(Args)]
struct Overrides {
    /// Trading fee on venue A
    #[arg(long, global = true)]
    fee_a: Option<f64>,
    /// Trading fee on venue B
    #[arg(long, global = true)]
    fee_b: Option<f64>,
    /// Fraction of the buying wallet used per trade
    #[arg(long, global = true)]
    trade_percent: Option<f64>,
    /// Minimum trade size when buying on venue A
    #[arg(long, global = true)]
    min_trade_a: Option<f64>,
    /// Minimum trade size when buying on venue B
    #[arg(long, global = true)]
    min_trade_b: Option<f64>,
    /// Starting base balance of both wallets
    #[arg(long, global = true)]
    initial_base: Option<f64>,
    /// Starting quote balance of both wallets
    #[arg(long, global = true)]
    initial_quote: Option<f64>,
    /// Starting price of the random walk
    #[arg(long, global = true)]
    initial_price: Option<f64>,
    /// Probability of an up move in the random walk
    #[arg(long, global = true)]
    up_probability: Option<f64>,
    /// Number of ticks
    #[arg(long, global = true)]
    ticks: Option<usize>,
    /// Seed of the random walk
    #[arg(long, global = true)]
    seed: Option<u64>,
}

impl Overrides {
    fn apply(&self, mut config: Config) -> Config {
        config.fee_a = self.fee_a.unwrap_or(config.fee_a);
        config.fee_b = self.fee_b.unwrap_or(config.fee_b);
        config.trade_percent = self.trade_percent.unwrap_or(config.trade_percent);
        config.min_trade_amount_a = self.min_trade_a.unwrap_or(config.min_trade_amount_a);
        config.min_trade_amount_b = self.min_trade_b.unwrap_or(config.min_trade_amount_b);
        config.initial_base = self.initial_base.unwrap_or(config.initial_base);
        config.initial_quote = self.initial_quote.unwrap_or(config.initial_quote);
        config.initial_price = self.initial_price.unwrap_or(config.initial_price);
        config.up_probability = self.up_probability.unwrap_or(config.up_probability);
        config.ticks = self.ticks.unwrap_or(config.ticks);
        config.seed = self.seed.or(config.seed);
        config
    }
}

async fn run_simulation(config: &Config, json: Option<PathBuf>) -> Result<()> {
    let params = config.trading_params()?;
    let series = config.walk().generate()?;
    info!(
        "Simulating {} ticks (fees {}/{}, trade percent {}, minimums {}/{})",
        series.len(),
        params.fee_a,
        params.fee_b,
        params.trade_percent,
        params.min_trade_amount_a,
        params.min_trade_amount_b
    );

    let report = engine::run_with(series, params, report::log_outcome);
    report::log_summary(&report.summary);
    info!("Price chart: {}", report::chart_url(&report.series)?);

    if let Some(path) = json {
        report::write_json(&report, &path).await?;
    }
    Ok(())
}

async fn run_sweep(config: &Config, runs: usize) -> Result<()> {
    if runs == 0 {
        bail!("A sweep needs at least one run");
    }

    let params = config.trading_params()?;
    let walk = config.walk();
    let first_seed = walk.seed.unwrap_or_else(rand::random);
    info!("Sweeping {runs} runs of {} ticks from seed {first_seed}", walk.steps);

    let progress = ProgressBar::new(runs as u64);
    progress.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} runs {elapsed}")?,
    );

    // Runs share nothing, so each one gets its own blocking task
    let tasks = (0..runs as u64).map(|offset| {
        let progress = progress.clone();
        let walk = walk.with_seed(first_seed.wrapping_add(offset));
        tokio::task::spawn_blocking(move || {
            let summary = walk
                .generate()
                .map(|series| engine::run(series, params).summary);
            progress.inc(1);
            summary
        })
    });

    let mut summaries = Vec::with_capacity(runs);
    for result in join_all(tasks).await {
        match result? {
            Ok(summary) => summaries.push(summary),
            Err(e) => error!("Run failed: {e}"),
        }
    }
    progress.finish_and_clear();

    match SweepSummary::new(&summaries) {
        Some(sweep) => sweep.log(),
        None => bail!("No run completed"),
    }
    Ok(())
}

fn print_chart(config: &Config) -> Result<()> {
    let series = config.walk().generate()?;
    println!("Chart URL: {}", report::chart_url(&series)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => None,
        1 => Some(LevelFilter::Debug),
        _ => Some(LevelFilter::Trace),
    };
    setup_logger(level)?;

    let config = cli.overrides.apply(Config::from_env()?);

    match cli.command {
        Some(Commands::Run { json }) => run_simulation(&config, json).await?,
        Some(Commands::Sweep { runs }) => run_sweep(&config, runs).await?,
        Some(Commands::Chart) => print_chart(&config)?,
        None => run_simulation(&config, None).await?,
    }

    Ok(())
}
