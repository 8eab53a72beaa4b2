use chrono::Local;
use eyre::Result;
use fern::Dispatch;
use log::LevelFilter;

/// Level used when neither the caller nor `RUST_LOG` picks one
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Sets up the console logger.
///
/// # Arguments
/// * `level` - Explicit level, e.g. from the command line. Takes precedence
///   over `RUST_LOG`.
///
/// # Errors
/// * If a logger has already been installed
pub fn setup_logger(level: Option<LevelFilter>) -> Result<()> {
    Dispatch::new()
        .level(level.unwrap_or_else(env_level))
        .chain(std::io::stdout())
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                message
            ));
        })
        .apply()?;
    Ok(())
}

/// Level from `RUST_LOG`, ignoring values that are not a plain level name
fn env_level() -> LevelFilter {
    std::env::var("RUST_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(DEFAULT_LEVEL)
}
