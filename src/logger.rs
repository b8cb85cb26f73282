//! Logging setup for the data layer.
//!
//! Installs a `fern` dispatcher behind the `log` facade. Repository
//! operations log through `log::{debug, info, warn}`; the dispatcher decides
//! level and target from [`LoggingConfig`].

use anyhow::{Context, Result};
use log::LevelFilter;
use once_cell::sync::OnceCell;

use crate::config::LoggingConfig;

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install the global logger. Safe to call more than once; only the first
/// call configures the dispatcher.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled || INITIALIZED.get().is_some() {
        return Ok(());
    }

    let level = config
        .level
        .parse::<LevelFilter>()
        .unwrap_or(LevelFilter::Info);

    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level);

    let dispatch = match &config.file {
        Some(path) => dispatch.chain(
            fern::log_file(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?,
        ),
        None => dispatch.chain(std::io::stderr()),
    };

    dispatch.apply().context("Failed to install logger")?;
    let _ = INITIALIZED.set(());
    Ok(())
}
