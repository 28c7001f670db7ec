//! File logging setup.
//!
//! When enabled in the configuration, log records go to a file under the
//! platform data directory. Nothing is written to stdout so the log
//! never interleaves with CLI output.

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::LoggingConfig;

/// Path of the log file under the platform data directory.
pub fn log_file_path() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?
        .join("heliostore");
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
    Ok(dir.join("heliostore.log"))
}

/// Install the global logger. A no-op when logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if !config.enabled {
        return Ok(());
    }

    let path = log_file_path()?;

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(log::LevelFilter::Info)
        .chain(fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?)
        .apply()
        .context("Failed to install logger")?;

    Ok(())
}
