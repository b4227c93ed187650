use std::fs::File;

use anyhow::{Context, Result};
use simplelog::{Config, LevelFilter, WriteLogger};

/// Sends log records to `path`. Stdout belongs to the game screen.
pub fn init(path: &str) -> Result<()> {
    let file = File::create(path).with_context(|| format!("failed to create log file {}", path))?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), file).context("failed to install logger")?;
    Ok(())
}
