use std::{
    fs::{create_dir_all, File},
    path::PathBuf,
    sync::Mutex,
};

use anyhow::{anyhow, Context, Result};
use tracing::Level;

pub fn init() -> Result<()> {
    create_dir_all(local_data_dir()?)?;
    init_logger()
}

pub fn local_data_dir() -> Result<PathBuf> {
    Ok(dirs::data_local_dir()
        .context("failed to get the local data directory")?
        .join(env!("CARGO_PKG_NAME")))
}

pub fn config_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .context("failed to get the config directory")?
        .join(env!("CARGO_PKG_NAME")))
}

/// The terminal belongs to the spinner, so logs go to a file.
fn init_logger() -> Result<()> {
    let path = local_data_dir()?.join(concat!(env!("CARGO_PKG_NAME"), ".log"));
    let file = File::create(&path)
        .with_context(|| format!("failed to create the log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_max_level(Level::TRACE)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("failed to install the logger: {e}"))
}
