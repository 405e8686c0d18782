//! Command-line front end: parse arguments, load configuration, print it.

pub mod output;
pub mod types;

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::domain::models::Config;
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{LogConfig, LoggerImpl};

pub use output::{handle_error, output, CommandOutput};
pub use types::Cli;

/// Run the startup sequence for the given arguments.
///
/// The env file is sourced before logging is set up so `LOG_*` values from
/// it take effect. Returns the shared configuration for the rest of the
/// process.
pub fn execute(cli: &Cli) -> Result<Arc<Config>> {
    let loader = ConfigLoader::with_env_file(&cli.env_file);
    loader.load_env_file()?;

    let log_config = LogConfig::from_env()?;
    LoggerImpl::init(&log_config).context("Failed to initialize logging")?;

    let config = ConfigLoader::from_env()
        .context("Failed to load configuration from environment")?;

    output(&config.summary(), cli.json);
    Ok(Arc::new(config))
}
