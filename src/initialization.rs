use std::env;
use log::info;
use crate::config::{load_config, Config};
use crate::errors::ConfigError;
use crate::logging::setup_logger;

const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Loads configuration from the file given by `CONFIG_PATH` (or `config.toml`) and starts logging
///
pub fn config() -> Result<Config, ConfigError> {
    let config_path = config_path();
    let config = load_config(&config_path)?;

    setup_logger(&config.general.log_path, config.general.log_level, config.general.log_to_stdout)?;

    info!("weatherforecast version: {}", env!("CARGO_PKG_VERSION"));
    info!("configuration loaded from {}", config_path);

    Ok(config)
}

/// Returns the configuration file path from `CONFIG_PATH`, or `config.toml` when unset
///
fn config_path() -> String {
    env::var("CONFIG_PATH").unwrap_or(DEFAULT_CONFIG_PATH.to_string())
}
