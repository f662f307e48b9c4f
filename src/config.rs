use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;

#[derive(Deserialize)]
pub struct WebServer {
    pub bind_address: String,
    pub bind_port: u16,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct ForecastConfig {
    pub days: usize,
    pub max_days: usize,
    pub min_temperature_c: i32,
    pub max_temperature_c: i32,
    pub summaries: Vec<String>,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        ForecastConfig {
            days: 5,
            max_days: 14,
            min_temperature_c: -20,
            max_temperature_c: 55,
            summaries: [
                "Freezing", "Bracing", "Chilly", "Cool", "Mild",
                "Warm", "Balmy", "Hot", "Sweltering", "Scorching",
            ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub web_server: WebServer,
    #[serde(default)]
    pub forecast: ForecastConfig,
    pub general: General,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {
    let toml = fs::read_to_string(config_path)?;
    parse_config(&toml)
}

/// Parses configuration from a toml string
///
/// # Arguments
///
/// * 'toml' - the configuration document
fn parse_config(toml: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(toml)?;

    if config.general.log_path.trim().is_empty() {
        return Err(ConfigError::from("log_path must not be empty"));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"
        [web_server]
        bind_address = "127.0.0.1"
        bind_port = 8080

        [general]
        log_path = "weatherforecast.log"
        log_level = "info"
        log_to_stdout = true
    "#;

    #[test]
    fn forecast_section_is_optional() {
        let config = parse_config(MINIMAL).unwrap();

        assert_eq!(config.web_server.bind_port, 8080);
        assert_eq!(config.general.log_level, LevelFilter::Info);
        assert_eq!(config.forecast.days, 5);
        assert_eq!(config.forecast.summaries.len(), 10);
    }

    #[test]
    fn partial_forecast_section_keeps_defaults() {
        let toml = format!("{}\n[forecast]\ndays = 7\nsummaries = [\"Dry\", \"Wet\"]\n", MINIMAL);
        let config = parse_config(&toml).unwrap();

        assert_eq!(config.forecast.days, 7);
        assert_eq!(config.forecast.max_days, 14);
        assert_eq!(config.forecast.min_temperature_c, -20);
        assert_eq!(config.forecast.summaries, vec!["Dry".to_string(), "Wet".to_string()]);
    }

    #[test]
    fn missing_web_server_is_an_error() {
        let toml = r#"
            [general]
            log_path = "weatherforecast.log"
            log_level = "info"
            log_to_stdout = false
        "#;

        assert!(parse_config(toml).is_err());
    }

    #[test]
    fn shipped_config_parses() {
        let config = parse_config(include_str!("../config.toml")).unwrap();

        assert_eq!(config.forecast.max_days, 14);
        assert!(config.general.log_to_stdout);
    }

    #[test]
    fn empty_log_path_is_an_error() {
        let toml = MINIMAL.replace("\"weatherforecast.log\"", "\"\"");

        let err = parse_config(&toml).err().unwrap();

        assert_eq!(err.to_string(), "ConfigError: log_path must not be empty");
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_config("/nonexistent/weatherforecast.toml").is_err());
    }
}
