pub mod errors;
pub mod models;

use chrono::{Days, NaiveDate};
use rand::seq::SliceRandom;
use rand::Rng;
use crate::config::ForecastConfig;
use crate::manager_forecast::errors::ForecastError;
use crate::manager_forecast::models::ForecastEntry;

/// Struct for producing generated weather forecasts
pub struct Forecaster {
    config: ForecastConfig,
}

impl Forecaster {
    /// Returns a Forecaster after validating the given configuration
    ///
    /// # Arguments
    ///
    /// * 'config' - forecast length, temperature range and summary vocabulary
    pub fn new(config: ForecastConfig) -> Result<Forecaster, ForecastError> {
        if config.summaries.is_empty() {
            return Err(ForecastError::Config("summary vocabulary is empty".to_string()));
        }
        if config.min_temperature_c >= config.max_temperature_c {
            return Err(ForecastError::Config(format!(
                "temperature range is empty: [{}, {})",
                config.min_temperature_c, config.max_temperature_c
            )));
        }
        if config.days == 0 || config.days > config.max_days {
            return Err(ForecastError::Config(format!(
                "default days {} not within 1..={}", config.days, config.max_days
            )));
        }

        Ok(Self { config })
    }

    /// Number of entries produced when a request does not ask for a specific length
    pub fn default_days(&self) -> usize {
        self.config.days
    }

    /// Generates a forecast covering the days following the given start date.
    ///
    /// The first entry is dated the day after `start` and every following entry one day later.
    /// Temperatures are drawn uniformly from the configured half-open range and summaries
    /// uniformly from the vocabulary.
    ///
    /// # Arguments
    ///
    /// * 'days' - number of entries to generate
    /// * 'start' - the date the forecast is issued on
    /// * 'rng' - random source
    pub fn forecast<R: Rng>(&self, days: usize, start: NaiveDate, rng: &mut R) -> Result<Vec<ForecastEntry>, ForecastError> {
        if days == 0 || days > self.config.max_days {
            return Err(ForecastError::Days(format!("days must be within 1..={}, got {}", self.config.max_days, days)));
        }

        let mut forecast: Vec<ForecastEntry> = Vec::with_capacity(days);

        for index in 1..=days as u64 {
            let date = start.checked_add_days(Days::new(index))
                .ok_or_else(|| ForecastError::Date(format!("date out of range: {} + {} days", start, index)))?;
            let temperature_c = rng.gen_range(self.config.min_temperature_c..self.config.max_temperature_c);
            let summary = self.config.summaries
                .choose(rng)
                .ok_or_else(|| ForecastError::Config("summary vocabulary is empty".to_string()))?
                .clone();

            forecast.push(ForecastEntry { date, temperature_c, summary });
        }

        Ok(forecast)
    }
}
