use std::fmt;

#[derive(Debug, PartialEq)]
pub enum ForecastError {
    Config(String),
    Days(String),
    Date(String),
}

impl fmt::Display for ForecastError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ForecastError::Config(e) => write!(f, "ForecastError::Config: {}", e),
            ForecastError::Days(e) => write!(f, "ForecastError::Days: {}", e),
            ForecastError::Date(e) => write!(f, "ForecastError::Date: {}", e),
        }
    }
}
