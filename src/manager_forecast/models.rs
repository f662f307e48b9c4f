use chrono::NaiveDate;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use crate::temperature::celsius_to_fahrenheit;

/// One day's predicted temperature and summary.
///
/// Fahrenheit is not stored, it is derived from `temperature_c` whenever it is
/// asked for or serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastEntry {
    pub date: NaiveDate,
    pub temperature_c: i32,
    pub summary: String,
}

impl ForecastEntry {
    pub fn temperature_f(&self) -> i32 {
        celsius_to_fahrenheit(self.temperature_c)
    }
}

impl Serialize for ForecastEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ForecastEntry", 4)?;
        state.serialize_field("date", &self.date)?;
        state.serialize_field("temperatureC", &self.temperature_c)?;
        state.serialize_field("temperatureF", &self.temperature_f())?;
        state.serialize_field("summary", &self.summary)?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_derived_fahrenheit() {
        let entry = ForecastEntry {
            date: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
            temperature_c: 25,
            summary: "Warm".to_string(),
        };

        let json = serde_json::to_string(&entry).unwrap();

        assert_eq!(
            json,
            r#"{"date":"2026-10-16","temperatureC":25,"temperatureF":76,"summary":"Warm"}"#
        );
    }
}
