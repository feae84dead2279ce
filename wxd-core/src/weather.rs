//! Payloads returned by the weather API.

use crate::condition::ConditionIcon;
use crate::date_window::DateWindow;
use crate::error::WeatherApiError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

fn default_sunshine_unit() -> String {
    "s".to_string()
}

fn default_temperature_unit() -> String {
    "°C".to_string()
}

fn default_pressure_unit() -> String {
    "hPa".to_string()
}

/// `GET /api/hello` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloMessage {
    pub msg: String,
}

/// Unit strings attached to the daily arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyUnits {
    #[serde(default = "default_sunshine_unit")]
    pub sunshine_duration: String,
    #[serde(default = "default_temperature_unit", rename = "temperature_2m_max")]
    pub temperature_max: String,
    #[serde(default = "default_temperature_unit", rename = "temperature_2m_min")]
    pub temperature_min: String,
}

impl Default for DailyUnits {
    fn default() -> Self {
        Self {
            sunshine_duration: default_sunshine_unit(),
            temperature_max: default_temperature_unit(),
            temperature_min: default_temperature_unit(),
        }
    }
}

/// Parallel arrays, one entry per day.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DailySeries {
    #[serde(default)]
    pub time: Vec<NaiveDate>,
    #[serde(default)]
    pub weather_code: Vec<Option<i32>>,
    #[serde(default)]
    pub sunshine_duration: Vec<Option<f64>>,
    #[serde(default, rename = "temperature_2m_max")]
    pub temperature_max: Vec<Option<f64>>,
    #[serde(default, rename = "temperature_2m_min")]
    pub temperature_min: Vec<Option<f64>>,
}

/// `GET /api/weather/{lat}/{lon}/{start}/{end}` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWeather {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub daily_units: DailyUnits,
    pub daily: DailySeries,
}

/// One row of [`DailyWeather`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyEntry {
    pub date: NaiveDate,
    pub weather_code: Option<i32>,
    pub sunshine_duration: Option<f64>,
    pub temperature_max: Option<f64>,
    pub temperature_min: Option<f64>,
}

impl DailyEntry {
    pub fn icon(&self) -> ConditionIcon {
        ConditionIcon::from_code(self.weather_code)
    }
}

impl DailyWeather {
    pub fn len(&self) -> usize {
        self.daily.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.daily.time.is_empty()
    }

    /// Check that every array holds exactly one entry per day of `window`.
    pub fn check_shape(&self, window: &DateWindow) -> Result<(), WeatherApiError> {
        let expected = window.len_days() as usize;
        let lengths = [
            ("time", self.daily.time.len()),
            ("weather_code", self.daily.weather_code.len()),
            ("sunshine_duration", self.daily.sunshine_duration.len()),
            ("temperature_2m_max", self.daily.temperature_max.len()),
            ("temperature_2m_min", self.daily.temperature_min.len()),
        ];
        for (field, found) in lengths {
            if found != expected {
                return Err(WeatherApiError::InconsistentDaily {
                    field,
                    expected,
                    found,
                });
            }
        }
        Ok(())
    }

    /// Rows zipped from the parallel arrays. Stops at the shortest array.
    pub fn entries(&self) -> impl Iterator<Item = DailyEntry> + '_ {
        let series = &self.daily;
        series
            .time
            .iter()
            .zip(&series.weather_code)
            .zip(&series.sunshine_duration)
            .zip(&series.temperature_max)
            .zip(&series.temperature_min)
            .map(|((((date, code), sunshine), max), min)| DailyEntry {
                date: *date,
                weather_code: *code,
                sunshine_duration: *sunshine,
                temperature_max: *max,
                temperature_min: *min,
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyUnits {
    #[serde(default = "default_pressure_unit")]
    pub pressure: String,
    #[serde(default = "default_temperature_unit")]
    pub temperature: String,
    #[serde(default = "default_sunshine_unit")]
    pub sunshine_duration: String,
}

impl Default for WeeklyUnits {
    fn default() -> Self {
        Self {
            pressure: default_pressure_unit(),
            temperature: default_temperature_unit(),
            sunshine_duration: default_sunshine_unit(),
        }
    }
}

/// `GET /api/weekly/{lat}/{lon}/{start}/{end}` body. Any statistic may be null.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WeeklyStats {
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub avg_pressure: Option<f64>,
    #[serde(default)]
    pub max_temperature: Option<f64>,
    #[serde(default)]
    pub min_temperature: Option<f64>,
    #[serde(default)]
    pub avg_sunshine_duration: Option<f64>,
    #[serde(default)]
    pub most_frequent_weather_code: Option<i32>,
    #[serde(default)]
    pub units: WeeklyUnits,
}

/// Everything one successful fetch cycle produces.
#[derive(Debug, Clone, PartialEq)]
pub struct WeekSnapshot {
    pub window: DateWindow,
    pub daily: DailyWeather,
    pub weekly: WeeklyStats,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::json;

    pub fn daily_json() -> serde_json::Value {
        json!({
            "latitude": 52.52,
            "longitude": 13.41,
            "daily_units": {
                "time": "iso8601",
                "weather_code": "wmo code",
                "sunshine_duration": "s",
                "temperature_2m_max": "°C",
                "temperature_2m_min": "°C"
            },
            "daily": {
                "time": ["2026-10-16", "2026-10-17", "2026-10-18", "2026-10-19",
                         "2026-10-20", "2026-10-21", "2026-10-22"],
                "weather_code": [0, 3, 61, null, 4, 95, 2],
                "sunshine_duration": [36000.0, 7200.0, 0.0, null, 3600.0, 1800.0, 25200.0],
                "temperature_2m_max": [16.2, 14.0, 11.5, null, 12.0, 13.1, 15.0],
                "temperature_2m_min": [6.1, 7.0, 8.2, null, 5.0, 6.4, 4.9]
            }
        })
    }

    pub fn weekly_json() -> serde_json::Value {
        json!({
            "start_date": "2026-10-16",
            "end_date": "2026-10-22",
            "avg_pressure": 1013.4,
            "max_temperature": 16.2,
            "min_temperature": null,
            "avg_sunshine_duration": 10542.9,
            "most_frequent_weather_code": 3,
            "units": { "pressure": "hPa", "temperature": "°C", "sunshine_duration": "s" }
        })
    }
}
