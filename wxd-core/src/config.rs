//! Endpoint and paging configuration.
//!
//! The web build bakes the URLs in at compile time (`API_URL`,
//! `WEATHER_API_URL`); native tools read the same names at runtime.

use crate::date_window::{WindowError, WindowPager, DEFAULT_FORECAST_DAYS, DEFAULT_HISTORY_DAYS};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub const API_URL_VAR: &str = "API_URL";
pub const WEATHER_API_URL_VAR: &str = "WEATHER_API_URL";

pub const MIN_COORDINATE_DECIMALS: usize = 2;
pub const MAX_COORDINATE_DECIMALS: usize = 4;

fn default_api_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_weather_api_url() -> String {
    "http://localhost:5000".to_string()
}

const fn default_coordinate_decimals() -> usize {
    MAX_COORDINATE_DECIMALS
}

const fn default_history_days() -> i64 {
    DEFAULT_HISTORY_DAYS
}

const fn default_forecast_days() -> i64 {
    DEFAULT_FORECAST_DAYS
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Base URL of the service answering `/api/hello`
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Base URL of the weather service
    #[serde(default = "default_weather_api_url")]
    pub weather_api_url: String,

    /// Decimal places used when path-encoding coordinates (2-4, default 4)
    #[serde(default = "default_coordinate_decimals")]
    pub coordinate_decimals: usize,

    /// Past days reachable through paging (default 70)
    #[serde(default = "default_history_days")]
    pub history_days: i64,

    /// Forecast days reachable through paging (default 16)
    #[serde(default = "default_forecast_days")]
    pub forecast_days: i64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            weather_api_url: default_weather_api_url(),
            coordinate_decimals: default_coordinate_decimals(),
            history_days: default_history_days(),
            forecast_days: default_forecast_days(),
        }
    }
}

impl DashboardConfig {
    /// Configuration captured from the build environment.
    pub fn from_build_env() -> Self {
        Self::default().with_urls(option_env!("API_URL"), option_env!("WEATHER_API_URL"))
    }

    /// Configuration from the process environment.
    pub fn from_env() -> Self {
        let api_url = std::env::var(API_URL_VAR).ok();
        let weather_api_url = std::env::var(WEATHER_API_URL_VAR).ok();
        Self::default().with_urls(api_url.as_deref(), weather_api_url.as_deref())
    }

    /// Replace the URLs that are given and non-blank.
    pub fn with_urls(mut self, api_url: Option<&str>, weather_api_url: Option<&str>) -> Self {
        if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.api_url = url.to_string();
        }
        if let Some(url) = weather_api_url.map(str::trim).filter(|u| !u.is_empty()) {
            self.weather_api_url = url.to_string();
        }
        self
    }

    pub fn coordinate_decimals(&self) -> usize {
        self.coordinate_decimals
            .clamp(MIN_COORDINATE_DECIMALS, MAX_COORDINATE_DECIMALS)
    }

    pub fn pager(&self, today: NaiveDate) -> Result<WindowPager, WindowError> {
        WindowPager::new(today, self.history_days, self.forecast_days)
    }
}
