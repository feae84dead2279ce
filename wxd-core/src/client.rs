//! HTTP client for the weather and greeting endpoints.
//!
//! Works on native targets and in the browser (reqwest uses `fetch` on
//! wasm32). No retries and no caching: each call is one GET.

use crate::config::DashboardConfig;
use crate::coordinate::Coordinate;
use crate::date_window::DateWindow;
use crate::error::WeatherApiError;
use crate::weather::{DailyWeather, HelloMessage, WeekSnapshot, WeeklyStats};
use log::{debug, info};
use reqwest::Client;
use serde::de::DeserializeOwned;
use wxd_utils::dates::format_date;

#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: Client,
    config: DashboardConfig,
}

impl WeatherClient {
    pub fn new(config: DashboardConfig) -> Self {
        Self::with_http_client(config, Client::new())
    }

    /// Use a preconfigured reqwest client (timeouts, proxies, ...).
    pub fn with_http_client(config: DashboardConfig, http: Client) -> Self {
        Self { http, config }
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn hello_url(&self) -> String {
        format!("{}/api/hello", base(&self.config.api_url))
    }

    pub fn current_url(&self, coordinate: &Coordinate) -> String {
        format!(
            "{}/api/weather/{}",
            base(&self.config.weather_api_url),
            coordinate.path_segments(self.config.coordinate_decimals())
        )
    }

    pub fn daily_url(&self, coordinate: &Coordinate, window: &DateWindow) -> String {
        self.windowed_url("weather", coordinate, window)
    }

    pub fn weekly_url(&self, coordinate: &Coordinate, window: &DateWindow) -> String {
        self.windowed_url("weekly", coordinate, window)
    }

    fn windowed_url(&self, resource: &str, coordinate: &Coordinate, window: &DateWindow) -> String {
        format!(
            "{}/api/{}/{}/{}/{}",
            base(&self.config.weather_api_url),
            resource,
            coordinate.path_segments(self.config.coordinate_decimals()),
            format_date(&window.start),
            format_date(&window.end)
        )
    }

    /// Greeting text from `/api/hello`.
    pub async fn hello(&self) -> Result<String, WeatherApiError> {
        let hello: HelloMessage = self.get_json(self.hello_url()).await?;
        Ok(hello.msg)
    }

    /// Single-point payload, returned untyped.
    pub async fn current(&self, coordinate: &Coordinate) -> Result<serde_json::Value, WeatherApiError> {
        self.get_json(self.current_url(coordinate)).await
    }

    /// Daily detail for `window`. Fails if the arrays do not cover the window.
    pub async fn daily(
        &self,
        coordinate: &Coordinate,
        window: &DateWindow,
    ) -> Result<DailyWeather, WeatherApiError> {
        let daily: DailyWeather = self.get_json(self.daily_url(coordinate, window)).await?;
        daily.check_shape(window)?;
        Ok(daily)
    }

    pub async fn weekly(
        &self,
        coordinate: &Coordinate,
        window: &DateWindow,
    ) -> Result<WeeklyStats, WeatherApiError> {
        self.get_json(self.weekly_url(coordinate, window)).await
    }

    /// Daily then weekly. The weekly call is skipped if the daily one fails,
    /// and either failure discards the whole cycle.
    pub async fn fetch_week(
        &self,
        coordinate: &Coordinate,
        window: &DateWindow,
    ) -> Result<WeekSnapshot, WeatherApiError> {
        info!("Fetching weather for {} over {}", coordinate, window);
        let daily = self.daily(coordinate, window).await?;
        let weekly = self.weekly(coordinate, window).await?;
        Ok(WeekSnapshot {
            window: *window,
            daily,
            weekly,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, WeatherApiError> {
        debug!("GET {}", url);
        let response = match self.http.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                return Err(WeatherApiError::Request {
                    url,
                    message: e.to_string(),
                })
            }
        };

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                return Err(WeatherApiError::Request {
                    url,
                    message: e.to_string(),
                })
            }
        };

        serde_json::from_str(&body).map_err(|e| WeatherApiError::Parse {
            url,
            message: e.to_string(),
        })
    }
}

fn base(url: &str) -> &str {
    url.trim_end_matches('/')
}
