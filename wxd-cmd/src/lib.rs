//! Command implementations for the weather dashboard CLI.
//!
//! Provides subcommands for calling the weather API the same way the
//! dashboard does, and for inspecting the pageable date windows.

use clap::{Args, Subcommand};
use std::time::Duration;
use wxd_core::client::WeatherClient;
use wxd_core::config::{DashboardConfig, API_URL_VAR, WEATHER_API_URL_VAR};

pub mod query;
pub mod windows;

/// Endpoint options shared by every command.
#[derive(Args, Debug, Clone)]
pub struct ApiArgs {
    /// Base URL of the service answering /api/hello
    #[arg(long, global = true, env = API_URL_VAR)]
    pub api_url: Option<String>,

    /// Base URL of the weather service
    #[arg(long, global = true, env = WEATHER_API_URL_VAR)]
    pub weather_api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub timeout_secs: u64,
}

impl ApiArgs {
    pub fn config(&self) -> DashboardConfig {
        DashboardConfig::from_env().with_urls(self.api_url.as_deref(), self.weather_api_url.as_deref())
    }

    pub fn client(&self) -> anyhow::Result<WeatherClient> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()?;
        Ok(WeatherClient::with_http_client(self.config(), http))
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the API greeting
    Hello,

    /// Print the current weather payload for a coordinate
    Current {
        /// Latitude in degrees (-90 to 90)
        #[arg(long, allow_hyphen_values = true)]
        lat: String,

        /// Longitude in degrees (-180 to 180)
        #[arg(long, allow_hyphen_values = true)]
        lon: String,
    },

    /// Print the daily table and weekly summary for one 7-day window
    Week {
        /// Latitude in degrees (-90 to 90)
        #[arg(long, allow_hyphen_values = true)]
        lat: String,

        /// Longitude in degrees (-180 to 180)
        #[arg(long, allow_hyphen_values = true)]
        lon: String,

        /// Window offset (0 is the oldest window); defaults to the window starting today
        #[arg(short, long)]
        offset: Option<u32>,

        /// Installed panel power in kW
        #[arg(long, default_value = "1", allow_hyphen_values = true)]
        installed_kw: String,

        /// Panel efficiency between 0 and 1
        #[arg(long, default_value = "0.2", allow_hyphen_values = true)]
        efficiency: String,

        /// Print the rows and summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List every window offset and its dates
    Windows {
        /// Reference day as YYYY-MM-DD (defaults to the local date)
        #[arg(long)]
        today: Option<String>,
    },
}

pub async fn run(command: Command, api: ApiArgs) -> anyhow::Result<()> {
    match command {
        Command::Hello => query::run_hello(&api).await,
        Command::Current { lat, lon } => query::run_current(&api, &lat, &lon).await,
        Command::Week {
            lat,
            lon,
            offset,
            installed_kw,
            efficiency,
            json,
        } => {
            let input = query::WeekInput {
                latitude: &lat,
                longitude: &lon,
                installed_kw: &installed_kw,
                efficiency: &efficiency,
                offset,
                json,
            };
            query::run_week(&api, input).await
        }
        Command::Windows { today } => windows::run_windows(&api, today.as_deref()),
    }
}
