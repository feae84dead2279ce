//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use crate::js_bridge;
use dioxus::prelude::*;
use wxd_core::client::WeatherClient;
use wxd_core::config::DashboardConfig;
use wxd_core::dashboard::Dashboard;
use wxd_core::date_window::WindowPager;
use wxd_core::map::MapCapability;
use wxd_core::theme::Theme;

/// Shared application state for the dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Form, offset, busy flag and the week on screen
    pub page: Signal<Dashboard>,
    /// Light or dark, mirrored to local storage
    pub theme: Signal<Theme>,
    /// HTTP client configured from the build environment
    pub client: Signal<WeatherClient>,
    /// Whether the Leaflet map can be shown
    pub map: Signal<MapCapability>,
}

impl AppState {
    /// Create a new AppState from the build-time configuration and the browser.
    pub fn new() -> Self {
        let config = DashboardConfig::from_build_env();
        let today = WindowPager::for_local_today().today();
        let pager = match config.pager(today) {
            Ok(pager) => pager,
            Err(e) => {
                log::warn!("Invalid paging configuration ({}), using defaults", e);
                WindowPager::for_day(today)
            }
        };
        log::info!(
            "Weather API at {}, {} windows from {} to {}",
            config.weather_api_url,
            pager.max_offset() + 1,
            pager.earliest(),
            pager.latest()
        );

        Self {
            page: Signal::new(Dashboard::new(pager)),
            theme: Signal::new(js_bridge::load_theme()),
            client: Signal::new(WeatherClient::new(config)),
            map: Signal::new(js_bridge::map_capability()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
