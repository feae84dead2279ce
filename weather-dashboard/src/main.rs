//! Weekly weather and solar yield dashboard
//!
//! Shows a 7-day window of daily weather for a coordinate, pageable from
//! 70 days back to the end of the forecast, with a solar yield estimate per
//! day and a weekly summary.
//!
//! Data flow:
//! 1. On mount: fetch the API greeting and apply the stored theme.
//! 2. Submitting the form, using the browser location or clicking the map
//!    produces a fetch request from the page state.
//! 3. The request is run as a spawned task (daily then weekly) and its
//!    outcome is applied back to the page state, which re-renders.

use dioxus::prelude::*;
use wxd_dashboard_ui::actions;
use wxd_dashboard_ui::components::{
    CoordinateForm, DashboardHeader, ErrorDisplay, LoadingSpinner, MapPicker, PaginationControls,
    WeatherTable, WeeklySummary,
};
use wxd_dashboard_ui::js_bridge;
use wxd_dashboard_ui::palette::Palette;
use wxd_dashboard_ui::state::AppState;
use wxd_core::dashboard::Activity;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    log::info!("Starting weather dashboard v{}", env!("CARGO_PKG_VERSION"));
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("weather-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);

    // ─── Effect 1: greeting, once on mount ───
    use_effect(move || actions::load_hello(state));

    // ─── Effect 2: keep the <html> class in sync with the theme ───
    use_effect(move || {
        let theme = (state.theme)();
        js_bridge::apply_theme(theme);
    });

    let palette = Palette::for_theme((state.theme)());
    let page = state.page.read();
    let error = page.error().map(str::to_string);
    let fetching = page.activity() == Activity::Fetching;
    drop(page);

    rsx! {
        div {
            style: "min-height: 100vh; padding: 16px 24px; background: {palette.background}; color: {palette.text}; font-family: system-ui, sans-serif;",
            DashboardHeader {}
            CoordinateForm {}
            MapPicker {}
            if let Some(message) = error {
                ErrorDisplay { message, palette }
            }
            PaginationControls {}
            if fetching {
                LoadingSpinner { color: palette.muted.to_string() }
            }
            WeatherTable {}
            WeeklySummary {}
        }
    }
}
