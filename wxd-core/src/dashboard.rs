//! Page state for the dashboard and the transitions between states.
//!
//! [`Dashboard`] owns the form text, the displayed offset, the busy flag and
//! the last fetched week. The UI layer calls the transition methods and runs
//! the returned [`FetchRequest`]s; nothing here touches the network or the DOM.
//!
//! A fetch cycle always clears the displayed data first. If the cycle fails
//! the page is left empty with a single generic error message.

use crate::coordinate::{Coordinate, PICKED_COORDINATE_DECIMALS};
use crate::date_window::{DateWindow, WindowPager};
use crate::error::WeatherApiError;
use crate::map::picked_coordinate;
use crate::solar::SolarParams;
use crate::validation::{validate_form, FormInput, ValidationReport};
use crate::weather::WeekSnapshot;
use log::{info, warn};

pub const WEATHER_API_ERROR: &str = "Weather API error";
pub const HELLO_API_ERROR: &str = "API error";
pub const INVALID_INPUT: &str = "Please enter valid numbers.";
pub const HELLO_PENDING: &str = "…";

pub const DEFAULT_INSTALLED_KW: &str = "1";
pub const DEFAULT_EFFICIENCY: &str = "0.2";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeolocationFailure {
    /// The browser has no geolocation API
    Unsupported,
    /// The user (or browser policy) refused the request
    Denied,
    /// A position came back but was not a valid coordinate
    Unavailable,
}

impl GeolocationFailure {
    pub fn message(&self) -> &'static str {
        match self {
            GeolocationFailure::Unsupported => "Geolocation not supported",
            GeolocationFailure::Denied => "Location permission denied",
            GeolocationFailure::Unavailable => "Location unavailable",
        }
    }
}

/// What the page is waiting on, if anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activity {
    #[default]
    Idle,
    Locating,
    Fetching,
}

/// One fetch cycle to run: daily then weekly for `window`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FetchRequest {
    pub coordinate: Coordinate,
    pub window: DateWindow,
    pub offset: u32,
    /// Parameters the estimate is computed with once this cycle succeeds
    pub solar: SolarParams,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub latitude: String,
    pub longitude: String,
    pub installed_kw: String,
    pub efficiency: String,
    pager: WindowPager,
    offset: u32,
    activity: Activity,
    snapshot: Option<WeekSnapshot>,
    last_request: Option<FetchRequest>,
    fetched_solar: Option<SolarParams>,
    picked: Option<Coordinate>,
    error: Option<String>,
    hello: Option<String>,
}

impl Dashboard {
    pub fn new(pager: WindowPager) -> Self {
        Self {
            latitude: String::new(),
            longitude: String::new(),
            installed_kw: DEFAULT_INSTALLED_KW.to_string(),
            efficiency: DEFAULT_EFFICIENCY.to_string(),
            pager,
            offset: pager.initial_offset(),
            activity: Activity::Idle,
            snapshot: None,
            last_request: None,
            fetched_solar: None,
            picked: None,
            error: None,
            hello: None,
        }
    }

    pub fn pager(&self) -> &WindowPager {
        &self.pager
    }

    /// Offset of the window on screen (or about to be requested, before the first fetch).
    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn activity(&self) -> Activity {
        self.activity
    }

    pub fn is_busy(&self) -> bool {
        self.activity != Activity::Idle
    }

    pub fn snapshot(&self) -> Option<&WeekSnapshot> {
        self.snapshot.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn hello_text(&self) -> &str {
        self.hello.as_deref().unwrap_or(HELLO_PENDING)
    }

    /// Last coordinate chosen on the map, for the marker.
    pub fn picked(&self) -> Option<Coordinate> {
        self.picked
    }

    pub fn validation(&self) -> ValidationReport {
        validate_form(FormInput {
            latitude: &self.latitude,
            longitude: &self.longitude,
            installed_kw: &self.installed_kw,
            efficiency: &self.efficiency,
        })
    }

    pub fn can_submit(&self) -> bool {
        !self.is_busy() && self.validation().is_valid()
    }

    pub fn can_go_previous(&self) -> bool {
        !self.is_busy() && self.snapshot.is_some() && self.offset > 0
    }

    pub fn can_go_next(&self) -> bool {
        !self.is_busy() && self.snapshot.is_some() && self.offset < self.pager.max_offset()
    }

    /// Solar parameters for the estimate: the form's if valid, else those of the last fetch.
    pub fn solar_params(&self) -> Option<SolarParams> {
        self.validation().solar_params().or(self.fetched_solar)
    }

    /// e.g. "Week 11 of 13: 2026-10-16 to 2026-10-22"
    pub fn window_label(&self) -> Option<String> {
        self.snapshot.as_ref().map(|snapshot| {
            format!(
                "Week {} of {}: {}",
                self.offset + 1,
                self.pager.max_offset() + 1,
                snapshot.window
            )
        })
    }

    /// Manual submission for the current offset.
    pub fn submit(&mut self) -> Option<FetchRequest> {
        if self.is_busy() {
            return None;
        }
        let report = self.validation();
        match (report.coordinate(), report.solar_params()) {
            (Some(coordinate), Some(solar)) if report.is_valid() => {
                Some(self.start_fetch(coordinate, solar, self.offset))
            }
            _ => {
                self.error = Some(INVALID_INPUT.to_string());
                None
            }
        }
    }

    pub fn previous(&mut self) -> Option<FetchRequest> {
        if !self.can_go_previous() {
            return None;
        }
        self.page_to(self.offset - 1)
    }

    pub fn next(&mut self) -> Option<FetchRequest> {
        if !self.can_go_next() {
            return None;
        }
        self.page_to(self.offset + 1)
    }

    fn page_to(&mut self, offset: u32) -> Option<FetchRequest> {
        let last = self.last_request?;
        Some(self.start_fetch(last.coordinate, last.solar, offset))
    }

    /// Mark the page busy while the browser resolves a position.
    /// Returns false if something else is already running.
    pub fn begin_locating(&mut self) -> bool {
        if self.is_busy() {
            return false;
        }
        self.activity = Activity::Locating;
        self.error = None;
        true
    }

    /// A position arrived: fill the fields and submit as if typed.
    pub fn located(&mut self, latitude: f64, longitude: f64) -> Option<FetchRequest> {
        self.activity = Activity::Idle;
        match Coordinate::new(latitude, longitude) {
            Ok(coordinate) => {
                self.fill_coordinate(coordinate.rounded(PICKED_COORDINATE_DECIMALS));
                self.submit()
            }
            Err(e) => {
                warn!("Discarding geolocation result: {}", e);
                self.location_failed(GeolocationFailure::Unavailable);
                None
            }
        }
    }

    pub fn location_failed(&mut self, failure: GeolocationFailure) {
        self.activity = Activity::Idle;
        self.error = Some(failure.message().to_string());
    }

    /// A map click. Ignored while busy or when the click is off the globe.
    pub fn map_selected(&mut self, latitude: f64, longitude: f64) -> Option<FetchRequest> {
        if self.is_busy() {
            return None;
        }
        match picked_coordinate(latitude, longitude) {
            Ok(coordinate) => {
                self.picked = Some(coordinate);
                self.fill_coordinate(coordinate);
                self.submit()
            }
            Err(e) => {
                warn!("Ignoring map click: {}", e);
                None
            }
        }
    }

    /// Apply the outcome of a fetch cycle.
    ///
    /// There is no cancellation: whichever cycle finishes last wins.
    pub fn finish_fetch(&mut self, request: FetchRequest, outcome: Result<WeekSnapshot, WeatherApiError>) {
        self.activity = Activity::Idle;
        match outcome {
            Ok(snapshot) => {
                info!("Showing {} (offset {})", snapshot.window, request.offset);
                self.snapshot = Some(snapshot);
                self.offset = request.offset;
                self.fetched_solar = Some(request.solar);
                self.last_request = Some(request);
                self.error = None;
            }
            Err(e) => {
                warn!("Weather fetch failed: {}", e);
                self.snapshot = None;
                self.error = Some(WEATHER_API_ERROR.to_string());
            }
        }
    }

    pub fn set_hello(&mut self, outcome: Result<String, WeatherApiError>) {
        self.hello = Some(match outcome {
            Ok(msg) => msg,
            Err(e) => {
                warn!("Hello endpoint failed: {}", e);
                HELLO_API_ERROR.to_string()
            }
        });
    }

    fn fill_coordinate(&mut self, coordinate: Coordinate) {
        self.latitude = coordinate.latitude.to_string();
        self.longitude = coordinate.longitude.to_string();
    }

    fn start_fetch(&mut self, coordinate: Coordinate, solar: SolarParams, offset: u32) -> FetchRequest {
        self.activity = Activity::Fetching;
        self.error = None;
        self.snapshot = None;
        FetchRequest {
            coordinate,
            window: self.pager.window_for_offset(offset),
            offset,
            solar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::fixtures::{daily_json, weekly_json};
    use chrono::NaiveDate;

    fn pager() -> WindowPager {
        WindowPager::for_day(NaiveDate::from_ymd_opt(2026, 10, 16).unwrap())
    }

    fn snapshot_for(request: &FetchRequest) -> WeekSnapshot {
        WeekSnapshot {
            window: request.window,
            daily: serde_json::from_value(daily_json()).unwrap(),
            weekly: serde_json::from_value(weekly_json()).unwrap(),
        }
    }

    fn server_error() -> WeatherApiError {
        WeatherApiError::Status {
            url: "http://localhost:5000/api/weather".to_string(),
            status: 500,
        }
    }

    fn filled() -> Dashboard {
        let mut page = Dashboard::new(pager());
        page.latitude = "52.52".to_string();
        page.longitude = "13.405".to_string();
        page
    }

    /// Submit and complete one successful cycle.
    fn loaded() -> Dashboard {
        let mut page = filled();
        let request = page.submit().unwrap();
        let snapshot = snapshot_for(&request);
        page.finish_fetch(request, Ok(snapshot));
        page
    }

    #[test]
    fn test_initial_state() {
        let page = Dashboard::new(pager());
        assert_eq!(page.offset(), 10);
        assert!(!page.is_busy());
        assert!(!page.can_submit());
        assert!(!page.can_go_previous());
        assert!(!page.can_go_next());
        assert_eq!(page.hello_text(), HELLO_PENDING);
    }

    #[test]
    fn test_invalid_submit_is_refused() {
        let mut page = Dashboard::new(pager());
        page.latitude = "91".to_string();
        page.longitude = "0".to_string();
        assert!(!page.can_submit());
        assert_eq!(page.submit(), None);
        assert_eq!(page.error(), Some(INVALID_INPUT));
        assert!(!page.is_busy());
    }

    #[test]
    fn test_bad_efficiency_blocks_submission() {
        let mut page = filled();
        page.efficiency = "1.01".to_string();
        assert!(!page.can_submit());
        assert_eq!(page.submit(), None);
    }

    #[test]
    fn test_submit_requests_current_window() {
        let mut page = filled();
        let request = page.submit().unwrap();
        assert_eq!(request.offset, 10);
        assert_eq!(request.window, pager().window_for_offset(10));
        assert_eq!(request.coordinate, Coordinate::new(52.52, 13.405).unwrap());
        assert_eq!(page.activity(), Activity::Fetching);
        assert!(!page.can_submit());
    }

    #[test]
    fn test_second_fetch_refused_while_busy() {
        let mut page = filled();
        assert!(page.submit().is_some());
        assert_eq!(page.submit(), None);
        assert_eq!(page.map_selected(1.0, 1.0), None);
        assert!(!page.begin_locating());
    }

    #[test]
    fn test_successful_fetch_shows_data() {
        let page = loaded();
        assert!(!page.is_busy());
        assert!(page.snapshot().is_some());
        assert_eq!(page.error(), None);
        assert_eq!(
            page.window_label().unwrap(),
            "Week 11 of 13: 2026-10-16 to 2026-10-22"
        );
    }

    #[test]
    fn test_submit_clears_before_fetch() {
        let mut page = loaded();
        let request = page.submit().unwrap();
        assert!(page.snapshot().is_none());
        page.finish_fetch(request, Err(server_error()));
        assert!(page.snapshot().is_none());
        assert_eq!(page.error(), Some(WEATHER_API_ERROR));
        assert!(!page.is_busy());
    }

    #[test]
    fn test_failure_keeps_offset_and_disables_paging() {
        let mut page = loaded();
        let request = page.next().unwrap();
        assert_eq!(request.offset, 11);
        page.finish_fetch(request, Err(server_error()));
        assert_eq!(page.offset(), 10);
        assert!(!page.can_go_next());
        assert!(!page.can_go_previous());
    }

    #[test]
    fn test_paging_moves_offset_on_success() {
        let mut page = loaded();
        let request = page.previous().unwrap();
        assert_eq!(request.offset, 9);
        assert_eq!(request.coordinate, Coordinate::new(52.52, 13.405).unwrap());
        let snapshot = snapshot_for(&request);
        page.finish_fetch(request, Ok(snapshot));
        assert_eq!(page.offset(), 9);
    }

    #[test]
    fn test_paging_uses_fetched_coordinate_not_edited_fields() {
        let mut page = loaded();
        page.latitude = "10".to_string();
        let request = page.next().unwrap();
        assert_eq!(request.coordinate.latitude, 52.52);
    }

    #[test]
    fn test_paging_limits() {
        let mut page = loaded();
        for _ in 0..2 {
            let request = page.next().unwrap();
            let snapshot = snapshot_for(&request);
            page.finish_fetch(request, Ok(snapshot));
        }
        assert_eq!(page.offset(), page.pager().max_offset());
        assert!(!page.can_go_next());
        assert_eq!(page.next(), None);
        assert!(page.can_go_previous());

        let mut page = loaded();
        for _ in 0..10 {
            let request = page.previous().unwrap();
            let snapshot = snapshot_for(&request);
            page.finish_fetch(request, Ok(snapshot));
        }
        assert_eq!(page.offset(), 0);
        assert!(!page.can_go_previous());
        assert_eq!(page.previous(), None);
    }

    #[test]
    fn test_geolocation_success_rounds_and_fetches() {
        let mut page = Dashboard::new(pager());
        assert!(page.begin_locating());
        assert_eq!(page.activity(), Activity::Locating);
        let request = page.located(48.856_613_7, 2.352_221_9).unwrap();
        assert_eq!(page.latitude, "48.8566");
        assert_eq!(page.longitude, "2.3522");
        assert_eq!(request.coordinate.latitude, 48.8566);
        assert_eq!(page.activity(), Activity::Fetching);
    }

    #[test]
    fn test_geolocation_denied() {
        let mut page = Dashboard::new(pager());
        assert!(page.begin_locating());
        page.location_failed(GeolocationFailure::Denied);
        assert!(!page.is_busy());
        assert_eq!(page.error(), Some("Location permission denied"));
        assert!(page.snapshot().is_none());
    }

    #[test]
    fn test_geolocation_unsupported_message() {
        let mut page = Dashboard::new(pager());
        page.location_failed(GeolocationFailure::Unsupported);
        assert_eq!(page.error(), Some("Geolocation not supported"));
    }

    #[test]
    fn test_map_selection_feeds_fetch() {
        let mut page = Dashboard::new(pager());
        let request = page.map_selected(-33.868_82, 151.209_29).unwrap();
        assert_eq!(request.coordinate, Coordinate::new(-33.8688, 151.2093).unwrap());
        assert_eq!(page.picked(), Some(request.coordinate));
        assert_eq!(page.latitude, "-33.8688");
    }

    #[test]
    fn test_solar_params_fall_back_to_fetched() {
        let mut page = loaded();
        page.efficiency = "oops".to_string();
        let params = page.solar_params().unwrap();
        assert_eq!(params.efficiency, 0.2);
        page.efficiency = "0.5".to_string();
        assert_eq!(page.solar_params().unwrap().efficiency, 0.5);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_solar_params() {
        let mut page = loaded();
        page.efficiency = "0.5".to_string();
        let request = page.submit().unwrap();
        assert_eq!(request.solar.efficiency, 0.5);
        page.finish_fetch(request, Err(server_error()));

        page.efficiency = "oops".to_string();
        assert_eq!(page.solar_params().unwrap().efficiency, 0.2);
    }

    #[test]
    fn test_hello_outcomes() {
        let mut page = Dashboard::new(pager());
        page.set_hello(Ok("Hello from the API".to_string()));
        assert_eq!(page.hello_text(), "Hello from the API");
        page.set_hello(Err(server_error()));
        assert_eq!(page.hello_text(), HELLO_API_ERROR);
    }
}
