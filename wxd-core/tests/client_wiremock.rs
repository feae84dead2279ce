//! Weather client against a mock HTTP server.

#![cfg(feature = "api")]

use chrono::NaiveDate;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};
use wxd_core::client::WeatherClient;
use wxd_core::config::DashboardConfig;
use wxd_core::coordinate::Coordinate;
use wxd_core::date_window::DateWindow;
use wxd_core::error::WeatherApiError;

const DAILY_PATH: &str = "/api/weather/52.5200/13.4050/2026-10-16/2026-10-22";
const WEEKLY_PATH: &str = "/api/weekly/52.5200/13.4050/2026-10-16/2026-10-22";

fn daily_body(days: usize) -> serde_json::Value {
    let time: Vec<String> = (16..16 + days).map(|d| format!("2026-10-{d}")).collect();
    serde_json::json!({
        "latitude": 52.52,
        "longitude": 13.405,
        "daily_units": {
            "sunshine_duration": "s",
            "temperature_2m_max": "°C",
            "temperature_2m_min": "°C"
        },
        "daily": {
            "time": time,
            "weather_code": vec![3; days],
            "sunshine_duration": vec![7200.0; days],
            "temperature_2m_max": vec![15.0; days],
            "temperature_2m_min": vec![5.0; days]
        }
    })
}

fn weekly_body() -> serde_json::Value {
    serde_json::json!({
        "start_date": "2026-10-16",
        "end_date": "2026-10-22",
        "avg_pressure": 1012.0,
        "max_temperature": 15.0,
        "min_temperature": 5.0,
        "avg_sunshine_duration": 7200.0,
        "most_frequent_weather_code": 3,
        "units": { "pressure": "hPa", "temperature": "°C", "sunshine_duration": "s" }
    })
}

fn create_test_client(mock_server: &MockServer) -> WeatherClient {
    let config = DashboardConfig::default().with_urls(Some(&mock_server.uri()), Some(&mock_server.uri()));
    WeatherClient::new(config)
}

fn coordinate() -> Coordinate {
    Coordinate::new(52.52, 13.405).unwrap()
}

fn window() -> DateWindow {
    DateWindow {
        start: NaiveDate::from_ymd_opt(2026, 10, 16).unwrap(),
        end: NaiveDate::from_ymd_opt(2026, 10, 22).unwrap(),
    }
}

async fn mount(mock_server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

#[tokio::test]
async fn test_fetch_week_success() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, DAILY_PATH, ResponseTemplate::new(200).set_body_json(daily_body(7))).await;
    mount(&mock_server, WEEKLY_PATH, ResponseTemplate::new(200).set_body_json(weekly_body())).await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_week(&coordinate(), &window()).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");
    let snapshot = result.unwrap();
    assert_eq!(snapshot.window, window());
    assert_eq!(snapshot.daily.len(), 7);
    assert_eq!(snapshot.weekly.most_frequent_weather_code, Some(3));
}

#[tokio::test]
async fn test_server_error_maps_to_status() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, DAILY_PATH, ResponseTemplate::new(503)).await;

    let client = create_test_client(&mock_server);
    let result = client.daily(&coordinate(), &window()).await;

    assert!(
        matches!(result, Err(WeatherApiError::Status { status: 503, .. })),
        "Expected Status, got: {result:?}"
    );
}

#[tokio::test]
async fn test_malformed_body_maps_to_parse() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, WEEKLY_PATH, ResponseTemplate::new(200).set_body_string("not json")).await;

    let client = create_test_client(&mock_server);
    let result = client.weekly(&coordinate(), &window()).await;

    assert!(
        matches!(result, Err(WeatherApiError::Parse { .. })),
        "Expected Parse, got: {result:?}"
    );
}

#[tokio::test]
async fn test_short_daily_is_rejected() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, DAILY_PATH, ResponseTemplate::new(200).set_body_json(daily_body(5))).await;

    let client = create_test_client(&mock_server);
    let result = client.daily(&coordinate(), &window()).await;

    assert_eq!(
        result.unwrap_err(),
        WeatherApiError::InconsistentDaily {
            field: "time",
            expected: 7,
            found: 5
        }
    );
}

#[tokio::test]
async fn test_weekly_skipped_when_daily_fails() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, DAILY_PATH, ResponseTemplate::new(500)).await;
    Mock::given(method("GET"))
        .and(path(WEEKLY_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(weekly_body()))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_week(&coordinate(), &window()).await;

    assert!(result.is_err());
}

#[tokio::test]
async fn test_weekly_failure_discards_cycle() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, DAILY_PATH, ResponseTemplate::new(200).set_body_json(daily_body(7))).await;
    mount(&mock_server, WEEKLY_PATH, ResponseTemplate::new(404)).await;

    let client = create_test_client(&mock_server);
    let result = client.fetch_week(&coordinate(), &window()).await;

    assert!(matches!(result, Err(WeatherApiError::Status { status: 404, .. })));
}

#[tokio::test]
async fn test_hello() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        "/api/hello",
        ResponseTemplate::new(200).set_body_json(serde_json::json!({ "msg": "Hello from the API" })),
    )
    .await;

    let client = create_test_client(&mock_server);
    assert_eq!(client.hello().await.unwrap(), "Hello from the API");
}

#[tokio::test]
async fn test_unreachable_server_maps_to_request() {
    let config = DashboardConfig::default().with_urls(None, Some("http://127.0.0.1:1"));
    let client = WeatherClient::new(config);
    let result = client.daily(&coordinate(), &window()).await;

    assert!(
        matches!(result, Err(WeatherApiError::Request { .. })),
        "Expected Request, got: {result:?}"
    );
}
