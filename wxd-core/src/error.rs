use thiserror::Error;

/// Failures of a single weather API call.
///
/// The dashboard shows all of these as one generic message; the detail is
/// only logged.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum WeatherApiError {
    #[error("request to {url} failed: {message}")]
    Request { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("could not parse response from {url}: {message}")]
    Parse { url: String, message: String },

    #[error("daily payload has {found} `{field}` entries, expected {expected}")]
    InconsistentDaily {
        field: &'static str,
        expected: usize,
        found: usize,
    },
}
