use serde::{Deserialize, Serialize};
use thiserror::Error;
use wxd_utils::numbers::{format_fixed, round_to};

pub const MIN_LATITUDE: f64 = -90.0;
pub const MAX_LATITUDE: f64 = 90.0;
pub const MIN_LONGITUDE: f64 = -180.0;
pub const MAX_LONGITUDE: f64 = 180.0;

/// Precision used for coordinates coming from geolocation and map clicks.
pub const PICKED_COORDINATE_DECIMALS: u32 = 4;

#[derive(Debug, Error, PartialEq, Clone, Copy)]
pub enum CoordinateError {
    #[error("latitude {0} is outside -90..=90")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside -180..=180")]
    LongitudeOutOfRange(f64),
}

/// A validated latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Build a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !(MIN_LATITUDE..=MAX_LATITUDE).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange(latitude));
        }
        if !longitude.is_finite() || !(MIN_LONGITUDE..=MAX_LONGITUDE).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Round both components to `decimals` fractional digits.
    pub fn rounded(self, decimals: u32) -> Self {
        Self {
            latitude: round_to(self.latitude, decimals),
            longitude: round_to(self.longitude, decimals),
        }
    }

    /// The `{lat}/{lon}` path fragment used by every weather endpoint.
    pub fn path_segments(&self, decimals: usize) -> String {
        format!(
            "{}/{}",
            format_fixed(self.latitude, decimals),
            format_fixed(self.longitude, decimals)
        )
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
