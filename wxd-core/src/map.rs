//! Click-to-select map support that does not depend on the browser.
//!
//! The widget itself lives in the UI crate; this module decides whether it
//! can be shown and turns raw click positions into coordinates.

use crate::coordinate::{Coordinate, CoordinateError, PICKED_COORDINATE_DECIMALS};

pub const TILE_URL_TEMPLATE: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_ATTRIBUTION: &str = "© OpenStreetMap contributors";
pub const INITIAL_CENTER: (f64, f64) = (0.0, 0.0);
pub const INITIAL_ZOOM: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapUnavailable {
    /// Not running in a browser (server-side render, native test)
    NoBrowser,
    /// Running in a browser, but the tile renderer script is not loaded
    NoTileRenderer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapCapability {
    Available,
    Unavailable(MapUnavailable),
}

impl MapCapability {
    pub fn resolve(has_window: bool, has_tile_renderer: bool) -> Self {
        match (has_window, has_tile_renderer) {
            (false, _) => MapCapability::Unavailable(MapUnavailable::NoBrowser),
            (true, false) => MapCapability::Unavailable(MapUnavailable::NoTileRenderer),
            (true, true) => MapCapability::Available,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, MapCapability::Available)
    }

    /// Text shown in place of the map.
    pub fn placeholder_text(&self) -> Option<&'static str> {
        match self {
            MapCapability::Available => None,
            MapCapability::Unavailable(MapUnavailable::NoBrowser) => {
                Some("The map is only available in the browser.")
            }
            MapCapability::Unavailable(MapUnavailable::NoTileRenderer) => {
                Some("Map unavailable. Enter coordinates or use your location instead.")
            }
        }
    }
}

/// Wrap a longitude into `[-180, 180]`; panning past the antimeridian yields values outside it.
pub fn wrap_longitude(longitude: f64) -> f64 {
    if (-180.0..=180.0).contains(&longitude) {
        return longitude;
    }
    (longitude + 180.0).rem_euclid(360.0) - 180.0
}

/// Coordinate for a map click, rounded to 4 decimals.
pub fn picked_coordinate(latitude: f64, longitude: f64) -> Result<Coordinate, CoordinateError> {
    Coordinate::new(latitude, wrap_longitude(longitude))
        .map(|coordinate| coordinate.rounded(PICKED_COORDINATE_DECIMALS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capability_resolution() {
        assert_eq!(MapCapability::resolve(true, true), MapCapability::Available);
        assert_eq!(
            MapCapability::resolve(true, false),
            MapCapability::Unavailable(MapUnavailable::NoTileRenderer)
        );
        assert_eq!(
            MapCapability::resolve(false, true),
            MapCapability::Unavailable(MapUnavailable::NoBrowser)
        );
    }

    #[test]
    fn test_placeholder_only_when_unavailable() {
        assert!(MapCapability::Available.placeholder_text().is_none());
        assert!(MapCapability::resolve(false, false).placeholder_text().is_some());
    }

    #[test]
    fn test_picked_coordinate_rounds() {
        let coord = picked_coordinate(51.507_351_2, -0.127_758_3).unwrap();
        assert_eq!(coord.latitude, 51.5074);
        assert_eq!(coord.longitude, -0.1278);
    }

    #[test]
    fn test_longitude_wraps_across_antimeridian() {
        assert_eq!(wrap_longitude(190.0), -170.0);
        assert_eq!(wrap_longitude(-190.0), 170.0);
        assert_eq!(wrap_longitude(180.0), 180.0);
        let coord = picked_coordinate(10.0, 370.5).unwrap();
        assert_eq!(coord.longitude, 10.5);
    }

    #[test]
    fn test_picked_latitude_out_of_range() {
        assert!(picked_coordinate(95.0, 0.0).is_err());
    }
}
