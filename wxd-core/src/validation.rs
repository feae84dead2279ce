//! Form field validation.
//!
//! Every field is checked independently so the form can show a message next
//! to each bad input. A coordinate or solar parameter set is only produced
//! when all fields pass.

use crate::coordinate::{Coordinate, MAX_LATITUDE, MAX_LONGITUDE, MIN_LATITUDE, MIN_LONGITUDE};
use crate::solar::SolarParams;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone, Copy)]
pub enum FieldError {
    #[error("is required")]
    Missing,
    #[error("must be a number")]
    NotANumber,
    #[error("must be between {min} and {max}")]
    OutOfRange { min: f64, max: f64 },
    #[error("must be zero or more")]
    Negative,
}

/// The named inputs on the dashboard form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Latitude,
    Longitude,
    InstalledKw,
    Efficiency,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Latitude => "Latitude",
            Field::Longitude => "Longitude",
            Field::InstalledKw => "Installed power (kW)",
            Field::Efficiency => "Efficiency",
        }
    }
}

/// Raw text of the form inputs.
#[derive(Debug, Clone, Copy)]
pub struct FormInput<'a> {
    pub latitude: &'a str,
    pub longitude: &'a str,
    pub installed_kw: &'a str,
    pub efficiency: &'a str,
}

/// Per-field parse results.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    pub latitude: Result<f64, FieldError>,
    pub longitude: Result<f64, FieldError>,
    pub installed_kw: Result<f64, FieldError>,
    pub efficiency: Result<f64, FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.latitude.is_ok()
            && self.longitude.is_ok()
            && self.installed_kw.is_ok()
            && self.efficiency.is_ok()
    }

    /// The coordinate, if both coordinate fields are valid.
    pub fn coordinate(&self) -> Option<Coordinate> {
        match (self.latitude, self.longitude) {
            (Ok(lat), Ok(lon)) => Coordinate::new(lat, lon).ok(),
            _ => None,
        }
    }

    pub fn solar_params(&self) -> Option<SolarParams> {
        match (self.installed_kw, self.efficiency) {
            (Ok(installed_kw), Ok(efficiency)) => Some(SolarParams {
                installed_kw,
                efficiency,
            }),
            _ => None,
        }
    }

    pub fn error_for(&self, field: Field) -> Option<FieldError> {
        let result = match field {
            Field::Latitude => self.latitude,
            Field::Longitude => self.longitude,
            Field::InstalledKw => self.installed_kw,
            Field::Efficiency => self.efficiency,
        };
        result.err()
    }

    /// Human-readable message for a failing field, e.g. "Latitude must be a number".
    pub fn message_for(&self, field: Field) -> Option<String> {
        self.error_for(field)
            .map(|err| format!("{} {}", field.label(), err))
    }

    /// Messages for every failing field, in form order.
    pub fn messages(&self) -> Vec<String> {
        [
            Field::Latitude,
            Field::Longitude,
            Field::InstalledKw,
            Field::Efficiency,
        ]
        .iter()
        .filter_map(|field| self.message_for(*field))
        .collect()
    }
}

/// Validate all fields of the form.
pub fn validate_form(input: FormInput<'_>) -> ValidationReport {
    ValidationReport {
        latitude: validate_latitude(input.latitude),
        longitude: validate_longitude(input.longitude),
        installed_kw: validate_installed_kw(input.installed_kw),
        efficiency: validate_efficiency(input.efficiency),
    }
}

pub fn validate_latitude(raw: &str) -> Result<f64, FieldError> {
    parse_in_range(raw, MIN_LATITUDE, MAX_LATITUDE)
}

pub fn validate_longitude(raw: &str) -> Result<f64, FieldError> {
    parse_in_range(raw, MIN_LONGITUDE, MAX_LONGITUDE)
}

pub fn validate_efficiency(raw: &str) -> Result<f64, FieldError> {
    parse_in_range(raw, 0.0, 1.0)
}

pub fn validate_installed_kw(raw: &str) -> Result<f64, FieldError> {
    let value = parse_finite(raw)?;
    if value < 0.0 {
        return Err(FieldError::Negative);
    }
    Ok(value)
}

fn parse_finite(raw: &str) -> Result<f64, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Missing);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(FieldError::NotANumber),
    }
}

fn parse_in_range(raw: &str, min: f64, max: f64) -> Result<f64, FieldError> {
    let value = parse_finite(raw)?;
    if !(min..=max).contains(&value) {
        return Err(FieldError::OutOfRange { min, max });
    }
    Ok(value)
}
