//! Display derivations for weather observations.
//!
//! This crate turns the raw API payloads into the strings and numbers the
//! dashboard table and the CLI print.

/// Sunshine duration unit handling
pub mod units {
    use log::debug;
    use wxd_utils::numbers::{format_fixed, format_optional};

    pub const SECONDS: &str = "s";
    pub const MINUTES: &str = "min";
    pub const HOURS: &str = "h";

    /// Convert a sunshine duration to hours. Returns None for units we do not know.
    pub fn sunshine_hours(value: f64, unit: &str) -> Option<f64> {
        match unit.trim() {
            SECONDS => Some(value / 3600.0),
            MINUTES => Some(value / 60.0),
            HOURS => Some(value),
            other => {
                debug!("Unknown sunshine unit '{}'", other);
                None
            }
        }
    }

    /// Sunshine as hours when the unit converts (e.g. "2.00 h"), otherwise the raw value and unit.
    pub fn format_sunshine(value: Option<f64>, unit: &str) -> String {
        match value {
            Some(v) if v.is_finite() => match sunshine_hours(v, unit) {
                Some(hours) => format!("{} {}", format_fixed(hours, 2), HOURS),
                None => format!("{} {}", v, unit.trim()),
            },
            _ => format_optional(None, 0),
        }
    }

    /// A value with its unit, or an en dash when missing.
    pub fn format_measure(value: Option<f64>, decimals: usize, unit: &str) -> String {
        match value {
            Some(v) if v.is_finite() => format!("{} {}", format_fixed(v, decimals), unit),
            _ => format_optional(None, decimals),
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_sunshine_hours() {
            assert_eq!(sunshine_hours(7200.0, "s"), Some(2.0));
            assert_eq!(sunshine_hours(90.0, "min"), Some(1.5));
            assert_eq!(sunshine_hours(3.0, "h"), Some(3.0));
            assert_eq!(sunshine_hours(3.0, "fortnights"), None);
        }

        #[test]
        fn test_format_sunshine() {
            assert_eq!(format_sunshine(Some(7200.0), "s"), "2.00 h");
            assert_eq!(format_sunshine(Some(0.0), "s"), "0.00 h");
            assert_eq!(format_sunshine(Some(12.5), "%"), "12.5 %");
            assert_eq!(format_sunshine(None, "s"), "–");
        }

        #[test]
        fn test_format_measure() {
            assert_eq!(format_measure(Some(16.24), 1, "°C"), "16.2 °C");
            assert_eq!(format_measure(None, 1, "°C"), "–");
        }
    }
}

/// Solar yield estimates from sunshine duration
pub mod solar {
    use crate::units::sunshine_hours;
    use wxd_core::solar::SolarParams;

    pub const KWH: &str = "kWh";

    /// Estimated yield for one day. Missing sunshine or an unknown unit gives None.
    pub fn day_yield(sunshine: Option<f64>, unit: &str, params: &SolarParams) -> Option<f64> {
        let value = sunshine.filter(|v| v.is_finite())?;
        sunshine_hours(value, unit).map(|hours| params.yield_kwh(hours))
    }

    /// Sum over the days that have an estimate, None if no day has one.
    pub fn week_total(yields: &[Option<f64>]) -> Option<f64> {
        yields
            .iter()
            .flatten()
            .fold(None, |total, kwh| Some(total.unwrap_or(0.0) + kwh))
    }

    /// e.g. "0.50 kWh"
    pub fn format_kwh(kwh: Option<f64>) -> String {
        crate::units::format_measure(kwh, 2, KWH)
    }

}

/// Rows and summary lines for the weekly view
pub mod table {
    use crate::solar::{day_yield, format_kwh, week_total};
    use crate::units::{format_measure, format_sunshine};
    use chrono::NaiveDate;
    use serde::Serialize;
    use wxd_core::condition::ConditionIcon;
    use wxd_core::solar::SolarParams;
    use wxd_core::weather::{DailyWeather, WeeklyStats};
    use wxd_utils::dates::day_label;

    /// One column of the weekly table, already formatted.
    #[derive(Debug, Clone, PartialEq, Serialize)]
    pub struct DayRow {
        pub date: NaiveDate,
        pub label: String,
        pub icon: ConditionIcon,
        pub sunshine: String,
        pub temperature_max: String,
        pub temperature_min: String,
        pub solar: String,
        #[serde(skip)]
        pub solar_kwh: Option<f64>,
    }

    #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
    pub struct SummaryLine {
        pub label: &'static str,
        pub value: String,
    }

    /// Build the table rows. Without solar parameters the yield column is left empty.
    pub fn build_rows(daily: &DailyWeather, params: Option<&SolarParams>) -> Vec<DayRow> {
        let units = &daily.daily_units;
        daily
            .entries()
            .map(|entry| {
                let solar_kwh = params
                    .and_then(|p| day_yield(entry.sunshine_duration, &units.sunshine_duration, p));
                DayRow {
                    date: entry.date,
                    label: day_label(&entry.date),
                    icon: entry.icon(),
                    sunshine: format_sunshine(entry.sunshine_duration, &units.sunshine_duration),
                    temperature_max: format_measure(entry.temperature_max, 1, &units.temperature_max),
                    temperature_min: format_measure(entry.temperature_min, 1, &units.temperature_min),
                    solar: format_kwh(solar_kwh),
                    solar_kwh,
                }
            })
            .collect()
    }

    /// Total of the per-day estimates in `rows`.
    pub fn solar_total(rows: &[DayRow]) -> Option<f64> {
        let yields: Vec<Option<f64>> = rows.iter().map(|row| row.solar_kwh).collect();
        week_total(&yields)
    }

    /// Weekly statistics as label/value pairs. Missing statistics show an en dash.
    pub fn weekly_summary(weekly: &WeeklyStats) -> Vec<SummaryLine> {
        let units = &weekly.units;
        let condition = weekly
            .most_frequent_weather_code
            .map(|code| {
                let icon = ConditionIcon::from_code(Some(code));
                format!("{} {}", icon.glyph(), icon.label())
            })
            .unwrap_or_else(|| format_measure(None, 0, ""));

        vec![
            SummaryLine {
                label: "Average pressure",
                value: format_measure(weekly.avg_pressure, 1, &units.pressure),
            },
            SummaryLine {
                label: "Max temperature",
                value: format_measure(weekly.max_temperature, 1, &units.temperature),
            },
            SummaryLine {
                label: "Min temperature",
                value: format_measure(weekly.min_temperature, 1, &units.temperature),
            },
            SummaryLine {
                label: "Average sunshine",
                value: format_sunshine(weekly.avg_sunshine_duration, &units.sunshine_duration),
            },
            SummaryLine {
                label: "Most frequent condition",
                value: condition,
            },
        ]
    }

}
