//! Shared utility functions for weather dashboard crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, NaiveDate, Weekday};

    /// Wire format for dates in API paths and payloads.
    pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format(ISO_DATE_FORMAT).to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s.trim(), ISO_DATE_FORMAT)?)
    }

    /// Short day label used as a table column heading, e.g. "Fri 16 Oct".
    pub fn day_label(date: &NaiveDate) -> String {
        format!("{} {}", weekday_short(date.weekday()), date.format("%d %b"))
    }

    /// Three-letter English weekday name.
    pub fn weekday_short(weekday: Weekday) -> &'static str {
        match weekday {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }

}

/// Numeric rounding and fixed-precision formatting
pub mod numbers {
    /// Round `value` to `decimals` fractional digits (half away from zero).
    pub fn round_to(value: f64, decimals: u32) -> f64 {
        let factor = 10f64.powi(decimals as i32);
        (value * factor).round() / factor
    }

    /// Format with exactly `decimals` fractional digits, e.g. `format_fixed(0.5, 2) == "0.50"`.
    pub fn format_fixed(value: f64, decimals: usize) -> String {
        format!("{:.*}", decimals, value)
    }

    /// Format an optional value, using an en dash for missing data.
    pub fn format_optional(value: Option<f64>, decimals: usize) -> String {
        match value {
            Some(v) if v.is_finite() => format_fixed(v, decimals),
            _ => "–".to_string(),
        }
    }

}
