//! Weather condition codes (WMO) and the icons shown for them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConditionIcon {
    Clear,
    MostlyClear,
    PartlyCloudy,
    /// Overcast, and the fallback for codes not in [`CONDITION_ICONS`].
    Cloud,
    Fog,
    Drizzle,
    Rain,
    FreezingRain,
    Snow,
    Showers,
    SnowShowers,
    Thunderstorm,
}

/// Fixed code to icon table.
pub static CONDITION_ICONS: &[(i32, ConditionIcon)] = &[
    (0, ConditionIcon::Clear),
    (1, ConditionIcon::MostlyClear),
    (2, ConditionIcon::PartlyCloudy),
    (3, ConditionIcon::Cloud),
    (45, ConditionIcon::Fog),
    (48, ConditionIcon::Fog),
    (51, ConditionIcon::Drizzle),
    (53, ConditionIcon::Drizzle),
    (55, ConditionIcon::Drizzle),
    (56, ConditionIcon::FreezingRain),
    (57, ConditionIcon::FreezingRain),
    (61, ConditionIcon::Rain),
    (63, ConditionIcon::Rain),
    (65, ConditionIcon::Rain),
    (66, ConditionIcon::FreezingRain),
    (67, ConditionIcon::FreezingRain),
    (71, ConditionIcon::Snow),
    (73, ConditionIcon::Snow),
    (75, ConditionIcon::Snow),
    (77, ConditionIcon::Snow),
    (80, ConditionIcon::Showers),
    (81, ConditionIcon::Showers),
    (82, ConditionIcon::Showers),
    (85, ConditionIcon::SnowShowers),
    (86, ConditionIcon::SnowShowers),
    (95, ConditionIcon::Thunderstorm),
    (96, ConditionIcon::Thunderstorm),
    (99, ConditionIcon::Thunderstorm),
];

impl ConditionIcon {
    pub const DEFAULT: ConditionIcon = ConditionIcon::Cloud;

    /// Look up the icon for a condition code. Unknown or missing codes get [`Self::DEFAULT`].
    pub fn from_code(code: Option<i32>) -> Self {
        code.and_then(|code| {
            CONDITION_ICONS
                .iter()
                .find(|(known, _)| *known == code)
                .map(|(_, icon)| *icon)
        })
        .unwrap_or(Self::DEFAULT)
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ConditionIcon::Clear => "☀️",
            ConditionIcon::MostlyClear => "🌤️",
            ConditionIcon::PartlyCloudy => "⛅",
            ConditionIcon::Cloud => "☁️",
            ConditionIcon::Fog => "🌫️",
            ConditionIcon::Drizzle => "🌦️",
            ConditionIcon::Rain => "🌧️",
            ConditionIcon::FreezingRain => "🌨️",
            ConditionIcon::Snow => "❄️",
            ConditionIcon::Showers => "🌦️",
            ConditionIcon::SnowShowers => "🌨️",
            ConditionIcon::Thunderstorm => "⛈️",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ConditionIcon::Clear => "Clear sky",
            ConditionIcon::MostlyClear => "Mainly clear",
            ConditionIcon::PartlyCloudy => "Partly cloudy",
            ConditionIcon::Cloud => "Cloudy",
            ConditionIcon::Fog => "Fog",
            ConditionIcon::Drizzle => "Drizzle",
            ConditionIcon::Rain => "Rain",
            ConditionIcon::FreezingRain => "Freezing rain",
            ConditionIcon::Snow => "Snow",
            ConditionIcon::Showers => "Rain showers",
            ConditionIcon::SnowShowers => "Snow showers",
            ConditionIcon::Thunderstorm => "Thunderstorm",
        }
    }
}
