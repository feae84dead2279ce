/// Local storage key holding the dark-mode flag.
pub const THEME_STORAGE_KEY: &str = "wxd-dark-mode";

/// Class put on the document element while dark mode is on.
pub const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Read a stored flag. Anything unrecognised means light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some("1") | Some("true") | Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_stored(&self) -> &'static str {
        match self {
            Theme::Light => "0",
            Theme::Dark => "1",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Theme::Dark)
    }
}
