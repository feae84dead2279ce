//! Colours for the inline styles, one set per theme.

use wxd_core::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub muted: &'static str,
    pub border: &'static str,
    pub accent: &'static str,
    pub accent_text: &'static str,
    pub error_background: &'static str,
    pub error_text: &'static str,
    pub error_border: &'static str,
}

pub const LIGHT: Palette = Palette {
    background: "#F5F7FA",
    surface: "#FFFFFF",
    text: "#1F2933",
    muted: "#666666",
    border: "#D9E2EC",
    accent: "#1E88E5",
    accent_text: "#FFFFFF",
    error_background: "#FFEBEE",
    error_text: "#C62828",
    error_border: "#EF9A9A",
};

pub const DARK: Palette = Palette {
    background: "#111827",
    surface: "#1F2937",
    text: "#E5E7EB",
    muted: "#9CA3AF",
    border: "#374151",
    accent: "#60A5FA",
    accent_text: "#0B1120",
    error_background: "#3B1219",
    error_text: "#FCA5A5",
    error_border: "#7F1D1D",
};

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        if theme.is_dark() {
            DARK
        } else {
            LIGHT
        }
    }

    /// Style for a primary button, greyed out when disabled.
    pub fn button_style(&self, enabled: bool) -> String {
        let (background, color, cursor) = if enabled {
            (self.accent, self.accent_text, "pointer")
        } else {
            (self.border, self.muted, "not-allowed")
        };
        format!(
            "padding: 6px 14px; border: none; border-radius: 4px; background: {}; color: {}; cursor: {};",
            background, color, cursor
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_follows_theme() {
        assert_eq!(Palette::for_theme(Theme::Light), LIGHT);
        assert_eq!(Palette::for_theme(Theme::Dark), DARK);
        assert_ne!(LIGHT.background, DARK.background);
    }

    #[test]
    fn test_disabled_button_style() {
        let style = LIGHT.button_style(false);
        assert!(style.contains("not-allowed"));
        assert!(style.contains(LIGHT.border));
        assert!(LIGHT.button_style(true).contains(LIGHT.accent));
    }
}
