//! Error display component.

use crate::palette::Palette;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    pub palette: Palette,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let p = props.palette;
    let style = format!(
        "padding: 12px 16px; margin: 8px 0; background: {}; color: {}; border-radius: 4px; border: 1px solid {};",
        p.error_background, p.error_text, p.error_border
    );

    rsx! {
        div {
            role: "alert",
            style: "{style}",
            strong { "Error: " }
            "{props.message}"
        }
    }
}
