//! Dark mode toggle.

use crate::actions;
use crate::palette::Palette;
use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn ThemeToggle() -> Element {
    let state = use_context::<AppState>();
    let theme = (state.theme)();
    let palette = Palette::for_theme(theme);
    let (icon, title) = if theme.is_dark() {
        ("☀️", "Switch to light mode")
    } else {
        ("🌙", "Switch to dark mode")
    };

    rsx! {
        button {
            title: "{title}",
            aria_label: "{title}",
            style: "padding: 6px 10px; border: 1px solid {palette.border}; border-radius: 4px; background: {palette.surface}; color: {palette.text}; cursor: pointer;",
            onclick: move |_| actions::toggle_theme(state),
            "{icon}"
        }
    }
}
