//! Title bar with the API greeting and the theme toggle.

use crate::components::ThemeToggle;
use crate::palette::Palette;
use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn DashboardHeader() -> Element {
    let state = use_context::<AppState>();
    let palette = Palette::for_theme((state.theme)());
    let hello = state.page.read().hello_text().to_string();

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 12px;",
            div {
                h2 {
                    style: "margin: 0 0 4px 0;",
                    "Weather Dashboard"
                }
                p {
                    style: "margin: 0; font-size: 12px; color: {palette.muted};",
                    "{hello}"
                }
            }
            ThemeToggle {}
        }
    }
}
