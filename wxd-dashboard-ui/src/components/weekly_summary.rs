//! Weekly statistics below the table.

use crate::palette::Palette;
use crate::state::AppState;
use dioxus::prelude::*;
use wxd_data::solar::format_kwh;
use wxd_data::table::{build_rows, solar_total, weekly_summary};

#[component]
pub fn WeeklySummary() -> Element {
    let state = use_context::<AppState>();
    let palette = Palette::for_theme((state.theme)());

    let page = state.page.read();
    let Some(snapshot) = page.snapshot() else {
        return rsx! {};
    };
    let lines = weekly_summary(&snapshot.weekly);
    let rows = build_rows(&snapshot.daily, page.solar_params().as_ref());
    let total = format_kwh(solar_total(&rows));
    drop(page);

    rsx! {
        div {
            style: "margin: 8px 0; padding: 12px; background: {palette.surface}; border: 1px solid {palette.border}; border-radius: 6px;",
            h3 {
                style: "margin: 0 0 8px 0; font-size: 16px;",
                "Weekly summary"
            }
            dl {
                style: "display: grid; grid-template-columns: max-content auto; gap: 4px 16px; margin: 0;",
                for line in lines.iter() {
                    dt { style: "color: {palette.muted};", "{line.label}" }
                    dd { style: "margin: 0;", "{line.value}" }
                }
                dt { style: "color: {palette.muted};", "Estimated solar yield" }
                dd { style: "margin: 0;", "{total}" }
            }
        }
    }
}
