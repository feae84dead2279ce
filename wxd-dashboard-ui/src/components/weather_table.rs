//! Seven-column table, one column per day of the window.

use crate::palette::Palette;
use crate::state::AppState;
use dioxus::prelude::*;
use wxd_data::table::build_rows;

#[component]
pub fn WeatherTable() -> Element {
    let state = use_context::<AppState>();
    let palette = Palette::for_theme((state.theme)());

    let page = state.page.read();
    let Some(snapshot) = page.snapshot() else {
        return rsx! {};
    };
    let params = page.solar_params();
    let rows = build_rows(&snapshot.daily, params.as_ref());
    drop(page);

    let cell = format!(
        "padding: 6px 8px; border: 1px solid {}; text-align: center;",
        palette.border
    );
    let heading = format!("{} font-weight: bold; text-align: left;", cell);

    rsx! {
        div {
            style: "overflow-x: auto; margin: 8px 0;",
            table {
                style: "border-collapse: collapse; width: 100%; background: {palette.surface};",
                thead {
                    tr {
                        th { style: "{heading}", "" }
                        for row in rows.iter() {
                            th { style: "{cell}", "{row.label}" }
                        }
                    }
                }
                tbody {
                    tr {
                        td { style: "{heading}", "Condition" }
                        for row in rows.iter() {
                            td {
                                style: "{cell} font-size: 22px;",
                                title: row.icon.label(),
                                {row.icon.glyph()}
                            }
                        }
                    }
                    tr {
                        td { style: "{heading}", "Sunshine" }
                        for row in rows.iter() {
                            td { style: "{cell}", "{row.sunshine}" }
                        }
                    }
                    tr {
                        td { style: "{heading}", "Max temp" }
                        for row in rows.iter() {
                            td { style: "{cell}", "{row.temperature_max}" }
                        }
                    }
                    tr {
                        td { style: "{heading}", "Min temp" }
                        for row in rows.iter() {
                            td { style: "{cell}", "{row.temperature_min}" }
                        }
                    }
                    tr {
                        td { style: "{heading}", "Solar yield" }
                        for row in rows.iter() {
                            td { style: "{cell}", "{row.solar}" }
                        }
                    }
                }
            }
        }
    }
}
