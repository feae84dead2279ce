//! Click-to-select map, shown only when Leaflet is available.
//!
//! Clicks arrive from JS on `window.__wxdMapClick` and are sent into a
//! coroutine so the state change happens on the Dioxus runtime.

use crate::actions;
use crate::js_bridge;
use crate::palette::Palette;
use crate::state::AppState;
use dioxus::prelude::*;
use futures_util::StreamExt;

/// DOM id for the Leaflet container div.
const MAP_CONTAINER_ID: &str = "wxd-map";

#[component]
pub fn MapPicker() -> Element {
    let state = use_context::<AppState>();
    let palette = Palette::for_theme((state.theme)());
    let capability = (state.map)();

    let clicks = use_coroutine(move |mut rx: UnboundedReceiver<(f64, f64)>| async move {
        while let Some((latitude, longitude)) = rx.next().await {
            actions::map_selected(state, latitude, longitude);
        }
    });

    use_effect(move || {
        if capability.is_available() {
            js_bridge::register_map_click(move |latitude, longitude| clicks.send((latitude, longitude)));
            js_bridge::init_map(MAP_CONTAINER_ID);
        }
    });

    let container_style = format!(
        "height: 320px; width: 100%; margin: 8px 0; border: 1px solid {}; border-radius: 6px;",
        palette.border
    );

    match capability.placeholder_text() {
        None => rsx! {
            div { id: MAP_CONTAINER_ID, style: "{container_style}" }
            p {
                style: "margin: 0; font-size: 12px; color: {palette.muted};",
                "Click the map to pick a location."
            }
        },
        Some(text) => rsx! {
            div {
                style: "{container_style} display: flex; align-items: center; justify-content: center; color: {palette.muted};",
                "{text}"
            }
        },
    }
}
