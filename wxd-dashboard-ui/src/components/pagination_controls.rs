//! Previous/next week buttons and the label of the window on screen.

use crate::actions;
use crate::palette::Palette;
use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn PaginationControls() -> Element {
    let state = use_context::<AppState>();
    let palette = Palette::for_theme((state.theme)());

    let page = state.page.read();
    let can_previous = page.can_go_previous();
    let can_next = page.can_go_next();
    let label = page.window_label();
    drop(page);

    let previous_style = palette.button_style(can_previous);
    let next_style = palette.button_style(can_next);

    rsx! {
        div {
            style: "display: flex; gap: 12px; align-items: center; margin: 8px 0;",
            button {
                disabled: !can_previous,
                style: "{previous_style}",
                onclick: move |_| actions::previous_week(state),
                "← Previous week"
            }
            if let Some(label) = label {
                span {
                    style: "font-weight: bold;",
                    "{label}"
                }
            }
            button {
                disabled: !can_next,
                style: "{next_style}",
                onclick: move |_| actions::next_week(state),
                "Next week →"
            }
        }
    }
}
