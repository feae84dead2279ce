//! Coordinate and solar parameter form.

use crate::actions;
use crate::palette::Palette;
use crate::state::AppState;
use dioxus::prelude::*;
use wxd_core::dashboard::Activity;
use wxd_core::validation::Field;

#[derive(Props, Clone, PartialEq)]
struct FieldInputProps {
    id: &'static str,
    label: &'static str,
    value: String,
    step: &'static str,
    #[props(!optional)]
    message: Option<String>,
    palette: Palette,
    oninput: EventHandler<String>,
}

/// One labelled numeric input with its validation message underneath.
#[component]
fn FieldInput(props: FieldInputProps) -> Element {
    let p = props.palette;
    let border = if props.message.is_some() { p.error_border } else { p.border };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 2px; min-width: 140px;",
            label {
                r#for: "{props.id}",
                style: "font-weight: bold; font-size: 13px;",
                "{props.label}"
            }
            input {
                id: "{props.id}",
                r#type: "number",
                step: "{props.step}",
                value: "{props.value}",
                style: "padding: 4px 6px; border: 1px solid {border}; border-radius: 4px; background: {p.surface}; color: {p.text};",
                oninput: move |evt: Event<FormData>| props.oninput.call(evt.value()),
            }
            if let Some(message) = props.message.clone() {
                span {
                    style: "font-size: 12px; color: {p.error_text};",
                    "{message}"
                }
            }
        }
    }
}

#[component]
pub fn CoordinateForm() -> Element {
    let mut state = use_context::<AppState>();
    let palette = Palette::for_theme((state.theme)());

    let page = state.page.read();
    let report = page.validation();
    let can_submit = page.can_submit();
    let busy = page.is_busy();
    let activity = page.activity();
    let latitude = page.latitude.clone();
    let longitude = page.longitude.clone();
    let installed_kw = page.installed_kw.clone();
    let efficiency = page.efficiency.clone();
    drop(page);

    let submit_style = palette.button_style(can_submit);
    let locate_style = palette.button_style(!busy);
    let submit_label = if activity == Activity::Fetching { "Loading..." } else { "Get weather" };
    let locate_label = if activity == Activity::Locating { "Locating..." } else { "Use my location" };

    rsx! {
        form {
            style: "display: flex; flex-wrap: wrap; gap: 12px; align-items: flex-end; margin: 8px 0; padding: 12px; background: {palette.surface}; border: 1px solid {palette.border}; border-radius: 6px;",
            onsubmit: move |evt: Event<FormData>| {
                evt.prevent_default();
                actions::submit(state);
            },
            FieldInput {
                id: "latitude",
                label: "Latitude",
                value: latitude,
                step: "any",
                message: report.message_for(Field::Latitude),
                palette,
                oninput: move |value: String| state.page.write().latitude = value,
            }
            FieldInput {
                id: "longitude",
                label: "Longitude",
                value: longitude,
                step: "any",
                message: report.message_for(Field::Longitude),
                palette,
                oninput: move |value: String| state.page.write().longitude = value,
            }
            FieldInput {
                id: "installed-kw",
                label: "Installed power (kW)",
                value: installed_kw,
                step: "0.1",
                message: report.message_for(Field::InstalledKw),
                palette,
                oninput: move |value: String| state.page.write().installed_kw = value,
            }
            FieldInput {
                id: "efficiency",
                label: "Efficiency (0-1)",
                value: efficiency,
                step: "0.01",
                message: report.message_for(Field::Efficiency),
                palette,
                oninput: move |value: String| state.page.write().efficiency = value,
            }
            div {
                style: "display: flex; gap: 8px;",
                button {
                    r#type: "submit",
                    disabled: !can_submit,
                    style: "{submit_style}",
                    "{submit_label}"
                }
                button {
                    r#type: "button",
                    disabled: busy,
                    style: "{locate_style}",
                    onclick: move |_| actions::locate_me(state),
                    "{locate_label}"
                }
            }
        }
    }
}
