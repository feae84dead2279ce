//! Typed wrappers around the browser APIs the dashboard needs.
//!
//! Geolocation, local storage and the theme class go through `web_sys`.
//! The Leaflet map is driven by `assets/js/map-picker.js`, evaluated as
//! globals (no ES modules) and exposed via `window.*`; map clicks come back
//! through a Rust closure stored on `window.__wxdMapClick`.

use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wxd_core::coordinate::Coordinate;
use wxd_core::dashboard::GeolocationFailure;
use wxd_core::map::{MapCapability, INITIAL_CENTER, INITIAL_ZOOM, TILE_ATTRIBUTION, TILE_URL_TEMPLATE};
use wxd_core::theme::{Theme, DARK_CLASS, THEME_STORAGE_KEY};

// Embed the map widget JS at compile time
static MAP_PICKER_JS: &str = include_str!("../assets/js/map-picker.js");

/// Global the map script calls on every click.
const MAP_CLICK_HANDLER: &str = "__wxdMapClick";

/// Geolocation `PositionError.PERMISSION_DENIED`
const PERMISSION_DENIED: f64 = 1.0;

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('WXD JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Whether Leaflet (`window.L`) is loaded.
pub fn has_tile_renderer() -> bool {
    match web_sys::window() {
        Some(window) => Reflect::has(&window, &JsValue::from_str("L")).unwrap_or(false),
        None => false,
    }
}

pub fn map_capability() -> MapCapability {
    MapCapability::resolve(web_sys::window().is_some(), has_tile_renderer())
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Stored theme, light if nothing is stored or storage is blocked.
pub fn load_theme() -> Theme {
    let stored = local_storage().and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

pub fn save_theme(theme: Theme) {
    match local_storage() {
        Some(storage) => {
            if let Err(e) = storage.set_item(THEME_STORAGE_KEY, theme.as_stored()) {
                log::warn!("Failed to store theme: {:?}", e);
            }
        }
        None => log::warn!("Local storage unavailable, theme not saved"),
    }
}

/// Toggle the `dark` class on `<html>`.
pub fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element());
    if let Some(root) = root {
        if let Err(e) = root.class_list().toggle_with_force(DARK_CLASS, theme.is_dark()) {
            log::warn!("Failed to apply theme class: {:?}", e);
        }
    }
}

/// Ask the browser for the current position as (latitude, longitude).
pub async fn current_position() -> Result<(f64, f64), GeolocationFailure> {
    let window = web_sys::window().ok_or(GeolocationFailure::Unsupported)?;
    if !Reflect::has(&window.navigator(), &JsValue::from_str("geolocation")).unwrap_or(false) {
        return Err(GeolocationFailure::Unsupported);
    }
    let geolocation = window
        .navigator()
        .geolocation()
        .map_err(|_| GeolocationFailure::Unsupported)?;

    let promise = Promise::new(&mut |resolve: Function, reject: Function| {
        let on_error = reject.clone();
        let success = Closure::once_into_js(move |position: JsValue| {
            let _ = resolve.call1(&JsValue::NULL, &position);
        });
        let error = Closure::once_into_js(move |error: JsValue| {
            let _ = on_error.call1(&JsValue::NULL, &error);
        });
        if let Err(e) =
            geolocation.get_current_position_with_error_callback(success.unchecked_ref(), Some(error.unchecked_ref()))
        {
            let _ = reject.call1(&JsValue::NULL, &e);
        }
    });

    let position = JsFuture::from(promise).await.map_err(|error| {
        let code = Reflect::get(&error, &JsValue::from_str("code"))
            .ok()
            .and_then(|code| code.as_f64());
        log::warn!("Geolocation failed with code {:?}", code);
        if code == Some(PERMISSION_DENIED) {
            GeolocationFailure::Denied
        } else {
            GeolocationFailure::Unavailable
        }
    })?;

    let coords = Reflect::get(&position, &JsValue::from_str("coords"))
        .map_err(|_| GeolocationFailure::Unavailable)?;
    let read = |key: &str| {
        Reflect::get(&coords, &JsValue::from_str(key))
            .ok()
            .and_then(|value| value.as_f64())
            .ok_or(GeolocationFailure::Unavailable)
    };
    Ok((read("latitude")?, read("longitude")?))
}

/// Route map clicks to `handler`. Replaces any earlier handler.
pub fn register_map_click(handler: impl FnMut(f64, f64) + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::<dyn FnMut(f64, f64)>::new(handler);
    if let Err(e) = Reflect::set(&window, &JsValue::from_str(MAP_CLICK_HANDLER), closure.as_ref()) {
        log::warn!("Failed to register map click handler: {:?}", e);
        return;
    }
    // Lives for the rest of the page
    closure.forget();
}

/// Initialize the Leaflet map in `container_id` once Leaflet and the element exist.
pub fn init_map(container_id: &str) {
    let _ = js_sys::eval(MAP_PICKER_JS);

    let (lat, lon) = INITIAL_CENTER;
    let tiles = serde_json::to_string(TILE_URL_TEMPLATE).unwrap_or_default();
    let attribution = serde_json::to_string(TILE_ATTRIBUTION).unwrap_or_default();
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (typeof window.L !== 'undefined' &&
                    typeof window.initWxdMap !== 'undefined' &&
                    document.getElementById('{container_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.initWxdMap('{container_id}', {lat}, {lon}, {INITIAL_ZOOM}, {tiles}, {attribution});
                    }} catch(e) {{ console.error('[WXD] initWxdMap error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Move (or place) the selection marker.
pub fn set_map_marker(coordinate: Coordinate) {
    call_js(&format!(
        "if (window.setWxdMapMarker) window.setWxdMapMarker({}, {});",
        coordinate.latitude, coordinate.longitude
    ));
}
