//! Async work started from event handlers.
//!
//! Every state change goes through [`Dashboard`](wxd_core::dashboard::Dashboard)
//! transitions on `AppState::page`; this module only runs the network and
//! browser calls those transitions ask for.

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use wxd_core::dashboard::FetchRequest;
use wxd_core::theme::Theme;

/// Spawn the fetch cycle for `request`, if there is one.
pub fn start_fetch(state: AppState, request: Option<FetchRequest>) {
    if let Some(request) = request {
        spawn(fetch_cycle(state, request));
    }
}

async fn fetch_cycle(mut state: AppState, request: FetchRequest) {
    let client = state.client.peek().clone();
    let outcome = client.fetch_week(&request.coordinate, &request.window).await;
    state.page.write().finish_fetch(request, outcome);
}

pub fn submit(mut state: AppState) {
    let request = state.page.write().submit();
    start_fetch(state, request);
}

pub fn previous_week(mut state: AppState) {
    let request = state.page.write().previous();
    start_fetch(state, request);
}

pub fn next_week(mut state: AppState) {
    let request = state.page.write().next();
    start_fetch(state, request);
}

/// Resolve the browser position, then fetch for it.
pub fn locate_me(mut state: AppState) {
    if !state.page.write().begin_locating() {
        return;
    }
    spawn(async move {
        match js_bridge::current_position().await {
            Ok((latitude, longitude)) => {
                let request = state.page.write().located(latitude, longitude);
                if let Some(request) = request {
                    fetch_cycle(state, request).await;
                }
            }
            Err(failure) => state.page.write().location_failed(failure),
        }
    });
}

/// Handle a click on the map.
pub fn map_selected(mut state: AppState, latitude: f64, longitude: f64) {
    let request = state.page.write().map_selected(latitude, longitude);
    if let Some(coordinate) = state.page.peek().picked() {
        js_bridge::set_map_marker(coordinate);
    }
    start_fetch(state, request);
}

/// Fetch the greeting once.
pub fn load_hello(mut state: AppState) {
    spawn(async move {
        let client = state.client.peek().clone();
        let outcome = client.hello().await;
        state.page.write().set_hello(outcome);
    });
}

pub fn toggle_theme(mut state: AppState) {
    let theme: Theme = state.theme.peek().toggled();
    state.theme.set(theme);
    js_bridge::save_theme(theme);
}
