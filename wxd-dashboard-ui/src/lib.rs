//! Dioxus components and browser bridge for the weather dashboard.
//!
//! This crate provides:
//! - `js_bridge`: geolocation, local storage, theme class and the Leaflet map via `js_sys`/`web_sys`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `actions`: fetch cycles and other async work spawned from event handlers
//! - `palette`: light and dark colour sets for inline styles
//! - `components`: RSX components (form, table, pagination, map, ...)

pub mod actions;
pub mod components;
pub mod js_bridge;
pub mod palette;
pub mod state;
