//! Core of the weather dashboard: coordinates, the paged date window,
//! form validation, API payloads and the page state machine.
//!
//! Everything here builds for native targets so it can be tested without a
//! browser. The HTTP client sits behind the `api` feature.

pub mod condition;
pub mod config;
pub mod coordinate;
pub mod dashboard;
pub mod date_window;
pub mod error;
pub mod map;
pub mod solar;
pub mod theme;
pub mod validation;
pub mod weather;

#[cfg(feature = "api")]
pub mod client;
