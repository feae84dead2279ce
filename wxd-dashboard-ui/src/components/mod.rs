//! Reusable Dioxus RSX components for the weather dashboard.

mod coordinate_form;
mod dashboard_header;
mod error_display;
mod loading_spinner;
mod map_picker;
mod pagination_controls;
mod theme_toggle;
mod weather_table;
mod weekly_summary;

pub use coordinate_form::CoordinateForm;
pub use dashboard_header::DashboardHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use map_picker::MapPicker;
pub use pagination_controls::PaginationControls;
pub use theme_toggle::ThemeToggle;
pub use weather_table::WeatherTable;
pub use weekly_summary::WeeklySummary;
