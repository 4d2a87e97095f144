//! Dioxus RSX components for the weather chart page.

mod chart_container;
mod chart_header;
mod error_display;
mod record_form;
mod record_table;
mod tooltip_overlay;
mod weather_chart;

pub use chart_container::ChartContainer;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use record_form::RecordForm;
pub use record_table::RecordTable;
pub use tooltip_overlay::TooltipOverlay;
pub use weather_chart::WeatherChart;
