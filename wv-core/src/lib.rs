//! Core of the weekly weather chart.
//!
//! - `record` / `weather_log`: weather records, the entry form and the
//!   append-only log
//! - `scale`, `ticks`, `curve`: mapping data into pixel space
//! - `scene`: the retained scene graph drawn by the UI
//! - `reconcile`: keyed diffing between consecutive scenes
//! - `interaction`: marker hover state and the tooltip
//! - `resize`: scoped viewport resize subscriptions
//! - `chart`: a chart instance tying the above together
//! - `table`: rows of the data table

pub mod chart;
pub mod config;
pub mod curve;
pub mod error;
pub mod interaction;
pub mod reconcile;
pub mod record;
pub mod resize;
pub mod scale;
pub mod scene;
pub mod table;
pub mod ticks;
pub mod weather_log;

pub use chart::Chart;
pub use config::ChartConfig;
pub use error::RecordError;
pub use record::{Condition, RecordDraft, WeatherRecord};
pub use weather_log::{EntryForm, WeatherLog};
