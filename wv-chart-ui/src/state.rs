//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use wv_core::{ChartConfig, EntryForm, WeatherLog};

/// Shared application state for the weather chart page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// All records, in insertion order
    pub log: Signal<WeatherLog>,
    /// Draft of the next record
    pub form: Signal<EntryForm>,
    /// Chart presentation settings
    pub config: Signal<ChartConfig>,
    /// Whether the seed data is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
}

impl AppState {
    /// Create a new AppState with an empty log and a default form.
    pub fn new() -> Self {
        Self {
            log: Signal::new(WeatherLog::new()),
            form: Signal::new(EntryForm::default()),
            config: Signal::new(ChartConfig::default()),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
        }
    }
}
