//! Weekly Temperature Trends
//!
//! An interactive line chart of daily temperatures with an entry form and
//! a data table underneath.
//!
//! Data flow:
//! 1. `build.rs` copies `weather_seed.csv` and `chart_config.json` into
//!    OUT_DIR; `include_str!` embeds them in the WASM binary.
//! 2. On mount: parse both into `AppState` (errors land in `error_msg`).
//! 3. The entry form appends to the log; the chart and the table follow it.

use anyhow::Context;
use dioxus::prelude::*;
use wv_chart_ui::components::{
    ChartContainer, ChartHeader, ErrorDisplay, RecordForm, RecordTable, WeatherChart,
};
use wv_chart_ui::state::AppState;
use wv_core::{ChartConfig, WeatherLog};

const SEED_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/weather_seed.csv"));
const CONFIG_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/chart_config.json"));

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("weather-root"))
        .launch(App);
}

fn load_seed() -> anyhow::Result<(WeatherLog, ChartConfig)> {
    let log = WeatherLog::from_csv(SEED_CSV).context("parsing weather_seed.csv")?;
    let config = ChartConfig::from_json(CONFIG_JSON).context("parsing chart_config.json")?;
    Ok((log, config))
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // ─── Load seed records and chart settings once on mount ───
    use_effect(move || {
        match load_seed() {
            Ok((log, config)) => {
                log::info!("[WV] loaded {} seed records", log.len());
                state.config.set(config);
                state.log.set(log);
            }
            Err(e) => {
                log::error!("[WV] failed to load seed data: {:#}", e);
                state.error_msg.set(Some(format!("{:#}", e)));
            }
        }
        state.loading.set(false);
    });

    let loading = *state.loading.read();

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif;",

            ChartHeader {
                title: "Weather Data Visualization".to_string(),
                description: "Interactive visualization of weekly temperature trends".to_string(),
            }

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay {
                    message: err.clone(),
                    on_dismiss: move |_| state.error_msg.set(None),
                }
            }

            ChartContainer {
                loading: loading,
                min_height: 400,
                WeatherChart {}
            }
            ChartContainer {
                loading: loading,
                RecordForm {}
            }
            ChartContainer {
                loading: loading,
                RecordTable {}
            }
        }
    }
}
