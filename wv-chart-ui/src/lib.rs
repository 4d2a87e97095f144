//! Dioxus components and browser glue for the weather chart.
//!
//! This crate provides:
//! - `state`: Reactive AppState with Dioxus Signals
//! - `viewport`: the browser window as a `wv_core::resize::Viewport`
//! - `components`: the chart surface, tooltip, entry form and data table

pub mod components;
pub mod state;
pub mod viewport;
