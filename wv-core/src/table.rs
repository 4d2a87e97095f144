//! Rows of the data table shown under the chart.

use crate::weather_log::WeatherLog;

pub const TABLE_COLUMNS: [&str; 4] = ["Date", "Temperature (°F)", "Humidity (%)", "Condition"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub date: String,
    pub temperature: String,
    pub humidity: String,
    pub condition: String,
    /// Even rows get the zebra background.
    pub shaded: bool,
}

/// One row per record, in insertion order.
pub fn rows(log: &WeatherLog) -> Vec<TableRow> {
    log.iter()
        .enumerate()
        .map(|(index, record)| TableRow {
            date: record.date_label(),
            temperature: record.temperature.to_string(),
            humidity: record.humidity.to_string(),
            condition: record.condition.to_string(),
            shaded: index % 2 == 0,
        })
        .collect()
}
