//! Chart configuration.
//!
//! Every visual constant of the chart lives here. The app embeds a JSON
//! document with camelCase keys; any key it omits falls back to the
//! defaults below.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChartConfig {
    /// Outer height of the SVG in pixels, margins included.
    pub height: f64,
    pub margin: Margin,
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub line_color: String,
    pub line_width: f64,
    pub palette: Palette,
    /// Temperatures strictly above this are drawn warm.
    pub warm_above: i32,
    /// Temperatures strictly below this are drawn cool.
    pub cool_below: i32,
    /// Degrees added below the minimum and above the maximum temperature.
    pub temperature_padding: i32,
    /// Upper bound on tick count per axis.
    pub max_ticks: usize,
    pub marker: MarkerConfig,
    pub timings: Timings,
    pub tooltip_offset: Offset,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            height: 400.0,
            margin: Margin::default(),
            title: "Weekly Temperature Trends".to_string(),
            x_axis_label: "Date".to_string(),
            y_axis_label: "Temperature (°F)".to_string(),
            line_color: "#4682b4".to_string(),
            line_width: 2.0,
            palette: Palette::default(),
            warm_above: 60,
            cool_below: 55,
            temperature_padding: 5,
            max_ticks: 10,
            marker: MarkerConfig::default(),
            timings: Timings::default(),
            tooltip_offset: Offset::default(),
        }
    }
}

impl ChartConfig {
    /// Parse a JSON config, filling unspecified keys with defaults.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: ChartConfig = serde_json::from_str(json)?;
        if config.cool_below > config.warm_above {
            anyhow::bail!(
                "coolBelow ({}) must not exceed warmAbove ({})",
                config.cool_below,
                config.warm_above
            );
        }
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 40.0,
            right: 80.0,
            bottom: 60.0,
            left: 60.0,
        }
    }
}

/// Marker fill colors per temperature band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub warm: String,
    pub cool: String,
    pub neutral: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            warm: "#ff9900".to_string(),
            cool: "#3399ff".to_string(),
            neutral: "#66cc66".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkerConfig {
    pub radius: f64,
    pub hover_radius: f64,
    pub hover_stroke: String,
    pub hover_stroke_width: f64,
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            hover_radius: 8.0,
            hover_stroke: "black".to_string(),
            hover_stroke_width: 2.0,
        }
    }
}

/// Animation and transition timings in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timings {
    pub line_draw_ms: u32,
    pub label_fade_ms: u32,
    pub label_stagger_ms: u32,
    pub tooltip_show_ms: u32,
    pub tooltip_hide_ms: u32,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            line_draw_ms: 1000,
            label_fade_ms: 500,
            label_stagger_ms: 100,
            tooltip_show_ms: 200,
            tooltip_hide_ms: 500,
        }
    }
}

/// Tooltip placement relative to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

impl Default for Offset {
    fn default() -> Self {
        Self { dx: 10.0, dy: -28.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ChartConfig::from_json(
            r#"{"title": "March", "margin": {"left": 70}, "timings": {"lineDrawMs": 250}}"#,
        )
        .unwrap();
        assert_eq!(config.title, "March");
        assert_eq!(config.margin.left, 70.0);
        assert_eq!(config.margin.top, 40.0);
        assert_eq!(config.timings.line_draw_ms, 250);
        assert_eq!(config.timings.tooltip_hide_ms, 500);
        assert_eq!(config.palette, Palette::default());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(ChartConfig::from_json("").unwrap(), ChartConfig::default());
        assert_eq!(ChartConfig::from_json("{}").unwrap(), ChartConfig::default());
    }

    #[test]
    fn test_fixture_config_parses() {
        let config = ChartConfig::from_json(include_str!("../../fixtures/chart_config.json")).unwrap();
        assert_eq!(config.y_axis_label, "Temperature (°F)");
        assert_eq!(config.height, 400.0);
    }

    #[test]
    fn test_rejects_inverted_thresholds_and_bad_json() {
        assert!(ChartConfig::from_json(r#"{"warmAbove": 50, "coolBelow": 60}"#).is_err());
        assert!(ChartConfig::from_json("{title: nope}").is_err());
    }
}
