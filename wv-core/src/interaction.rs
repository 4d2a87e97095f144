//! Hover behaviour of the markers and the tooltip they share.
//!
//! Each marker has its own idle/hovered state. The tooltip belongs to the
//! chart instance; every hover handler writes to it and the most recent
//! write wins.

use crate::config::ChartConfig;
use crate::record::WeatherRecord;
use crate::scene::{Marker, MarkerKey, Scene};
use std::collections::BTreeMap;

/// Opacity the tooltip fades to while a marker is hovered.
pub const TOOLTIP_OPACITY: f64 = 0.9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverState {
    #[default]
    Idle,
    Hovered,
}

/// Pointer position in viewport (client) pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

/// One "Label: value" row of the tooltip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipLine {
    pub label: &'static str,
    pub value: String,
}

/// Formatted summary of a record.
pub fn tooltip_lines(record: &WeatherRecord) -> Vec<TooltipLine> {
    vec![
        TooltipLine {
            label: "Date",
            value: record.date_label(),
        },
        TooltipLine {
            label: "Temperature",
            value: record.temperature_label(),
        },
        TooltipLine {
            label: "Humidity",
            value: format!("{}%", record.humidity),
        },
        TooltipLine {
            label: "Condition",
            value: record.condition.to_string(),
        },
    ]
}

/// The single tooltip overlay of a chart.
///
/// `opacity` is the target of the running transition, reached over
/// `transition_ms`. Content and position are kept while fading out so the
/// text does not vanish before the fade completes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tooltip {
    pub opacity: f64,
    pub transition_ms: u32,
    pub lines: Vec<TooltipLine>,
    pub left: f64,
    pub top: f64,
}

impl Tooltip {
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

/// Radius and outline of a marker in its current hover state.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub radius: f64,
    pub stroke: Option<String>,
    pub stroke_width: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractionLayer {
    hover: BTreeMap<MarkerKey, HoverState>,
    tooltip: Tooltip,
    /// Marker whose content the tooltip currently shows.
    shown: Option<MarkerKey>,
}

impl InteractionLayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// `idle -> hovered`: fade the tooltip in with the marker's record and
    /// place it next to the pointer.
    pub fn pointer_enter(&mut self, marker: &Marker, at: PointerPosition, config: &ChartConfig) {
        self.hover.insert(marker.key, HoverState::Hovered);
        self.tooltip = Tooltip {
            opacity: TOOLTIP_OPACITY,
            transition_ms: config.timings.tooltip_show_ms,
            lines: tooltip_lines(&marker.record),
            left: at.x + config.tooltip_offset.dx,
            top: at.y + config.tooltip_offset.dy,
        };
        self.shown = Some(marker.key);
    }

    /// `hovered -> idle`: fade the tooltip out and restore the marker.
    pub fn pointer_leave(&mut self, key: MarkerKey, config: &ChartConfig) {
        self.hover.remove(&key);
        self.tooltip.opacity = 0.0;
        self.tooltip.transition_ms = config.timings.tooltip_hide_ms;
    }

    pub fn state(&self, key: MarkerKey) -> HoverState {
        self.hover.get(&key).copied().unwrap_or_default()
    }

    pub fn marker_style(&self, key: MarkerKey, config: &ChartConfig) -> MarkerStyle {
        let marker = &config.marker;
        match self.state(key) {
            HoverState::Idle => MarkerStyle {
                radius: marker.radius,
                stroke: None,
                stroke_width: 0.0,
            },
            HoverState::Hovered => MarkerStyle {
                radius: marker.hover_radius,
                stroke: Some(marker.hover_stroke.clone()),
                stroke_width: marker.hover_stroke_width,
            },
        }
    }

    pub fn tooltip(&self) -> &Tooltip {
        &self.tooltip
    }

    /// Drop state for markers that no longer exist after a render, and
    /// refresh the tooltip if it shows a marker whose record changed.
    pub fn retain(&mut self, scene: Option<&Scene>, config: &ChartConfig) {
        self.hover
            .retain(|key, _| scene.is_some_and(|s| s.marker(*key).is_some()));
        let Some(key) = self.shown else {
            return;
        };
        match scene.and_then(|s| s.marker(key)) {
            Some(marker) => self.tooltip.lines = tooltip_lines(&marker.record),
            None => {
                self.shown = None;
                if self.tooltip.is_visible() {
                    self.tooltip.opacity = 0.0;
                    self.tooltip.transition_ms = config.timings.tooltip_hide_ms;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Condition;
    use chrono::NaiveDate;

    fn scene() -> Scene {
        let records = [
            WeatherRecord::new(NaiveDate::from_ymd_opt(2025, 3, 10).unwrap(), 62, 65, Condition::Sunny),
            WeatherRecord::new(NaiveDate::from_ymd_opt(2025, 3, 11).unwrap(), 58, 70, Condition::PartlyCloudy),
        ];
        Scene::render(&records, 800.0, &ChartConfig::default()).unwrap()
    }

    #[test]
    fn test_enter_shows_tooltip_next_to_pointer() {
        let config = ChartConfig::default();
        let scene = scene();
        let mut layer = InteractionLayer::new();
        layer.pointer_enter(&scene.markers[0], PointerPosition { x: 100.0, y: 200.0 }, &config);

        let tooltip = layer.tooltip();
        assert_eq!(tooltip.opacity, 0.9);
        assert_eq!(tooltip.transition_ms, 200);
        assert_eq!((tooltip.left, tooltip.top), (110.0, 172.0));
        let values: Vec<_> = tooltip.lines.iter().map(|l| l.value.as_str()).collect();
        assert_eq!(values, vec!["2025-03-10", "62°F", "65%", "Sunny"]);
        assert_eq!(layer.state(MarkerKey(0)), HoverState::Hovered);
        assert_eq!(layer.state(MarkerKey(1)), HoverState::Idle);
    }

    #[test]
    fn test_hover_restyles_marker() {
        let config = ChartConfig::default();
        let scene = scene();
        let mut layer = InteractionLayer::new();
        assert_eq!(layer.marker_style(MarkerKey(0), &config).radius, 5.0);

        layer.pointer_enter(&scene.markers[0], PointerPosition::default(), &config);
        let hovered = layer.marker_style(MarkerKey(0), &config);
        assert_eq!(hovered.radius, 8.0);
        assert_eq!(hovered.stroke.as_deref(), Some("black"));
        assert_eq!(hovered.stroke_width, 2.0);

        layer.pointer_leave(MarkerKey(0), &config);
        let idle = layer.marker_style(MarkerKey(0), &config);
        assert_eq!(idle.radius, 5.0);
        assert!(idle.stroke.is_none());
    }

    #[test]
    fn test_leave_fades_tooltip_out_but_keeps_content() {
        let config = ChartConfig::default();
        let scene = scene();
        let mut layer = InteractionLayer::new();
        layer.pointer_enter(&scene.markers[1], PointerPosition::default(), &config);
        layer.pointer_leave(MarkerKey(1), &config);

        assert_eq!(layer.tooltip().opacity, 0.0);
        assert_eq!(layer.tooltip().transition_ms, 500);
        assert!(!layer.tooltip().is_visible());
        assert_eq!(layer.tooltip().lines[3].value, "Partly Cloudy");
    }

    #[test]
    fn test_repeated_and_interleaved_events_are_idempotent() {
        let config = ChartConfig::default();
        let scene = scene();
        let mut layer = InteractionLayer::new();
        let at = PointerPosition::default();

        layer.pointer_leave(MarkerKey(0), &config);
        assert_eq!(layer.tooltip().opacity, 0.0);

        layer.pointer_enter(&scene.markers[0], at, &config);
        layer.pointer_enter(&scene.markers[0], at, &config);
        assert_eq!(layer.tooltip().opacity, 0.9);

        layer.pointer_enter(&scene.markers[1], at, &config);
        assert_eq!(layer.tooltip().lines[0].value, "2025-03-11");

        layer.pointer_leave(MarkerKey(1), &config);
        layer.pointer_leave(MarkerKey(1), &config);
        assert_eq!(layer.tooltip().opacity, 0.0);
    }

    #[test]
    fn test_retain_hides_tooltip_for_removed_marker() {
        let config = ChartConfig::default();
        let scene = scene();
        let mut layer = InteractionLayer::new();
        layer.pointer_enter(&scene.markers[1], PointerPosition::default(), &config);

        layer.retain(Some(&scene), &config);
        assert_eq!(layer.state(MarkerKey(1)), HoverState::Hovered);
        assert!(layer.tooltip().is_visible());

        layer.retain(None, &config);
        assert_eq!(layer.state(MarkerKey(1)), HoverState::Idle);
        assert!(!layer.tooltip().is_visible());
    }
}
