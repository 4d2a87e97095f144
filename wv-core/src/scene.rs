//! Chart rendering: turns the record sequence into a retained scene.
//!
//! A [`Scene`] describes every visual element of one render in plot-area
//! coordinates (the SVG group is translated by the left/top margins). The UI
//! layer draws it as SVG; [`crate::reconcile`] diffs consecutive scenes so
//! only changed elements are touched.

use crate::config::{ChartConfig, Palette};
use crate::curve::{MonotonePath, Point};
use crate::record::WeatherRecord;
use crate::scale::{PlotArea, Scales};
use std::fmt;

/// Vertical offset of the value label above its marker.
pub const VALUE_LABEL_OFFSET: f64 = 15.0;
/// Vertical offset of the condition glyph above its marker.
pub const GLYPH_OFFSET: f64 = 30.0;
/// Rotation applied to x-axis tick labels, in degrees.
pub const X_TICK_ROTATION: f64 = -45.0;
/// Date format of x-axis tick labels.
pub const TICK_DATE_FORMAT: &str = "%b %d";

/// Identity of a marker and its label and glyph: the record's position in
/// the sequence. The log is append-only, so positions are stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerKey(pub usize);

impl fmt::Display for MarkerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "m{}", self.0)
    }
}

/// Color band a temperature falls into. Thresholds are exclusive, so the
/// boundary values themselves are neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureBand {
    Warm,
    Neutral,
    Cool,
}

impl TemperatureBand {
    pub fn classify(temperature: i32, config: &ChartConfig) -> Self {
        if temperature > config.warm_above {
            TemperatureBand::Warm
        } else if temperature < config.cool_below {
            TemperatureBand::Cool
        } else {
            TemperatureBand::Neutral
        }
    }

    pub fn color<'a>(&self, palette: &'a Palette) -> &'a str {
        match self {
            TemperatureBand::Warm => &palette.warm,
            TemperatureBand::Neutral => &palette.neutral,
            TemperatureBand::Cool => &palette.cool,
        }
    }
}

/// A time-scheduled effect, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub delay_ms: u32,
    pub duration_ms: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Position along the axis in plot-area pixels.
    pub offset: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub side: AxisSide,
    /// Length of the axis line.
    pub extent: f64,
    /// Translation of the axis group; the bottom axis sits at the plot height.
    pub origin: Point,
    /// Rotation of the tick labels in degrees.
    pub label_rotation: f64,
    pub ticks: Vec<Tick>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextNode {
    pub x: f64,
    pub y: f64,
    /// Rotation about the origin in degrees.
    pub rotation: f64,
    pub font_size: f64,
    pub bold: bool,
    pub text: String,
}

/// The temperature line with its draw-in animation.
///
/// The dash array and the starting dash offset both equal `length`; the
/// offset animates to zero over `draw`, revealing the path left to right.
#[derive(Debug, Clone, PartialEq)]
pub struct LinePath {
    pub d: String,
    pub length: f64,
    pub stroke: String,
    pub stroke_width: f64,
    pub draw: Transition,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub key: MarkerKey,
    pub cx: f64,
    pub cy: f64,
    pub band: TemperatureBand,
    pub fill: String,
    pub record: WeatherRecord,
}

/// "{temperature}°F" floating above a marker, fading in on a stagger.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueLabel {
    pub key: MarkerKey,
    pub x: f64,
    pub y: f64,
    pub text: String,
    pub fade: Transition,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Glyph {
    pub key: MarkerKey,
    pub x: f64,
    pub y: f64,
    pub symbol: &'static str,
}

/// Everything drawn for one render, in drawing order.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub outer_width: f64,
    pub outer_height: f64,
    /// Translation of the plot group (left and top margins).
    pub origin: Point,
    pub area: PlotArea,
    pub x_axis: Axis,
    pub x_title: TextNode,
    pub y_axis: Axis,
    pub y_title: TextNode,
    pub title: TextNode,
    pub line: LinePath,
    pub markers: Vec<Marker>,
    pub value_labels: Vec<ValueLabel>,
    pub glyphs: Vec<Glyph>,
}

impl Scene {
    /// Build the scene for `records` drawn into a container `outer_width`
    /// pixels wide. Returns `None` for an empty sequence.
    pub fn render(records: &[WeatherRecord], outer_width: f64, config: &ChartConfig) -> Option<Self> {
        let area = PlotArea::from_outer(outer_width, config);
        let scales = Scales::compute(records, area, config.temperature_padding)?;
        let margin = config.margin;

        let positions: Vec<Point> = records
            .iter()
            .map(|r| Point::new(scales.x.map(r.date), scales.y.map(f64::from(r.temperature))))
            .collect();

        let x_axis = Axis {
            side: AxisSide::Bottom,
            extent: area.width,
            origin: Point::new(0.0, area.height),
            label_rotation: X_TICK_ROTATION,
            ticks: scales
                .x
                .ticks(config.max_ticks)
                .into_iter()
                .map(|date| Tick {
                    offset: scales.x.map(date),
                    label: date.format(TICK_DATE_FORMAT).to_string(),
                })
                .collect(),
        };
        let x_title = TextNode {
            x: area.width / 2.0,
            y: area.height + margin.bottom - 10.0,
            rotation: 0.0,
            font_size: 12.0,
            bold: false,
            text: config.x_axis_label.clone(),
        };

        let y_axis = Axis {
            side: AxisSide::Left,
            extent: area.height,
            origin: Point::new(0.0, 0.0),
            label_rotation: 0.0,
            ticks: scales
                .y
                .ticks(config.max_ticks)
                .into_iter()
                .map(|value| Tick {
                    offset: scales.y.map(value),
                    label: format!("{}", value),
                })
                .collect(),
        };
        // Rotated -90 degrees, so x runs along the vertical axis.
        let y_title = TextNode {
            x: -area.height / 2.0,
            y: -margin.left + 20.0,
            rotation: -90.0,
            font_size: 12.0,
            bold: false,
            text: config.y_axis_label.clone(),
        };

        let title = TextNode {
            x: area.width / 2.0,
            y: -margin.top / 2.0,
            rotation: 0.0,
            font_size: 16.0,
            bold: true,
            text: config.title.clone(),
        };

        let path = MonotonePath::through(&positions);
        let line = LinePath {
            d: path.to_svg(),
            length: path.length(),
            stroke: config.line_color.clone(),
            stroke_width: config.line_width,
            draw: Transition {
                delay_ms: 0,
                duration_ms: config.timings.line_draw_ms,
            },
        };

        let markers = records
            .iter()
            .zip(&positions)
            .enumerate()
            .map(|(i, (record, p))| {
                let band = TemperatureBand::classify(record.temperature, config);
                Marker {
                    key: MarkerKey(i),
                    cx: p.x,
                    cy: p.y,
                    band,
                    fill: band.color(&config.palette).to_string(),
                    record: record.clone(),
                }
            })
            .collect();

        let value_labels = records
            .iter()
            .zip(&positions)
            .enumerate()
            .map(|(i, (record, p))| ValueLabel {
                key: MarkerKey(i),
                x: p.x,
                y: p.y - VALUE_LABEL_OFFSET,
                text: record.temperature_label(),
                fade: Transition {
                    delay_ms: config.timings.label_stagger_ms.saturating_mul(i as u32),
                    duration_ms: config.timings.label_fade_ms,
                },
            })
            .collect();

        let glyphs = records
            .iter()
            .zip(&positions)
            .enumerate()
            .map(|(i, (record, p))| Glyph {
                key: MarkerKey(i),
                x: p.x,
                y: p.y - GLYPH_OFFSET,
                symbol: record.condition.glyph(),
            })
            .collect();

        Some(Self {
            outer_width: area.width + margin.left + margin.right,
            outer_height: area.height + margin.top + margin.bottom,
            origin: Point::new(margin.left, margin.top),
            area,
            x_axis,
            x_title,
            y_axis,
            y_title,
            title,
            line,
            markers,
            value_labels,
            glyphs,
        })
    }

    pub fn marker(&self, key: MarkerKey) -> Option<&Marker> {
        self.markers.get(key.0).filter(|m| m.key == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Condition;
    use crate::weather_log::WeatherLog;
    use chrono::NaiveDate;

    const WIDTH: f64 = 800.0;

    fn sample_log() -> WeatherLog {
        WeatherLog::from_csv(include_str!("../../fixtures/weather_seed.csv")).unwrap()
    }

    fn record(day: u32, temperature: i32, condition: Condition) -> WeatherRecord {
        WeatherRecord::new(
            NaiveDate::from_ymd_opt(2025, 3, day).unwrap(),
            temperature,
            65,
            condition,
        )
    }

    #[test]
    fn test_empty_sequence_draws_nothing() {
        assert!(Scene::render(&[], WIDTH, &ChartConfig::default()).is_none());
    }

    #[test]
    fn test_one_marker_label_and_glyph_per_record() {
        let log = sample_log();
        let scene = Scene::render(log.records(), WIDTH, &ChartConfig::default()).unwrap();
        assert_eq!(scene.markers.len(), 7);
        assert_eq!(scene.value_labels.len(), 7);
        assert_eq!(scene.glyphs.len(), 7);
        assert_eq!(scene.value_labels[0].text, "62°F");
        assert_eq!(scene.glyphs[1].symbol, Condition::PartlyCloudy.glyph());
    }

    #[test]
    fn test_marker_colors_follow_thresholds() {
        let config = ChartConfig::default();
        let records: Vec<_> = [61, 60, 59, 55, 54]
            .iter()
            .enumerate()
            .map(|(i, &t)| record(10 + i as u32, t, Condition::Cloudy))
            .collect();
        let scene = Scene::render(&records, WIDTH, &config).unwrap();
        let bands: Vec<_> = scene.markers.iter().map(|m| m.band).collect();
        assert_eq!(
            bands,
            vec![
                TemperatureBand::Warm,
                TemperatureBand::Neutral,
                TemperatureBand::Neutral,
                TemperatureBand::Neutral,
                TemperatureBand::Cool,
            ]
        );
        assert_eq!(scene.markers[0].fill, "#ff9900");
        assert_eq!(scene.markers[1].fill, "#66cc66");
        assert_eq!(scene.markers[4].fill, "#3399ff");
    }

    #[test]
    fn test_single_record_scenario() {
        let records = [record(10, 62, Condition::Sunny)];
        let scene = Scene::render(&records, WIDTH, &ChartConfig::default()).unwrap();
        assert_eq!(scene.markers.len(), 1);
        assert_eq!(scene.markers[0].band, TemperatureBand::Warm);
        assert_eq!(scene.glyphs.len(), 1);
        assert_eq!(scene.glyphs[0].symbol, "☀️");
        let labels: Vec<_> = scene.y_axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels.first(), Some(&"57"));
        assert_eq!(labels.last(), Some(&"67"));
        // domain midpoint sits halfway up the plot
        assert!((scene.markers[0].cy - 150.0).abs() < 1e-9);
        assert!((scene.markers[0].cx - 330.0).abs() < 1e-9);
    }

    #[test]
    fn test_layout_positions() {
        let log = sample_log();
        let scene = Scene::render(log.records(), WIDTH, &ChartConfig::default()).unwrap();
        assert_eq!(scene.outer_width, 800.0);
        assert_eq!(scene.outer_height, 400.0);
        assert_eq!(scene.origin, Point::new(60.0, 40.0));
        assert_eq!(scene.x_axis.origin, Point::new(0.0, 300.0));
        assert_eq!(scene.x_axis.label_rotation, -45.0);
        assert_eq!(scene.x_axis.ticks[0].label, "Mar 10");
        assert_eq!(scene.x_title.text, "Date");
        assert_eq!(scene.x_title.y, 350.0);
        assert_eq!(scene.y_title.text, "Temperature (°F)");
        assert_eq!((scene.y_title.x, scene.y_title.y), (-150.0, -40.0));
        assert_eq!(scene.title.y, -20.0);
        assert!(scene.title.bold);

        let m = &scene.markers[2];
        assert_eq!(scene.value_labels[2].y, m.cy - 15.0);
        assert_eq!(scene.glyphs[2].y, m.cy - 30.0);
    }

    #[test]
    fn test_line_draw_in_and_label_stagger() {
        let log = sample_log();
        let scene = Scene::render(log.records(), WIDTH, &ChartConfig::default()).unwrap();
        assert!(scene.line.d.starts_with("M0,"));
        assert!(scene.line.length >= 660.0);
        assert_eq!(scene.line.draw.duration_ms, 1000);
        assert_eq!(scene.line.stroke, "#4682b4");
        let delays: Vec<_> = scene.value_labels.iter().map(|l| l.fade.delay_ms).collect();
        assert_eq!(delays, vec![0, 100, 200, 300, 400, 500, 600]);
        assert!(scene.value_labels.iter().all(|l| l.fade.duration_ms == 500));
    }

    #[test]
    fn test_narrow_temperature_span_has_clean_tick_labels() {
        let config = ChartConfig {
            temperature_padding: 0,
            ..ChartConfig::default()
        };
        let records = [record(10, 57, Condition::Sunny), record(11, 58, Condition::Cloudy)];
        let scene = Scene::render(&records, WIDTH, &config).unwrap();
        let labels: Vec<_> = scene.y_axis.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["57", "57.1", "57.2", "57.3", "57.4", "57.5", "57.6", "57.7", "57.8", "57.9", "58"]
        );
    }

    #[test]
    fn test_unknown_condition_has_empty_glyph() {
        let records = [record(10, 40, Condition::Other("Hail".to_string()))];
        let scene = Scene::render(&records, WIDTH, &ChartConfig::default()).unwrap();
        assert_eq!(scene.glyphs[0].symbol, "");
    }

    #[test]
    fn test_render_is_idempotent() {
        let log = sample_log();
        let config = ChartConfig::default();
        assert_eq!(
            Scene::render(log.records(), WIDTH, &config),
            Scene::render(log.records(), WIDTH, &config)
        );
    }

    #[test]
    fn test_marker_lookup_by_key() {
        let log = sample_log();
        let scene = Scene::render(log.records(), WIDTH, &ChartConfig::default()).unwrap();
        assert_eq!(scene.marker(MarkerKey(3)).map(|m| m.record.temperature), Some(60));
        assert!(scene.marker(MarkerKey(7)).is_none());
    }
}
