//! The chart surface: draws a `wv_core::Chart` scene as SVG.
//!
//! The component owns one chart instance for its lifetime. Effects feed it
//! the record log and the container width; markers forward pointer events
//! into it; a resize controller keeps the width current until unmount.

use crate::components::TooltipOverlay;
use crate::state::AppState;
use crate::viewport::{element_width, BrowserViewport};
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use wv_core::interaction::PointerPosition;
use wv_core::resize::ResizeController;
use wv_core::scene::{Axis, AxisSide, Scene, TextNode};
use wv_core::Chart;

/// DOM id of the element whose width the chart fills.
const CHART_ROOT_ID: &str = "weather-chart";

const CHART_KEYFRAMES: &str = "\
@keyframes wv-draw { to { stroke-dashoffset: 0; } }
@keyframes wv-fade-in { from { opacity: 0; } to { opacity: 1; } }
";

#[component]
pub fn WeatherChart() -> Element {
    let state = use_context::<AppState>();
    let mut chart = use_signal(|| Chart::new(state.config.peek().clone()));
    let mut width: Signal<Option<f64>> = use_signal(|| None);

    // ─── Resize listener, released on unmount ───
    let controller = use_hook(|| {
        let viewport = Rc::new(BrowserViewport::new());
        let controller = ResizeController::attach(viewport, move |size| {
            let measured = element_width(CHART_ROOT_ID).unwrap_or(size.width);
            width.set(Some(measured));
        });
        Rc::new(RefCell::new(controller))
    });
    use_drop(move || {
        let mut controller = controller.borrow_mut();
        log::info!(
            "[WV] chart: detaching after {} resize events",
            controller.events()
        );
        controller.detach();
    });

    // ─── Effect 1: redraw on config or data change ───
    use_effect(move || {
        let config = state.config.read().clone();
        let log = state.log.read();
        let mut chart = chart.write();
        if chart.config() != &config {
            chart.set_config(config);
        }
        chart.render(log.records());
    });

    // ─── Effect 2: redraw on container width change ───
    use_effect(move || {
        if let Some(outer_width) = width() {
            chart.write().resize(outer_width, state.log.peek().records());
        }
    });

    let on_mounted = move |_| {
        if let Some(measured) = element_width(CHART_ROOT_ID) {
            width.set(Some(measured));
        }
    };

    let current = chart.read();
    let tooltip = current.tooltip().clone();
    let surface = current.scene().map(|scene| draw_scene(scene, &current, chart));

    rsx! {
        div {
            id: CHART_ROOT_ID,
            style: "position: relative; width: 100%;",
            onmounted: on_mounted,
            style { {CHART_KEYFRAMES} }
            {surface}
            TooltipOverlay { tooltip }
        }
    }
}

fn draw_scene(scene: &Scene, current: &Chart, mut chart: Signal<Chart>) -> Element {
    let line = &scene.line;
    let line_style = format!(
        "stroke-dasharray: {len} {len}; stroke-dashoffset: {len}; animation: wv-draw {}ms ease-in-out {}ms forwards;",
        line.draw.duration_ms,
        line.draw.delay_ms,
        len = line.length
    );
    let revision = current.line_revision();

    rsx! {
        svg {
            width: "{scene.outer_width}",
            height: "{scene.outer_height}",
            g {
                transform: "translate({scene.origin.x},{scene.origin.y})",
                {draw_axis(&scene.x_axis)}
                {draw_text(&scene.x_title)}
                {draw_axis(&scene.y_axis)}
                {draw_text(&scene.y_title)}
                {draw_text(&scene.title)}

                // Keyed on the revision so a changed line replays its draw-in.
                path {
                    key: "line-{revision}",
                    d: "{line.d}",
                    fill: "none",
                    stroke: "{line.stroke}",
                    "stroke-width": "{line.stroke_width}",
                    style: "{line_style}",
                }

                for marker in scene.markers.iter() {
                    {
                        let key = marker.key;
                        let marker_style = current.marker_style(key);
                        let stroke = marker_style.stroke.clone().unwrap_or_else(|| "none".to_string());
                        rsx! {
                            circle {
                                key: "{key}",
                                class: "wv-marker",
                                cx: "{marker.cx}",
                                cy: "{marker.cy}",
                                r: "{marker_style.radius}",
                                fill: "{marker.fill}",
                                stroke: "{stroke}",
                                "stroke-width": "{marker_style.stroke_width}",
                                style: "cursor: pointer;",
                                onmouseenter: move |evt: Event<MouseData>| {
                                    let point = evt.client_coordinates();
                                    chart.write().pointer_enter(key, PointerPosition { x: point.x, y: point.y });
                                },
                                onmouseleave: move |_| chart.write().pointer_leave(key),
                            }
                        }
                    }
                }

                for label in scene.value_labels.iter() {
                    text {
                        key: "{label.key}-{revision}",
                        x: "{label.x}",
                        y: "{label.y}",
                        "text-anchor": "middle",
                        "font-size": "12px",
                        style: "opacity: 0; animation: wv-fade-in {label.fade.duration_ms}ms linear {label.fade.delay_ms}ms forwards;",
                        "{label.text}"
                    }
                }

                for glyph in scene.glyphs.iter() {
                    text {
                        key: "{glyph.key}",
                        x: "{glyph.x}",
                        y: "{glyph.y}",
                        "text-anchor": "middle",
                        "font-size": "16px",
                        "{glyph.symbol}"
                    }
                }
            }
        }
    }
}

fn draw_axis(axis: &Axis) -> Element {
    let (domain, class) = match axis.side {
        AxisSide::Bottom => (format!("M0,6V0H{}V6", axis.extent), "wv-x-axis"),
        AxisSide::Left => (format!("M-6,{}H0V0H-6", axis.extent), "wv-y-axis"),
    };

    rsx! {
        g {
            class: "{class}",
            transform: "translate({axis.origin.x},{axis.origin.y})",
            "font-size": "10",
            path { d: "{domain}", fill: "none", stroke: "currentColor" }
            for tick in axis.ticks.iter() {
                {match axis.side {
                    AxisSide::Bottom => rsx! {
                        g {
                            key: "{tick.label}",
                            transform: "translate({tick.offset},0)",
                            line { y2: "6", stroke: "currentColor" }
                            text {
                                fill: "currentColor",
                                y: "9",
                                dx: "-.8em",
                                dy: ".15em",
                                "text-anchor": "end",
                                transform: "rotate({axis.label_rotation})",
                                "{tick.label}"
                            }
                        }
                    },
                    AxisSide::Left => rsx! {
                        g {
                            key: "{tick.label}",
                            transform: "translate(0,{tick.offset})",
                            line { x2: "-6", stroke: "currentColor" }
                            text {
                                fill: "currentColor",
                                x: "-9",
                                dy: ".32em",
                                "text-anchor": "end",
                                "{tick.label}"
                            }
                        }
                    },
                }}
            }
        }
    }
}

fn draw_text(node: &TextNode) -> Element {
    let weight = if node.bold { "bold" } else { "normal" };
    rsx! {
        text {
            x: "{node.x}",
            y: "{node.y}",
            transform: "rotate({node.rotation})",
            "text-anchor": "middle",
            "font-size": "{node.font_size}px",
            "font-weight": "{weight}",
            "{node.text}"
        }
    }
}

