//! The chart's tooltip.

use dioxus::prelude::*;
use wv_core::interaction::Tooltip;

#[derive(Props, Clone, PartialEq)]
pub struct TooltipOverlayProps {
    pub tooltip: Tooltip,
}

/// Fixed-position box next to the pointer. Opacity transitions over the
/// duration the chart asked for; it never intercepts pointer events.
#[component]
pub fn TooltipOverlay(props: TooltipOverlayProps) -> Element {
    let tooltip = &props.tooltip;
    let style = format!(
        "position: fixed; left: {}px; top: {}px; opacity: {}; transition: opacity {}ms; \
         background: white; border: 1px solid #ddd; border-radius: 4px; padding: 10px; \
         pointer-events: none; font-size: 12px; z-index: 10;",
        tooltip.left, tooltip.top, tooltip.opacity, tooltip.transition_ms
    );

    rsx! {
        div {
            class: "wv-tooltip",
            style: "{style}",
            for line in tooltip.lines.iter() {
                div {
                    strong { "{line.label}: " }
                    "{line.value}"
                }
            }
        }
    }
}
