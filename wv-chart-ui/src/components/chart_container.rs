//! Bordered card wrapping a page section.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// While true the children are withheld and a placeholder is shown
    #[props(default = false)]
    pub loading: bool,
    /// Optional minimum height in pixels
    #[props(default = 0)]
    pub min_height: u32,
    pub children: Element,
}

/// A bordered section that holds its children back until the data is in.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "min-height: {}px; position: relative; border: 1px solid #d1d5db; border-radius: 8px; padding: 8px; margin-bottom: 16px;",
        props.min_height
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "Loading weather data..."
                }
            } else {
                {props.children}
            }
        }
    }
}
