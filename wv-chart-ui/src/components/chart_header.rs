//! Page header with title and a short description.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    pub title: String,
    #[props(default = String::new())]
    pub description: String,
}

#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 16px;",
            h1 {
                style: "margin: 0 0 8px 0; font-size: 24px; font-weight: bold;",
                "{props.title}"
            }
            if !props.description.is_empty() {
                p {
                    style: "margin: 0 0 16px 0;",
                    "{props.description}"
                }
            }
        }
    }
}
