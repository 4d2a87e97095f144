//! Banner for load failures and rejected form entries.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Called when the user closes the banner
    pub on_dismiss: EventHandler<()>,
}

#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            role: "alert",
            style: "display: flex; justify-content: space-between; align-items: center; padding: 8px 12px; margin-bottom: 16px; background: #fef2f2; color: #b91c1c; border: 1px solid #fecaca; border-radius: 8px;",
            span { "{props.message}" }
            button {
                style: "background: none; border: none; color: inherit; font-size: 16px; cursor: pointer;",
                "aria-label": "Dismiss",
                onclick: move |_| props.on_dismiss.call(()),
                "×"
            }
        }
    }
}
