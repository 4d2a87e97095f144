//! Entry form for appending a weather record.

use crate::state::AppState;
use dioxus::prelude::*;
use wv_core::Condition;

const FIELD_STYLE: &str = "width: 100%; padding: 8px; border: 1px solid #d1d5db; border-radius: 4px; box-sizing: border-box;";
const LABEL_STYLE: &str = "display: block; margin-bottom: 4px;";

/// Date, temperature, humidity and condition inputs with an "Add Data"
/// button. A rejected draft stays in the form and the reason is shown
/// through `AppState::error_msg`.
#[component]
pub fn RecordForm() -> Element {
    let mut state = use_context::<AppState>();
    let draft = state.form.read().draft.clone();

    let on_submit = move |_| {
        let result = {
            let mut log = state.log.write();
            state.form.write().submit(&mut log)
        };
        // EntryForm::submit logs both outcomes.
        match result {
            Ok(_) => state.error_msg.set(None),
            Err(e) => state.error_msg.set(Some(e.to_string())),
        }
    };

    rsx! {
        h2 {
            style: "margin: 0 0 8px 0; font-size: 20px; font-weight: bold;",
            "Add New Weather Data"
        }
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(220px, 1fr)); gap: 16px;",
            div {
                label { r#for: "wv-date", style: LABEL_STYLE, "Date:" }
                input {
                    id: "wv-date",
                    r#type: "date",
                    style: FIELD_STYLE,
                    value: "{draft.date}",
                    oninput: move |evt: Event<FormData>| state.form.write().draft.date = evt.value(),
                }
            }
            div {
                label { r#for: "wv-temperature", style: LABEL_STYLE, "Temperature (°F):" }
                input {
                    id: "wv-temperature",
                    r#type: "number",
                    style: FIELD_STYLE,
                    value: "{draft.temperature}",
                    oninput: move |evt: Event<FormData>| state.form.write().draft.temperature = evt.value(),
                }
            }
            div {
                label { r#for: "wv-humidity", style: LABEL_STYLE, "Humidity (%):" }
                input {
                    id: "wv-humidity",
                    r#type: "number",
                    min: "0",
                    max: "100",
                    style: FIELD_STYLE,
                    value: "{draft.humidity}",
                    oninput: move |evt: Event<FormData>| state.form.write().draft.humidity = evt.value(),
                }
            }
            div {
                label { r#for: "wv-condition", style: LABEL_STYLE, "Weather Condition:" }
                select {
                    id: "wv-condition",
                    style: FIELD_STYLE,
                    onchange: move |evt: Event<FormData>| state.form.write().draft.condition = evt.value(),
                    for condition in Condition::KNOWN.iter() {
                        option {
                            value: "{condition.label()}",
                            selected: condition.label() == draft.condition,
                            "{condition.label()}"
                        }
                    }
                }
            }
        }
        button {
            style: "margin-top: 16px; padding: 8px 16px; background: #3b82f6; color: white; border: none; border-radius: 4px; cursor: pointer;",
            onclick: on_submit,
            "Add Data"
        }
    }
}
