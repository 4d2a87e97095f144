//! Tabular view of every record.

use crate::state::AppState;
use dioxus::prelude::*;
use wv_core::table::{rows, TABLE_COLUMNS};

#[component]
pub fn RecordTable() -> Element {
    let state = use_context::<AppState>();
    let rows = rows(&state.log.read());

    rsx! {
        h2 {
            style: "margin: 0 0 8px 0; font-size: 20px; font-weight: bold;",
            "Weather Data Table"
        }
        div {
            style: "overflow-x: auto;",
            table {
                style: "width: 100%; border-collapse: collapse;",
                thead {
                    tr {
                        style: "background: #f3f4f6;",
                        for column in TABLE_COLUMNS {
                            th { style: "padding: 8px; text-align: left;", "{column}" }
                        }
                    }
                }
                tbody {
                    for (index, row) in rows.into_iter().enumerate() {
                        tr {
                            key: "{index}",
                            style: if row.shaded { "background: #f9fafb;" } else { "" },
                            td { style: "padding: 8px;", "{row.date}" }
                            td { style: "padding: 8px;", "{row.temperature}" }
                            td { style: "padding: 8px;", "{row.humidity}" }
                            td { style: "padding: 8px;", "{row.condition}" }
                        }
                    }
                }
            }
        }
    }
}
