use dioxus::prelude::*;

use crate::charts::LegendEntry;

#[component]
pub fn ScaleLegend(entries: Vec<LegendEntry>) -> Element {
    if entries.is_empty() {
        return rsx! {};
    }

    rsx! {
        ul { class: "chart-legend",
            for entry in entries.iter() {
                li { class: "chart-legend__item",
                    span {
                        class: "chart-legend__swatch",
                        style: "background-color: {entry.color};",
                    }
                    span { class: "chart-legend__label", "{entry.label}" }
                }
            }
        }
    }
}
