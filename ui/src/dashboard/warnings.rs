use dioxus::prelude::*;

use crate::t;

/// Messages the analysis service attached to its payload, shown as sent.
#[component]
pub fn WarningsList(warnings: Vec<String>) -> Element {
    if warnings.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "dashboard-card warnings",
            div { class: "dashboard-card__header",
                h2 { {t!("warnings-title")} }
            }
            ul { class: "warnings__list",
                for (index, warning) in warnings.iter().enumerate() {
                    li { key: "{index}", class: "warnings__item", "{warning}" }
                }
            }
        }
    }
}
