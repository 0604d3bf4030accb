use std::rc::Rc;

use dioxus::prelude::*;

use super::ScaleLegend;
use crate::charts::{HeatmapCell, HeatmapTable};
use crate::t;

/// Waiting-time heatmap: trace ids down, activities across. Styles arrive
/// resolved, so this only lays the table out.
#[component]
pub fn HeatmapCard(table: Rc<HeatmapTable>) -> Element {
    rsx! {
        section { class: "dashboard-card heatmap",
            div { class: "dashboard-card__header",
                h2 { {t!("heatmap-title")} }
            }

            if table.is_empty() {
                p { class: "dashboard-card__placeholder", {t!("heatmap-empty")} }
            } else {
                div { class: "heatmap__scroll",
                    table { class: "heatmap__table",
                        thead {
                            tr { class: "heatmap__head",
                                th { class: "heatmap__corner", {t!("heatmap-trace")} }
                                for col in table.columns.iter() {
                                    th { key: "{col}", class: "heatmap__col-key", "{col}" }
                                }
                            }
                        }
                        tbody {
                            for row in table.rows.iter() {
                                tr { key: "{row.key}",
                                    th { class: "heatmap__row-key", "{row.key}" }
                                    for cell in row.cells.iter() {
                                        {render_cell(cell)}
                                    }
                                }
                            }
                        }
                    }
                }

                ScaleLegend { entries: table.legend.clone() }

                p { class: "dashboard-card__caption", {t!("heatmap-caption")} }
                p { class: "dashboard-card__caption", {t!("heatmap-note")} }
            }
        }
    }
}

fn render_cell(cell: &HeatmapCell) -> Element {
    let class = if cell.is_absent() {
        "heatmap__cell heatmap__cell--absent"
    } else {
        "heatmap__cell"
    };
    let style = format!(
        "background-color: {}; color: {};",
        cell.style.background, cell.style.text
    );

    rsx! {
        td {
            key: "{cell.col}",
            class: "{class}",
            style: "{style}",
            title: "{cell.row} · {cell.col}",
            "{cell.label}"
        }
    }
}
