use dioxus::prelude::*;

use super::svg::{axis_label, PlotArea};
use super::ScaleLegend;
use crate::charts::BubbleChart;
use crate::t;

#[component]
pub fn BubbleCard(chart: BubbleChart) -> Element {
    if chart.is_empty() {
        return rsx! {};
    }

    let plot = PlotArea::STANDARD;
    let count = chart.points.len();
    let floor = plot.floor();
    let max_label = crate::core::format::format_number(chart.y_domain.max, 2);

    rsx! {
        section { class: "dashboard-card bubble-chart",
            div { class: "dashboard-card__header",
                h2 { {t!("bubble-title")} }
            }

            svg {
                class: "chart-svg",
                view_box: "{plot.view_box()}",
                line {
                    class: "chart-svg__axis",
                    x1: "{plot.left}",
                    y1: "{floor}",
                    x2: "{plot.width - plot.right}",
                    y2: "{floor}",
                }
                text {
                    class: "chart-svg__tick",
                    x: "{plot.left - 6.0}",
                    y: "{plot.top + 4.0}",
                    text_anchor: "end",
                    "{max_label}"
                }
                for (index, point) in chart.points.iter().enumerate().filter(|(_, p)| p.is_plottable()) {
                    g { key: "{point.category}",
                        circle {
                            cx: "{plot.band_center(index, count)}",
                            cy: "{plot.y(chart.y_domain.normalize(point.y))}",
                            r: "{point.size}",
                            fill: "{point.color}",
                            fill_opacity: "0.75",
                            stroke: "{point.color}",
                        }
                        text {
                            class: "chart-svg__value",
                            x: "{plot.band_center(index, count)}",
                            y: "{plot.y(chart.y_domain.normalize(point.y)) - point.size - 4.0}",
                            text_anchor: "middle",
                            "{point.y_label} · {point.magnitude_label}"
                        }
                        text {
                            class: "chart-svg__category",
                            x: "{plot.band_center(index, count)}",
                            y: "{floor + 18.0}",
                            text_anchor: "middle",
                            "{axis_label(&point.category, 14)}"
                        }
                    }
                }
            }

            ScaleLegend { entries: chart.legend.clone() }
            p { class: "dashboard-card__caption", {t!("bubble-caption")} }
        }
    }
}
