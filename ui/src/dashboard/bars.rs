use dioxus::prelude::*;

use super::svg::{axis_label, PlotArea};
use crate::charts::{BarLayout, BarSegment, NamedBarChart};
use crate::i18n;
use crate::t;

#[component]
pub fn BarChartCard(named: NamedBarChart) -> Element {
    let chart = &named.chart;
    let plot = PlotArea::STANDARD;
    let title = i18n::tr(named.title);
    let floor = plot.floor();
    let count = chart.categories.len();
    let series_names: Vec<String> = chart.series.iter().map(|s| i18n::tr(&s.name)).collect();
    let rects: Vec<BarRect> = chart
        .segments()
        .into_iter()
        .map(|segment| {
            let label = format!(
                "{} · {}: {}",
                chart.categories[segment.category], series_names[segment.series], segment.value_label
            );
            BarRect::place(&plot, chart.layout, chart.series.len(), count, segment, label)
        })
        .collect();
    let label_chars = if count > 12 { 6 } else { 12 };

    rsx! {
        section { class: "dashboard-card bar-chart",
            div { class: "dashboard-card__header",
                h2 { "{title}" }
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
                    "{chart.max_label()}"
                }
                for bar in rects.iter() {
                    rect {
                        x: "{bar.x}",
                        y: "{bar.y}",
                        width: "{bar.width}",
                        height: "{bar.height}",
                        fill: "{chart.series[bar.series].color}",
                        rx: "2",
                    }
                }
                for (index, category) in chart.categories.iter().enumerate() {
                    text {
                        class: "chart-svg__category",
                        x: "{plot.band_center(index, count)}",
                        y: "{floor + 18.0}",
                        text_anchor: "middle",
                        "{axis_label(category, label_chars)}"
                    }
                }
            }

            if chart.series.len() > 1 {
                ul { class: "chart-legend",
                    for (series, name) in chart.series.iter().zip(series_names.iter()) {
                        li { class: "chart-legend__item",
                            span {
                                class: "chart-legend__swatch",
                                style: "background-color: {series.color};",
                            }
                            span { class: "chart-legend__label", "{name}" }
                        }
                    }
                }
            }

            details { class: "bar-chart__values",
                summary { {t!("chart-values")} }
                ul {
                    for bar in rects.iter() {
                        li { "{bar.label}" }
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
struct BarRect {
    series: usize,
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    label: String,
}

impl BarRect {
    fn place(
        plot: &PlotArea,
        layout: BarLayout,
        series_count: usize,
        category_count: usize,
        segment: BarSegment,
        label: String,
    ) -> Self {
        let (band_x, band_width) = plot.band(segment.category, category_count);
        let (x, width) = match layout {
            BarLayout::Grouped => {
                let inner = band_width * 0.8;
                let width = inner / series_count.max(1) as f64;
                (band_x + band_width * 0.1 + width * segment.series as f64, width)
            }
            BarLayout::Stacked => (band_x + band_width * 0.2, band_width * 0.6),
        };
        let top = plot.y(segment.end);
        let bottom = plot.y(segment.start);

        Self {
            series: segment.series,
            x,
            y: top,
            width,
            height: (bottom - top).max(0.0),
            label,
        }
    }
}
