use std::f64::consts::{FRAC_PI_2, TAU};

use dioxus::prelude::*;

use crate::charts::PieSlice;
use crate::t;

const CENTER: f64 = 110.0;
const RADIUS: f64 = 100.0;

#[component]
pub fn PieCard(slices: Vec<PieSlice>) -> Element {
    if slices.is_empty() {
        return rsx! {};
    }

    let arcs = slice_arcs(&slices);

    rsx! {
        section { class: "dashboard-card pie-chart",
            div { class: "dashboard-card__header",
                h2 { {t!("pie-title")} }
            }

            div { class: "pie-chart__body",
                svg {
                    class: "chart-svg chart-svg--pie",
                    view_box: "0 0 {CENTER * 2.0} {CENTER * 2.0}",
                    for (slice, arc) in slices.iter().zip(arcs.iter()) {
                        match arc {
                            SliceShape::Full => rsx! {
                                circle { key: "{slice.label}", cx: "{CENTER}", cy: "{CENTER}", r: "{RADIUS}", fill: "{slice.color}" }
                            },
                            SliceShape::Arc(d) => rsx! {
                                path { key: "{slice.label}", d: "{d}", fill: "{slice.color}" }
                            },
                            SliceShape::Empty => rsx! {},
                        }
                    }
                }

                ul { class: "chart-legend chart-legend--vertical",
                    for slice in slices.iter() {
                        li { class: "chart-legend__item",
                            span {
                                class: "chart-legend__swatch",
                                style: "background-color: {slice.color};",
                            }
                            span { class: "chart-legend__label", "{slice.label}" }
                            span { class: "chart-legend__value", "{slice.value_label} ({slice.percent_label})" }
                        }
                    }
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum SliceShape {
    Empty,
    Full,
    Arc(String),
}

/// SVG shapes for the slices, clockwise from twelve o'clock.
fn slice_arcs(slices: &[PieSlice]) -> Vec<SliceShape> {
    let mut start = 0.0;
    slices
        .iter()
        .map(|slice| {
            let share = slice.share;
            if share <= 0.0 {
                return SliceShape::Empty;
            }
            let shape = if share >= 0.9999 {
                SliceShape::Full
            } else {
                SliceShape::Arc(arc_path(start, start + share))
            };
            start += share;
            shape
        })
        .collect()
}

/// Wedge between two fractions of a full turn.
fn arc_path(from: f64, to: f64) -> String {
    let point = |fraction: f64| {
        let angle = fraction * TAU - FRAC_PI_2;
        (CENTER + RADIUS * angle.cos(), CENTER + RADIUS * angle.sin())
    };
    let (x1, y1) = point(from);
    let (x2, y2) = point(to);
    let large_arc = u8::from(to - from > 0.5);
    format!(
        "M {CENTER:.3} {CENTER:.3} L {x1:.3} {y1:.3} A {RADIUS:.3} {RADIUS:.3} 0 {large_arc} 1 {x2:.3} {y2:.3} Z"
    )
}
