//! Render-ready records for every chart on the analysis page.
//!
//! Everything here is a pure transform of one [`AnalysisPayload`]; a new
//! payload replaces the previous charts wholesale.

mod bars;
mod bubble;
mod heatmap;
mod pie;

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use api::AnalysisPayload;

pub use bars::{BarChart, BarLayout, BarSegment, BarSeries};
pub use bubble::{BubbleChart, BubbleConfig, BubbleInput, BubblePoint};
pub use heatmap::{HeatmapCell, HeatmapConfig, HeatmapRow, HeatmapTable, LegendEntry};
pub use pie::{pie_slices, PieConfig, PieSlice};

use crate::core::format::{seconds_to_hours, Unit};
use crate::core::memo::{fingerprint, Memo};
use crate::core::Observation;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartsConfig {
    pub heatmap: HeatmapConfig,
    pub bubble: BubbleConfig,
    pub pie: PieConfig,
}

/// Keeps the last heatmap so an identical bottleneck table is not pivoted twice.
/// Keyed by the observations only; the chart config is fixed for a session.
#[derive(Debug, Default)]
pub struct ChartCache {
    heatmap: Memo<Rc<HeatmapTable>>,
}

impl ChartCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamedBarChart {
    /// Translation key of the chart title.
    pub title: &'static str,
    pub chart: BarChart,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisCharts {
    pub heatmap: Rc<HeatmapTable>,
    pub bubbles: BubbleChart,
    pub item_costs: Vec<PieSlice>,
    /// Only charts with data, in page order.
    pub bars: Vec<NamedBarChart>,
    pub warnings: Vec<String>,
}

impl AnalysisCharts {
    pub fn from_payload(
        payload: &AnalysisPayload,
        config: &ChartsConfig,
        cache: &mut ChartCache,
    ) -> Self {
        let observations: Vec<Observation> =
            payload.bottleneck.iter().map(Observation::from).collect();
        let key = fingerprint(&observations);
        let heatmap = cache
            .heatmap
            .get_or_compute(key, || {
                Rc::new(HeatmapTable::build(&observations, &config.heatmap))
            })
            .clone();

        let bubble_inputs: Vec<BubbleInput> =
            payload.resource_bubble.iter().map(BubbleInput::from).collect();
        let bubbles = BubbleChart::build(&bubble_inputs, &config.bubble);

        let item_costs = pie_slices(
            payload
                .item_costs
                .iter()
                .map(|item| (item.instance_type.clone(), item.avg_item_cost)),
            &config.pie,
        );

        let bars: Vec<NamedBarChart> = bar_charts(payload)
            .into_iter()
            .filter(|named| !named.chart.is_empty())
            .collect();

        debug!(
            heatmap_rows = heatmap.rows.len(),
            bubbles = bubbles.points.len(),
            slices = item_costs.len(),
            bar_charts = bars.len(),
            "charts shaped"
        );

        Self {
            heatmap,
            bubbles,
            item_costs,
            bars,
            warnings: payload.warnings.clone(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heatmap.is_empty()
            && self.bubbles.is_empty()
            && self.item_costs.is_empty()
            && self.bars.is_empty()
    }
}

fn bar_charts(payload: &AnalysisPayload) -> Vec<NamedBarChart> {
    let named = |title: &'static str, chart: BarChart| NamedBarChart { title, chart };
    let column = |name: &str, values: Vec<f64>| (name.to_string(), values);

    vec![
        named(
            "chart-durations",
            BarChart::new(
                payload.durations.iter().map(|r| r.activity.clone()).collect(),
                vec![
                    column("series-average", payload.durations.iter().map(|r| r.avg_duration).collect()),
                    column("series-minimum", payload.durations.iter().map(|r| r.min_duration).collect()),
                    column("series-maximum", payload.durations.iter().map(|r| r.max_duration).collect()),
                ],
                BarLayout::Grouped,
                Unit::Minutes,
            ),
        ),
        named(
            "chart-breakdown",
            BarChart::new(
                payload.breakdown.iter().map(|r| r.activity.clone()).collect(),
                vec![
                    column("series-waiting", payload.breakdown.iter().map(|r| r.avg_waiting_time).collect()),
                    column(
                        "series-processing",
                        payload.breakdown.iter().map(|r| r.avg_processing_time).collect(),
                    ),
                ],
                BarLayout::Stacked,
                Unit::Minutes,
            ),
        ),
        named(
            "chart-costs",
            BarChart::new(
                payload.costs.iter().map(|r| r.activity.clone()).collect(),
                vec![
                    column("series-fixed", payload.costs.iter().map(|r| r.avg_fixed_cost).collect()),
                    column("series-variable", payload.costs.iter().map(|r| r.avg_variable_cost).collect()),
                ],
                BarLayout::Stacked,
                Unit::Currency,
            )
            .with_decimals(2),
        ),
        named(
            "chart-events-over-time",
            BarChart::new(
                payload.events_over_time.iter().map(|r| r.timestamp.clone()).collect(),
                vec![column("series-events", payload.events_over_time.iter().map(|r| r.count).collect())],
                BarLayout::Grouped,
                Unit::Count,
            ),
        ),
        named(
            "chart-node-types",
            BarChart::new(
                payload.node_type_counts.iter().map(|r| r.node_type.clone()).collect(),
                vec![column("series-events", payload.node_type_counts.iter().map(|r| r.count).collect())],
                BarLayout::Grouped,
                Unit::Count,
            ),
        ),
        named(
            "chart-case-durations",
            BarChart::new(
                payload.case_durations.iter().map(|r| r.trace_id.clone()).collect(),
                vec![column(
                    "series-duration",
                    payload
                        .case_durations
                        .iter()
                        .map(|r| seconds_to_hours(r.duration))
                        .collect(),
                )],
                BarLayout::Grouped,
                Unit::Hours,
            )
            .with_decimals(2),
        ),
        named(
            "chart-costs-by-activity",
            BarChart::new(
                payload.costs_by_activity.iter().map(|r| r.activity.clone()).collect(),
                vec![
                    column("series-fixed", payload.costs_by_activity.iter().map(|r| r.total_fixed_cost).collect()),
                    column(
                        "series-resource",
                        payload.costs_by_activity.iter().map(|r| r.total_resource_cost).collect(),
                    ),
                ],
                BarLayout::Stacked,
                Unit::Currency,
            )
            .with_decimals(2),
        ),
    ]
}
