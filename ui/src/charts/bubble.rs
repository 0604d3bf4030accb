//! Bubble chart: categories on x, a value on y, and one magnitude field
//! driving both bubble size and bubble color.

use serde::{Deserialize, Serialize};

use api::ResourceRecord;

use super::heatmap::LegendEntry;
use crate::core::format::{format_value, Unit};
use crate::core::scale::{ColorScale, DomainMode, Rgb, ScaleDomain, SizeScale};

#[derive(Debug, Clone, PartialEq)]
pub struct BubbleInput {
    pub category: String,
    pub y: f64,
    pub magnitude: f64,
}

/// Resources plot their average cost; usage count sets size and color.
impl From<&ResourceRecord> for BubbleInput {
    fn from(record: &ResourceRecord) -> Self {
        Self {
            category: record.resource.clone(),
            y: record.avg_cost,
            magnitude: record.usage_count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BubbleConfig {
    pub colors: ColorScale,
    pub sizes: SizeScale,
    pub y_unit: Unit,
    pub magnitude_unit: Unit,
    pub decimals: usize,
    pub legend_stops: usize,
}

impl Default for BubbleConfig {
    fn default() -> Self {
        Self {
            colors: ColorScale::cool_to_warm(),
            sizes: SizeScale::default(),
            y_unit: Unit::Currency,
            magnitude_unit: Unit::Count,
            decimals: 2,
            legend_stops: 3,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BubblePoint {
    pub category: String,
    pub y: f64,
    pub magnitude: f64,
    pub size: f64,
    pub color: Rgb,
    pub y_label: String,
    pub magnitude_label: String,
}

impl BubblePoint {
    /// Points without a finite y value have no position on the chart.
    pub fn is_plottable(&self) -> bool {
        self.y.is_finite()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BubbleChart {
    pub points: Vec<BubblePoint>,
    /// Zero-based range of the y axis.
    pub y_domain: ScaleDomain,
    pub magnitude_domain: ScaleDomain,
    pub legend: Vec<LegendEntry>,
}

impl BubbleChart {
    pub fn build(inputs: &[BubbleInput], config: &BubbleConfig) -> Self {
        let magnitude_domain = ScaleDomain::from_values(inputs.iter().map(|i| i.magnitude));
        let y_domain = ScaleDomain::with_mode(inputs.iter().map(|i| i.y), DomainMode::ZeroToMax);

        let points = inputs
            .iter()
            .map(|input| BubblePoint {
                category: input.category.clone(),
                y: input.y,
                magnitude: input.magnitude,
                size: config.sizes.size_for_value(input.magnitude, &magnitude_domain),
                color: config.colors.color_for_value(input.magnitude, &magnitude_domain),
                y_label: format_value(input.y, config.y_unit, config.decimals),
                magnitude_label: format_value(input.magnitude, config.magnitude_unit, 0),
            })
            .collect();

        let legend = config
            .colors
            .legend(&magnitude_domain, config.legend_stops)
            .into_iter()
            .map(|stop| LegendEntry {
                label: format_value(stop.value, config.magnitude_unit, 0),
                color: stop.color,
            })
            .collect();

        Self {
            points,
            y_domain,
            magnitude_domain,
            legend,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
