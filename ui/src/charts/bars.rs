//! Bar charts: several series over shared categories, grouped side by side or
//! stacked. Geometry is precomputed as ratios of a zero-based domain.

use crate::core::format::{format_value, Unit};
use crate::core::scale::{palette, DomainMode, Rgb, ScaleDomain};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarLayout {
    Grouped,
    Stacked,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    /// Translation key of the series name.
    pub name: String,
    pub color: Rgb,
    /// One value per category.
    pub values: Vec<f64>,
}

/// One drawable rectangle, in ratio space along the value axis.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSegment {
    pub category: usize,
    pub series: usize,
    pub start: f64,
    pub end: f64,
    pub value_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
    pub layout: BarLayout,
    pub unit: Unit,
    pub decimals: usize,
    pub domain: ScaleDomain,
}

impl BarChart {
    /// `series` pairs a translation key with one value per category; missing trailing
    /// values count as NaN and draw nothing.
    pub fn new(
        categories: Vec<String>,
        series: Vec<(String, Vec<f64>)>,
        layout: BarLayout,
        unit: Unit,
    ) -> Self {
        let width = categories.len();
        let colors = palette(series.len());
        let series: Vec<BarSeries> = series
            .into_iter()
            .zip(colors)
            .map(|((name, mut values), color)| {
                values.resize(width, f64::NAN);
                BarSeries { name, color, values }
            })
            .collect();

        let domain = match layout {
            BarLayout::Grouped => ScaleDomain::with_mode(
                series
                    .iter()
                    .flat_map(|s| s.values.iter().copied())
                    .filter(|v| drawable(*v)),
                DomainMode::ZeroToMax,
            ),
            BarLayout::Stacked => ScaleDomain::with_mode(
                (0..width).map(|c| stack_total(&series, c)),
                DomainMode::ZeroToMax,
            ),
        };

        Self {
            categories,
            series,
            layout,
            unit,
            decimals: 1,
            domain,
        }
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() || self.series.is_empty()
    }

    /// Rectangles for every finite, non-negative value.
    pub fn segments(&self) -> Vec<BarSegment> {
        let mut segments = Vec::new();
        for category in 0..self.categories.len() {
            let mut stacked = 0.0;
            for (index, series) in self.series.iter().enumerate() {
                let value = series.values[category];
                if !drawable(value) {
                    continue;
                }
                let (start, end) = match self.layout {
                    BarLayout::Grouped => (0.0, self.extent(value)),
                    BarLayout::Stacked => {
                        let start = self.extent(stacked);
                        stacked += value;
                        (start, self.extent(stacked))
                    }
                };
                segments.push(BarSegment {
                    category,
                    series: index,
                    start,
                    end,
                    value_label: format_value(value, self.unit, self.decimals),
                });
            }
        }
        segments
    }

    /// Axis label for the top of the value axis.
    pub fn max_label(&self) -> String {
        format_value(self.domain.max, self.unit, self.decimals)
    }

    fn extent(&self, value: f64) -> f64 {
        self.domain.normalize(value)
    }
}

fn drawable(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

fn stack_total(series: &[BarSeries], category: usize) -> f64 {
    series
        .iter()
        .map(|s| s.values[category])
        .filter(|v| drawable(*v))
        .sum()
}
