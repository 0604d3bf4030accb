//! Heatmap table: one row per row key, one cell per column key, colored on a
//! single domain shared by the whole matrix so rows compare with each other.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::format::{format_number, format_value, Unit};
use crate::core::scale::{CellStyle, ColorScale, DomainMode, Rgb, ScaleDomain};
use crate::core::{Observation, PivotMatrix};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapConfig {
    pub colors: ColorScale,
    pub domain: DomainMode,
    pub unit: Unit,
    pub decimals: usize,
    pub legend_stops: usize,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            colors: ColorScale::heat(),
            domain: DomainMode::MinMax,
            unit: Unit::Minutes,
            decimals: 1,
            legend_stops: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapCell {
    pub row: String,
    pub col: String,
    /// `None` for absent cells. Non-finite values are kept as they arrived.
    pub value: Option<f64>,
    pub label: String,
    pub style: CellStyle,
}

impl HeatmapCell {
    pub fn is_absent(&self) -> bool {
        self.value.is_none()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapRow {
    pub key: String,
    pub cells: Vec<HeatmapCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Rgb,
}

/// Render-ready table; the view only lays it out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeatmapTable {
    pub columns: Vec<String>,
    pub rows: Vec<HeatmapRow>,
    pub domain: ScaleDomain,
    pub legend: Vec<LegendEntry>,
}

impl HeatmapTable {
    pub fn build(observations: &[Observation], config: &HeatmapConfig) -> Self {
        Self::from_matrix(&PivotMatrix::from_observations(observations), config)
    }

    pub fn from_matrix(matrix: &PivotMatrix, config: &HeatmapConfig) -> Self {
        let domain = ScaleDomain::with_mode(matrix.present_values(), config.domain);
        let non_finite = matrix.present_values().filter(|v| !v.is_finite()).count();
        if non_finite > 0 {
            debug!(non_finite, "heatmap values excluded from the color domain");
        }
        if !domain.is_empty() && domain.is_degenerate() {
            debug!(value = domain.min, "heatmap domain is degenerate; using fallback color");
        }

        let columns = matrix.cols().to_vec();
        let rows = matrix
            .rows()
            .iter()
            .enumerate()
            .map(|(r, key)| HeatmapRow {
                key: key.to_string(),
                cells: matrix
                    .row(r)
                    .iter()
                    .zip(&columns)
                    .map(|(value, col)| HeatmapCell {
                        row: key.to_string(),
                        col: col.clone(),
                        value: *value,
                        label: cell_label(*value, config.decimals),
                        style: config.colors.cell_style(*value, &domain),
                    })
                    .collect(),
            })
            .collect();

        let legend = config
            .colors
            .legend(&domain, config.legend_stops)
            .into_iter()
            .map(|stop| LegendEntry {
                label: format_value(stop.value, config.unit, config.decimals),
                color: stop.color,
            })
            .collect();

        Self {
            columns,
            rows,
            domain,
            legend,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &HeatmapCell> + '_ {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }

    pub fn cell(&self, row: &str, col: &str) -> Option<&HeatmapCell> {
        self.cells().find(|cell| cell.row == row && cell.col == col)
    }
}

fn cell_label(value: Option<f64>, decimals: usize) -> String {
    match value {
        None => String::new(),
        Some(v) if v.is_finite() => format_number(v, decimals),
        Some(v) => v.to_string(),
    }
}
