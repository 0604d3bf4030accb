//! Pie slices as shares of the total.

use serde::{Deserialize, Serialize};

use crate::core::format::{format_percent, format_value, Unit};
use crate::core::scale::{palette, Rgb};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieConfig {
    pub unit: Unit,
    pub decimals: usize,
}

impl Default for PieConfig {
    fn default() -> Self {
        Self {
            unit: Unit::Currency,
            decimals: 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Fraction of the total in `[0, 1]`.
    pub share: f64,
    pub value_label: String,
    pub percent_label: String,
    pub color: Rgb,
}

/// One slice per item, in input order.
///
/// `share` is the value over the sum of every finite value, so negative values
/// pull the total down and take a negative share. Non-finite values are left
/// out of the total and get a zero share. A zero total gives every slice a
/// zero share instead of NaN.
pub fn pie_slices<I, S>(items: I, config: &PieConfig) -> Vec<PieSlice>
where
    I: IntoIterator<Item = (S, f64)>,
    S: Into<String>,
{
    let items: Vec<(String, f64)> = items
        .into_iter()
        .map(|(label, value)| (label.into(), value))
        .collect();

    let total: f64 = items.iter().map(|(_, v)| *v).filter(|v| v.is_finite()).sum();
    let colors = palette(items.len());

    items
        .into_iter()
        .zip(colors)
        .map(|((label, value), color)| {
            let share = if total != 0.0 && value.is_finite() {
                value / total
            } else {
                0.0
            };
            PieSlice {
                value_label: format_value(value, config.unit, config.decimals),
                percent_label: format_percent(share),
                label,
                value,
                share,
                color,
            }
        })
        .collect()
}
