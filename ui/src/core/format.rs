//! Formatting helpers for presenting aggregates. Applied at render time only;
//! stored values are never rounded.

use serde::{Deserialize, Serialize};

/// Placeholder for values that cannot be shown as a number.
pub const MISSING: &str = "—";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Unit {
    #[default]
    Plain,
    Seconds,
    Minutes,
    Hours,
    Currency,
    Count,
}

impl Unit {
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Plain | Unit::Count => "",
            Unit::Seconds => " s",
            Unit::Minutes => " min",
            Unit::Hours => " h",
            Unit::Currency => " €",
        }
    }
}

pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return MISSING.to_string();
    }
    format!("{value:.decimals$}")
}

/// Number plus unit suffix. Counts ignore `decimals` and print whole numbers.
pub fn format_value(value: f64, unit: Unit, decimals: usize) -> String {
    if !value.is_finite() {
        return MISSING.to_string();
    }
    let decimals = match unit {
        Unit::Count => 0,
        Unit::Currency => decimals.max(2),
        _ => decimals,
    };
    format!("{}{}", format_number(value, decimals), unit.suffix())
}

/// `share` in `[0, 1]` → `"42.0%"`.
pub fn format_percent(share: f64) -> String {
    if !share.is_finite() {
        return MISSING.to_string();
    }
    format!("{:.1}%", share * 100.0)
}

pub fn seconds_to_hours(seconds: f64) -> f64 {
    seconds / 3600.0
}
