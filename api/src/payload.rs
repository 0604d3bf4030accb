//! Typed schema of the analysis service reply.
//!
//! Sections may be missing (the service omits what it could not compute), but
//! every record that is present must match its shape exactly. Numeric fields
//! accept `null`, which pandas emits for missing aggregates; it decodes as NaN
//! and is treated downstream as a non-finite value rather than a decode error.

use serde::{Deserialize, Deserializer, Serialize};

use crate::AnalysisError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPayload {
    #[serde(default)]
    pub bottleneck: Vec<BottleneckRecord>,
    #[serde(default)]
    pub durations: Vec<DurationRecord>,
    #[serde(default)]
    pub breakdown: Vec<BreakdownRecord>,
    #[serde(default)]
    pub costs: Vec<CostRecord>,
    #[serde(default, rename = "itemCosts")]
    pub item_costs: Vec<ItemCostRecord>,
    #[serde(default)]
    pub resource_bubble: Vec<ResourceRecord>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default, rename = "eventsOverTime")]
    pub events_over_time: Vec<EventCountRecord>,
    #[serde(default, rename = "nodeTypeCounts")]
    pub node_type_counts: Vec<NodeTypeRecord>,
    #[serde(default, rename = "caseDurations")]
    pub case_durations: Vec<CaseDurationRecord>,
    #[serde(default, rename = "costsByActivity")]
    pub costs_by_activity: Vec<ActivityCostRecord>,
}

impl AnalysisPayload {
    pub fn from_json(raw: &str) -> Result<Self, AnalysisError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_slice(raw: &[u8]) -> Result<Self, AnalysisError> {
        Ok(serde_json::from_slice(raw)?)
    }

    /// True when no section carries a single record (warnings excluded).
    pub fn is_empty(&self) -> bool {
        self.section_sizes().iter().all(|(_, len)| *len == 0)
    }

    /// Record count per section, in wire order. Used for logging.
    pub fn section_sizes(&self) -> [(&'static str, usize); 10] {
        [
            ("bottleneck", self.bottleneck.len()),
            ("durations", self.durations.len()),
            ("breakdown", self.breakdown.len()),
            ("costs", self.costs.len()),
            ("itemCosts", self.item_costs.len()),
            ("resource_bubble", self.resource_bubble.len()),
            ("eventsOverTime", self.events_over_time.len()),
            ("nodeTypeCounts", self.node_type_counts.len()),
            ("caseDurations", self.case_durations.len()),
            ("costsByActivity", self.costs_by_activity.len()),
        ]
    }
}

/// Waiting time of one activity inside one trace (minutes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BottleneckRecord {
    #[serde(rename = "traceId", deserialize_with = "string_like")]
    pub trace_id: String,
    #[serde(deserialize_with = "string_like")]
    pub activity: String,
    #[serde(deserialize_with = "nullable_f64")]
    pub wait_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationRecord {
    #[serde(deserialize_with = "string_like")]
    pub activity: String,
    #[serde(deserialize_with = "nullable_f64")]
    pub avg_duration: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub min_duration: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub max_duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownRecord {
    #[serde(deserialize_with = "string_like")]
    pub activity: String,
    #[serde(deserialize_with = "nullable_f64")]
    pub avg_cycle_time: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub avg_waiting_time: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub avg_processing_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostRecord {
    #[serde(deserialize_with = "string_like")]
    pub activity: String,
    #[serde(deserialize_with = "nullable_f64")]
    pub avg_fixed_cost: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub avg_variable_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemCostRecord {
    #[serde(rename = "instanceType", deserialize_with = "string_like")]
    pub instance_type: String,
    #[serde(deserialize_with = "nullable_f64")]
    pub avg_item_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    #[serde(deserialize_with = "string_like")]
    pub resource: String,
    #[serde(deserialize_with = "nullable_f64")]
    pub avg_cost: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub usage_count: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventCountRecord {
    #[serde(deserialize_with = "string_like")]
    pub timestamp: String,
    #[serde(deserialize_with = "nullable_f64")]
    pub count: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeTypeRecord {
    #[serde(rename = "nodeType", deserialize_with = "string_like")]
    pub node_type: String,
    #[serde(deserialize_with = "nullable_f64")]
    pub count: f64,
}

/// Case duration in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseDurationRecord {
    #[serde(rename = "traceId", deserialize_with = "string_like")]
    pub trace_id: String,
    #[serde(deserialize_with = "nullable_f64")]
    pub duration: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityCostRecord {
    #[serde(deserialize_with = "string_like")]
    pub activity: String,
    #[serde(deserialize_with = "nullable_f64")]
    pub total_fixed_cost: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub total_resource_cost: f64,
    #[serde(deserialize_with = "nullable_f64")]
    pub total_cost: f64,
}

fn nullable_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// Keys arrive as strings, but pandas happily emits integer trace ids.
fn string_like<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Key {
        Text(String),
        Int(i64),
        Float(f64),
        Flag(bool),
    }

    Ok(match Key::deserialize(deserializer)? {
        Key::Text(text) => text,
        Key::Int(value) => value.to_string(),
        Key::Float(value) => value.to_string(),
        Key::Flag(value) => value.to_string(),
    })
}
