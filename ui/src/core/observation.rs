//! Flat categorical observations and the ordered key sets derived from them.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use api::BottleneckRecord;

/// One measurement tying a row category and a column category to a value,
/// e.g. (trace, activity) → waiting time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub row: String,
    pub col: String,
    pub value: f64,
}

impl Observation {
    pub fn new(row: impl Into<String>, col: impl Into<String>, value: f64) -> Self {
        Self {
            row: row.into(),
            col: col.into(),
            value,
        }
    }
}

impl From<&BottleneckRecord> for Observation {
    fn from(record: &BottleneckRecord) -> Self {
        Self::new(
            record.trace_id.as_str(),
            record.activity.as_str(),
            record.wait_time,
        )
    }
}

/// Unique keys in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet {
    keys: IndexSet<String>,
}

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a key unless already present; returns its position either way.
    pub fn insert(&mut self, key: &str) -> usize {
        match self.keys.get_index_of(key) {
            Some(index) => index,
            None => self.keys.insert_full(key.to_string()).0,
        }
    }

    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.keys.get_index_of(key)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.keys.get_index(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.keys.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.keys.iter().cloned().collect()
    }
}

impl<'a> FromIterator<&'a str> for KeySet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = KeySet::new();
        for key in iter {
            set.insert(key);
        }
        set
    }
}

/// Row and column key sets of one observation list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryIndex {
    pub rows: KeySet,
    pub cols: KeySet,
}

impl CategoryIndex {
    /// Derive both key sets in a single pass. Order is first occurrence, never
    /// sorted, so the table keeps the same layout across re-renders.
    pub fn from_observations(observations: &[Observation]) -> Self {
        let mut index = Self::default();
        for observation in observations {
            index.rows.insert(&observation.row);
            index.cols.insert(&observation.col);
        }
        index
    }
}
