//! Content fingerprints so derived chart data is rebuilt only when the
//! observations actually change, not on every render.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use super::observation::Observation;

/// Order-sensitive hash of keys and value bit patterns. `-0.0` and `0.0`
/// hash differently, as do distinct NaN payloads; both only cost a rebuild.
pub fn fingerprint(observations: &[Observation]) -> u64 {
    let mut hasher = DefaultHasher::new();
    observations.len().hash(&mut hasher);
    for observation in observations {
        observation.row.hash(&mut hasher);
        observation.col.hash(&mut hasher);
        observation.value.to_bits().hash(&mut hasher);
    }
    hasher.finish()
}

/// Single-slot cache keyed by a fingerprint.
#[derive(Debug, Clone)]
pub struct Memo<T> {
    slot: Option<(u64, T)>,
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Memo<T> {
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Return the cached value if `key` matches, otherwise compute and store.
    pub fn get_or_compute(&mut self, key: u64, compute: impl FnOnce() -> T) -> &T {
        let slot = match self.slot.take() {
            Some((cached, value)) if cached == key => (cached, value),
            _ => {
                tracing::debug!(key, "memo miss");
                (key, compute())
            }
        };
        &self.slot.insert(slot).1
    }

    pub fn key(&self) -> Option<u64> {
        self.slot.as_ref().map(|(key, _)| *key)
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }
}
