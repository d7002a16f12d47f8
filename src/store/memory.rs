// ABOUTME: In-memory flash store with one-shot aging semantics
// Values survive exactly one aging cycle, the way frameworks age flash data

use std::collections::HashSet;

use indexmap::IndexMap;

use super::flash::{flash_key, FlashStore, ALERT, NAMESPACE};
use crate::config::{ConfigMap, ConfigValue};

/// In-memory [`FlashStore`] with request-cycle expiry.
///
/// `flash` marks a key fresh for the current cycle. Calling [`age`](Self::age)
/// ends the cycle: keys aged by the previous call are swept, freshly flashed
/// keys stay readable for exactly one more cycle. Re-flashing an aged key
/// starts its lifetime over.
///
/// This is what tests and non-web hosts use directly; web hosts typically
/// adapt their framework session instead.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: IndexMap<String, ConfigValue>,
    fresh: HashSet<String>,
    aged: HashSet<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a stored value, fresh or aged.
    pub fn get(&self, key: &str) -> Option<&ConfigValue> {
        self.values.get(key)
    }

    /// Number of live keys, fresh and aged.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when nothing is flashed at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates over live keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Ends the current request cycle.
    ///
    /// Keys aged by the previous call are removed; keys flashed since then
    /// stay readable until the next call.
    pub fn age(&mut self) {
        let swept = self.aged.len();
        for key in self.aged.drain() {
            self.values.shift_remove(&key);
        }
        self.aged = std::mem::take(&mut self.fresh);
        tracing::debug!("Aged flash data: swept {} key(s), {} still live", swept, self.values.len());
    }

    /// Renderer read boundary: the pending alert configuration, if any.
    ///
    /// Returns the de-namespaced `sweet_alert.*` entries when the
    /// `sweet_alert.alert` sentinel is present. The sentinel itself is not
    /// part of the returned mapping, and unrelated flashed keys are ignored.
    pub fn pending_alert(&self) -> Option<ConfigMap> {
        let marker = flash_key(ALERT);
        if !self.values.contains_key(&marker) {
            return None;
        }

        let prefix = format!("{}.", NAMESPACE);
        let mut config = ConfigMap::new();
        for (key, value) in &self.values {
            if *key == marker {
                continue;
            }
            if let Some(field) = key.strip_prefix(&prefix) {
                config.insert(field.to_string(), value.clone());
            }
        }
        Some(config)
    }
}

impl FlashStore for MemoryStore {
    fn flash(&mut self, key: &str, value: ConfigValue) {
        self.values.insert(key.to_string(), value);
        // Re-flashing an aged key must not let the next sweep take it.
        self.aged.remove(key);
        self.fresh.insert(key.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.values.shift_remove(key);
        self.fresh.remove(key);
        self.aged.remove(key);
    }
}
