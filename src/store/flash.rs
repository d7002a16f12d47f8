// ABOUTME: Flash storage seam between the notifier and the host session layer
// Defines the write-through capability and the namespaced key contract

use crate::config::ConfigValue;

/// Namespace prefix for every flashed alert key.
pub const NAMESPACE: &str = "sweet_alert";

/// Field name of the pending-alert sentinel marker.
pub const ALERT: &str = "alert";

/// Builds the flash-store key for a configuration field.
///
/// The renderer relies on these exact key strings, for example
/// `sweet_alert.title` or `sweet_alert.closeOnClickOutside`.
pub fn flash_key(field: &str) -> String {
    format!("{}.{}", NAMESPACE, field)
}

/// Request-scoped flash storage consumed by the notifier.
///
/// Implementations keep a value readable for exactly one subsequent retrieval
/// cycle: it survives one redirect, then expires. The crate ships
/// [`MemoryStore`](super::MemoryStore); web hosts adapt their own session
/// layer behind this trait.
pub trait FlashStore {
    /// Stores `value` under `key` for one retrieval cycle.
    fn flash(&mut self, key: &str, value: ConfigValue);

    /// Forgets a previously flashed key before it is read.
    fn remove(&mut self, key: &str);
}
