// ABOUTME: Default values injected into the notifier
// Replaces a host-framework configuration lookup with an explicit provider

/// Autoclose timer applied by message-creating calls, in milliseconds.
pub const DEFAULT_TIMER_MS: i64 = 2500;

/// Default values the notifier falls back to when a message call resets the
/// configuration.
///
/// Hosts that keep alert defaults in their own configuration layer build one
/// of these from it and pass it to the notifier constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Defaults {
    /// Timer used when a message-creating call resets the configuration.
    pub timer: i64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            timer: DEFAULT_TIMER_MS,
        }
    }
}
