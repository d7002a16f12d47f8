// ABOUTME: Alert composition module
// The fluent notifier and its injectable defaults

pub mod defaults;
pub mod notifier;

pub use defaults::{Defaults, DEFAULT_TIMER_MS};
pub use notifier::Notifier;
