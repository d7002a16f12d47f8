// ABOUTME: Library crate for sweet-alert exposing the notifier, config model, and flash stores

//! Fluent SweetAlert notification builder with request-scoped flash storage.
//!
//! Compose a modal alert during one request, let it survive the redirect, and
//! render it on the next page load. Every builder call writes through to an
//! injected [`FlashStore`], so the configuration is already persisted by the
//! time the redirect happens.
//!
//! ```
//! use sweet_alert::{MemoryStore, Notifier};
//!
//! let mut alert = Notifier::new(MemoryStore::new());
//! alert.error("Something wrong happened!", Some("Whoops!"));
//!
//! // After the redirect, the rendering layer picks the alert back up:
//! let store = alert.into_store();
//! let pending = store.pending_alert().expect("alert was flashed");
//! assert_eq!(pending["title"].as_str(), Some("Whoops!"));
//! assert_eq!(pending["icon"].as_str(), Some("error"));
//! ```

pub mod alert;
pub mod config;
pub mod store;

pub use alert::{Defaults, Notifier, DEFAULT_TIMER_MS};
pub use config::{Button, Buttons, ConfigMap, ConfigValue, Icon, ParseIconError, CANCEL, CONFIRM};
pub use store::{flash_key, FlashStore, MemoryStore, ALERT, NAMESPACE};
