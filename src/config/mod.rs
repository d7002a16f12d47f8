// ABOUTME: Alert configuration data model
// Field names, value types, buttons, and icons shared across the crate

pub mod buttons;
pub mod icon;
pub mod keys;
pub mod value;

pub use buttons::{Button, Buttons, CANCEL, CONFIRM};
pub use icon::{Icon, ParseIconError};
pub use value::{ConfigMap, ConfigValue};
