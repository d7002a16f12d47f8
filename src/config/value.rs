// ABOUTME: Tagged value type for alert configuration entries
// Keeps the mapping typed while leaving an escape hatch for arbitrary fields

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::buttons::Buttons;
use super::icon::Icon;

/// Insertion-ordered mapping of configuration field names to values.
pub type ConfigMap = IndexMap<String, ConfigValue>;

/// One alert configuration value.
///
/// Serializes untagged, so a flashed mapping turns into the plain JSON the
/// widget invocation expects: `true`, `2500`, `"Whoops!"`, nested objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// Boolean flag such as `closeOnClickOutside`.
    Bool(bool),

    /// Integer value such as the autoclose timer.
    Int(i64),

    /// Plain text value.
    String(String),

    /// The confirm/cancel button map.
    Buttons(Buttons),

    /// Arbitrary nested mapping, usually merged in via `set_config`.
    Map(ConfigMap),
}

impl ConfigValue {
    /// Reads this value as a boolean, if it is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Reads this value as an integer, if it is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Reads this value as a string slice, if it is text.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(value) => Some(value),
            _ => None,
        }
    }

    /// Reads this value as a button map, if it is one.
    pub fn as_buttons(&self) -> Option<&Buttons> {
        match self {
            ConfigValue::Buttons(buttons) => Some(buttons),
            _ => None,
        }
    }

    /// Reads this value as a nested mapping, if it is one.
    pub fn as_map(&self) -> Option<&ConfigMap> {
        match self {
            ConfigValue::Map(map) => Some(map),
            _ => None,
        }
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<i64> for ConfigValue {
    fn from(value: i64) -> Self {
        ConfigValue::Int(value)
    }
}

impl From<i32> for ConfigValue {
    fn from(value: i32) -> Self {
        ConfigValue::Int(i64::from(value))
    }
}

impl From<Icon> for ConfigValue {
    fn from(value: Icon) -> Self {
        ConfigValue::String(value.as_str().to_string())
    }
}

impl From<Buttons> for ConfigValue {
    fn from(value: Buttons) -> Self {
        ConfigValue::Buttons(value)
    }
}

impl From<ConfigMap> for ConfigValue {
    fn from(value: ConfigMap) -> Self {
        ConfigValue::Map(value)
    }
}
