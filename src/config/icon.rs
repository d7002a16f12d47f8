// ABOUTME: Icon variants the alert widget can display next to the message
// Serialized as the lowercase names the widget understands

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Icon displayed by the alert widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Info,
    Success,
    Warning,
    Error,
}

impl Icon {
    /// Widget-facing name of this icon.
    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::Info => "info",
            Icon::Success => "success",
            Icon::Warning => "warning",
            Icon::Error => "error",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an icon name is not one of the four known variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown alert icon: {0}")]
pub struct ParseIconError(pub String);

impl FromStr for Icon {
    type Err = ParseIconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "info" => Ok(Icon::Info),
            "success" => Ok(Icon::Success),
            "warning" => Ok(Icon::Warning),
            "error" => Ok(Icon::Error),
            other => Err(ParseIconError(other.to_string())),
        }
    }
}
