// ABOUTME: Button configuration for the alert's dismiss and confirm actions
// Keeps the confirm/cancel pair around plus any extra buttons added by name

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Key of the confirm button present on every alert.
pub const CONFIRM: &str = "confirm";

/// Key of the cancel button present on every alert.
pub const CANCEL: &str = "cancel";

/// One action button on the alert widget.
///
/// A button without a label stays hidden; giving it a label makes it visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    /// Label shown on the button. An absent label is omitted from the
    /// serialized config rather than written as null.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Whether the widget renders this button.
    #[serde(default)]
    pub visible: bool,
}

impl Button {
    /// Hidden button without a label, the default for confirm and cancel.
    pub fn hidden() -> Self {
        Self::default()
    }

    /// Visible button with the given label.
    pub fn labeled(text: &str) -> Self {
        Self {
            text: Some(text.to_string()),
            visible: true,
        }
    }
}

/// Ordered map of button key to button settings.
///
/// Starts out with hidden `confirm` and `cancel` entries; extra buttons keep
/// their insertion order after the pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Buttons {
    entries: IndexMap<String, Button>,
}

impl Default for Buttons {
    fn default() -> Self {
        let mut entries = IndexMap::new();
        entries.insert(CONFIRM.to_string(), Button::hidden());
        entries.insert(CANCEL.to_string(), Button::hidden());
        Self { entries }
    }
}

impl Buttons {
    /// Inserts or replaces the button stored under `key`.
    pub fn set(&mut self, key: &str, button: Button) {
        self.entries.insert(key.to_string(), button);
    }

    /// Reads the button stored under `key`.
    pub fn get(&self, key: &str) -> Option<&Button> {
        self.entries.get(key)
    }

    /// Number of configured buttons, the confirm/cancel pair included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no buttons are configured at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_buttons_are_hidden_confirm_and_cancel() {
        let buttons = Buttons::default();
        assert_eq!(buttons.len(), 2);
        assert_eq!(buttons.get(CONFIRM), Some(&Button::hidden()));
        assert_eq!(buttons.get(CANCEL), Some(&Button::hidden()));
    }

    #[test]
    fn test_labeled_button_becomes_visible() {
        let button = Button::labeled("Got it!");
        assert_eq!(button.text.as_deref(), Some("Got it!"));
        assert!(button.visible);
    }

    #[test]
    fn test_set_overwrites_existing_entry() {
        let mut buttons = Buttons::default();
        buttons.set(CONFIRM, Button::labeled("Yes"));
        buttons.set(CONFIRM, Button::labeled("Sure"));
        assert_eq!(buttons.get(CONFIRM), Some(&Button::labeled("Sure")));
        assert_eq!(buttons.len(), 2);
    }

    #[test]
    fn test_extra_buttons_keep_the_default_pair() {
        let mut buttons = Buttons::default();
        buttons.set("paypal", Button::labeled("Paypal"));
        assert_eq!(buttons.len(), 3);
        assert_eq!(buttons.get(CONFIRM), Some(&Button::hidden()));
        assert_eq!(buttons.get(CANCEL), Some(&Button::hidden()));
    }

    #[test]
    fn test_hidden_button_serializes_without_text_key() {
        let json = serde_json::to_value(Button::hidden()).unwrap();
        assert_eq!(json, serde_json::json!({"visible": false}));
    }

    #[test]
    fn test_labeled_button_serializes_text_and_visibility() {
        let json = serde_json::to_value(Button::labeled("help!")).unwrap();
        assert_eq!(json, serde_json::json!({"text": "help!", "visible": true}));
    }
}
