// ABOUTME: Fluent alert notifier that mirrors every change into the flash store
// Composes the widget configuration for one request and keeps it redirect-safe

use uuid::Uuid;

use super::defaults::Defaults;
use crate::config::{keys, Button, Buttons, ConfigMap, ConfigValue, Icon, CANCEL, CONFIRM};
use crate::store::{flash_key, FlashStore, ALERT};

/// Fluent builder for one alert, writing through to a flash store.
///
/// Every mutator updates the internal configuration mapping and immediately
/// flashes the affected keys, so the alert survives the redirect boundary
/// without an explicit save step. One notifier serves one request; it is not
/// meant to be shared across threads.
///
/// # Examples
///
/// ```
/// use sweet_alert::{MemoryStore, Notifier};
///
/// let mut alert = Notifier::new(MemoryStore::new());
/// alert
///     .success("Well Done!", Some("Success!"))
///     .autoclose(4000);
/// ```
pub struct Notifier<S: FlashStore> {
    config: ConfigMap,
    store: S,
    defaults: Defaults,
}

impl<S: FlashStore> Notifier<S> {
    /// Creates a notifier over `store` with the stock defaults.
    pub fn new(store: S) -> Self {
        Self::with_defaults(store, Defaults::default())
    }

    /// Creates a notifier with host-supplied defaults.
    pub fn with_defaults(store: S, defaults: Defaults) -> Self {
        Self {
            config: ConfigMap::new(),
            store,
            defaults,
        }
    }

    /// Starts a new alert, replacing any configuration built so far.
    ///
    /// The mapping is reset to the message text plus the defaults: hidden
    /// confirm/cancel buttons, the autoclose timer, and click-outside
    /// dismissal off. `title` and `icon` are only recorded when given, never
    /// as placeholder values. Everything in the mapping is flashed, followed
    /// by a fresh pending-alert marker for the renderer.
    pub fn message(&mut self, text: &str, title: Option<&str>, icon: Option<Icon>) -> &mut Self {
        self.config = ConfigMap::new();
        self.config.insert(keys::TEXT.to_string(), ConfigValue::from(text));
        self.config
            .insert(keys::BUTTONS.to_string(), ConfigValue::Buttons(Buttons::default()));
        self.config
            .insert(keys::TIMER.to_string(), ConfigValue::Int(self.defaults.timer));
        self.config
            .insert(keys::CLOSE_ON_CLICK_OUTSIDE.to_string(), ConfigValue::Bool(false));

        if let Some(title) = title {
            self.config.insert(keys::TITLE.to_string(), ConfigValue::from(title));
        }
        if let Some(icon) = icon {
            self.config.insert(keys::ICON.to_string(), ConfigValue::from(icon));
        }

        self.flash_all();
        self.flash_marker();
        self
    }

    /// Alert without an icon.
    pub fn basic(&mut self, text: &str, title: Option<&str>) -> &mut Self {
        self.message(text, title, None)
    }

    /// Informational alert.
    pub fn info(&mut self, text: &str, title: Option<&str>) -> &mut Self {
        self.message(text, title, Some(Icon::Info))
    }

    /// Success alert.
    pub fn success(&mut self, text: &str, title: Option<&str>) -> &mut Self {
        self.message(text, title, Some(Icon::Success))
    }

    /// Warning alert.
    pub fn warning(&mut self, text: &str, title: Option<&str>) -> &mut Self {
        self.message(text, title, Some(Icon::Warning))
    }

    /// Error alert.
    pub fn error(&mut self, text: &str, title: Option<&str>) -> &mut Self {
        self.message(text, title, Some(Icon::Error))
    }

    /// Closes the alert automatically after `timer` milliseconds.
    ///
    /// The value is stored as given; there are no sign or range checks.
    pub fn autoclose(&mut self, timer: i64) -> &mut Self {
        self.config.insert(keys::TIMER.to_string(), ConfigValue::Int(timer));
        self.flash_field(keys::TIMER);
        self
    }

    /// Keeps the alert on screen until the user confirms it.
    ///
    /// Removes the autoclose timer from the configuration and from the flash
    /// store, and shows a confirm button with the given label.
    pub fn persistent(&mut self, confirm_text: &str) -> &mut Self {
        self.config.shift_remove(keys::TIMER);
        let timer_key = flash_key(keys::TIMER);
        tracing::debug!("Removing flashed key {}", timer_key);
        self.store.remove(&timer_key);

        let button = Button::labeled(confirm_text);
        self.update_buttons(|buttons| buttons.set(CONFIRM, button));
        self
    }

    /// Renders the message as raw HTML.
    ///
    /// Copies the current text into the `content` field; the renderer prefers
    /// `content` over `text` when both are present, and `text` stays in
    /// place. Without any text set yet this does nothing.
    pub fn html(&mut self) -> &mut Self {
        if let Some(text) = self.config.get(keys::TEXT).cloned() {
            self.config.insert(keys::CONTENT.to_string(), text);
            self.flash_field(keys::CONTENT);
        }
        self
    }

    /// Shows the confirm button with the given label.
    pub fn confirm_button(&mut self, text: &str) -> &mut Self {
        let button = Button::labeled(text);
        self.update_buttons(|buttons| buttons.set(CONFIRM, button));
        self
    }

    /// Shows the cancel button with the given label.
    pub fn cancel_button(&mut self, text: &str) -> &mut Self {
        let button = Button::labeled(text);
        self.update_buttons(|buttons| buttons.set(CANCEL, button));
        self
    }

    /// Adds or replaces a named button, leaving all other entries alone.
    pub fn add_button(&mut self, key: &str, text: &str) -> &mut Self {
        let button = Button::labeled(text);
        self.update_buttons(|buttons| buttons.set(key, button));
        self
    }

    /// Lets a click outside the modal dismiss the alert.
    pub fn close_on_click_outside(&mut self, enabled: bool) -> &mut Self {
        self.config
            .insert(keys::CLOSE_ON_CLICK_OUTSIDE.to_string(), ConfigValue::Bool(enabled));
        self.flash_field(keys::CLOSE_ON_CLICK_OUTSIDE);
        self
    }

    /// Merges arbitrary widget options into the configuration.
    ///
    /// Each entry overwrites any existing value under its key and is flashed
    /// individually under its namespaced key.
    pub fn set_config<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>) -> &mut Self
    where
        K: Into<String>,
        V: Into<ConfigValue>,
    {
        for (key, value) in entries {
            let key = key.into();
            self.config.insert(key.clone(), value.into());
            self.flash_field(&key);
        }
        self
    }

    /// Reads one configuration value. `None` means the key was never set,
    /// which callers can tell apart from stored `false`, `0`, or `""`.
    pub fn get_config(&self, key: &str) -> Option<&ConfigValue> {
        self.config.get(key)
    }

    /// The whole configuration mapping, in insertion order.
    pub fn config(&self) -> &ConfigMap {
        &self.config
    }

    /// Borrows the underlying flash store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the notifier, handing the flash store back.
    pub fn into_store(self) -> S {
        self.store
    }

    fn update_buttons(&mut self, apply: impl FnOnce(&mut Buttons)) {
        if !matches!(self.config.get(keys::BUTTONS), Some(ConfigValue::Buttons(_))) {
            self.config
                .insert(keys::BUTTONS.to_string(), ConfigValue::Buttons(Buttons::default()));
        }
        if let Some(ConfigValue::Buttons(buttons)) = self.config.get_mut(keys::BUTTONS) {
            apply(buttons);
        }
        self.flash_field(keys::BUTTONS);
    }

    fn flash_field(&mut self, field: &str) {
        if let Some(value) = self.config.get(field).cloned() {
            let key = flash_key(field);
            tracing::debug!("Flashing {}", key);
            self.store.flash(&key, value);
        }
    }

    fn flash_all(&mut self) {
        let fields: Vec<String> = self.config.keys().cloned().collect();
        for field in fields {
            self.flash_field(&field);
        }
    }

    fn flash_marker(&mut self) {
        let token = Uuid::new_v4().to_string();
        let key = flash_key(ALERT);
        tracing::debug!("Flashing pending-alert marker {}", key);
        self.store.flash(&key, ConfigValue::String(token));
    }
}
