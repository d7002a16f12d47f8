// ABOUTME: Field-name constants for the recognized alert configuration keys
// Shared by the notifier, the flash key namespacing, and the renderer contract

/// Main body text of the alert.
pub const TEXT: &str = "text";

/// Optional heading shown above the text.
pub const TITLE: &str = "title";

/// Optional icon name shown next to the message.
pub const ICON: &str = "icon";

/// Autoclose timer in milliseconds.
pub const TIMER: &str = "timer";

/// Map of confirm/cancel and extra action buttons.
pub const BUTTONS: &str = "buttons";

/// Raw HTML body, preferred over `text` by the renderer when present.
pub const CONTENT: &str = "content";

/// Whether a click outside the modal dismisses it.
pub const CLOSE_ON_CLICK_OUTSIDE: &str = "closeOnClickOutside";
