// ABOUTME: Flash storage for alert configuration
// The write-through capability trait and the in-memory implementation

pub mod flash;
pub mod memory;

pub use flash::{flash_key, FlashStore, ALERT, NAMESPACE};
pub use memory::MemoryStore;
