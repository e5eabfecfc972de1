//! In-process preference store.

use std::sync::Mutex;

use super::PreferenceStore;

/// A preference store backed by process memory.
///
/// Useful as a test double and as the store for hosts that keep the
/// preference alive only for the current session.
///
/// # Example
///
/// ```rust
/// use themeshift::{MemoryStore, PreferenceStore};
///
/// let store = MemoryStore::new();
/// assert_eq!(store.load(), None);
///
/// store.save("dark");
/// assert_eq!(store.load().as_deref(), Some("dark"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    value: Mutex<Option<String>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with a raw value.
    pub fn with_value(value: &str) -> Self {
        Self {
            value: Mutex::new(Some(value.to_string())),
        }
    }
}

impl PreferenceStore for MemoryStore {
    fn load(&self) -> Option<String> {
        self.value.lock().ok()?.clone()
    }

    fn save(&self, value: &str) {
        if let Ok(mut guard) = self.value.lock() {
            *guard = Some(value.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_starts_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_memory_store_save_then_load() {
        let store = MemoryStore::new();
        store.save("light");
        assert_eq!(store.load().as_deref(), Some("light"));
    }

    #[test]
    fn test_memory_store_overwrites_in_place() {
        let store = MemoryStore::with_value("light");
        store.save("system");
        assert_eq!(store.load().as_deref(), Some("system"));
    }

    #[test]
    fn test_memory_store_through_reference() {
        fn save_via<S: PreferenceStore>(store: S) {
            store.save("dark");
        }

        let store = MemoryStore::new();
        save_via(&store);
        assert_eq!(store.load().as_deref(), Some("dark"));
    }
}
