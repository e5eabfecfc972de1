//! Best-effort persistence for the theme preference.
//!
//! This module provides:
//!
//! - [`PreferenceStore`]: the injected capability for reading and writing
//!   the single preference value
//! - [`MemoryStore`]: an in-process store, used as a test double and as the
//!   fallback for hosts without disk persistence
//! - [`FileStore`]: a one-file store under the platform config directory
//!
//! Stores are deliberately infallible at the API level: a broken theme
//! preference must never block the host application, so read failures
//! surface as `None` and write failures are dropped.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Capability for persisting the raw preference string.
///
/// Implementations own the storage medium; the controller only ever reads
/// and writes the single value keyed by
/// [`STORAGE_KEY`](crate::STORAGE_KEY).
pub trait PreferenceStore {
    /// Reads the raw stored value, or `None` if absent or unreadable.
    fn load(&self) -> Option<String>;

    /// Writes the raw value, best-effort. Failures are swallowed.
    fn save(&self, value: &str);
}

impl<S: PreferenceStore + ?Sized> PreferenceStore for &S {
    fn load(&self) -> Option<String> {
        (**self).load()
    }

    fn save(&self, value: &str) {
        (**self).save(value)
    }
}
