//! File-backed preference store.

use std::fs;
use std::path::PathBuf;

use crate::preference::STORAGE_KEY;

use super::PreferenceStore;

/// A preference store backed by a single small file.
///
/// The file lives at `<config dir>/<app>/theme-preference` by default,
/// where `<config dir>` is the platform config directory. Hosts that manage
/// their own paths can point the store at an explicit file with
/// [`FileStore::at`].
///
/// All I/O is best-effort: an unavailable config directory, an unreadable
/// file, or a failed write degrade to "no stored value" / "not persisted"
/// without surfacing an error. Failures are logged at debug level.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: Option<PathBuf>,
}

impl FileStore {
    /// Creates a store under the platform config directory for `app`.
    ///
    /// When the platform config directory cannot be determined, the store
    /// still constructs but every operation is a no-op.
    pub fn new(app: &str) -> Self {
        let path = dirs::config_dir().map(|dir| dir.join(app).join(STORAGE_KEY));
        if path.is_none() {
            log::debug!("no config directory available, theme preference will not persist");
        }
        Self { path }
    }

    /// Creates a store at an explicit file path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Returns the backing file path, if one could be determined.
    pub fn path(&self) -> Option<&PathBuf> {
        self.path.as_ref()
    }
}

impl PreferenceStore for FileStore {
    fn load(&self) -> Option<String> {
        let path = self.path.as_ref()?;
        match fs::read_to_string(path) {
            Ok(raw) => Some(raw.trim().to_string()),
            Err(err) => {
                if err.kind() != std::io::ErrorKind::NotFound {
                    log::debug!("failed to read {}: {}", path.display(), err);
                }
                None
            }
        }
    }

    fn save(&self, value: &str) {
        let Some(path) = self.path.as_ref() else {
            return;
        };
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Err(err) = fs::write(path, value) {
            log::debug!("failed to write {}: {}", path.display(), err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_store_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at(dir.path().join(STORAGE_KEY));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_file_store_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at(dir.path().join(STORAGE_KEY));

        store.save("dark");
        assert_eq!(store.load().as_deref(), Some("dark"));
    }

    #[test]
    fn test_file_store_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at(dir.path().join("nested").join("app").join(STORAGE_KEY));

        store.save("system");
        assert_eq!(store.load().as_deref(), Some("system"));
    }

    #[test]
    fn test_file_store_trims_stored_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORAGE_KEY);
        fs::write(&path, "light\n").unwrap();

        let store = FileStore::at(path);
        assert_eq!(store.load().as_deref(), Some("light"));
    }

    #[test]
    fn test_file_store_unwritable_path_is_silent() {
        // A directory at the target path makes the write fail.
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::at(dir.path());

        store.save("dark");
        assert_eq!(store.load(), None);
    }
}
