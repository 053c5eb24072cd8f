//! File-backed store.
//!
//! The whole store is one JSON object of string values. The file is the only
//! copy: every read loads it and every mutation is a read-modify-write,
//! replaced via a temporary file and a rename so a crash mid-write leaves the
//! previous contents intact. Edits made by another process (such as
//! `bb-cli theme set` while the server runs) are therefore seen on the next
//! access, and concurrent writers to different keys do not undo each other.
//! Writers to the same key still race: the last completed write wins.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{KeyValueStore, StorageError};

type Items = BTreeMap<String, String>;

/// A store persisted to a JSON file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    /// Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Open the store at `path`, starting empty if the file does not exist yet.
    ///
    /// The file (and its parent directories) is only created on the first write.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file exists but cannot be read, or
    /// `StorageError::Serde` if it is not a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let path = path.into();
        let items = load(&path)?;

        tracing::debug!(path = %path.display(), items = items.len(), "Opened local store");

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply `change` to the current file contents and write the result.
    ///
    /// Nothing is written when `change` reports no modification. A failed
    /// write leaves the file, and so every later read, as it was.
    fn update<F>(&self, change: F) -> Result<(), StorageError>
    where
        F: FnOnce(&mut Items) -> bool,
    {
        let _guard = self.write_lock.lock().map_err(|_| StorageError::Poisoned)?;
        let mut items = load(&self.path)?;
        if change(&mut items) {
            self.persist(&items)?;
        }
        Ok(())
    }

    fn persist(&self, items: &Items) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(items)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, contents)?;
        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

fn load(path: &Path) -> Result<Items, StorageError> {
    match fs::read_to_string(path) {
        Ok(contents) if contents.trim().is_empty() => Ok(Items::new()),
        Ok(contents) => Ok(serde_json::from_str(&contents)?),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Items::new()),
        Err(e) => Err(e.into()),
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(load(&self.path)?.remove(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.update(|items| {
            items.insert(key.to_owned(), value.to_owned());
            true
        })
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.update(|items| items.remove(key).is_some())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "beauty-box-store-{}-{}",
            name,
            uuid::Uuid::new_v4()
        ));
        dir.join("local_storage.json")
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let store = FileStore::open(temp_path("missing")).unwrap();
        assert_eq!(store.get_item("theme").unwrap(), None);
        assert!(!store.path().exists());
    }

    #[test]
    fn test_values_survive_reopen() {
        let path = temp_path("reopen");

        let store = FileStore::open(&path).unwrap();
        store.set_item("theme", "dark").unwrap();
        store.set_item("favorites_anon", "[1,2]").unwrap();
        store.remove_item("favorites_anon").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(reopened.get_item("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(reopened.get_item("favorites_anon").unwrap(), None);

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_open_rejects_corrupt_file() {
        let path = temp_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "not json").unwrap();

        let result = FileStore::open(&path);
        assert!(matches!(result, Err(StorageError::Serde(_))));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_sees_writes_from_another_handle() {
        let path = temp_path("shared");

        let server = FileStore::open(&path).unwrap();
        let cli = FileStore::open(&path).unwrap();

        server.set_item("favorites_anon", "[1]").unwrap();
        cli.set_item("theme", "dark").unwrap();
        assert_eq!(server.get_item("theme").unwrap().as_deref(), Some("dark"));

        // A later write from the first handle keeps the other handle's key.
        server.set_item("favorites_anon", "[1,2]").unwrap();
        assert_eq!(cli.get_item("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(cli.get_item("favorites_anon").unwrap().as_deref(), Some("[1,2]"));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_failed_write_changes_nothing() {
        let path = temp_path("blocked");
        let store = FileStore::open(&path).unwrap();
        store.set_item("theme", "light").unwrap();

        // A directory in the way of the temporary file makes the write fail.
        let tmp_path = path.with_extension("json.tmp");
        fs::create_dir(&tmp_path).unwrap();
        assert!(store.set_item("theme", "dark").is_err());
        assert!(store.remove_item("theme").is_err());
        fs::remove_dir(&tmp_path).unwrap();

        assert_eq!(store.get_item("theme").unwrap().as_deref(), Some("light"));

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }

    #[test]
    fn test_failed_register_leaves_no_account() {
        use crate::services::AuthService;
        use crate::services::auth::AuthError;

        let path = temp_path("register");
        let store = FileStore::open(&path).unwrap();
        store.set_item("theme", "light").unwrap();

        let tmp_path = path.with_extension("json.tmp");
        fs::create_dir(&tmp_path).unwrap();
        let auth = AuthService::new(&store);
        assert!(matches!(
            auth.register("a@x.com", "pw"),
            Err(AuthError::Storage(_))
        ));
        fs::remove_dir(&tmp_path).unwrap();

        // Nothing half-registered: the same registration now succeeds.
        assert!(matches!(
            auth.sign_in("a@x.com", "pw"),
            Err(AuthError::InvalidCredentials)
        ));
        assert!(auth.register("a@x.com", "pw").is_ok());

        fs::remove_dir_all(path.parent().unwrap()).unwrap();
    }
}
