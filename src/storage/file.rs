// SPDX-License-Identifier: MPL-2.0
//! File-backed storage using CBOR.
//!
//! All entries live in a single `storage.cbor` map inside the app data
//! directory. The map is read once when the storage is opened and
//! rewritten after every mutation, so the file always reflects the
//! in-memory state when the write succeeds.
//!
//! # Path Resolution
//!
//! 1. `base_dir` argument of [`FileStorage::open_in`] (if `Some`)
//! 2. `--data-dir` CLI argument, then `RECIPE_LENS_DATA_DIR`
//! 3. Platform-specific data directory

use super::LocalStorage;
use crate::app::paths;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fs;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

/// Storage file name within the app data directory.
const STORAGE_FILE: &str = "storage.cbor";

#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: RefCell<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Opens the storage at the default location.
    ///
    /// Returns `None` when no data directory can be determined. The
    /// optional string is an i18n-style warning key describing a read
    /// problem; the storage then starts empty.
    pub fn open() -> Option<(Self, Option<String>)> {
        Self::open_in(None)
    }

    /// Opens the storage in a custom directory.
    pub fn open_in(base_dir: Option<PathBuf>) -> Option<(Self, Option<String>)> {
        let mut path = paths::get_app_data_dir_with_override(base_dir)?;
        path.push(STORAGE_FILE);
        let (entries, warning) = read_entries(&path);
        Some((
            Self {
                path,
                entries: RefCell::new(entries),
            },
            warning,
        ))
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) {
        if let Err(key) = write_entries(&self.path, &self.entries.borrow()) {
            tracing::warn!(path = %self.path.display(), reason = key, "failed to persist storage");
        }
    }
}

fn read_entries(path: &Path) -> (BTreeMap<String, String>, Option<String>) {
    if !path.exists() {
        return (BTreeMap::new(), None);
    }

    match fs::File::open(path) {
        Ok(file) => match ciborium::from_reader(BufReader::new(file)) {
            Ok(entries) => (entries, None),
            Err(_) => (
                BTreeMap::new(),
                Some("storage-parse-error".to_string()),
            ),
        },
        Err(_) => (BTreeMap::new(), Some("storage-read-error".to_string())),
    }
}

fn write_entries(path: &Path, entries: &BTreeMap<String, String>) -> Result<(), &'static str> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|_| "storage-dir-error")?;
    }
    let file = fs::File::create(path).map_err(|_| "storage-create-error")?;
    ciborium::into_writer(entries, BufWriter::new(file)).map_err(|_| "storage-write-error")
}

impl LocalStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove_item(&self, key: &str) {
        let removed = self.entries.borrow_mut().remove(key).is_some();
        if removed {
            self.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn entries_survive_reopen() {
        let temp_dir = tempdir().expect("create temp dir");
        let base = temp_dir.path().to_path_buf();

        {
            let (storage, warning) = FileStorage::open_in(Some(base.clone())).expect("open");
            assert!(warning.is_none());
            storage.set_item("preferred-language", "es");
            storage.set_item("app-theme", "dark");
            storage.remove_item("app-theme");
        }

        let (reopened, warning) = FileStorage::open_in(Some(base)).expect("reopen");
        assert!(warning.is_none());
        assert_eq!(
            reopened.get_item("preferred-language").as_deref(),
            Some("es")
        );
        assert!(reopened.get_item("app-theme").is_none());
    }

    #[test]
    fn corrupted_file_starts_empty_with_warning() {
        let temp_dir = tempdir().expect("create temp dir");
        fs::write(temp_dir.path().join(STORAGE_FILE), "not valid cbor data").expect("write");

        let (storage, warning) =
            FileStorage::open_in(Some(temp_dir.path().to_path_buf())).expect("open");

        assert_eq!(warning.as_deref(), Some("storage-parse-error"));
        assert!(storage.get_item("preferred-language").is_none());
    }

    #[test]
    fn first_write_creates_nested_directories() {
        let temp_dir = tempdir().expect("create temp dir");
        let nested = temp_dir.path().join("nested").join("deeply");

        let (storage, _) = FileStorage::open_in(Some(nested.clone())).expect("open");
        storage.set_item("k", "v");

        assert!(nested.join(STORAGE_FILE).exists());
        assert_eq!(storage.path(), nested.join(STORAGE_FILE).as_path());
    }
}
