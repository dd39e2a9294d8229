use crate::store::{
    error::{Result as StoreResult, StoreError},
    key_value_store::KeyValueStore,
};

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use log::{debug, warn};

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

type Document = BTreeMap<String, String>;

/// Key-value store persisted as one JSON object on disk.
///
/// Every operation re-reads the file, so writes from another process are
/// visible on the next call. Writes replace the whole document through a
/// temp file, fsync and atomic rename: readers never observe a torn file,
/// and concurrent writers resolve as last-write-wins.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    /// Opens (without reading) the store at `path`, creating its directory.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir).map_err(|e| StoreError::dir_creation(dir.to_path_buf(), e))?;
        }

        Ok(Self {
            path,
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing file reads as empty. A corrupted file is moved aside and
    /// also reads as empty.
    fn read_document(&self) -> StoreResult<Document> {
        if !self.path.exists() {
            return Ok(Document::new());
        }

        let contents = fs::read_to_string(&self.path)
            .map_err(|e| StoreError::file_read(self.path.clone(), e))?;

        if contents.trim().is_empty() {
            return Ok(Document::new());
        }

        match serde_json::from_str::<Document>(&contents) {
            Ok(document) => Ok(document),
            Err(e) => {
                warn!("Session file corrupted at {:?}: {e}", self.path);
                self.backup_corrupted()?;
                Ok(Document::new())
            }
        }
    }

    /// 1. Writes to temp file
    /// 2. Syncs to disk (fsync)
    /// 3. Atomic rename to final location
    fn write_document(&self, document: &Document) -> StoreResult<()> {
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("session.json"));
        let temp_path = self
            .path
            .with_file_name(format!("{file_name}.tmp.{}", std::process::id()));

        let json = serde_json::to_string_pretty(document)?;

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .map_err(|e| StoreError::file_write(temp_path.clone(), e))?;
        }

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            StoreError::atomic_rename(temp_path, self.path.clone(), e)
        })?;

        debug!("Saved session store ({} keys)", document.len());
        Ok(())
    }

    /// Renames the store file to `<name>.corrupted.<timestamp>`.
    fn backup_corrupted(&self) -> StoreResult<PathBuf> {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let file_name = self
            .path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let backup_path = self
            .path
            .with_file_name(format!("{file_name}.corrupted.{timestamp}"));

        fs::rename(&self.path, &backup_path).map_err(StoreError::backup_failed)?;

        warn!("Backed up corrupted session file to {backup_path:?}");
        Ok(backup_path)
    }

    fn update<F>(&self, mutate: F) -> StoreResult<()>
    where
        F: FnOnce(&mut Document) -> bool,
    {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut document = self.read_document()?;
        if mutate(&mut document) {
            self.write_document(&document)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let mut document = self.read_document()?;
        Ok(document.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.update(|document| {
            document.insert(key.to_string(), value.to_string());
            true
        })
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        self.update(|document| document.remove(key).is_some())
    }
}
