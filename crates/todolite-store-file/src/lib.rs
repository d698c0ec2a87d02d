//! JSON file persistence for todolite.
//!
//! The whole task store is serialized as one JSON array under a fixed key,
//! mirroring the browser-storage layout the CLI replaces: an array of
//! `{id, text, completed}` objects in insertion order.

mod error;

pub use error::FileStoreError;

use std::fs;
use std::path::{Path, PathBuf};
use todolite_core::{Task, TaskStore};
use tracing::{debug, info};

/// File name of the storage key inside the chosen directory.
const STORAGE_KEY: &str = "gsdTasks.json";

/// Storage anchored at `<dir>/gsdTasks.json`.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Anchor the store inside `dir`. The file itself is created lazily on
    /// the first save.
    pub fn open(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(STORAGE_KEY),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize the full store and write it under the storage key.
    ///
    /// The write goes through a temporary sibling file and a rename, so a
    /// crash mid-write never leaves a truncated array behind.
    ///
    /// # Errors
    /// Returns [`FileStoreError::Serialize`] when encoding fails and
    /// [`FileStoreError::Io`] when the file cannot be written.
    pub fn save(&self, store: &TaskStore) -> Result<(), FileStoreError> {
        let body = serde_json::to_string_pretty(store.tasks())?;

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, body).map_err(|source| FileStoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| FileStoreError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!(path = %self.path.display(), tasks = store.len(), "Saved task store");
        Ok(())
    }

    /// Read the storage key and rebuild the store wholesale.
    ///
    /// A missing file yields an empty store; the id counter is re-derived
    /// from the loaded tasks.
    ///
    /// # Errors
    /// Returns [`FileStoreError::Io`] when the file exists but cannot be
    /// read, and [`FileStoreError::Parse`] when its contents are not a valid
    /// task array.
    pub fn load(&self) -> Result<TaskStore, FileStoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No stored tasks, starting empty");
                return Ok(TaskStore::new());
            }
            Err(source) => {
                return Err(FileStoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let tasks: Vec<Task> =
            serde_json::from_str(&contents).map_err(|source| FileStoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), tasks = tasks.len(), "Loaded task store");
        Ok(TaskStore::from_tasks(tasks))
    }
}
