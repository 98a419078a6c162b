//! File-based store backend.
//!
//! Each entry is stored as one JSON file named after its (sanitized) key
//! inside the data directory, with file locking around every access.
//! Entries survive process restarts and are visible to other processes
//! pointed at the same directory; coordination between processes stops at
//! the per-file lock, so the last writer wins.
//!
//! Directory structure:
//! ```text
//! data/
//! ├── THEME.json
//! ├── SERVER_URL.json
//! └── ...
//! ```

use std::fs;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use parking_lot::Mutex;

use crate::error::{StoreError, StoreResult};
use crate::storage::traits::StoreBackend;

/// File-based store implementation.
#[derive(Debug)]
pub struct FileStore {
    /// Directory holding one file per entry.
    data_dir: PathBuf,
    /// Mutex for coordinating file operations within this process.
    lock: Mutex<()>,
}

impl FileStore {
    /// Create a new file store rooted at `data_dir`.
    ///
    /// The directory is created if missing and probed for writability, so
    /// a misconfigured path fails here instead of on the first save.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the directory cannot be
    /// created or written.
    pub fn new(data_dir: impl Into<PathBuf>) -> StoreResult<Self> {
        let data_dir = data_dir.into();

        fs::create_dir_all(&data_dir).map_err(|e| {
            StoreError::Unavailable(format!(
                "Failed to create data directory {}: {e}",
                data_dir.display()
            ))
        })?;

        let probe = data_dir.join(".write-probe");
        fs::write(&probe, b"ok")
            .and_then(|()| fs::remove_file(&probe))
            .map_err(|e| {
                StoreError::Unavailable(format!(
                    "Data directory {} is not writable: {e}",
                    data_dir.display()
                ))
            })?;

        Ok(Self {
            data_dir,
            lock: Mutex::new(()),
        })
    }

    /// Get the file path for an entry.
    fn entry_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", sanitize_key(key)))
    }
}

impl StoreBackend for FileStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let _guard = self.lock.lock();
        let path = self.entry_path(key);

        let mut file = match fs::File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        file.lock_exclusive().map_err(|e| lock_error(&path, &e))?;

        let mut raw = String::new();
        file.read_to_string(&mut raw)?;
        file.unlock().map_err(|e| lock_error(&path, &e))?;

        Ok(Some(raw))
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let _guard = self.lock.lock();
        let path = self.entry_path(key);

        let mut file = fs::OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        file.lock_exclusive().map_err(|e| lock_error(&path, &e))?;

        file.write_all(value.as_bytes())?;
        file.sync_all()?;
        file.unlock().map_err(|e| lock_error(&path, &e))?;

        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<()> {
        let _guard = self.lock.lock();

        match fs::remove_file(self.entry_path(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}

fn lock_error(path: &Path, err: &std::io::Error) -> StoreError {
    StoreError::Io(format!("Failed to lock {}: {err}", path.display()))
}

/// Restrict a key to filename-safe characters.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
