//! Persistence port for the recents cache.
//!
//! The store moves one opaque string payload through this trait, so tests
//! can inject an in-memory mock and the corrupt-data policy lives in the
//! store alone.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use parking_lot::Mutex;

pub trait RecentsPersistence: Send + Sync {
    /// Raw persisted payload; `Ok(None)` when nothing was ever stored.
    fn load(&self) -> Result<Option<String>, String>;
    fn save(&self, payload: &str) -> Result<(), String>;
    fn clear(&self) -> Result<(), String>;
}

// ========================================
// FILE-BACKED IMPLEMENTATION
// ========================================

/// One JSON file on disk. Single process, single writer: the mutex only
/// keeps threads of this process from interleaving read-modify-write
/// cycles, there is no cross-process coordination.
pub struct FilePersistence {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }
}

impl RecentsPersistence for FilePersistence {
    fn load(&self) -> Result<Option<String>, String> {
        let _guard = self.lock.lock();
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(format!("failed to read {}: {}", self.path.display(), e)),
        }
    }

    fn save(&self, payload: &str) -> Result<(), String> {
        let _guard = self.lock.lock();
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| format!("failed to create {}: {}", parent.display(), e))?;
            }
        }
        fs::write(&self.path, payload)
            .map_err(|e| format!("failed to write {}: {}", self.path.display(), e))
    }

    fn clear(&self) -> Result<(), String> {
        let _guard = self.lock.lock();
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(format!("failed to remove {}: {}", self.path.display(), e)),
        }
    }
}
