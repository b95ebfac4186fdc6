#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tempfile::TempDir;
use uuid::Uuid;

use mockj_client::recents::persistence::{FilePersistence, RecentsPersistence};
use mockj_client::recents::store::RecentStore;
use mockj_client::recents::summary::EndpointSummary;

/// In-memory stand-in for the persisted recents payload, with failure
/// injection and a write counter for idempotence checks.
#[derive(Default)]
pub struct MemoryPersistence {
    payload: Mutex<Option<String>>,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    write_count: AtomicUsize,
}

impl MemoryPersistence {
    pub fn with_payload(payload: &str) -> Self {
        let persistence = Self::default();
        *persistence.payload.lock() = Some(payload.to_string());
        persistence
    }

    pub fn writes(&self) -> usize {
        self.write_count.load(Ordering::SeqCst)
    }
}

impl RecentsPersistence for MemoryPersistence {
    fn load(&self) -> Result<Option<String>, String> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err("storage unavailable".to_string());
        }
        Ok(self.payload.lock().clone())
    }

    fn save(&self, payload: &str) -> Result<(), String> {
        self.write_count.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err("quota exceeded".to_string());
        }
        *self.payload.lock() = Some(payload.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<(), String> {
        *self.payload.lock() = None;
        Ok(())
    }
}

pub fn setup_store() -> (RecentStore, Arc<MemoryPersistence>) {
    let persistence = Arc::new(MemoryPersistence::default());
    (RecentStore::new(persistence.clone()), persistence)
}

pub fn setup_file_store() -> (RecentStore, TempDir) {
    let tmp = tempfile::tempdir().unwrap();
    let path = tmp.path().join("recents.json");
    (RecentStore::new(Arc::new(FilePersistence::new(path))), tmp)
}

pub fn summary(id: &str) -> EndpointSummary {
    EndpointSummary {
        id: id.to_string(),
        created_at: Utc::now(),
        expires: None,
        endpoint_url: format!("http://127.0.0.1:8080/api/json/{}", id),
        view_url: format!("http://127.0.0.1:8080/{}", id),
    }
}

pub fn summary_expiring(id: &str, expires: DateTime<Utc>) -> EndpointSummary {
    EndpointSummary {
        expires: Some(expires),
        ..summary(id)
    }
}

pub fn unique_id(prefix: &str) -> String {
    format!("{}_{}", prefix, Uuid::new_v4())
}
