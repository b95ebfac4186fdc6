//! Recent-endpoint store: bounded, deduplicating, most-recent-first cache
//! of endpoint summaries behind an injected persistence port.
//!
//! Every operation returns the resulting list and never an error: a read
//! failure degrades to the empty list, a write failure keeps the in-memory
//! result. Both paths log, so a dead storage backend stays diagnosable.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{error, warn};

use crate::recents::persistence::RecentsPersistence;
use crate::recents::summary::EndpointSummary;

/// Hard cap on the persisted list; inserting past it evicts the oldest.
pub const MAX_RECENT_ENDPOINTS: usize = 10;

pub struct RecentStore {
    persistence: Arc<dyn RecentsPersistence>,
}

impl RecentStore {
    pub fn new(persistence: Arc<dyn RecentsPersistence>) -> Self {
        Self { persistence }
    }

    // ========================================
    // OPERATIONS
    // ========================================

    /// Persisted list verbatim, most-recent-first. Absent or corrupt
    /// state reads as empty.
    pub fn get_all(&self) -> Vec<EndpointSummary> {
        self.load()
    }

    /// Sole insertion path: drops any entry with the same id, prepends,
    /// truncates to capacity, persists. Re-saving an id is how an entry
    /// is refreshed; it also moves back to the front.
    pub fn save(&self, summary: EndpointSummary) -> Vec<EndpointSummary> {
        let mut list = self.load();
        list.retain(|entry| entry.id != summary.id);
        list.insert(0, summary);
        list.truncate(MAX_RECENT_ENDPOINTS);
        self.persist(&list);
        list
    }

    /// Drops every entry whose expiry is at or before `now`. Persists only
    /// when something was dropped, so a repeat call with the same `now`
    /// performs no redundant write.
    pub fn cleanup_expired(&self, now: DateTime<Utc>) -> Vec<EndpointSummary> {
        let mut list = self.load();
        let before = list.len();
        list.retain(|entry| !entry.is_expired_at(now));
        if list.len() != before {
            self.persist(&list);
        }
        list
    }

    /// Removes the entry with the given id; a miss leaves the list as is.
    pub fn remove(&self, id: &str) -> Vec<EndpointSummary> {
        let mut list = self.load();
        list.retain(|entry| entry.id != id);
        self.persist(&list);
        list
    }

    /// Deletes the persisted state outright.
    pub fn clear(&self) -> Vec<EndpointSummary> {
        if let Err(e) = self.persistence.clear() {
            error!("recents clear failed: {}", e);
        }
        Vec::new()
    }

    // ========================================
    // INTERNALS
    // ========================================

    fn load(&self) -> Vec<EndpointSummary> {
        let payload = match self.persistence.load() {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!("recents load failed, treating as empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&payload) {
            Ok(list) => list,
            Err(e) => {
                warn!("recents payload corrupt, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    fn persist(&self, list: &[EndpointSummary]) {
        let payload = match serde_json::to_string(list) {
            Ok(payload) => payload,
            Err(e) => {
                error!("recents serialization failed: {}", e);
                return;
            }
        };
        if let Err(e) = self.persistence.save(&payload) {
            error!("recents save failed, keeping in-memory result: {}", e);
        }
    }
}
