use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The slice of endpoint data kept in the local recents cache: the id,
/// timestamps and the display URLs captured verbatim at creation time.
/// The JSON payload itself is never cached.
///
/// Field names serialize camelCase so the persisted file shares the
/// service's wire vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndpointSummary {
    pub id: String,
    pub created_at: DateTime<Utc>,
    /// Absent means the endpoint never expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires: Option<DateTime<Utc>>,
    pub endpoint_url: String,
    pub view_url: String,
}

impl EndpointSummary {
    /// Stale when `expires` is set and no longer in the future. Entries
    /// without an expiry never go stale.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires {
            Some(expires) => expires <= now,
            None => false,
        }
    }
}
