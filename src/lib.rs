pub mod api;
pub mod config;
pub mod helpers;
pub mod logging;
pub mod recents;

use std::sync::Arc;

use crate::api::client::ApiClient;
use crate::api::types::ApiError;
use crate::config::Config;
use crate::recents::persistence::FilePersistence;
use crate::recents::store::RecentStore;

// ========================================
// CLIENT (The Facade)
// ========================================

/// The assembled client: remote endpoint API calls plus the local
/// recents cache, wired from one `Config`.
/// This struct is cheap to clone (all fields are Arcs).
#[derive(Clone)]
pub struct MockjClient {
    pub api: Arc<ApiClient>,
    pub recents: Arc<RecentStore>,
}

impl MockjClient {
    pub fn new(config: &Config) -> Result<Self, ApiError> {
        let api = Arc::new(ApiClient::new(&config.api)?);
        let persistence = Arc::new(FilePersistence::new(&config.recents.storage_path));

        Ok(Self {
            api,
            recents: Arc::new(RecentStore::new(persistence)),
        })
    }
}
