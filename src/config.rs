use std::env;
use std::sync::OnceLock;

static CONFIG: OnceLock<Config> = OnceLock::new();

// --- CONFIG AGGREGATOR ---

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub recents: RecentsConfig,
    pub log_level: String,
}

impl Config {
    pub fn global() -> &'static Config {
        CONFIG.get_or_init(Self::load)
    }

    fn load() -> Self {
        dotenv::dotenv().ok();
        Self {
            api: ApiConfig::load(),
            recents: RecentsConfig::load(),
            log_level: get_env("MOCKJ_LOG", "error"),
        }
    }
}

// --- MODULES ---

// API
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub default_expires_hours: i64,
}

impl ApiConfig {
    fn load() -> Self {
        Self {
            base_url:              get_env("MOCKJ_API_URL", "http://127.0.0.1:8080"),
            timeout_secs:          get_env("MOCKJ_API_TIMEOUT_SECS", "10"),
            default_expires_hours: get_env("MOCKJ_DEFAULT_EXPIRES_HOURS", "720"), // 30 days
        }
    }
}

// RECENTS
#[derive(Debug, Clone)]
pub struct RecentsConfig {
    pub storage_path: String,
}

impl RecentsConfig {
    fn load() -> Self {
        Self {
            storage_path: get_env("MOCKJ_RECENTS_PATH", "./data/recents.json"),
        }
    }
}

// --- PRIVATE HELPER ---

fn get_env<T: std::str::FromStr>(key: &str, default: &str) -> T {
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|_| format!("Config error: {} must be valid", key))
        .unwrap()
}
