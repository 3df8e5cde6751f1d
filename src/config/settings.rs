use std::path::PathBuf;

use super::sources::{SourceConfig, get_sources};

pub struct ScraperSettings {
    pub user_agent: &'static str,
    /// Per-request timeout of the HTTP client
    pub timeout_secs: u64,
    /// Overall budget of one source, fetch and extraction included
    pub source_budget_secs: u64,
}

impl Default for ScraperSettings {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36",
            timeout_secs: 30,
            source_budget_secs: 45,
        }
    }
}

pub struct SnapshotSettings {
    pub path: PathBuf,
}

impl Default for SnapshotSettings {
    fn default() -> Self {
        let path = std::env::var("RANKINGS_PATH").unwrap_or_else(|_| "rankings_data.json".to_string());
        Self { path: PathBuf::from(path) }
    }
}

pub struct ServerSettings {
    pub content_root: PathBuf,
    pub preferred_ports: Vec<u16>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        let root = std::env::var("CONTENT_ROOT").unwrap_or_else(|_| ".".to_string());
        Self {
            content_root: PathBuf::from(root),
            preferred_ports: vec![8080, 8081, 8082, 8000, 3000],
        }
    }
}

pub struct AppConfig {
    pub scraper: ScraperSettings,
    pub snapshot: SnapshotSettings,
    pub server: ServerSettings,
    pub sources: Vec<SourceConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self {
            scraper: ScraperSettings::default(),
            snapshot: SnapshotSettings::default(),
            server: ServerSettings::default(),
            sources: get_sources(),
        }
    }
}
