use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::api::models::Champion;
use crate::error::AppError;

const CACHE_FILE: &str = "champions.json";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CachedRoster {
    pub version: String,
    pub champions: Vec<Champion>,
    pub saved_at: DateTime<Utc>,
}

impl CachedRoster {
    pub fn new(version: &str, champions: Vec<Champion>) -> Self {
        CachedRoster {
            version: version.to_string(),
            champions,
            saved_at: Utc::now(),
        }
    }
}

/// File-backed store for the last fetched champion roster.
#[derive(Debug, Clone)]
pub struct ChampionCache {
    path: PathBuf,
}

impl ChampionCache {
    pub fn new(cache_dir: &Path) -> Self {
        ChampionCache {
            path: cache_dir.join(CACHE_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Missing or unreadable caches are treated as empty.
    pub fn load(&self) -> Option<CachedRoster> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(_) => {
                debug!(path = %self.path.display(), "no champion cache yet");
                return None;
            }
        };

        match serde_json::from_str::<CachedRoster>(&content) {
            Ok(cached) if !cached.version.is_empty() && !cached.champions.is_empty() => {
                Some(cached)
            }
            Ok(_) => None,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "ignoring corrupt champion cache");
                None
            }
        }
    }

    pub fn store(&self, roster: &CachedRoster) -> Result<(), AppError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).map_err(|e| {
                AppError::CacheError(format!("Failed to create cache dir: {}", e))
            })?;
        }

        let json = serde_json::to_string(roster).map_err(|e| {
            AppError::JsonError(format!("Failed to serialize cache: {}", e))
        })?;

        fs::write(&self.path, json).map_err(|e| {
            AppError::CacheError(format!("Failed to write cache: {}", e))
        })?;

        debug!(path = %self.path.display(), version = %roster.version, "champion cache saved");
        Ok(())
    }

    pub fn is_fresh(roster: &CachedRoster, ttl: Duration) -> bool {
        Self::is_fresh_at(roster, ttl, Utc::now())
    }

    pub fn is_fresh_at(roster: &CachedRoster, ttl: Duration, now: DateTime<Utc>) -> bool {
        now.signed_duration_since(roster.saved_at) < ttl
    }
}
