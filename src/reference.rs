// Champion roster loading: cache first, Data Dragon when the cache is missing,
// stale, or a patch behind. Failures degrade to the last good roster.

use chrono::Duration;
use tracing::{debug, warn};

use crate::api::client::ChampionSource;
use crate::api::models::Champion;
use crate::cache::{CachedRoster, ChampionCache};
use crate::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterOrigin {
    /// Fetched from Data Dragon during this run.
    Fetched,
    /// Served from cache and the cache is current.
    Cached,
    /// Served from cache because a refresh was impossible.
    Fallback,
    /// Nothing available; name resolution will match nothing.
    Empty,
}

#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub version: Option<String>,
    pub champions: Vec<Champion>,
    pub origin: RosterOrigin,
    /// Non-fatal notice for the user when data could not be refreshed.
    pub advisory: Option<String>,
}

impl ReferenceData {
    fn from_cache(cached: CachedRoster, origin: RosterOrigin, advisory: Option<String>) -> Self {
        ReferenceData {
            version: Some(cached.version),
            champions: cached.champions,
            origin,
            advisory,
        }
    }

    fn empty(advisory: String) -> Self {
        ReferenceData {
            version: None,
            champions: Vec::new(),
            origin: RosterOrigin::Empty,
            advisory: Some(advisory),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.champions.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct RefreshPolicy {
    pub ttl: Duration,
    pub offline: bool,
    pub force_refresh: bool,
}

pub fn load_reference(
    cache: &ChampionCache,
    source: &dyn ChampionSource,
    policy: &RefreshPolicy,
) -> ReferenceData {
    let cached = cache.load();

    if policy.offline {
        return match cached {
            Some(c) => {
                let advisory = (!ChampionCache::is_fresh(&c, policy.ttl)).then(|| {
                    format!(
                        "Offline: using stale cached champion data (patch {})",
                        c.version
                    )
                });
                ReferenceData::from_cache(c, RosterOrigin::Cached, advisory)
            }
            None => ReferenceData::empty(
                "Offline with no cached champion data; names cannot be resolved".to_string(),
            ),
        };
    }

    let latest = match source.latest_version() {
        Ok(v) => v,
        Err(e) => return fall_back(cached, &e),
    };

    let needs_refresh = match &cached {
        None => true,
        Some(c) => {
            policy.force_refresh
                || !ChampionCache::is_fresh(c, policy.ttl)
                || c.version != latest
        }
    };

    if !needs_refresh {
        if let Some(c) = cached {
            debug!(version = %c.version, "champion cache is current");
            return ReferenceData::from_cache(c, RosterOrigin::Cached, None);
        }
    }

    match source.champion_list(&latest) {
        Ok(champions) if !champions.is_empty() => {
            let roster = CachedRoster::new(&latest, champions);
            if let Err(e) = cache.store(&roster) {
                warn!(error = %e, "could not persist champion cache");
            }
            ReferenceData::from_cache(roster, RosterOrigin::Fetched, None)
        }
        Ok(_) => fall_back(
            cached,
            &AppError::ReferenceUnavailable(format!("patch {} listed no champions", latest)),
        ),
        Err(e) => fall_back(cached, &e),
    }
}

fn fall_back(cached: Option<CachedRoster>, err: &AppError) -> ReferenceData {
    warn!(error = %err, "champion data refresh failed");
    match cached {
        Some(c) => {
            let advisory = format!(
                "Could not refresh champion data ({}); using cached patch {}",
                err, c.version
            );
            ReferenceData::from_cache(c, RosterOrigin::Fallback, Some(advisory))
        }
        None => ReferenceData::empty(format!(
            "Champion data unavailable ({}); falling back to keyword matching",
            err
        )),
    }
}
