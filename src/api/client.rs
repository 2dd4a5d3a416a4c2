use crate::error::AppError;
use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter,
};
use std::num::NonZeroU32;
use std::thread;
use std::time::Duration;
use tracing::{debug, warn};

use super::endpoints::{champion_list_url, versions_url};
use super::models::*;

const USER_AGENT: &str = "draft_coach/0.1.0";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MAX_RETRIES: u32 = 3;

/// Anything that can hand out the current champion roster.
pub trait ChampionSource {
    fn latest_version(&self) -> Result<String, AppError>;
    fn champion_list(&self, version: &str) -> Result<Vec<Champion>, AppError>;
}

pub struct DataDragonClient {
    agent: ureq::Agent,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
    clock: DefaultClock,
}

impl DataDragonClient {
    pub fn new() -> Self {
        // Data Dragon is a static CDN; 5 req/sec is plenty and keeps us polite
        let rate_limiter =
            RateLimiter::direct(Quota::per_second(NonZeroU32::MIN.saturating_add(4)));
        let agent = ureq::AgentBuilder::new()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build();
        DataDragonClient {
            agent,
            rate_limiter,
            clock: DefaultClock::default(),
        }
    }

    fn wait_for_permit(&self) {
        while let Err(not_until) = self.rate_limiter.check() {
            thread::sleep(not_until.wait_time_from(self.clock.now()));
        }
    }

    fn execute_request(&self, url: &str) -> Result<String, AppError> {
        let mut retry_count = 0;

        loop {
            self.wait_for_permit();
            debug!(url, "GET");

            match self.agent.get(url).call() {
                Ok(resp) => {
                    return resp
                        .into_string()
                        .map_err(|e| AppError::HttpError(e.to_string()));
                }
                Err(ureq::Error::Status(code, _)) if code == 429 || code >= 500 => {
                    if retry_count >= MAX_RETRIES {
                        return Err(AppError::HttpError(format!(
                            "{} returned {} after {} retries",
                            url, code, MAX_RETRIES
                        )));
                    }
                    let wait_ms = 500 * (retry_count + 1) as u64;
                    warn!(code, wait_ms, "Data Dragon busy, retrying");
                    thread::sleep(Duration::from_millis(wait_ms));
                    retry_count += 1;
                }
                Err(e) => {
                    return Err(AppError::HttpError(e.to_string()));
                }
            }
        }
    }
}

impl Default for DataDragonClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ChampionSource for DataDragonClient {
    fn latest_version(&self) -> Result<String, AppError> {
        let body = self.execute_request(&versions_url())?;
        let versions: Vec<String> =
            serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))?;

        versions
            .into_iter()
            .next()
            .ok_or_else(|| AppError::ReferenceUnavailable("versions.json was empty".to_string()))
    }

    fn champion_list(&self, version: &str) -> Result<Vec<Champion>, AppError> {
        let body = self.execute_request(&champion_list_url(version))?;
        let parsed: DataDragonChampions =
            serde_json::from_str(&body).map_err(|e| AppError::JsonError(e.to_string()))?;

        let roster = parsed.into_roster();
        debug!(version, champions = roster.len(), "champion list fetched");
        Ok(roster)
    }
}
