use crate::api::endpoints::OPENAI_CHAT_ENDPOINT;
use crate::error::AppError;
use chrono::Duration;
use std::env;
use std::path::PathBuf;

const DEFAULT_COACH_MODEL: &str = "gpt-4o-mini";
const DEFAULT_CACHE_TTL_DAYS: i64 = 14;

#[derive(Debug, Clone)]
pub struct Config {
    /// Only the `coach` subcommand needs this.
    pub openai_api_key: Option<String>,
    pub coach_model: String,
    pub coach_api_url: String,
    pub cache_dir: PathBuf,
    pub cache_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|k| !k.trim().is_empty());

        let coach_model =
            env::var("COACH_MODEL").unwrap_or_else(|_| DEFAULT_COACH_MODEL.to_string());
        let coach_api_url =
            env::var("COACH_API_URL").unwrap_or_else(|_| OPENAI_CHAT_ENDPOINT.to_string());

        let cache_dir = env::var("DRAFT_COACH_CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_cache_dir());

        let cache_ttl = match env::var("DRAFT_COACH_CACHE_TTL_DAYS") {
            Ok(raw) => parse_cache_ttl(&raw)?,
            Err(_) => Duration::days(DEFAULT_CACHE_TTL_DAYS),
        };

        Ok(Config {
            openai_api_key,
            coach_model,
            coach_api_url,
            cache_dir,
            cache_ttl,
        })
    }

    pub fn require_api_key(&self) -> Result<&str, AppError> {
        self.openai_api_key.as_deref().ok_or_else(|| {
            AppError::ConfigError(
                "OPENAI_API_KEY not found in environment or .env file".to_string(),
            )
        })
    }
}

/// Whole, non-negative days that fit in a `Duration`.
fn parse_cache_ttl(raw: &str) -> Result<Duration, AppError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|days| *days >= 0)
        .and_then(Duration::try_days)
        .ok_or_else(|| {
            AppError::ConfigError(format!(
                "DRAFT_COACH_CACHE_TTL_DAYS must be a whole number of days, got '{}'",
                raw
            ))
        })
}

fn default_cache_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".draft_coach")
}
