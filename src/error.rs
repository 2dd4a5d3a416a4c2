use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Unknown champion '{0}'. Supported: masteryi, belveth, volibear, heimerdinger, missfortune, lux")]
    UnknownChampion(String),

    #[error("Champion data unavailable: {0}")]
    ReferenceUnavailable(String),

    #[error("Coach request timed out")]
    CoachTimeout,

    #[error("Coach error: {0}")]
    CoachError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("JSON parsing error: {0}")]
    JsonError(String),

    #[error("Cache error: {0}")]
    CacheError(String),
}
