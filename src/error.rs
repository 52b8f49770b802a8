use thiserror::Error;

/// Custom error types for the athan application
#[derive(Error, Debug)]
pub enum AppError {
    /// Error when a required configuration value is missing
    #[error("Configuration error: {0}")]
    Config(String),

    /// Wrapper for reqwest transport errors
    #[error("HTTP request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Error when the remote service answers with a non-success status
    #[error("HTTP request returned status: {status}, body: {body}")]
    Remote { status: String, body: String },

    /// Error when the prayer times API reports a non-success code in its body
    #[error("API returned code: {0}")]
    RemoteCode(i64),

    /// Wrapper for JSON deserialization errors
    #[error("Failed to decode JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Error when geocoding yields no results
    #[error("{0}")]
    NotFound(String),

    /// Error when a time-of-day string is not in `HH:MM` format
    #[error("Failed to parse time {0:?}")]
    Parse(String),

    /// Error when the timing table has no entries
    #[error("No prayer times to choose from")]
    EmptySchedule,
}
