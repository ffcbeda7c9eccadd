// Error types. `ConfigError` covers startup problems, `ApiError` covers
// anything that can go wrong talking to the service. The UI wraps both in
// `anyhow` with the failing operation as context.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Problems detected while reading settings at startup. Any of these aborts
/// the program before the menu is shown.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API key not found. Please set SHARP_API_KEY in your .env file.")]
    MissingApiKey,

    #[error("invalid value {value:?} for {name}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or request-building failure inside reqwest.
    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status code.
    #[error("HTTP error with status {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Serialization error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("API key cannot be used as a header value")]
    InvalidCredential,

    #[error("job {job_id} failed: {result}")]
    JobFailed { job_id: String, result: String },

    #[error("job did not finish within {}s", .waited.as_secs())]
    Timeout { waited: Duration },
}
