// Configuration layer: process-wide settings, read once at startup.
// Sources, in order of precedence: the process environment, `.env` in the
// working directory, then `~/.sharpapi.env`.

use crate::error::ConfigError;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const API_KEY_VAR: &str = "SHARP_API_KEY";
pub const BASE_URL_VAR: &str = "SHARP_API_BASE_URL";
pub const RESUME_PATH_VAR: &str = "SHARP_API_RESUME_PATH";
pub const POLL_INTERVAL_VAR: &str = "SHARP_API_POLL_INTERVAL";
pub const MAX_WAIT_VAR: &str = "SHARP_API_MAX_WAIT";

pub const DEFAULT_BASE_URL: &str = "https://sharpapi.com/api/v1";
pub const DEFAULT_RESUME_PATH: &str = "sample_resume.pdf";
const DEFAULT_POLL_INTERVAL_SECS: u64 = 10;
const DEFAULT_MAX_WAIT_SECS: u64 = 180;

/// Name of the optional dotenv file looked up in the user's home directory.
const HOME_ENV_FILE: &str = ".sharpapi.env";

/// Read-only configuration handed to the client and the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_key: String,
    pub base_url: String,
    pub resume_path: PathBuf,
    /// Wait between status checks when the server sends no `Retry-After`.
    pub poll_interval: Duration,
    /// Upper bound on the time spent waiting for one job.
    pub max_wait: Duration,
}

impl Settings {
    /// Load `.env` from the working directory, then `~/.sharpapi.env`, and
    /// read the settings from the resulting environment. Variables already
    /// set in the process environment win over both files.
    pub fn from_env() -> Result<Self, ConfigError> {
        let loaded = dotenv::dotenv().map(|path| {
            log::debug!("loaded environment from {}", path.display());
        });
        if let Some(problem) = dotenv_problem(Path::new(".env"), loaded) {
            log::warn!("{}", problem);
        }
        if let Some(home) = dirs::home_dir() {
            let path = home.join(HOME_ENV_FILE);
            // A missing home file is the common case and stays silent.
            if let Some(problem) = dotenv_problem(&path, dotenv::from_path(&path)) {
                log::warn!("{}", problem);
            }
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let base_url = lookup(BASE_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let resume_path = lookup(RESUME_PATH_VAR)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_RESUME_PATH));

        let poll_interval = seconds(&lookup, POLL_INTERVAL_VAR, DEFAULT_POLL_INTERVAL_SECS)?;
        let max_wait = seconds(&lookup, MAX_WAIT_VAR, DEFAULT_MAX_WAIT_SECS)?;

        Ok(Settings {
            api_key,
            base_url,
            resume_path,
            poll_interval,
            max_wait,
        })
    }
}

/// Describe a dotenv load failure worth telling the user about. An absent
/// file is not one; a file that exists but cannot be read or parsed is.
fn dotenv_problem(path: &Path, result: Result<(), dotenv::Error>) -> Option<String> {
    match result {
        Ok(()) => None,
        Err(dotenv::Error::Io(err)) if err.kind() == ErrorKind::NotFound => None,
        Err(err) => Some(format!("could not load {}: {}", path.display(), err)),
    }
}

fn seconds<F>(lookup: &F, name: &'static str, default: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        None => Ok(Duration::from_secs(default)),
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::InvalidValue { name, value: raw }),
    }
}
