//! Process configuration, read once at startup from the environment.

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_CHECK_INTERVAL_SECS: u64 = 3600;
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SMTP_HOST: &str = "smtp.gmail.com";
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Immutable settings for the whole process. Constructed once in `main` and
/// passed down by reference; nothing reads the environment after startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub target_url: String,
    pub target_selector: String,
    pub email_user: String,
    pub email_pass: String,
    pub smtp_host: String,
    pub data_dir: PathBuf,
    pub check_interval: Duration,
    pub fetch_timeout: Duration,
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through an injectable lookup, so tests do not have
    /// to mutate the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let target_url = required(&lookup, "TARGET_URL")?;
        let target_selector = required(&lookup, "TARGET_SELECTOR")?;
        let email_user = required(&lookup, "EMAIL_USER")?;
        let email_pass = required(&lookup, "EMAIL_PASS")?;

        let smtp_host =
            lookup("SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string());
        let data_dir = PathBuf::from(
            lookup("DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.to_string()),
        );
        let check_interval = Duration::from_secs(seconds(
            &lookup,
            "CHECK_INTERVAL_SECS",
            DEFAULT_CHECK_INTERVAL_SECS,
        )?);
        let fetch_timeout = Duration::from_secs(seconds(
            &lookup,
            "FETCH_TIMEOUT_SECS",
            DEFAULT_FETCH_TIMEOUT_SECS,
        )?);

        Ok(Self {
            target_url,
            target_selector,
            email_user,
            email_pass,
            smtp_host,
            data_dir,
            check_interval,
            fetch_timeout,
        })
    }
}

fn required(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
) -> Result<String, ConfigError> {
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        Some(_) => Err(ConfigError::Invalid {
            name,
            reason: "value is empty".to_string(),
        }),
        None => Err(ConfigError::Missing(name)),
    }
}

fn seconds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: u64,
) -> Result<u64, ConfigError> {
    let Some(raw) = lookup(name) else {
        return Ok(default);
    };
    let value: u64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
        name,
        reason: format!("expected a number of seconds, got {raw:?}"),
    })?;
    if value == 0 {
        return Err(ConfigError::Invalid {
            name,
            reason: "must be positive".to_string(),
        });
    }
    Ok(value)
}
