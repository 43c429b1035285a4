use std::time::Duration;

use crate::error::LookupError;

pub const DEFAULT_FACEIT_API_BASE: &str = "https://open.faceit.com/data/v4";
pub const DEFAULT_STEAM_API_BASE: &str = "https://api.steampowered.com";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:9922";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    pub faceit_api_key: String,
    pub steam_api_key: String,
    pub faceit_api_base: String,
    pub steam_api_base: String,
    pub bind_addr: String,
    pub request_timeout: Duration,
}

impl Config {
    /// Read from the process environment, after loading `.env.local` and
    /// `.env` if they exist.
    pub fn from_env() -> Result<Self, LookupError> {
        let _ = dotenvy::from_filename(".env.local");
        let _ = dotenvy::from_filename(".env");
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, LookupError> {
        let get = |key: &str| get(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(LookupError::MissingConfig(key));

        let timeout_secs = get("REQUEST_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            faceit_api_key: required("FACEIT_API_KEY")?,
            steam_api_key: required("STEAM_API_KEY")?,
            faceit_api_base: get("FACEIT_API_BASE")
                .unwrap_or_else(|| DEFAULT_FACEIT_API_BASE.to_string()),
            steam_api_base: get("STEAM_API_BASE")
                .unwrap_or_else(|| DEFAULT_STEAM_API_BASE.to_string()),
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }
}
