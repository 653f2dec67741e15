//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `REDDIT_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Environment variables take precedence over config file settings.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use secrecy::SecretString;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// Base URL override.
pub const ENV_BASE_URL: &str = "REDDIT_BASE_URL";
/// OAuth access token.
pub const ENV_ACCESS_TOKEN: &str = "REDDIT_ACCESS_TOKEN";
/// User agent string.
pub const ENV_USER_AGENT: &str = "REDDIT_USER_AGENT";
/// Request timeout in seconds.
pub const ENV_TIMEOUT: &str = "REDDIT_TIMEOUT";
/// Config file path override.
pub const ENV_CONFIG_PATH: &str = "REDDIT_CONFIG_PATH";

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader.set_base_url(Some(url));
    }
    if let Some(token) = env_var_or_none(ENV_ACCESS_TOKEN) {
        loader.set_access_token(Some(SecretString::new(token.into())));
    }
    if let Some(user_agent) = env_var_or_none(ENV_USER_AGENT) {
        loader.set_user_agent(Some(user_agent));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = timeout.parse().map_err(|_| ConfigError::InvalidValue {
            var: ENV_TIMEOUT.to_string(),
            message: "must be a number".to_string(),
        })?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    Ok(())
}
