//! Connection configuration types.
//!
//! Responsibilities:
//! - Define connection settings (base URL, user agent, timeout).
//! - Define the main `Config` structure combining connection and auth.
//! - Provide convenience constructors for common config patterns.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - Duration fields are serialized as seconds (integers).
//! - A missing `base_url` resolves to the host matching the auth strategy.

use crate::constants::{
    DEFAULT_OAUTH_BASE_URL, DEFAULT_PUBLIC_BASE_URL, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
use crate::types::auth::{AuthConfig, AuthStrategy};
use secrecy::SecretString;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Module for serializing Duration as seconds (integer).
mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Connection configuration for the API host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL override (e.g., a local mock server). `None` picks the
    /// public or OAuth host depending on the auth strategy.
    #[serde(default)]
    pub base_url: Option<String>,
    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds")]
    pub timeout: Duration,
}

pub(crate) fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            user_agent: default_user_agent(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Connection settings
    pub connection: ConnectionConfig,
    /// Authentication settings
    pub auth: AuthConfig,
}

impl Config {
    /// Create a config that authenticates with an OAuth access token.
    pub fn with_access_token(token: SecretString) -> Self {
        Self {
            connection: ConnectionConfig::default(),
            auth: AuthConfig {
                strategy: AuthStrategy::AccessToken { token },
            },
        }
    }

    /// Create an anonymous config pointed at `base_url`.
    pub fn anonymous(base_url: String) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url: Some(base_url),
                ..ConnectionConfig::default()
            },
            auth: AuthConfig::default(),
        }
    }

    /// The base URL requests will be sent to.
    pub fn resolved_base_url(&self) -> &str {
        match (&self.connection.base_url, &self.auth.strategy) {
            (Some(url), _) => url,
            (None, AuthStrategy::AccessToken { .. }) => DEFAULT_OAUTH_BASE_URL,
            (None, AuthStrategy::Anonymous) => DEFAULT_PUBLIC_BASE_URL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_anonymous_public_host() {
        let config = Config::default();
        assert!(matches!(config.auth.strategy, AuthStrategy::Anonymous));
        assert_eq!(config.resolved_base_url(), DEFAULT_PUBLIC_BASE_URL);
        assert_eq!(config.connection.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(
            config.connection.timeout,
            Duration::from_secs(DEFAULT_TIMEOUT_SECS)
        );
    }

    #[test]
    fn test_access_token_config_uses_oauth_host() {
        let config = Config::with_access_token(SecretString::new("t".to_string().into()));
        assert_eq!(config.resolved_base_url(), DEFAULT_OAUTH_BASE_URL);
    }

    #[test]
    fn test_explicit_base_url_wins() {
        let mut config = Config::with_access_token(SecretString::new("t".to_string().into()));
        config.connection.base_url = Some("http://127.0.0.1:9000".to_string());
        assert_eq!(config.resolved_base_url(), "http://127.0.0.1:9000");
    }

    #[test]
    fn test_timeout_serialized_as_seconds() {
        let config = Config::anonymous("http://localhost:1234".to_string());
        let json = serde_json::to_value(&config).unwrap();
        assert_eq!(json["connection"]["timeout"], DEFAULT_TIMEOUT_SECS);
        assert_eq!(json["auth"]["type"], "anonymous");
    }
}
