//! Basic loader tests for the configuration loader builder.

use crate::constants::{DEFAULT_USER_AGENT, MAX_TIMEOUT_SECS};
use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use crate::types::AuthStrategy;
use secrecy::ExposeSecret;
use std::time::Duration;

#[test]
fn test_loader_with_access_token() {
    let config = ConfigLoader::new()
        .with_access_token("test-token".to_string())
        .build()
        .unwrap();

    match config.auth.strategy {
        AuthStrategy::AccessToken { token } => assert_eq!(token.expose_secret(), "test-token"),
        other => panic!("expected access token, got {other:?}"),
    }
}

#[test]
fn test_loader_defaults_to_anonymous() {
    let config = ConfigLoader::new().build().unwrap();
    assert!(matches!(config.auth.strategy, AuthStrategy::Anonymous));
    assert_eq!(config.connection.base_url, None);
    assert_eq!(config.connection.user_agent, DEFAULT_USER_AGENT);
}

#[test]
fn test_loader_normalizes_base_url() {
    let config = ConfigLoader::new()
        .with_base_url("  https://oauth.reddit.com//  ".to_string())
        .build()
        .unwrap();
    assert_eq!(
        config.connection.base_url.as_deref(),
        Some("https://oauth.reddit.com")
    );
}

#[test]
fn test_loader_blank_base_url_is_unset() {
    let config = ConfigLoader::new()
        .with_base_url("   ".to_string())
        .build()
        .unwrap();
    assert_eq!(config.connection.base_url, None);
}

#[test]
fn test_loader_rejects_non_http_scheme() {
    let result = ConfigLoader::new()
        .with_base_url("ftp://example.com".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_loader_rejects_relative_url() {
    let result = ConfigLoader::new()
        .with_base_url("not a url".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
}

#[test]
fn test_loader_rejects_zero_timeout() {
    let result = ConfigLoader::new()
        .with_timeout(Duration::from_secs(0))
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_loader_rejects_excessive_timeout() {
    let result = ConfigLoader::new()
        .with_timeout(Duration::from_secs(MAX_TIMEOUT_SECS + 1))
        .build();
    assert!(matches!(result, Err(ConfigError::InvalidTimeout { .. })));
}

#[test]
fn test_loader_rejects_blank_user_agent() {
    let result = ConfigLoader::new()
        .with_user_agent("  ".to_string())
        .build();
    assert!(matches!(result, Err(ConfigError::EmptyUserAgent)));
}

#[test]
fn test_loader_keeps_custom_user_agent() {
    let config = ConfigLoader::new()
        .with_user_agent("linux:my-bot:v1.0 (by /u/someone)".to_string())
        .build()
        .unwrap();
    assert_eq!(
        config.connection.user_agent,
        "linux:my-bot:v1.0 (by /u/someone)"
    );
}
