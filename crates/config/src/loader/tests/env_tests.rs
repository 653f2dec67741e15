//! Environment variable tests for the configuration loader builder.

use crate::loader::builder::ConfigLoader;
use crate::loader::env::env_var_or_none;
use crate::loader::error::ConfigError;
use crate::types::AuthStrategy;
use serial_test::serial;
use std::time::Duration;

use super::env_lock;

#[test]
#[serial]
fn test_env_values_applied() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("REDDIT_BASE_URL", Some("http://127.0.0.1:8080/")),
            ("REDDIT_ACCESS_TOKEN", Some("env-token")),
            ("REDDIT_USER_AGENT", Some("env-agent/1.0")),
            ("REDDIT_TIMEOUT", Some("45")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert_eq!(
                config.connection.base_url.as_deref(),
                Some("http://127.0.0.1:8080")
            );
            assert!(matches!(
                config.auth.strategy,
                AuthStrategy::AccessToken { .. }
            ));
            assert_eq!(config.connection.user_agent, "env-agent/1.0");
            assert_eq!(config.connection.timeout, Duration::from_secs(45));
        },
    );
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("REDDIT_ACCESS_TOKEN", Some("")),
            ("REDDIT_BASE_URL", Some("   ")),
            ("REDDIT_USER_AGENT", None),
            ("REDDIT_TIMEOUT", None),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();
            assert!(matches!(config.auth.strategy, AuthStrategy::Anonymous));
            assert_eq!(config.connection.base_url, None);
        },
    );
}

#[test]
#[serial]
fn test_invalid_timeout_env_var() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("REDDIT_TIMEOUT", Some("soon"), || {
        let result = ConfigLoader::new().from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "REDDIT_TIMEOUT"),
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("expected invalid timeout error"),
        }
    });
}

#[test]
#[serial]
fn test_builder_overrides_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("REDDIT_USER_AGENT", Some("from-env"), || {
        let config = ConfigLoader::new()
            .from_env()
            .unwrap()
            .with_user_agent("from-cli".to_string())
            .build()
            .unwrap();
        assert_eq!(config.connection.user_agent, "from-cli");
    });
}

#[test]
#[serial]
fn test_env_var_or_none_trims() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_var("REDDIT_TEST_TRIM", Some("  value  "), || {
        assert_eq!(env_var_or_none("REDDIT_TEST_TRIM"), Some("value".to_string()));
    });
    temp_env::with_var("REDDIT_TEST_TRIM", Some(" \t "), || {
        assert_eq!(env_var_or_none("REDDIT_TEST_TRIM"), None);
    });
}
