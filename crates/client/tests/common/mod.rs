//! Common test utilities for integration tests.
//!
//! This module provides shared helper functions and re-exports commonly used
//! types for testing the Reddit client.
//!
//! # Invariants
//! - Fixtures are loaded from the `fixtures/` directory relative to the crate root
//! - Clients built here point at the mock server and carry `TEST_TOKEN`
//!
//! # What this does NOT handle
//! - Mock setup (use wiremock directly in tests)

use std::sync::Arc;

use secrecy::SecretString;

#[allow(unused_imports)]
pub use reddit_client::testing::load_fixture;

#[allow(unused_imports)]
pub use reddit_client::endpoints;
#[allow(unused_imports)]
pub use reddit_client::{AuthStrategy, ClientError, RedditClient};
#[allow(unused_imports)]
pub use reqwest::Client;
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Bearer token every test client sends.
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-access-token";

/// An authenticated client pointed at `server`.
#[allow(dead_code)]
pub fn test_client(server: &MockServer) -> Arc<RedditClient> {
    Arc::new(
        RedditClient::builder()
            .base_url(server.uri())
            .auth_strategy(AuthStrategy::BearerToken {
                token: SecretString::new(TEST_TOKEN.to_string().into()),
            })
            .user_agent("reddit-client-tests/0.1".to_string())
            .build()
            .expect("test client should build"),
    )
}

/// An anonymous client pointed at `server`.
#[allow(dead_code)]
pub fn anonymous_client(server: &MockServer) -> Arc<RedditClient> {
    Arc::new(
        RedditClient::builder()
            .base_url(server.uri())
            .build()
            .expect("test client should build"),
    )
}
