//! Error handling and client configuration tests.
//!
//! This module tests error handling for various failure modes:
//! - HTTP error status codes (401, 403, 404, 500)
//! - Error bodies with and without JSON messages
//! - Malformed JSON responses
//! - Timeouts and connection errors
//!
//! # Invariants
//! - Non-2xx responses are returned once, never retried
//! - Error display formatting includes status, URL and message

mod common;

use std::time::Duration;

use common::*;
use reddit_client::{ErrorCategory, MetricsCollector};
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_unauthorized_is_auth_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "Unauthorized", "error": 401
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server).me().await.unwrap_err();
    assert!(err.is_auth_error());
    assert_eq!(ErrorCategory::from(&err), ErrorCategory::Http4xx);
    let display = err.to_string();
    assert!(display.contains("401"), "{display}");
    assert!(display.contains("Unauthorized"), "{display}");
    assert!(display.contains("/api/v1/me"), "{display}");
}

#[tokio::test]
async fn test_server_error_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/v1/me/friends/spez"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server)
        .redditor("spez")
        .friend(None)
        .await
        .unwrap_err();
    match &err {
        ClientError::ApiError {
            status, message, ..
        } => {
            assert_eq!(*status, 503);
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(ErrorCategory::from(&err), ErrorCategory::Http5xx);
}

#[tokio::test]
async fn test_malformed_json_is_invalid_response() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/user/spez/trophies"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let err = test_client(&mock_server)
        .redditor("spez")
        .trophies()
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::InvalidResponse(_)), "{err:?}");
}

#[tokio::test]
async fn test_timeout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/user/slow/about"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(load_fixture("redditors/about_spez.json"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = std::sync::Arc::new(
        RedditClient::builder()
            .base_url(mock_server.uri())
            .timeout(Duration::from_millis(100))
            .build()
            .unwrap(),
    );
    let err = client.redditor("slow").about().await.unwrap_err();
    match &err {
        ClientError::HttpError(e) => assert!(e.is_timeout()),
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(ErrorCategory::from(&err), ErrorCategory::Timeout);
}

#[tokio::test]
async fn test_connection_refused() {
    // nothing listens on port 1
    let client = std::sync::Arc::new(
        RedditClient::builder()
            .base_url("http://127.0.0.1:1".to_string())
            .metrics(MetricsCollector::new())
            .build()
            .unwrap(),
    );
    let err = client.redditor("spez").about().await.unwrap_err();
    assert!(matches!(err, ClientError::HttpError(_)), "{err:?}");
}

#[tokio::test]
async fn test_unblock_requires_authentication() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let err = anonymous_client(&mock_server)
        .redditor("spez")
        .unblock()
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::AuthRequired(_)));
}
