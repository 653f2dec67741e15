//! Main Reddit REST API client and API methods.
//!
//! This module provides the primary [`RedditClient`] for talking to the
//! Reddit REST API, plus the entry points to the [`Redditor`] model.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `redditors`: Account attribute and relationship methods
//! - `messages`: Private message methods
//! - `listings`: User listing page fetches
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Token acquisition or refresh (the bearer token is supplied ready to use)
//! - Rate limiting or retries; every call is a single attempt
//!
//! # Invariants
//! - The client is immutable after construction and shared through `Arc`
//! - Non-2xx responses surface as `ClientError::ApiError` unchanged

pub mod builder;

mod listings;
mod messages;
mod redditors;

use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub use builder::RedditClientBuilder;

use crate::auth::AuthStrategy;
use crate::endpoints::request;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::redditor::Redditor;

/// Reddit REST API client.
///
/// # Creating a Client
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use reddit_client::RedditClient;
///
/// let client = Arc::new(RedditClient::builder().build()?);
/// let spez = client.redditor("spez");
/// println!("{}", spez.about().await?.link_karma);
/// ```
#[derive(Debug)]
pub struct RedditClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) auth: AuthStrategy,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl RedditClient {
    /// Create a new client builder.
    pub fn builder() -> RedditClientBuilder {
        RedditClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether requests carry a bearer token.
    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub(crate) fn token(&self) -> Option<&str> {
        self.auth.bearer_token()
    }

    pub(crate) fn metrics(&self) -> Option<&MetricsCollector> {
        self.metrics.as_ref()
    }

    /// A lazily loaded handle on the account `name`.
    pub fn redditor(self: &Arc<Self>, name: impl Into<String>) -> Redditor {
        Redditor::new(Arc::clone(self), name)
    }

    /// The authenticated account, with its attributes already loaded.
    pub async fn me(self: &Arc<Self>) -> Result<Redditor> {
        let data = self.current_user().await?;
        Ok(Redditor::from_data(Arc::clone(self), data))
    }

    /// GET `path` (relative to the base URL) and decode the JSON response.
    pub async fn get_json<T, Q>(&self, path: &str, query: &Q) -> Result<T>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        request::get_json(
            &self.http,
            &self.base_url,
            self.token(),
            path,
            query,
            path,
            self.metrics(),
        )
        .await
    }

    /// POST a form body to `path`, discarding the response body.
    pub async fn post_form<F>(&self, path: &str, form: &F) -> Result<()>
    where
        F: Serialize + ?Sized,
    {
        request::post_form(
            &self.http,
            &self.base_url,
            self.token(),
            path,
            form,
            path,
            self.metrics(),
        )
        .await?;
        Ok(())
    }

    /// PUT a JSON body to `path` and decode the JSON response.
    pub async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        request::put_json(
            &self.http,
            &self.base_url,
            self.token(),
            path,
            body,
            path,
            self.metrics(),
        )
        .await
    }

    /// DELETE `path` with a form body.
    pub async fn delete_form<F>(&self, path: &str, form: &F) -> Result<()>
    where
        F: Serialize + ?Sized,
    {
        request::delete_form(
            &self.http,
            &self.base_url,
            self.token(),
            path,
            form,
            path,
            self.metrics(),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn test_client_builder_with_bearer_token() {
        let client = RedditClient::builder()
            .base_url("https://oauth.reddit.com/".to_string())
            .auth_strategy(AuthStrategy::BearerToken {
                token: SecretString::new("test-token".to_string().into()),
            })
            .build()
            .unwrap();

        assert_eq!(client.base_url(), "https://oauth.reddit.com");
        assert!(client.is_authenticated());
        assert_eq!(client.token(), Some("test-token"));
    }

    #[test]
    fn test_redditor_handle_is_unloaded() {
        let client = Arc::new(RedditClient::builder().build().unwrap());
        let redditor = client.redditor("spez");
        assert_eq!(redditor.name(), "spez");
        assert!(!redditor.is_loaded());
    }

    #[tokio::test]
    async fn test_me_requires_authentication() {
        let client = Arc::new(RedditClient::builder().build().unwrap());
        let err = client.me().await.unwrap_err();
        assert!(err.is_auth_error());
    }
}
