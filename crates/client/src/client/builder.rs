//! Client builder for constructing [`RedditClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Choosing the API host from the auth strategy when none is given
//! - Normalizing and validating the base URL
//! - Configuring the underlying HTTP client (timeout, redirects, user agent)
//!
//! # What this module does NOT handle:
//! - Actual API calls (handled by [`RedditClient`] methods)
//! - Obtaining or refreshing OAuth tokens
//!
//! # Invariants
//! - The base URL never ends with `/`
//! - Every request carries the configured, non-empty user agent

use std::time::Duration;

use crate::auth::AuthStrategy;
use crate::client::RedditClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use reddit_config::{
    Config,
    constants::{
        DEFAULT_MAX_REDIRECTS, DEFAULT_OAUTH_BASE_URL, DEFAULT_PUBLIC_BASE_URL,
        DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT,
    },
};

/// Builder for creating a new [`RedditClient`].
///
/// Every option has a default. Without a base URL the client talks to
/// `https://oauth.reddit.com` when it has a bearer token and to
/// `https://www.reddit.com` otherwise.
///
/// # Example
///
/// ```rust,ignore
/// use reddit_client::{RedditClient, AuthStrategy};
/// use secrecy::SecretString;
///
/// let client = RedditClient::builder()
///     .auth_strategy(AuthStrategy::BearerToken {
///         token: SecretString::new("my-token".to_string().into()),
///     })
///     .user_agent("linux:my-app:0.1 (by u/me)".to_string())
///     .timeout(Duration::from_secs(60))
///     .build()?;
/// ```
#[derive(Debug)]
pub struct RedditClientBuilder {
    base_url: Option<String>,
    auth_strategy: AuthStrategy,
    user_agent: String,
    timeout: Duration,
    metrics: Option<MetricsCollector>,
}

impl Default for RedditClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            auth_strategy: AuthStrategy::Anonymous,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            metrics: None,
        }
    }
}

impl RedditClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API base URL, e.g. `https://oauth.reddit.com`.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the authentication strategy.
    pub fn auth_strategy(mut self, strategy: AuthStrategy) -> Self {
        self.auth_strategy = strategy;
        self
    }

    /// Set the `User-Agent` header.
    pub fn user_agent(mut self, user_agent: String) -> Self {
        self.user_agent = user_agent;
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the metrics collector for API call performance tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Create a client builder from configuration.
    ///
    /// ```rust,ignore
    /// let config = ConfigLoader::new().load_dotenv()?.from_env()?.build()?;
    /// let client = RedditClient::builder().from_config(&config).build()?;
    /// ```
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = config.connection.base_url.clone();
        self.auth_strategy = AuthStrategy::from(&config.auth.strategy);
        self.user_agent = config.connection.user_agent.clone();
        self.timeout = config.connection.timeout;
        self
    }

    /// Normalize a base URL by removing trailing slashes.
    ///
    /// - `"https://oauth.reddit.com/"` -> `"https://oauth.reddit.com"`
    /// - `"http://127.0.0.1:8080//"` -> `"http://127.0.0.1:8080"`
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`RedditClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if the base URL does not parse or is
    /// not http(s). Returns [`ClientError::InvalidRequest`] for a blank user
    /// agent. Returns `ClientError::HttpError` if the HTTP client fails to build.
    pub fn build(self) -> Result<RedditClient> {
        let base_url = match self.base_url {
            Some(url) => Self::normalize_base_url(url),
            None if self.auth_strategy.is_authenticated() => DEFAULT_OAUTH_BASE_URL.to_string(),
            None => DEFAULT_PUBLIC_BASE_URL.to_string(),
        };

        let parsed = reqwest::Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "{}: scheme must be http or https",
                base_url
            )));
        }

        if self.user_agent.trim().is_empty() {
            return Err(ClientError::InvalidRequest(
                "user agent must not be empty".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .redirect(reqwest::redirect::Policy::limited(DEFAULT_MAX_REDIRECTS))
            .user_agent(self.user_agent)
            .build()?;

        Ok(RedditClient {
            http,
            base_url,
            auth: self.auth_strategy,
            metrics: self.metrics,
        })
    }
}
