//! Request authentication strategies.
//!
//! The client never obtains or refreshes tokens itself; an OAuth access
//! token is handed in ready to use, or requests go out anonymously.

use secrecy::{ExposeSecret, SecretString};

/// Strategy for authenticating requests.
#[derive(Debug, Clone, Default)]
pub enum AuthStrategy {
    /// No `Authorization` header; only public endpoints are reachable.
    #[default]
    Anonymous,
    /// OAuth bearer token.
    BearerToken { token: SecretString },
}

impl AuthStrategy {
    /// Whether requests carry credentials.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::BearerToken { .. })
    }

    /// The bearer token to attach to requests, if any.
    pub fn bearer_token(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::BearerToken { token } => Some(token.expose_secret()),
        }
    }
}

impl From<&reddit_config::AuthStrategy> for AuthStrategy {
    fn from(strategy: &reddit_config::AuthStrategy) -> Self {
        match strategy {
            reddit_config::AuthStrategy::Anonymous => Self::Anonymous,
            reddit_config::AuthStrategy::AccessToken { token } => Self::BearerToken {
                token: token.clone(),
            },
        }
    }
}
