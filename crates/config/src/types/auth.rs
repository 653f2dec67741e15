//! Authentication types for client configuration.
//!
//! Responsibilities:
//! - Define authentication strategies (anonymous, OAuth access token).
//! - Handle serialization of secret values.
//!
//! Does NOT handle:
//! - Obtaining or refreshing OAuth tokens; an access token is supplied as-is.
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - Serialization includes secrets for config file persistence; secrecy is for runtime safety.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Strategy for authenticating API requests.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AuthStrategy {
    /// No credentials; only public, read-only endpoints will succeed.
    #[serde(rename = "anonymous")]
    #[default]
    Anonymous,
    /// OAuth bearer token obtained out of band.
    #[serde(rename = "token")]
    AccessToken {
        #[serde(with = "secret_string")]
        token: SecretString,
    },
}

impl AuthStrategy {
    /// Whether requests made with this strategy carry credentials.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::AccessToken { .. })
    }
}

/// Authentication configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// The authentication strategy to use.
    #[serde(flatten)]
    pub strategy: AuthStrategy,
}
