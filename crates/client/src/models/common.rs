//! Common types shared across Reddit API models.
//!
//! This module contains the `{kind, data}` envelope, the listing page shape,
//! and error bodies. It does NOT contain resource-specific models.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use super::{Comment, RedditorData, Submission};

/// Type prefix for comments.
pub const KIND_COMMENT: &str = "t1";
/// Type prefix for accounts.
pub const KIND_ACCOUNT: &str = "t2";
/// Type prefix for links (submissions).
pub const KIND_LINK: &str = "t3";
/// Type prefix for private messages.
pub const KIND_MESSAGE: &str = "t4";
/// Type prefix for subreddits.
pub const KIND_SUBREDDIT: &str = "t5";
/// Type prefix for awards (trophies).
pub const KIND_AWARD: &str = "t6";

/// Generic `{kind, data}` wrapper used by most endpoints.
#[derive(Debug, Deserialize, Clone)]
pub struct Envelope<T> {
    pub kind: String,
    pub data: T,
}

/// A single item inside a listing, dispatched on its `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawThing")]
pub enum Thing {
    Comment(Box<Comment>),
    Submission(Box<Submission>),
    Redditor(Box<RedditorData>),
    /// Any kind this client has no typed model for.
    Other { kind: String, data: Value },
}

#[derive(Deserialize)]
struct RawThing {
    kind: String,
    #[serde(default)]
    data: Value,
}

impl TryFrom<RawThing> for Thing {
    type Error = serde_json::Error;

    fn try_from(raw: RawThing) -> Result<Self, Self::Error> {
        Ok(match raw.kind.as_str() {
            KIND_COMMENT => Thing::Comment(Box::new(serde_json::from_value(raw.data)?)),
            KIND_LINK => Thing::Submission(Box::new(serde_json::from_value(raw.data)?)),
            KIND_ACCOUNT => Thing::Redditor(Box::new(serde_json::from_value(raw.data)?)),
            _ => Thing::Other {
                kind: raw.kind,
                data: raw.data,
            },
        })
    }
}

impl Thing {
    /// The type prefix of this item (`t1`, `t3`, ...).
    pub fn kind(&self) -> &str {
        match self {
            Thing::Comment(_) => KIND_COMMENT,
            Thing::Submission(_) => KIND_LINK,
            Thing::Redditor(_) => KIND_ACCOUNT,
            Thing::Other { kind, .. } => kind,
        }
    }

    /// The fullname (`t1_abc123`) of this item, when known.
    pub fn fullname(&self) -> Option<String> {
        match self {
            Thing::Comment(c) => Some(c.fullname()),
            Thing::Submission(s) => Some(s.fullname()),
            Thing::Redditor(r) => r.fullname(),
            Thing::Other { kind, data } => data
                .get("id")
                .and_then(Value::as_str)
                .map(|id| format!("{kind}_{id}")),
        }
    }

    pub fn as_comment(&self) -> Option<&Comment> {
        match self {
            Thing::Comment(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_submission(&self) -> Option<&Submission> {
        match self {
            Thing::Submission(s) => Some(s),
            _ => None,
        }
    }
}

impl Serialize for Thing {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        struct Tagged<'a, T: Serialize> {
            kind: &'a str,
            data: &'a T,
        }

        match self {
            Thing::Comment(c) => Tagged {
                kind: KIND_COMMENT,
                data: c.as_ref(),
            }
            .serialize(serializer),
            Thing::Submission(s) => Tagged {
                kind: KIND_LINK,
                data: s.as_ref(),
            }
            .serialize(serializer),
            Thing::Redditor(r) => Tagged {
                kind: KIND_ACCOUNT,
                data: r.as_ref(),
            }
            .serialize(serializer),
            Thing::Other { kind, data } => Tagged {
                kind: kind.as_str(),
                data,
            }
            .serialize(serializer),
        }
    }
}

/// One page of a listing.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ListingData {
    #[serde(default)]
    pub after: Option<String>,
    #[serde(default)]
    pub before: Option<String>,
    #[serde(default)]
    pub dist: Option<u64>,
    #[serde(default)]
    pub children: Vec<Thing>,
}

/// Listing response wrapper (`{"kind": "Listing", "data": {...}}`).
pub type ListingResponse = Envelope<ListingData>;

/// One entry of a `json.errors` array: `[error_type, message, field]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Option<String>>")]
pub struct ApiErrorItem {
    pub error_type: String,
    pub message: String,
    pub field: Option<String>,
}

impl TryFrom<Vec<Option<String>>> for ApiErrorItem {
    type Error = String;

    fn try_from(parts: Vec<Option<String>>) -> Result<Self, Self::Error> {
        let mut parts = parts.into_iter();
        let error_type = parts
            .next()
            .flatten()
            .ok_or_else(|| "error entry is missing its type".to_string())?;
        Ok(Self {
            error_type,
            message: parts.next().flatten().unwrap_or_default(),
            field: parts.next().flatten(),
        })
    }
}

impl fmt::Display for ApiErrorItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error_type, self.message)?;
        if let Some(field) = &self.field {
            write!(f, " on field '{field}'")?;
        }
        Ok(())
    }
}

/// Body of `api_type=json` POST responses.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct JsonResponse {
    #[serde(default)]
    pub json: JsonBody,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct JsonBody {
    #[serde(default)]
    pub errors: Vec<ApiErrorItem>,
    #[serde(default)]
    pub data: Option<Value>,
}

/// Error body returned with non-2xx statuses.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ErrorBody {
    pub message: Option<String>,
    pub explanation: Option<String>,
    pub reason: Option<String>,
}

impl ErrorBody {
    /// The most descriptive message the body carries.
    pub fn best_message(self) -> Option<String> {
        self.explanation.or(self.message).or(self.reason)
    }
}
