//! Comment model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::KIND_COMMENT;

/// A comment as returned inside listings (`kind: "t1"`).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Comment {
    pub id: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub subreddit: String,
    #[serde(default)]
    pub link_id: String,
    #[serde(default)]
    pub parent_id: String,
    #[serde(default)]
    pub link_title: Option<String>,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub gilded: u32,
    pub created_utc: f64,
    #[serde(default, deserialize_with = "crate::serde_helpers::edited_timestamp")]
    pub edited: Option<f64>,
    #[serde(default)]
    pub permalink: String,
}

impl Comment {
    /// `t1_<id>`.
    pub fn fullname(&self) -> String {
        format!("{KIND_COMMENT}_{}", self.id)
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        crate::serde_helpers::to_datetime(self.created_utc)
    }

    /// Whether this comment replies directly to the submission.
    pub fn is_top_level(&self) -> bool {
        self.parent_id == self.link_id
    }
}
