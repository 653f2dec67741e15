//! Submission (link post) model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::KIND_LINK;

/// A submission as returned inside listings (`kind: "t3"`).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Submission {
    pub id: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub selftext: String,
    #[serde(default)]
    pub subreddit: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub num_comments: u64,
    #[serde(default)]
    pub gilded: u32,
    #[serde(default)]
    pub over_18: bool,
    #[serde(default)]
    pub is_self: bool,
    #[serde(default)]
    pub stickied: bool,
    pub created_utc: f64,
    #[serde(default, deserialize_with = "crate::serde_helpers::edited_timestamp")]
    pub edited: Option<f64>,
    #[serde(default)]
    pub permalink: String,
}

impl Submission {
    /// `t3_<id>`.
    pub fn fullname(&self) -> String {
        format!("{KIND_LINK}_{}", self.id)
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        crate::serde_helpers::to_datetime(self.created_utc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_submission() {
        let json = r#"{
            "id": "xyz",
            "author": "spez",
            "title": "A post",
            "selftext": "",
            "subreddit": "announcements",
            "url": "https://example.com",
            "domain": "example.com",
            "score": 1000,
            "num_comments": 250,
            "over_18": false,
            "is_self": false,
            "created_utc": 1700000000,
            "edited": false,
            "permalink": "/r/announcements/comments/xyz/a_post/"
        }"#;
        let submission: Submission = serde_json::from_str(json).unwrap();
        assert_eq!(submission.fullname(), "t3_xyz");
        assert_eq!(submission.num_comments, 250);
        assert_eq!(submission.domain.as_deref(), Some("example.com"));
        assert!(!submission.is_self);
    }
}
