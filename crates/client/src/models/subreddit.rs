//! Subreddit summaries returned by user endpoints.

use serde::{Deserialize, Serialize};

/// A subreddit the account moderates.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ModeratedSubreddit {
    /// Display name without the `r/` prefix.
    pub sr: String,
    #[serde(default)]
    pub sr_display_name_prefixed: String,
    /// Fullname (`t5_...`).
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub subscribers: u64,
    #[serde(default)]
    pub over_18: bool,
    #[serde(default)]
    pub subreddit_type: String,
}

/// Response of `user/{name}/moderated_subreddits`.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct ModeratedSubredditsResponse {
    #[serde(default)]
    pub data: Vec<ModeratedSubreddit>,
}
