//! Multireddit models.

use serde::{Deserialize, Serialize};

/// A custom feed combining several subreddits.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Multireddit {
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub path: String,
    #[serde(default)]
    pub description_md: String,
    #[serde(default)]
    pub visibility: String,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub created_utc: Option<f64>,
    #[serde(default)]
    pub subreddits: Vec<MultiredditSubreddit>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct MultiredditSubreddit {
    pub name: String,
}
