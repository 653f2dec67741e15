//! Account models for the user endpoints.
//!
//! This module contains the attribute set of a redditor (`user/{name}/about`,
//! `api/v1/me`) and the friend relationship record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::common::KIND_ACCOUNT;

/// Attributes of an account.
///
/// Suspended accounts come back with little more than `name` and
/// `is_suspended`, so everything else is optional or defaulted. Attributes
/// without a typed field are kept in `extra`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct RedditorData {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub created_utc: Option<f64>,
    #[serde(default)]
    pub link_karma: i64,
    #[serde(default)]
    pub comment_karma: i64,
    #[serde(default)]
    pub total_karma: Option<i64>,
    #[serde(default)]
    pub is_gold: bool,
    #[serde(default)]
    pub is_mod: bool,
    #[serde(default)]
    pub is_employee: bool,
    #[serde(default)]
    pub is_friend: Option<bool>,
    #[serde(default)]
    pub is_suspended: bool,
    #[serde(default)]
    pub has_verified_email: Option<bool>,
    #[serde(default)]
    pub icon_img: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RedditorData {
    /// `t2_<id>`, when the account exposes an id.
    pub fn fullname(&self) -> Option<String> {
        self.id.as_ref().map(|id| format!("{KIND_ACCOUNT}_{id}"))
    }

    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_utc.and_then(crate::serde_helpers::to_datetime)
    }

    /// Look up any attribute by its wire name, typed or not.
    pub fn attribute(&self, key: &str) -> Option<Value> {
        if let Some(value) = self.extra.get(key) {
            return Some(value.clone());
        }
        match serde_json::to_value(self) {
            Ok(Value::Object(mut map)) => map.remove(key).filter(|v| !v.is_null()),
            _ => None,
        }
    }
}

/// Friend relationship details (`api/v1/me/friends/{name}`).
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FriendInfo {
    pub name: String,
    #[serde(default)]
    pub id: Option<String>,
    /// When the friendship was created (epoch seconds).
    #[serde(default)]
    pub date: Option<f64>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub rel_id: Option<String>,
}

impl FriendInfo {
    pub fn since(&self) -> Option<DateTime<Utc>> {
        self.date.and_then(crate::serde_helpers::to_datetime)
    }
}
