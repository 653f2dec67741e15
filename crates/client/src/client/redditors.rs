//! Account methods for [`RedditClient`].
//!
//! # What this module handles:
//! - Account attributes (`about`, `me`)
//! - Friend, block and trust relationships
//! - Gilding, trophies, multireddits and moderated subreddits
//!
//! # What this module does NOT handle:
//! - Low-level HTTP calls (in [`crate::endpoints`])
//! - Caching of attributes (in [`crate::redditor::Redditor`])

use reddit_config::constants::{MAX_GILD_MONTHS, MIN_GILD_MONTHS};

use crate::client::RedditClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::{FriendInfo, ModeratedSubreddit, Multireddit, RedditorData, Trophy};

impl RedditClient {
    /// Fetch the attributes of `name`.
    pub async fn redditor_about(&self, name: &str) -> Result<RedditorData> {
        endpoints::get_redditor_about(
            &self.http,
            &self.base_url,
            self.token(),
            name,
            self.metrics(),
        )
        .await
    }

    /// Fetch the authenticated account's attributes.
    pub async fn current_user(&self) -> Result<RedditorData> {
        endpoints::get_me(&self.http, &self.base_url, self.token(), self.metrics()).await
    }

    pub async fn add_friend(&self, name: &str, note: Option<&str>) -> Result<FriendInfo> {
        endpoints::add_friend(
            &self.http,
            &self.base_url,
            self.token(),
            name,
            note,
            self.metrics(),
        )
        .await
    }

    pub async fn remove_friend(&self, name: &str) -> Result<()> {
        endpoints::remove_friend(
            &self.http,
            &self.base_url,
            self.token(),
            name,
            self.metrics(),
        )
        .await
    }

    pub async fn friend_info(&self, name: &str) -> Result<FriendInfo> {
        endpoints::get_friend_info(
            &self.http,
            &self.base_url,
            self.token(),
            name,
            self.metrics(),
        )
        .await
    }

    /// Give `months` of premium to `name`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidRequest` without sending anything when
    /// `months` is outside `1..=36`.
    pub async fn gild_user(&self, name: &str, months: u32) -> Result<()> {
        if !(MIN_GILD_MONTHS..=MAX_GILD_MONTHS).contains(&months) {
            return Err(ClientError::InvalidRequest(format!(
                "months must be between {} and {}, got {}",
                MIN_GILD_MONTHS, MAX_GILD_MONTHS, months
            )));
        }
        endpoints::gild_user(
            &self.http,
            &self.base_url,
            self.token(),
            name,
            months,
            self.metrics(),
        )
        .await
    }

    pub async fn block_user(&self, name: &str) -> Result<()> {
        endpoints::block_user(
            &self.http,
            &self.base_url,
            self.token(),
            name,
            self.metrics(),
        )
        .await
    }

    /// Unblock `name` for the authenticated account.
    ///
    /// The block list belongs to the caller, so this first looks up the
    /// caller's fullname.
    pub async fn unblock_user(&self, name: &str) -> Result<()> {
        let me = self.current_user().await?;
        let container = me.fullname().ok_or_else(|| {
            ClientError::InvalidResponse("current user has no id".to_string())
        })?;
        endpoints::unblock_user(
            &self.http,
            &self.base_url,
            self.token(),
            name,
            &container,
            self.metrics(),
        )
        .await
    }

    pub async fn trust_user(&self, name: &str) -> Result<()> {
        endpoints::trust_user(
            &self.http,
            &self.base_url,
            self.token(),
            name,
            self.metrics(),
        )
        .await
    }

    pub async fn distrust_user(&self, name: &str) -> Result<()> {
        endpoints::distrust_user(
            &self.http,
            &self.base_url,
            self.token(),
            name,
            self.metrics(),
        )
        .await
    }

    pub async fn trophies(&self, name: &str) -> Result<Vec<Trophy>> {
        endpoints::get_trophies(
            &self.http,
            &self.base_url,
            self.token(),
            name,
            self.metrics(),
        )
        .await
    }

    pub async fn multireddits(&self, name: &str) -> Result<Vec<Multireddit>> {
        endpoints::get_multireddits(
            &self.http,
            &self.base_url,
            self.token(),
            name,
            self.metrics(),
        )
        .await
    }

    pub async fn moderated_subreddits(&self, name: &str) -> Result<Vec<ModeratedSubreddit>> {
        endpoints::get_moderated_subreddits(
            &self.http,
            &self.base_url,
            self.token(),
            name,
            self.metrics(),
        )
        .await
    }
}
