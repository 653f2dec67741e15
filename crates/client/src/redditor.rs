//! The redditor model.
//!
//! A [`Redditor`] is a handle on one account. Its attributes are fetched from
//! `user/{name}/about` the first time they are needed and cached until
//! [`Redditor::invalidate`] or [`Redditor::refresh`]. Every other method maps
//! onto exactly one request.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tracing::debug;

use crate::client::RedditClient;
use crate::error::{ClientError, Result};
use crate::lazy::{Lazy, LazyModel};
use crate::listing::{ListingGenerator, ListingParams, UserListing};
use crate::models::{FriendInfo, ModeratedSubreddit, Multireddit, RedditorData, Trophy};

/// A lazily loaded account.
pub struct Redditor {
    name: String,
    client: Arc<RedditClient>,
    data: Lazy<RedditorData>,
}

impl Redditor {
    /// A handle on `name`; nothing is fetched yet.
    pub fn new(client: Arc<RedditClient>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            client,
            data: Lazy::new(),
        }
    }

    /// A handle whose attributes are already known, e.g. from a listing.
    pub fn from_data(client: Arc<RedditClient>, data: RedditorData) -> Self {
        Self {
            name: data.name.clone(),
            client,
            data: Lazy::loaded(data),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn client(&self) -> &Arc<RedditClient> {
        &self.client
    }

    /// Whether the attributes have been fetched.
    pub fn is_loaded(&self) -> bool {
        self.data.is_loaded()
    }

    /// The account attributes, fetched on first access.
    pub async fn about(&self) -> Result<&RedditorData> {
        self.load().await
    }

    /// Drop cached attributes; the next access fetches again.
    pub fn invalidate(&mut self) {
        self.data.invalidate();
    }

    /// Refetch the attributes now.
    pub async fn refresh(&mut self) -> Result<&RedditorData> {
        self.invalidate();
        self.load().await
    }

    /// `t2_<id>`, fetching the attributes if needed.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidResponse` for accounts that expose no id,
    /// such as suspended ones.
    pub async fn fullname(&self) -> Result<String> {
        self.about().await?.fullname().ok_or_else(|| {
            ClientError::InvalidResponse(format!("account {} has no id", self.name))
        })
    }

    fn listing(&self, listing: UserListing, params: ListingParams) -> ListingGenerator {
        ListingGenerator::new(Arc::clone(&self.client), self.name.clone(), listing, params)
    }

    /// Comments and submissions, newest first by default.
    pub fn overview(&self, params: ListingParams) -> ListingGenerator {
        self.listing(UserListing::Overview, params)
    }

    pub fn comments(&self, params: ListingParams) -> ListingGenerator {
        self.listing(UserListing::Comments, params)
    }

    pub fn submissions(&self, params: ListingParams) -> ListingGenerator {
        self.listing(UserListing::Submitted, params)
    }

    /// Items by this account that received awards.
    pub fn gilded(&self, params: ListingParams) -> ListingGenerator {
        self.listing(UserListing::Gilded, params)
    }

    /// Only visible to the account itself.
    pub fn upvoted(&self, params: ListingParams) -> ListingGenerator {
        self.listing(UserListing::Upvoted, params)
    }

    /// Only visible to the account itself.
    pub fn downvoted(&self, params: ListingParams) -> ListingGenerator {
        self.listing(UserListing::Downvoted, params)
    }

    /// Only visible to the account itself.
    pub fn hidden(&self, params: ListingParams) -> ListingGenerator {
        self.listing(UserListing::Hidden, params)
    }

    /// Only visible to the account itself.
    pub fn saved(&self, params: ListingParams) -> ListingGenerator {
        self.listing(UserListing::Saved, params)
    }

    /// Awards this account has given.
    pub fn gildings(&self, params: ListingParams) -> ListingGenerator {
        self.listing(UserListing::GildingsGiven, params)
    }

    /// Add as a friend, optionally with a note (notes need premium).
    pub async fn friend(&self, note: Option<&str>) -> Result<FriendInfo> {
        self.client.add_friend(&self.name, note).await
    }

    pub async fn unfriend(&self) -> Result<()> {
        self.client.remove_friend(&self.name).await
    }

    pub async fn friend_info(&self) -> Result<FriendInfo> {
        self.client.friend_info(&self.name).await
    }

    /// Give `months` of premium (1 to 36).
    pub async fn gild(&self, months: u32) -> Result<()> {
        self.client.gild_user(&self.name, months).await
    }

    pub async fn message(
        &self,
        subject: &str,
        text: &str,
        from_subreddit: Option<&str>,
    ) -> Result<()> {
        self.client
            .send_message(&self.name, subject, text, from_subreddit)
            .await
    }

    pub async fn block(&self) -> Result<()> {
        self.client.block_user(&self.name).await
    }

    pub async fn unblock(&self) -> Result<()> {
        self.client.unblock_user(&self.name).await
    }

    /// Allow messages from this account even when messaging is restricted.
    pub async fn trust(&self) -> Result<()> {
        self.client.trust_user(&self.name).await
    }

    pub async fn distrust(&self) -> Result<()> {
        self.client.distrust_user(&self.name).await
    }

    pub async fn trophies(&self) -> Result<Vec<Trophy>> {
        self.client.trophies(&self.name).await
    }

    pub async fn multireddits(&self) -> Result<Vec<Multireddit>> {
        self.client.multireddits(&self.name).await
    }

    pub async fn moderated(&self) -> Result<Vec<ModeratedSubreddit>> {
        self.client.moderated_subreddits(&self.name).await
    }
}

impl LazyModel for Redditor {
    type Data = RedditorData;

    async fn fetch_data(&self) -> Result<RedditorData> {
        debug!(name = %self.name, "Fetching redditor attributes");
        if let Some(m) = self.client.metrics() {
            m.record_model_fetch("redditor");
        }
        self.client.redditor_about(&self.name).await
    }

    fn lazy(&self) -> &Lazy<RedditorData> {
        &self.data
    }
}

impl fmt::Debug for Redditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Redditor")
            .field("name", &self.name)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

impl fmt::Display for Redditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Account names are case-insensitive.
impl PartialEq for Redditor {
    fn eq(&self, other: &Self) -> bool {
        self.name.eq_ignore_ascii_case(&other.name)
    }
}

impl Eq for Redditor {}

impl Hash for Redditor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.to_ascii_lowercase().hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn client() -> Arc<RedditClient> {
        Arc::new(
            RedditClient::builder()
                .base_url("http://127.0.0.1:1".to_string())
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_display_is_name() {
        let redditor = Redditor::new(client(), "Spez");
        assert_eq!(redditor.to_string(), "Spez");
    }

    #[test]
    fn test_equality_ignores_case() {
        let client = client();
        let a = Redditor::new(Arc::clone(&client), "Spez");
        let b = Redditor::new(Arc::clone(&client), "spez");
        let c = Redditor::new(client, "kn0thing");
        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[tokio::test]
    async fn test_from_data_is_loaded_without_request() {
        let data: RedditorData =
            serde_json::from_str(r#"{"name": "spez", "id": "1w72", "link_karma": 3}"#).unwrap();
        let redditor = Redditor::from_data(client(), data);
        assert!(redditor.is_loaded());
        assert_eq!(redditor.name(), "spez");
        // the base URL is unreachable, so these only pass when served from cache
        assert_eq!(redditor.about().await.unwrap().link_karma, 3);
        assert_eq!(redditor.fullname().await.unwrap(), "t2_1w72");
    }

    #[tokio::test]
    async fn test_fullname_without_id() {
        let data: RedditorData =
            serde_json::from_str(r#"{"name": "gone", "is_suspended": true}"#).unwrap();
        let redditor = Redditor::from_data(client(), data);
        assert!(matches!(
            redditor.fullname().await.unwrap_err(),
            ClientError::InvalidResponse(_)
        ));
    }

    #[test]
    fn test_invalidate_drops_cache() {
        let data: RedditorData = serde_json::from_str(r#"{"name": "spez"}"#).unwrap();
        let mut redditor = Redditor::from_data(client(), data);
        redditor.invalidate();
        assert!(!redditor.is_loaded());
    }

    #[tokio::test]
    async fn test_gild_out_of_range_sends_nothing() {
        let redditor = Redditor::new(client(), "spez");
        for months in [0, 37] {
            let err = redditor.gild(months).await.unwrap_err();
            assert!(matches!(err, ClientError::InvalidRequest(_)));
        }
    }

    #[test]
    fn test_listing_generators_target_their_listing() {
        let redditor = Redditor::new(client(), "spez");
        let cases = [
            (redditor.overview(ListingParams::new()), UserListing::Overview),
            (redditor.comments(ListingParams::new()), UserListing::Comments),
            (redditor.submissions(ListingParams::new()), UserListing::Submitted),
            (redditor.gilded(ListingParams::new()), UserListing::Gilded),
            (redditor.upvoted(ListingParams::new()), UserListing::Upvoted),
            (redditor.downvoted(ListingParams::new()), UserListing::Downvoted),
            (redditor.hidden(ListingParams::new()), UserListing::Hidden),
            (redditor.saved(ListingParams::new()), UserListing::Saved),
            (redditor.gildings(ListingParams::new()), UserListing::GildingsGiven),
        ];
        for (generator, expected) in cases {
            assert_eq!(generator.listing(), expected);
        }
    }
}
