//! Listing methods for [`RedditClient`].

use crate::client::RedditClient;
use crate::endpoints;
use crate::error::Result;
use crate::listing::{ListingParams, UserListing};
use crate::models::ListingData;

impl RedditClient {
    /// Fetch one page of `name`'s `listing`, exactly as `params` describe it.
    ///
    /// Most callers want [`crate::ListingGenerator`], which pages for them.
    pub async fn user_listing_page(
        &self,
        name: &str,
        listing: UserListing,
        params: &ListingParams,
    ) -> Result<ListingData> {
        endpoints::get_user_listing(
            &self.http,
            &self.base_url,
            self.token(),
            name,
            listing,
            params,
            self.metrics(),
        )
        .await
    }
}
