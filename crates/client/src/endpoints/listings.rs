//! User listing endpoint (`user/{name}/{where}`).

use reqwest::Client;

use crate::endpoints::paths;
use crate::endpoints::request::get_json;
use crate::error::Result;
use crate::listing::{ListingParams, UserListing};
use crate::metrics::MetricsCollector;
use crate::models::{ListingData, ListingResponse};

/// Fetch a single page of one of `name`'s listings.
pub async fn get_user_listing(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    name: &str,
    listing: UserListing,
    params: &ListingParams,
    metrics: Option<&MetricsCollector>,
) -> Result<ListingData> {
    let resp: ListingResponse = get_json(
        client,
        base_url,
        auth_token,
        &paths::user_listing(name, listing.as_path()),
        &params.to_query(),
        paths::USER_LISTING_TEMPLATE,
        metrics,
    )
    .await?;
    Ok(resp.data)
}
