//! Listing parameters and pagination over user listings.
//!
//! Responsibilities:
//! - Map [`ListingParams`] onto the query string, renaming `time_filter` to
//!   `t` and `show_all` to `show=all`.
//! - Walk pages with the `after` cursor in [`ListingGenerator`].
//!
//! Does NOT handle:
//! - Backward pagination; `before` is passed through on the first page only.
//!
//! Invariants:
//! - No page requests more than [`MAX_LISTING_PAGE_SIZE`] items.
//! - The generator never yields more than its overall limit.
//! - Once exhausted, `next_page` returns `Ok(None)` without a request.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use futures::{Stream, TryStreamExt, stream};
use reddit_config::constants::MAX_LISTING_PAGE_SIZE;
use tracing::debug;

use crate::client::RedditClient;
use crate::error::{ClientError, Result};
use crate::models::Thing;

macro_rules! wire_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $wire:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub const fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(s))
                    .ok_or_else(|| {
                        let valid: Vec<&str> = $name::ALL.iter().map(|v| v.as_str()).collect();
                        format!("invalid value '{}', expected one of: {}", s, valid.join(", "))
                    })
            }
        }
    };
}

wire_enum! {
    /// Sort order for user listings.
    Sort {
        Hot => "hot",
        New => "new",
        Top => "top",
        Controversial => "controversial",
    }
}

wire_enum! {
    /// Time window for `top` and `controversial` sorts (sent as `t`).
    TimeFilter {
        Hour => "hour",
        Day => "day",
        Week => "week",
        Month => "month",
        Year => "year",
        All => "all",
    }
}

wire_enum! {
    /// The listings under `user/{name}/`.
    UserListing {
        Overview => "overview",
        Comments => "comments",
        Submitted => "submitted",
        Gilded => "gilded",
        Upvoted => "upvoted",
        Downvoted => "downvoted",
        Hidden => "hidden",
        Saved => "saved",
        GildingsGiven => "gilded/given",
    }
}

impl UserListing {
    /// Path suffix after `user/{name}/`.
    pub const fn as_path(&self) -> &'static str {
        self.as_str()
    }
}

/// Parameters accepted by listing endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingParams {
    /// Overall number of items to yield; `None` walks until exhausted.
    pub limit: Option<usize>,
    pub after: Option<String>,
    pub before: Option<String>,
    /// Items already seen, used by the server to number results.
    pub count: Option<usize>,
    pub sort: Option<Sort>,
    pub time_filter: Option<TimeFilter>,
    /// Include items the server would otherwise hide (`show=all`).
    pub show_all: bool,
}

impl ListingParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_after(mut self, after: impl Into<String>) -> Self {
        self.after = Some(after.into());
        self
    }

    pub fn with_before(mut self, before: impl Into<String>) -> Self {
        self.before = Some(before.into());
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    pub fn with_time_filter(mut self, time_filter: TimeFilter) -> Self {
        self.time_filter = Some(time_filter);
        self
    }

    pub fn with_show_all(mut self, show_all: bool) -> Self {
        self.show_all = show_all;
        self
    }

    /// Query pairs as sent on the wire.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit", limit.to_string()));
        }
        if let Some(after) = &self.after {
            query.push(("after", after.clone()));
        }
        if let Some(before) = &self.before {
            query.push(("before", before.clone()));
        }
        if let Some(count) = self.count {
            query.push(("count", count.to_string()));
        }
        if let Some(sort) = self.sort {
            query.push(("sort", sort.as_str().to_string()));
        }
        if let Some(t) = self.time_filter {
            query.push(("t", t.as_str().to_string()));
        }
        if self.show_all {
            query.push(("show", "all".to_string()));
        }
        query
    }
}

/// Lazily pages through one of a redditor's listings.
///
/// ```rust,ignore
/// let mut saved = redditor.saved(ListingParams::new().with_limit(250));
/// while let Some(page) = saved.next_page().await? {
///     for thing in page {
///         println!("{:?}", thing.fullname());
///     }
/// }
/// ```
#[derive(Debug)]
pub struct ListingGenerator {
    client: Arc<RedditClient>,
    name: String,
    listing: UserListing,
    params: ListingParams,
    limit: Option<usize>,
    after: Option<String>,
    yielded: usize,
    exhausted: bool,
}

impl ListingGenerator {
    pub fn new(
        client: Arc<RedditClient>,
        name: impl Into<String>,
        listing: UserListing,
        mut params: ListingParams,
    ) -> Self {
        let limit = params.limit.take();
        let after = params.after.take();
        Self {
            client,
            name: name.into(),
            listing,
            params,
            limit,
            after,
            yielded: 0,
            exhausted: false,
        }
    }

    pub fn listing(&self) -> UserListing {
        self.listing
    }

    /// Number of items yielded so far.
    pub fn yielded(&self) -> usize {
        self.yielded
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Parameters for the next request, or `None` when nothing remains.
    fn next_params(&self) -> Option<ListingParams> {
        let remaining = match self.limit {
            Some(limit) => limit.checked_sub(self.yielded).filter(|r| *r > 0)?,
            None => MAX_LISTING_PAGE_SIZE,
        };
        let mut params = self.params.clone();
        params.limit = Some(remaining.min(MAX_LISTING_PAGE_SIZE));
        params.after = self.after.clone();
        if self.yielded > 0 {
            params.count = Some(self.params.count.unwrap_or(0) + self.yielded);
            params.before = None;
        }
        Some(params)
    }

    /// Fetch the next page.
    ///
    /// Returns `Ok(None)` once the listing has no cursor left, a page comes
    /// back empty, or the overall limit has been reached.
    pub async fn next_page(&mut self) -> Result<Option<Vec<Thing>>> {
        if self.exhausted {
            return Ok(None);
        }
        let Some(params) = self.next_params() else {
            self.exhausted = true;
            return Ok(None);
        };
        let page_size = params.limit.unwrap_or(MAX_LISTING_PAGE_SIZE);

        let data = match self
            .client
            .user_listing_page(&self.name, self.listing, &params)
            .await
        {
            Ok(data) => data,
            Err(e) => {
                self.exhausted = true;
                return Err(e);
            }
        };

        let mut children = data.children;
        children.truncate(page_size);
        self.yielded += children.len();
        self.after = data.after;

        let limit_reached = self.limit.is_some_and(|limit| self.yielded >= limit);
        if self.after.is_none() || children.is_empty() || limit_reached {
            self.exhausted = true;
        }
        debug!(
            name = %self.name,
            listing = %self.listing,
            page = children.len(),
            yielded = self.yielded,
            exhausted = self.exhausted,
            "Fetched listing page"
        );

        if children.is_empty() {
            return Ok(None);
        }
        Ok(Some(children))
    }

    /// Drain every remaining page into one vector.
    pub async fn collect_all(mut self) -> Result<Vec<Thing>> {
        let mut items = Vec::new();
        while let Some(page) = self.next_page().await? {
            items.extend(page);
        }
        Ok(items)
    }

    /// Stream the remaining items one by one.
    ///
    /// The stream ends after the first error.
    pub fn into_stream(self) -> impl Stream<Item = Result<Thing>> {
        stream::try_unfold(self, |mut generator| async move {
            let page = generator.next_page().await?;
            Ok::<_, ClientError>(page.map(|page| (page, generator)))
        })
        .map_ok(|page| stream::iter(page.into_iter().map(Ok)))
        .try_flatten()
    }
}
