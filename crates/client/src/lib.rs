//! Reddit REST API client.
//!
//! This crate provides a type-safe, async client for the account ("redditor")
//! endpoints of the Reddit REST API. Account attributes load lazily on first
//! access; every other operation is one HTTP request.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use reddit_client::{ListingParams, RedditClient, Sort};
//!
//! let client = Arc::new(RedditClient::builder().build()?);
//! let spez = client.redditor("spez");
//! println!("{} karma", spez.about().await?.link_karma);
//!
//! let top = spez
//!     .submissions(ListingParams::new().with_sort(Sort::Top).with_limit(10))
//!     .collect_all()
//!     .await?;
//! ```

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
pub mod lazy;
pub mod listing;
pub mod metrics;
pub mod models;
pub mod redditor;
mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::AuthStrategy;
pub use client::{RedditClient, RedditClientBuilder};
pub use error::{ClientError, Result};
pub use lazy::{Lazy, LazyModel};
pub use listing::{ListingGenerator, ListingParams, Sort, TimeFilter, UserListing};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use models::{
    ApiErrorItem, Comment, FriendInfo, ListingData, ModeratedSubreddit, Multireddit,
    RedditorData, Submission, Thing, Trophy,
};
pub use redditor::Redditor;
