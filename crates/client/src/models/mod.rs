//! Data models for Reddit API responses.
//!
//! Each submodule holds the types for one resource. Shared envelopes
//! (`Thing`, listings, error bodies) live in [`common`].

pub mod comment;
pub mod common;
pub mod multireddit;
pub mod redditor;
pub mod submission;
pub mod subreddit;
pub mod trophy;

pub use comment::Comment;
pub use common::{
    ApiErrorItem, Envelope, ErrorBody, JsonResponse, KIND_ACCOUNT, KIND_AWARD, KIND_COMMENT,
    KIND_LINK, KIND_MESSAGE, KIND_SUBREDDIT, ListingData, ListingResponse, Thing,
};
pub use multireddit::{Multireddit, MultiredditSubreddit};
pub use redditor::{FriendInfo, RedditorData};
pub use submission::Submission;
pub use subreddit::{ModeratedSubreddit, ModeratedSubredditsResponse};
pub use trophy::{Trophy, TrophyList};
