//! REST API endpoint implementations.
//!
//! Free functions taking the shared `reqwest::Client`, the base URL and the
//! optional bearer token. [`crate::RedditClient`] wraps them.

mod listings;
mod messages;
pub mod paths;
pub mod request;
mod redditors;
pub mod url_encoding;

pub use listings::get_user_listing;
pub use messages::{ComposeMessage, compose_message};
pub use redditors::{
    add_friend, block_user, distrust_user, get_friend_info, get_me, get_moderated_subreddits,
    get_multireddits, get_redditor_about, get_trophies, gild_user, remove_friend, trust_user,
    unblock_user,
};
pub use request::send_request;
pub use url_encoding::encode_path_segment;
