//! Path templates for the user endpoints.
//!
//! The `*_TEMPLATE` constants double as metrics labels; the formatter
//! functions fill in percent-encoded account names.

use super::url_encoding::encode_path_segment;

pub const USER_ABOUT_TEMPLATE: &str = "user/{name}/about";
pub const USER_LISTING_TEMPLATE: &str = "user/{name}/{where}";
pub const USER_MODERATED_TEMPLATE: &str = "user/{name}/moderated_subreddits";
pub const ME: &str = "api/v1/me";
pub const FRIEND_TEMPLATE: &str = "api/v1/me/friends/{name}";
pub const GILD_USER_TEMPLATE: &str = "api/v1/gold/give/{name}";
pub const TROPHIES_TEMPLATE: &str = "api/v1/user/{name}/trophies";
pub const MULTIREDDITS_TEMPLATE: &str = "api/multi/user/{name}";
pub const COMPOSE: &str = "api/compose";
pub const BLOCK_USER: &str = "api/block_user";
pub const UNFRIEND_ALL: &str = "r/all/api/unfriend";
pub const ADD_WHITELISTED: &str = "api/add_whitelisted";
pub const REMOVE_WHITELISTED: &str = "api/remove_whitelisted";

pub fn user_about(name: &str) -> String {
    format!("user/{}/about", encode_path_segment(name))
}

/// `where` is one of the fixed listing names and is not encoded.
pub fn user_listing(name: &str, where_: &str) -> String {
    format!("user/{}/{}", encode_path_segment(name), where_)
}

pub fn user_moderated(name: &str) -> String {
    format!("user/{}/moderated_subreddits", encode_path_segment(name))
}

pub fn friend(name: &str) -> String {
    format!("api/v1/me/friends/{}", encode_path_segment(name))
}

pub fn gild_user(name: &str) -> String {
    format!("api/v1/gold/give/{}", encode_path_segment(name))
}

pub fn trophies(name: &str) -> String {
    format!("api/v1/user/{}/trophies", encode_path_segment(name))
}

pub fn multireddits(name: &str) -> String {
    format!("api/multi/user/{}", encode_path_segment(name))
}
