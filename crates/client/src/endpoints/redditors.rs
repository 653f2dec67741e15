//! Account endpoints: attributes, relationships and gilding.

use reqwest::Client;
use serde::Serialize;

use crate::endpoints::paths;
use crate::endpoints::request::{delete_form, get_json, post_form, put_json};
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{
    Envelope, FriendInfo, ModeratedSubreddit, ModeratedSubredditsResponse, Multireddit,
    RedditorData, Trophy, TrophyList,
};

const NO_QUERY: &[(&str, &str)] = &[];

/// Fetch the attributes of `name` (`user/{name}/about`).
pub async fn get_redditor_about(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    name: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<RedditorData> {
    let envelope: Envelope<RedditorData> = get_json(
        client,
        base_url,
        auth_token,
        &paths::user_about(name),
        NO_QUERY,
        paths::USER_ABOUT_TEMPLATE,
        metrics,
    )
    .await?;
    Ok(envelope.data)
}

/// Fetch the authenticated account. The response is the bare attribute object.
pub async fn get_me(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    metrics: Option<&MetricsCollector>,
) -> Result<RedditorData> {
    if auth_token.is_none() {
        return Err(ClientError::AuthRequired(
            "the current user is only known to an authenticated client".to_string(),
        ));
    }
    get_json(
        client,
        base_url,
        auth_token,
        paths::ME,
        NO_QUERY,
        paths::ME,
        metrics,
    )
    .await
}

#[derive(Debug, Serialize)]
struct FriendRequest<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    note: Option<&'a str>,
}

/// Add `name` as a friend, optionally with a note.
pub async fn add_friend(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    name: &str,
    note: Option<&str>,
    metrics: Option<&MetricsCollector>,
) -> Result<FriendInfo> {
    put_json(
        client,
        base_url,
        auth_token,
        &paths::friend(name),
        &FriendRequest { name, note },
        paths::FRIEND_TEMPLATE,
        metrics,
    )
    .await
}

/// Remove `name` from the friend list.
pub async fn remove_friend(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    name: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    delete_form(
        client,
        base_url,
        auth_token,
        &paths::friend(name),
        &[("id", name)],
        paths::FRIEND_TEMPLATE,
        metrics,
    )
    .await
}

/// Fetch the friend relationship with `name`.
pub async fn get_friend_info(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    name: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<FriendInfo> {
    get_json(
        client,
        base_url,
        auth_token,
        &paths::friend(name),
        NO_QUERY,
        paths::FRIEND_TEMPLATE,
        metrics,
    )
    .await
}

/// Give `months` of premium to `name`. The caller validates the range.
pub async fn gild_user(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    name: &str,
    months: u32,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    post_form(
        client,
        base_url,
        auth_token,
        &paths::gild_user(name),
        &[("months", months.to_string())],
        paths::GILD_USER_TEMPLATE,
        metrics,
    )
    .await?;
    Ok(())
}

/// POST `{name}` to one of the relationship endpoints that take only a name.
async fn post_name(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    path: &str,
    name: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    post_form(
        client,
        base_url,
        auth_token,
        path,
        &[("name", name)],
        path,
        metrics,
    )
    .await?;
    Ok(())
}

pub async fn block_user(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    name: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    post_name(client, base_url, auth_token, paths::BLOCK_USER, name, metrics).await
}

/// Remove `name` from the block list of `container` (the caller's fullname).
pub async fn unblock_user(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    name: &str,
    container: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    post_form(
        client,
        base_url,
        auth_token,
        paths::UNFRIEND_ALL,
        &[("container", container), ("name", name), ("type", "enemy")],
        paths::UNFRIEND_ALL,
        metrics,
    )
    .await?;
    Ok(())
}

/// Let `name` message the caller even when messages are restricted.
pub async fn trust_user(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    name: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    post_name(client, base_url, auth_token, paths::ADD_WHITELISTED, name, metrics).await
}

pub async fn distrust_user(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    name: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    post_name(
        client,
        base_url,
        auth_token,
        paths::REMOVE_WHITELISTED,
        name,
        metrics,
    )
    .await
}

pub async fn get_trophies(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    name: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<Trophy>> {
    let list: TrophyList = get_json(
        client,
        base_url,
        auth_token,
        &paths::trophies(name),
        NO_QUERY,
        paths::TROPHIES_TEMPLATE,
        metrics,
    )
    .await?;
    Ok(list.into_trophies())
}

/// Public multireddits owned by `name`.
pub async fn get_multireddits(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    name: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<Multireddit>> {
    let multis: Vec<Envelope<Multireddit>> = get_json(
        client,
        base_url,
        auth_token,
        &paths::multireddits(name),
        &[("expand_srs", "true")],
        paths::MULTIREDDITS_TEMPLATE,
        metrics,
    )
    .await?;
    Ok(multis.into_iter().map(|m| m.data).collect())
}

/// Subreddits `name` moderates.
///
/// Accounts that moderate nothing return `{}` rather than an empty list.
pub async fn get_moderated_subreddits(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    name: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<ModeratedSubreddit>> {
    let resp: ModeratedSubredditsResponse = get_json(
        client,
        base_url,
        auth_token,
        &paths::user_moderated(name),
        NO_QUERY,
        paths::USER_MODERATED_TEMPLATE,
        metrics,
    )
    .await?;
    Ok(resp.data)
}
