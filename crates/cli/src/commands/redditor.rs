//! Account command implementations.
//!
//! Responsibilities:
//! - Run one `Redditor` operation per subcommand.
//! - Print the result, or an acknowledgement for operations without one.
//!
//! Does NOT handle:
//! - Direct REST API calls (handled by client crate)
//! - Listing pagination (see `commands::listing`)

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use reddit_client::RedditClient;
use tracing::info;

use crate::formatters::{OutputFormat, write_ack, write_items, write_value};

/// Account operations that take only a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    About,
    Unfriend,
    FriendInfo,
    Block,
    Unblock,
    Trust,
    Distrust,
    Trophies,
    Multireddits,
    Moderated,
}

impl Action {
    pub const fn as_str(self) -> &'static str {
        match self {
            Action::About => "about",
            Action::Unfriend => "unfriend",
            Action::FriendInfo => "friend-info",
            Action::Block => "block",
            Action::Unblock => "unblock",
            Action::Trust => "trust",
            Action::Distrust => "distrust",
            Action::Trophies => "trophies",
            Action::Multireddits => "multireddits",
            Action::Moderated => "moderated",
        }
    }
}

pub async fn run<W: Write>(
    client: &Arc<RedditClient>,
    action: Action,
    name: &str,
    output: OutputFormat,
    out: &mut W,
) -> Result<()> {
    info!(name, action = action.as_str(), "Running account command");
    let redditor = client.redditor(name);
    match action {
        Action::About => write_value(out, output, redditor.about().await?),
        Action::FriendInfo => write_value(out, output, &redditor.friend_info().await?),
        Action::Trophies => write_items(out, output, &redditor.trophies().await?),
        Action::Multireddits => write_items(out, output, &redditor.multireddits().await?),
        Action::Moderated => write_items(out, output, &redditor.moderated().await?),
        Action::Unfriend => {
            redditor.unfriend().await?;
            write_ack(out, output, action.as_str(), name)
        }
        Action::Block => {
            redditor.block().await?;
            write_ack(out, output, action.as_str(), name)
        }
        Action::Unblock => {
            redditor.unblock().await?;
            write_ack(out, output, action.as_str(), name)
        }
        Action::Trust => {
            redditor.trust().await?;
            write_ack(out, output, action.as_str(), name)
        }
        Action::Distrust => {
            redditor.distrust().await?;
            write_ack(out, output, action.as_str(), name)
        }
    }
}

pub async fn friend<W: Write>(
    client: &Arc<RedditClient>,
    name: &str,
    note: Option<&str>,
    output: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let info = client.redditor(name).friend(note).await?;
    write_value(out, output, &info)
}

pub async fn gild<W: Write>(
    client: &Arc<RedditClient>,
    name: &str,
    months: u32,
    output: OutputFormat,
    out: &mut W,
) -> Result<()> {
    client
        .redditor(name)
        .gild(months)
        .await
        .with_context(|| format!("Failed to gild {}", name))?;
    write_ack(out, output, "gild", name)
}

pub async fn message<W: Write>(
    client: &Arc<RedditClient>,
    name: &str,
    subject: &str,
    text: &str,
    from_subreddit: Option<&str>,
    output: OutputFormat,
    out: &mut W,
) -> Result<()> {
    client
        .redditor(name)
        .message(subject, text, from_subreddit)
        .await
        .with_context(|| format!("Failed to message {}", name))?;
    write_ack(out, output, "message", name)
}

pub async fn me<W: Write>(
    client: &Arc<RedditClient>,
    output: OutputFormat,
    out: &mut W,
) -> Result<()> {
    let me = client.me().await?;
    write_value(out, output, me.about().await?)
}
