//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading or client construction (see `main()`).
//!
//! Invariants:
//! - Every command writes its result to the given writer and nothing else to stdout.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use reddit_client::RedditClient;

use crate::args::Commands;
use crate::commands::{listing, redditor};
use crate::commands::redditor::Action;
use crate::formatters::OutputFormat;

/// Dispatch a parsed subcommand to its handler.
pub(crate) async fn run_command<W: Write>(
    command: Commands,
    client: &Arc<RedditClient>,
    output: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::About { name } => redditor::run(client, Action::About, &name, output, out).await,
        Commands::Listing(args) => listing::run(client, args, output, out).await,
        Commands::Friend { name, note } => {
            redditor::friend(client, &name, note.as_deref(), output, out).await
        }
        Commands::Unfriend { name } => {
            redditor::run(client, Action::Unfriend, &name, output, out).await
        }
        Commands::FriendInfo { name } => {
            redditor::run(client, Action::FriendInfo, &name, output, out).await
        }
        Commands::Gild { name, months } => redditor::gild(client, &name, months, output, out).await,
        Commands::Message {
            name,
            subject,
            text,
            from_subreddit,
        } => {
            redditor::message(
                client,
                &name,
                &subject,
                &text,
                from_subreddit.as_deref(),
                output,
                out,
            )
            .await
        }
        Commands::Block { name } => redditor::run(client, Action::Block, &name, output, out).await,
        Commands::Unblock { name } => {
            redditor::run(client, Action::Unblock, &name, output, out).await
        }
        Commands::Trust { name } => redditor::run(client, Action::Trust, &name, output, out).await,
        Commands::Distrust { name } => {
            redditor::run(client, Action::Distrust, &name, output, out).await
        }
        Commands::Trophies { name } => {
            redditor::run(client, Action::Trophies, &name, output, out).await
        }
        Commands::Multireddits { name } => {
            redditor::run(client, Action::Multireddits, &name, output, out).await
        }
        Commands::Moderated { name } => {
            redditor::run(client, Action::Moderated, &name, output, out).await
        }
        Commands::Me => redditor::me(client, output, out).await,
    }
}
