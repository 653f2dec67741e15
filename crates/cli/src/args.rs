//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate configuration values (see `reddit_config::ConfigLoader`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::commands::listing::ListingArgs;
use crate::formatters::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "redditor")]
#[command(about = "Inspect and manage Reddit accounts from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  redditor about spez\n  redditor listing spez submitted --sort top --time year --limit 10\n  redditor friend spez --note 'met at the meetup'\n  redditor message spez --subject hi --text 'hello there'\n  REDDIT_ACCESS_TOKEN=... redditor unblock some_user\n"
)]
pub struct Cli {
    /// API base URL (defaults to https://oauth.reddit.com with a token, https://www.reddit.com without)
    #[arg(short, long, global = true, env = "REDDIT_BASE_URL")]
    pub base_url: Option<String>,

    /// OAuth access token (bearer)
    #[arg(short, long, global = true, env = "REDDIT_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: Option<String>,

    /// User-Agent header sent with every request
    #[arg(long, global = true, env = "REDDIT_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Request timeout in seconds (validated with the rest of the configuration)
    #[arg(long, global = true, env = "REDDIT_TIMEOUT", value_name = "SECS")]
    pub timeout: Option<String>,

    /// Path to a custom configuration file (overrides default location).
    ///
    /// Can also be set via REDDIT_CONFIG_PATH environment variable.
    #[arg(long, global = true, env = "REDDIT_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Output format (json, ndjson)
    #[arg(short, long, global = true, default_value = "json")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show an account's attributes
    About {
        /// Account name
        name: String,
    },

    /// Page through one of an account's listings
    Listing(ListingArgs),

    /// Add an account as a friend
    Friend {
        name: String,
        /// Note attached to the friendship (requires premium)
        #[arg(long)]
        note: Option<String>,
    },

    /// Remove an account from the friend list
    Unfriend { name: String },

    /// Show the friend relationship with an account
    FriendInfo { name: String },

    /// Give premium to an account
    Gild {
        name: String,
        /// Months of premium (1-36)
        #[arg(long, default_value_t = 1)]
        months: u32,
    },

    /// Send a private message
    Message {
        /// Recipient account name
        name: String,
        #[arg(long)]
        subject: String,
        #[arg(long)]
        text: String,
        /// Send as this subreddit (moderators only)
        #[arg(long)]
        from_subreddit: Option<String>,
    },

    /// Block an account
    Block { name: String },

    /// Unblock an account
    Unblock { name: String },

    /// Allow messages from an account even when messaging is restricted
    Trust { name: String },

    /// Revoke a previous trust
    Distrust { name: String },

    /// List an account's trophies
    Trophies { name: String },

    /// List an account's public multireddits
    Multireddits { name: String },

    /// List the subreddits an account moderates
    Moderated { name: String },

    /// Show the authenticated account
    Me,
}
