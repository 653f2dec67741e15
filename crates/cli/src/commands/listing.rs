//! Listing command implementation.
//!
//! Responsibilities:
//! - Parse listing selection and paging options.
//! - Page through the listing and print every item.
//!
//! Does NOT handle:
//! - Paging logic itself (see `reddit_client::ListingGenerator`).
//!
//! Invariants:
//! - At most `--limit` items are printed.
//! - With `--output ndjson` items are printed as each page arrives.

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use futures::TryStreamExt;
use reddit_client::{ListingParams, RedditClient, Sort, TimeFilter, UserListing};
use tracing::info;

use crate::formatters::{OutputFormat, write_items, write_value};

/// Default number of items printed by `listing`.
pub const DEFAULT_LISTING_LIMIT: usize = 25;

#[derive(Debug, Args)]
pub struct ListingArgs {
    /// Account name
    pub name: String,

    /// Which listing: overview, comments, submitted, gilded, upvoted, downvoted, hidden, saved, gilded/given
    pub listing: UserListing,

    /// Sort order (hot, new, top, controversial)
    #[arg(long)]
    pub sort: Option<Sort>,

    /// Time window for top/controversial (hour, day, week, month, year, all)
    #[arg(long)]
    pub time: Option<TimeFilter>,

    /// Maximum number of items to print
    #[arg(short, long, default_value_t = DEFAULT_LISTING_LIMIT)]
    pub limit: usize,

    /// Start after this fullname
    #[arg(long)]
    pub after: Option<String>,

    /// Include items the server hides by default
    #[arg(long)]
    pub show_all: bool,
}

impl ListingArgs {
    pub fn params(&self) -> ListingParams {
        let mut params = ListingParams::new()
            .with_limit(self.limit)
            .with_show_all(self.show_all);
        params.sort = self.sort;
        params.time_filter = self.time;
        params.after = self.after.clone();
        params
    }
}

pub async fn run<W: Write>(
    client: &Arc<RedditClient>,
    args: ListingArgs,
    output: OutputFormat,
    out: &mut W,
) -> Result<()> {
    info!(name = %args.name, listing = %args.listing, limit = args.limit, "Fetching listing");
    let redditor = client.redditor(args.name.clone());
    let params = args.params();
    let generator = match args.listing {
        UserListing::Overview => redditor.overview(params),
        UserListing::Comments => redditor.comments(params),
        UserListing::Submitted => redditor.submissions(params),
        UserListing::Gilded => redditor.gilded(params),
        UserListing::Upvoted => redditor.upvoted(params),
        UserListing::Downvoted => redditor.downvoted(params),
        UserListing::Hidden => redditor.hidden(params),
        UserListing::Saved => redditor.saved(params),
        UserListing::GildingsGiven => redditor.gildings(params),
    };

    match output {
        OutputFormat::Json => {
            let items = generator.collect_all().await?;
            write_items(out, output, &items)
        }
        OutputFormat::Ndjson => {
            let stream = generator.into_stream();
            futures::pin_mut!(stream);
            while let Some(item) = stream.try_next().await? {
                write_value(out, output, &item)?;
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_from_args() {
        let args = ListingArgs {
            name: "spez".to_string(),
            listing: UserListing::Saved,
            sort: Some(Sort::New),
            time: None,
            limit: 40,
            after: Some("t3_abc".to_string()),
            show_all: false,
        };
        let params = args.params();
        assert_eq!(params.limit, Some(40));
        assert_eq!(params.sort, Some(Sort::New));
        assert_eq!(params.after.as_deref(), Some("t3_abc"));
        assert!(!params.show_all);
    }
}
