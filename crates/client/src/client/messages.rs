//! Private message methods for [`RedditClient`].

use crate::client::RedditClient;
use crate::endpoints::{self, ComposeMessage};
use crate::error::Result;

impl RedditClient {
    /// Send a private message to `to`, optionally as `from_subreddit`.
    pub async fn send_message(
        &self,
        to: &str,
        subject: &str,
        text: &str,
        from_subreddit: Option<&str>,
    ) -> Result<()> {
        let message = ComposeMessage {
            to,
            subject,
            text,
            from_subreddit,
        };
        endpoints::compose_message(
            &self.http,
            &self.base_url,
            self.token(),
            &message,
            self.metrics(),
        )
        .await
    }
}
