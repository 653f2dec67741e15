//! Private message endpoints.

use reqwest::Client;

use crate::endpoints::paths;
use crate::endpoints::request::post_form;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::JsonResponse;

/// A private message to send.
#[derive(Debug, Clone)]
pub struct ComposeMessage<'a> {
    pub to: &'a str,
    pub subject: &'a str,
    pub text: &'a str,
    /// Send as the named subreddit instead of the caller (moderators only).
    pub from_subreddit: Option<&'a str>,
}

impl ComposeMessage<'_> {
    fn form(&self) -> Vec<(&str, &str)> {
        let mut form = vec![
            ("api_type", "json"),
            ("subject", self.subject),
            ("text", self.text),
            ("to", self.to),
        ];
        if let Some(sr) = self.from_subreddit {
            form.push(("from_sr", sr));
        }
        form
    }
}

/// Send a private message.
///
/// # Errors
///
/// Validation failures come back with a 200 status and a `json.errors`
/// array; those are returned as `ClientError::ApiException`.
pub async fn compose_message(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    message: &ComposeMessage<'_>,
    metrics: Option<&MetricsCollector>,
) -> Result<()> {
    let response = post_form(
        client,
        base_url,
        auth_token,
        paths::COMPOSE,
        &message.form(),
        paths::COMPOSE,
        metrics,
    )
    .await?;

    let bytes = response.bytes().await?;
    check_compose_body(&bytes, metrics)
}

/// Surface `json.errors` from a 2xx compose response, counting them as errors.
fn check_compose_body(bytes: &[u8], metrics: Option<&MetricsCollector>) -> Result<()> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(());
    }
    let body: JsonResponse = serde_json::from_slice(bytes).map_err(|e| {
        ClientError::InvalidResponse(format!("failed to parse compose response: {}", e))
    })?;

    if body.json.errors.is_empty() {
        return Ok(());
    }
    let err = ClientError::ApiException(body.json.errors);
    if let Some(m) = metrics {
        m.record_client_error(paths::COMPOSE, "POST", &err);
    }
    Err(err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::METRIC_ERRORS_TOTAL;
    use crate::testing::{CapturingRecorder, load_fixture};

    #[test]
    fn test_compose_form_fields() {
        let message = ComposeMessage {
            to: "spez",
            subject: "hello",
            text: "body text",
            from_subreddit: None,
        };
        assert_eq!(
            message.form(),
            vec![
                ("api_type", "json"),
                ("subject", "hello"),
                ("text", "body text"),
                ("to", "spez"),
            ]
        );
    }

    #[test]
    fn test_compose_errors_are_counted() {
        let recorder = CapturingRecorder::default();
        let body = load_fixture("messages/compose_errors.json").to_string();

        let result = metrics::with_local_recorder(&recorder, || {
            check_compose_body(body.as_bytes(), Some(&MetricsCollector::new()))
        });

        assert!(matches!(result, Err(ClientError::ApiException(ref e)) if !e.is_empty()));
        assert_eq!(
            recorder.counters(),
            vec![(
                METRIC_ERRORS_TOTAL.to_string(),
                vec![
                    ("endpoint".to_string(), "api/compose".to_string()),
                    ("method".to_string(), "POST".to_string()),
                    ("error_category".to_string(), "api".to_string()),
                ]
            )]
        );
    }

    #[test]
    fn test_compose_success_records_nothing() {
        let recorder = CapturingRecorder::default();
        let body = load_fixture("messages/compose_ok.json").to_string();

        let result = metrics::with_local_recorder(&recorder, || {
            check_compose_body(body.as_bytes(), Some(&MetricsCollector::new()))
        });

        assert!(result.is_ok());
        assert!(check_compose_body(b"  ", None).is_ok());
        assert!(recorder.counters().is_empty());
    }

    #[test]
    fn test_compose_form_from_subreddit() {
        let message = ComposeMessage {
            to: "spez",
            subject: "modmail",
            text: "hi",
            from_subreddit: Some("rust"),
        };
        assert_eq!(message.form().last(), Some(&("from_sr", "rust")));
    }
}
