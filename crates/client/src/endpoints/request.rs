//! Request execution and response decoding.
//!
//! Every endpoint funnels through [`send_request`], which performs exactly one
//! attempt, records metrics and maps non-2xx responses to
//! [`ClientError::ApiError`]. The typed helpers on top of it cover the four
//! request shapes the user endpoints need.

use std::time::Instant;

use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::ErrorBody;

/// Query parameter sent with every GET so the service returns unescaped text.
pub const RAW_JSON_PARAM: (&str, &str) = ("raw_json", "1");

/// Sends an HTTP request once.
///
/// `endpoint` is the path template (e.g. `user/{name}/about`) used as the
/// metrics label; `method` is the HTTP verb label.
///
/// # Errors
///
/// Returns `ClientError::ApiError` for non-2xx responses, with the message
/// taken from the JSON error body when it has one, otherwise the raw body.
/// Transport failures propagate as `ClientError::HttpError`.
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    if let Some(m) = metrics {
        m.record_request(endpoint, method);
    }

    let start = Instant::now();
    let result = builder.send().await;
    let elapsed = start.elapsed();

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            let err = ClientError::from(e);
            if let Some(m) = metrics {
                m.record_request_duration(endpoint, method, elapsed, None);
                m.record_client_error(endpoint, method, &err);
            }
            debug!(endpoint, method, error = %err, "Request failed before a response arrived");
            return Err(err);
        }
    };

    let status = response.status().as_u16();
    if let Some(m) = metrics {
        m.record_request_duration(endpoint, method, elapsed, Some(status));
    }
    debug!(
        endpoint,
        method,
        status,
        latency_ms = elapsed.as_millis() as u64,
        "Request completed"
    );

    if response.status().is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Could not read error response body".to_string());

    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(|b| b.best_message())
        .unwrap_or(body);

    let err = ClientError::ApiError {
        status,
        url,
        message,
    };
    if let Some(m) = metrics {
        m.record_client_error(endpoint, method, &err);
    }
    Err(err)
}

/// Attach the bearer token, if any.
pub(crate) fn authorize(builder: RequestBuilder, auth_token: Option<&str>) -> RequestBuilder {
    match auth_token {
        Some(token) => builder.bearer_auth(token),
        None => builder,
    }
}

fn url_for(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url, path.trim_start_matches('/'))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T> {
    let url = response.url().to_string();
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes)
        .map_err(|e| ClientError::InvalidResponse(format!("failed to decode {}: {}", url, e)))
}

/// GET `path` with `query` and decode the JSON body.
pub async fn get_json<T, Q>(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    path: &str,
    query: &Q,
    endpoint: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<T>
where
    T: DeserializeOwned,
    Q: Serialize + ?Sized,
{
    let builder = client
        .get(url_for(base_url, path))
        .query(&[RAW_JSON_PARAM])
        .query(query);
    let response = send_request(authorize(builder, auth_token), endpoint, "GET", metrics).await?;
    decode(response).await
}

/// POST a form body. Returns the raw response for callers that inspect it.
pub async fn post_form<F>(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    path: &str,
    form: &F,
    endpoint: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response>
where
    F: Serialize + ?Sized,
{
    let builder = client.post(url_for(base_url, path)).form(form);
    send_request(authorize(builder, auth_token), endpoint, "POST", metrics).await
}

/// PUT a JSON body and decode the JSON response.
pub async fn put_json<T, B>(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    path: &str,
    body: &B,
    endpoint: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<T>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let builder = client.put(url_for(base_url, path)).json(body);
    let response = send_request(authorize(builder, auth_token), endpoint, "PUT", metrics).await?;
    decode(response).await
}

/// DELETE with a form body. The response body is discarded.
pub async fn delete_form<F>(
    client: &Client,
    base_url: &str,
    auth_token: Option<&str>,
    path: &str,
    form: &F,
    endpoint: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<()>
where
    F: Serialize + ?Sized,
{
    let builder = client.delete(url_for(base_url, path)).form(form);
    send_request(authorize(builder, auth_token), endpoint, "DELETE", metrics).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_for_joins_single_slash() {
        assert_eq!(
            url_for("https://oauth.reddit.com", "user/spez/about"),
            "https://oauth.reddit.com/user/spez/about"
        );
        assert_eq!(
            url_for("https://oauth.reddit.com", "/api/compose"),
            "https://oauth.reddit.com/api/compose"
        );
    }

    #[test]
    fn test_authorize_sets_bearer_header() {
        let client = Client::new();
        let request = authorize(client.get("http://localhost/"), Some("abc"))
            .build()
            .unwrap();
        assert_eq!(
            request.headers().get("authorization").unwrap(),
            "Bearer abc"
        );

        let anonymous = authorize(client.get("http://localhost/"), None)
            .build()
            .unwrap();
        assert!(anonymous.headers().get("authorization").is_none());
    }
}
