//! Newsletter subscription client.
//!
//! Sends one JSON `POST {base}/subscribe` per submission and classifies the
//! reply. The body is always read as text first so that a non-JSON reply
//! (an HTML error page from a broken backend) is reported as a protocol
//! error instead of a generic decode failure.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;
use url::Url;

use crate::config::NewsletterConfig;

const FALLBACK_REJECTION: &str = "Subscription failed";

/// Errors that can occur when subscribing.
#[derive(Debug, Error)]
pub enum NewsletterError {
    /// The email was blank; no request was sent.
    #[error("Please enter your email")]
    Validation,

    /// The service replied with something other than the expected JSON.
    #[error("Backend returned non-JSON response (check backend logs / DB connection).")]
    BackendProtocol,

    /// The service refused the subscription.
    #[error("{0}")]
    Rejected(String),

    /// The request never completed.
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    /// The configured base URL cannot take a `subscribe` segment.
    #[error("Invalid newsletter endpoint: {0}")]
    Endpoint(String),
}

/// A confirmed subscription as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Subscription {
    /// Service-provided outcome label, e.g. "Subscribed".
    pub result: String,
    pub email: String,
}

impl Subscription {
    /// Toast text for a successful subscription.
    #[must_use]
    pub fn toast_message(&self) -> String {
        format!("✅ {}: {}", self.result, self.email)
    }
}

impl NewsletterError {
    /// Toast text for a failed subscription.
    #[must_use]
    pub fn toast_message(&self) -> String {
        format!("❌ {self}")
    }
}

#[derive(Serialize)]
struct SubscribeRequest<'a> {
    email: &'a str,
}

#[derive(Deserialize)]
struct Rejection {
    error: Option<String>,
}

/// Client for the remote subscription service.
#[derive(Debug, Clone)]
pub struct NewsletterClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl NewsletterClient {
    /// Create a client posting to `{base_url}/subscribe`.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be extended with a path
    /// segment.
    pub fn new(config: &NewsletterConfig) -> Result<Self, NewsletterError> {
        Ok(Self {
            client: reqwest::Client::new(),
            endpoint: subscribe_endpoint(&config.base_url)?,
        })
    }

    /// The full subscribe URL.
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Subscribe an email address.
    ///
    /// # Errors
    ///
    /// - `Validation` if the trimmed email is empty (no request is made)
    /// - `Transport` if the request or body read fails
    /// - `BackendProtocol` if the body is not JSON, or a success body lacks
    ///   `result`/`email`
    /// - `Rejected` for a non-success status, carrying the service's `error`
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn subscribe(&self, email: &str) -> Result<Subscription, NewsletterError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(NewsletterError::Validation);
        }

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(&SubscribeRequest { email })
            .send()
            .await?;
        let status = response.status();
        let raw = response.text().await?;

        classify(status, &raw)
    }
}

/// Append `subscribe` to the base URL path.
fn subscribe_endpoint(base: &Url) -> Result<Url, NewsletterError> {
    let mut endpoint = base.clone();
    endpoint
        .path_segments_mut()
        .map_err(|()| NewsletterError::Endpoint(base.to_string()))?
        .pop_if_empty()
        .push("subscribe");
    Ok(endpoint)
}

fn classify(status: reqwest::StatusCode, raw: &str) -> Result<Subscription, NewsletterError> {
    let body: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
        tracing::error!(%status, error = %e, body = %raw, "Non-JSON response from newsletter service");
        NewsletterError::BackendProtocol
    })?;

    if !status.is_success() {
        let message = serde_json::from_value::<Rejection>(body)
            .ok()
            .and_then(|r| r.error)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| FALLBACK_REJECTION.to_string());
        tracing::warn!(%status, %message, "Newsletter subscription rejected");
        return Err(NewsletterError::Rejected(message));
    }

    serde_json::from_value::<Subscription>(body).map_err(|e| {
        tracing::error!(%status, error = %e, "Newsletter success body missing fields");
        NewsletterError::BackendProtocol
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::post};

    use super::*;

    /// Serve `reply` on `/subscribe` and return a client pointed at it.
    async fn mock_service(
        reply: fn(serde_json::Value) -> axum::response::Response,
    ) -> (NewsletterClient, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let app = Router::new().route(
            "/subscribe",
            post(move |Json(body): Json<serde_json::Value>| {
                let counter = Arc::clone(&counter);
                async move {
                    counter.fetch_add(1, Ordering::SeqCst);
                    reply(body)
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let config = NewsletterConfig {
            base_url: Url::parse(&format!("http://{addr}")).unwrap(),
        };
        (NewsletterClient::new(&config).unwrap(), hits)
    }

    #[test]
    fn test_endpoint_joins_base_path() {
        let base = Url::parse("http://localhost:5000/api/").unwrap();
        assert_eq!(
            subscribe_endpoint(&base).unwrap().as_str(),
            "http://localhost:5000/api/subscribe"
        );
        let bare = Url::parse("http://localhost:5000").unwrap();
        assert_eq!(
            subscribe_endpoint(&bare).unwrap().as_str(),
            "http://localhost:5000/subscribe"
        );
    }

    #[tokio::test]
    async fn test_success() {
        let (client, hits) = mock_service(|body| {
            Json(serde_json::json!({
                "result": "Subscribed",
                "email": body["email"],
            }))
            .into_response()
        })
        .await;

        let subscription = client.subscribe("  a@b.co ").await.unwrap();
        assert_eq!(subscription.result, "Subscribed");
        assert_eq!(subscription.email, "a@b.co");
        assert_eq!(subscription.toast_message(), "✅ Subscribed: a@b.co");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_rejection_uses_server_error() {
        let (client, _) = mock_service(|_| {
            (
                StatusCode::BAD_REQUEST,
                Json(serde_json::json!({ "error": "Already subscribed" })),
            )
                .into_response()
        })
        .await;

        let err = client.subscribe("a@b.co").await.unwrap_err();
        assert!(matches!(err, NewsletterError::Rejected(ref m) if m == "Already subscribed"));
        assert_eq!(err.toast_message(), "❌ Already subscribed");
    }

    #[tokio::test]
    async fn test_rejection_without_error_field() {
        let (client, _) = mock_service(|_| {
            (StatusCode::INTERNAL_SERVER_ERROR, Json(serde_json::json!({}))).into_response()
        })
        .await;

        let err = client.subscribe("a@b.co").await.unwrap_err();
        assert_eq!(err.to_string(), "Subscription failed");
    }

    #[tokio::test]
    async fn test_html_body_is_protocol_error() {
        let (client, _) = mock_service(|_| "<html>".into_response()).await;

        let err = client.subscribe("a@b.co").await.unwrap_err();
        assert!(matches!(err, NewsletterError::BackendProtocol));
        assert!(err.to_string().starts_with("Backend returned non-JSON response"));
    }

    #[tokio::test]
    async fn test_success_missing_fields_is_protocol_error() {
        let (client, _) =
            mock_service(|_| Json(serde_json::json!({ "ok": true })).into_response()).await;

        let err = client.subscribe("a@b.co").await.unwrap_err();
        assert!(matches!(err, NewsletterError::BackendProtocol));
    }

    #[tokio::test]
    async fn test_blank_email_sends_nothing() {
        let (client, hits) = mock_service(|_| "unreachable".into_response()).await;

        for input in ["", "   "] {
            let err = client.subscribe(input).await.unwrap_err();
            assert!(matches!(err, NewsletterError::Validation));
            assert_eq!(err.toast_message(), "❌ Please enter your email");
        }
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unreachable_service_is_transport_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = NewsletterConfig {
            base_url: Url::parse(&format!("http://{addr}")).unwrap(),
        };
        let client = NewsletterClient::new(&config).unwrap();
        let err = client.subscribe("a@b.co").await.unwrap_err();
        assert!(matches!(err, NewsletterError::Transport(_)));
    }
}
