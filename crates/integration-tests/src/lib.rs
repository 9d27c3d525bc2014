//! Integration tests for PetCare Companion.
//!
//! Tests drive the real router in-process with `tower::ServiceExt::oneshot`;
//! no server or network is needed except the mock newsletter backend, which
//! binds to an ephemeral loopback port.
//!
//! ```bash
//! cargo test -p petcare-integration-tests
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use petcare_storefront::config::{NewsletterConfig, StorefrontConfig};
use petcare_storefront::preferences::Preferences;
use petcare_storefront::state::AppState;
use tower::ServiceExt;
use url::Url;

/// Largest response body the helpers will buffer.
const MAX_BODY: usize = 4 * 1024 * 1024;

/// A response reduced to what assertions need.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// A response header as a string, if present and valid.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// A site instance with its own preference file.
pub struct TestContext {
    pub state: AppState,
    pub app: Router,
    pub preferences_path: PathBuf,
}

impl TestContext {
    /// Site whose newsletter backend is unreachable.
    #[must_use]
    pub fn new() -> Self {
        Self::with_newsletter_url(unreachable_backend())
    }

    /// Site pointed at a mock newsletter backend.
    ///
    /// # Panics
    ///
    /// Panics if the mock backend cannot bind a loopback port.
    pub async fn with_newsletter_backend(backend: Router) -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend address");
        tokio::spawn(async move {
            let _ = axum::serve(listener, backend).await;
        });
        let url = Url::parse(&format!("http://{addr}/api")).expect("mock backend url");
        Self::with_newsletter_url(url)
    }

    /// Site with an explicit newsletter base URL.
    ///
    /// # Panics
    ///
    /// Panics if application state cannot be built.
    #[must_use]
    pub fn with_newsletter_url(base_url: Url) -> Self {
        let preferences_path = std::env::temp_dir()
            .join("petcare-integration")
            .join(format!("{}.json", uuid::Uuid::new_v4()));
        let state = AppState::with_preferences(
            test_config(base_url, preferences_path.clone()),
            Preferences::open(&preferences_path),
        )
        .expect("build application state");
        let app = petcare_storefront::app(state.clone());
        Self {
            state,
            app,
            preferences_path,
        }
    }

    /// Reopen the preference file, as a restarted site would.
    #[must_use]
    pub fn reopen_preferences(&self) -> Preferences {
        Preferences::open(&self.preferences_path)
    }

    /// Issue a GET request.
    pub async fn get(&self, path: &str) -> TestResponse {
        self.send(Request::get(path).body(Body::empty()).expect("request"))
            .await
    }

    /// POST a JSON command to `/actions`, the way the page does.
    pub async fn action(&self, command: serde_json::Value) -> TestResponse {
        self.send(
            Request::post("/actions")
                .header(header::CONTENT_TYPE, "application/json")
                .header("HX-Request", "true")
                .body(Body::from(command.to_string()))
                .expect("request"),
        )
        .await
    }

    /// POST a url-encoded form.
    pub async fn post_form(&self, path: &str, form: &str) -> TestResponse {
        self.send(
            Request::post(path)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form.to_string()))
                .expect("request"),
        )
        .await
    }

    /// POST a single-file multipart upload.
    pub async fn post_file(
        &self,
        path: &str,
        field: &str,
        content_type: &str,
        bytes: &[u8],
    ) -> TestResponse {
        const BOUNDARY: &str = "petcare-test-boundary";
        let mut body = format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{field}\"; filename=\"upload\"\r\nContent-Type: {content_type}\r\n\r\n"
        )
        .into_bytes();
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

        self.send(
            Request::post(path)
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .body(Body::from(body))
                .expect("request"),
        )
        .await
    }

    /// Send a prepared request through the router.
    ///
    /// # Panics
    ///
    /// Panics if the router fails or the body is not UTF-8.
    pub async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), MAX_BODY)
            .await
            .expect("read body");
        TestResponse {
            status,
            headers,
            body: String::from_utf8(bytes.to_vec()).expect("utf-8 body"),
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.preferences_path);
    }
}

fn test_config(base_url: Url, preferences_path: PathBuf) -> StorefrontConfig {
    StorefrontConfig {
        host: [127, 0, 0, 1].into(),
        port: 0,
        newsletter: NewsletterConfig { base_url },
        preferences_path,
        sentry_dsn: None,
        sentry_environment: None,
        sentry_sample_rate: 0.0,
        sentry_traces_sample_rate: 0.0,
    }
}

fn unreachable_backend() -> Url {
    // Port 9 (discard) refuses connections on loopback
    Url::parse("http://127.0.0.1:9/api").expect("static url")
}
