//! Newsletter signup and pet photo upload forms.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use petcare_integration_tests::TestContext;
use petcare_storefront::preferences::PreferenceKey;
use petcare_storefront::router::PHOTO_MESSAGE;
use serde_json::{Value, json};

/// Mock newsletter backend answering every signup with `status` and `reply`.
fn backend(status: StatusCode, reply: Value, hits: Arc<AtomicUsize>) -> Router {
    Router::new().route(
        "/api/subscribe",
        post(move |Json(body): Json<Value>| {
            let reply = reply.clone();
            let hits = hits.clone();
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                assert!(body.get("email").is_some());
                (status, Json(reply)).into_response()
            }
        }),
    )
}

#[tokio::test]
async fn test_newsletter_success_clears_form() {
    let hits = Arc::new(AtomicUsize::new(0));
    let ctx = TestContext::with_newsletter_backend(backend(
        StatusCode::OK,
        json!({"result": "Subscribed", "email": "pat@example.com"}),
        hits.clone(),
    ))
    .await;

    let resp = ctx
        .post_form("/newsletter/subscribe", "email=pat%40example.com")
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.starts_with("<form class=\"newsletter-form\" id=\"newsletterForm\""));
    assert!(resp.body.contains("value=\"\""));
    assert!(resp.body.contains("Subscribed: pat@example.com"));
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_newsletter_rejection_keeps_email() {
    let hits = Arc::new(AtomicUsize::new(0));
    let ctx = TestContext::with_newsletter_backend(backend(
        StatusCode::BAD_REQUEST,
        json!({"error": "Already subscribed"}),
        hits.clone(),
    ))
    .await;

    let resp = ctx
        .post_form("/newsletter/subscribe", "email=pat%40example.com")
        .await;

    assert!(resp.body.contains("value=\"pat@example.com\""));
    assert!(resp.body.contains("Already subscribed"));
    assert!(resp.body.contains("notification-toast error"));
}

#[tokio::test]
async fn test_blank_email_never_reaches_backend() {
    let hits = Arc::new(AtomicUsize::new(0));
    let ctx = TestContext::with_newsletter_backend(backend(
        StatusCode::OK,
        json!({"result": "Subscribed", "email": "x"}),
        hits.clone(),
    ))
    .await;

    let resp = ctx.post_form("/newsletter/subscribe", "email=+++").await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("notification-toast error"));
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unreachable_backend_reports_error() {
    let ctx = TestContext::new();
    let resp = ctx
        .post_form("/newsletter/subscribe", "email=pat%40example.com")
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("value=\"pat@example.com\""));
    assert!(resp.body.contains("notification-toast error"));
}

#[tokio::test]
async fn test_photo_upload_persists_data_uri() {
    let ctx = TestContext::new();
    let resp = ctx
        .post_file("/photo", "photo", "image/png", &[0x89, b'P', b'N', b'G'])
        .await;

    assert_eq!(resp.status, StatusCode::OK);
    assert!(resp.body.contains("src=\"data:image/png;base64,"));
    assert!(resp.body.contains(PHOTO_MESSAGE));

    let stored = ctx.reopen_preferences().get(PreferenceKey::PetPhoto).unwrap();
    assert!(stored.starts_with("data:image/png;base64,"));

    let page = ctx.get("/").await;
    assert!(page.body.contains(&stored));
}

#[tokio::test]
async fn test_photo_upload_rejects_non_images() {
    let ctx = TestContext::new();
    let resp = ctx
        .post_file("/photo", "photo", "text/plain", b"not a picture")
        .await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(ctx.state.preferences().get(PreferenceKey::PetPhoto).is_none());
}

#[tokio::test]
async fn test_photo_upload_requires_field() {
    let ctx = TestContext::new();
    let resp = ctx
        .post_file("/photo", "avatar", "image/png", &[1, 2, 3])
        .await;

    assert_eq!(resp.status, StatusCode::UNPROCESSABLE_ENTITY);
}
