//! HTTP route handlers for the companion site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                              - Full page
//! GET  /health                        - Health check
//!
//! # Fragments (HTMX)
//! GET  /fragments/products?category=  - Product grid
//! GET  /fragments/notifications       - Notification panel (marks all read)
//! GET  /fragments/toast               - Current toast
//!
//! # Actions (HTMX, JSON body)
//! POST /actions                       - Dispatch a command, returns OOB fragments
//! POST /actions/toast/{id}/dismiss    - Close a toast
//!
//! # Forms
//! POST /newsletter/subscribe          - Newsletter signup
//! POST /photo                         - Pet photo upload (multipart)
//! ```

pub mod actions;
pub mod fragments;
pub mod home;
pub mod newsletter;
pub mod photo;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};

use crate::state::AppState;

/// Largest accepted photo upload.
const PHOTO_BODY_LIMIT: usize = 8 * 1024 * 1024;

/// Create the fragment routes router.
pub fn fragment_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(fragments::products))
        .route("/notifications", get(fragments::notifications))
        .route("/toast", get(fragments::toast))
}

/// Create the action routes router.
pub fn action_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(actions::dispatch))
        .route("/toast/{id}/dismiss", post(actions::dismiss_toast))
}

/// Create all routes for the site.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/health", get(home::health))
        .nest("/fragments", fragment_routes())
        .nest("/actions", action_routes())
        .route("/newsletter/subscribe", post(newsletter::subscribe))
        .route(
            "/photo",
            post(photo::upload).layer(DefaultBodyLimit::max(PHOTO_BODY_LIMIT)),
        )
}
