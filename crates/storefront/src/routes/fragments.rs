//! Fragment handlers for regions the page fetches on its own.

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use petcare_core::CategoryFilter;
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::render::Fragment;
use crate::render::templates::{ProductGridTemplate, ToastTemplate};
use crate::render::views::{self, ToastView};
use crate::router::Outcome;
use crate::routes::actions::{Primary, respond};
use crate::state::AppState;

/// Product grid query parameters.
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    pub category: Option<String>,
}

/// Product grid for a category.
///
/// Without a category, or with an unknown one, the store's current filter is
/// used. This is a projection only; the store's filter is left alone.
#[instrument(skip(state))]
pub async fn products(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> Result<impl IntoResponse> {
    let store = state.store()?;
    let filter = query
        .category
        .as_deref()
        .and_then(|c| c.parse::<CategoryFilter>().ok())
        .unwrap_or_else(|| store.product_filter());

    Ok(ProductGridTemplate {
        products: views::product_grid(&store, filter),
        oob: false,
    })
}

/// Notification panel, opened; marks everything read.
#[instrument(skip(state))]
pub async fn notifications(State(state): State<AppState>) -> Result<Response> {
    let panel = views::notification_list(&mut *state.store_mut()?);
    let badge = panel.badge;
    let outcome = Outcome {
        fragments: vec![
            Fragment::NotificationPanel(panel),
            Fragment::NotificationBadge(badge),
        ],
        ..Outcome::default()
    };
    respond(&state, outcome, Primary::Inline)
}

/// The toast slot, polled by the page to follow the toast lifecycle.
pub async fn toast(State(state): State<AppState>) -> impl IntoResponse {
    ToastTemplate {
        toast: state.toasts().current().as_ref().map(ToastView::from),
        oob: false,
    }
}
