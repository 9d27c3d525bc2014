//! Command dispatch handlers.
//!
//! Actions answer with out-of-band fragments: every re-rendered region
//! carries `hx-swap-oob` and replaces its counterpart by id, so a single
//! response can update the grid, the tabs and the toast at once.

use axum::{
    Json,
    extract::{Path, State},
    http::HeaderValue,
    response::{Html, IntoResponse, Response},
};
use tracing::instrument;

use crate::error::Result;
use crate::render::{self, views::ToastView};
use crate::router::{Command, EventRouter, Outcome};
use crate::state::AppState;
use crate::toast::ToastId;

/// Header used to tell the page script about side effects.
const HX_TRIGGER: &str = "HX-Trigger";

/// How the first fragment of an outcome is delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primary {
    /// Every fragment is out-of-band.
    OutOfBand,
    /// The first fragment is the swap target; the rest are out-of-band.
    Inline,
}

/// Render an outcome as an HTMX response.
///
/// # Errors
///
/// Returns `AppError::Render` if a template fails.
pub fn respond(state: &AppState, outcome: Outcome, primary: Primary) -> Result<Response> {
    let Outcome {
        fragments,
        toast,
        theme_changed,
    } = outcome;

    let mut body = String::new();
    for (index, fragment) in fragments.into_iter().enumerate() {
        let oob = !(primary == Primary::Inline && index == 0);
        body.push_str(&fragment.render(oob)?);
    }
    if toast.is_some() {
        let current = state.toasts().current();
        body.push_str(&render::render_toast(
            current.as_ref().map(ToastView::from),
            true,
        )?);
    }

    let mut response = Html(body).into_response();
    if let Some(theme) = theme_changed {
        let trigger = format!(r#"{{"theme-changed": "{theme}"}}"#);
        if let Ok(value) = HeaderValue::from_str(&trigger) {
            response.headers_mut().insert(HX_TRIGGER, value);
        }
    }
    Ok(response)
}

/// Dispatch a command posted as JSON.
#[instrument(skip(state, command), fields(action = command.action()))]
pub async fn dispatch(
    State(state): State<AppState>,
    Json(command): Json<Command>,
) -> Result<Response> {
    let outcome = EventRouter::new(state.clone()).dispatch(command).await?;
    respond(&state, outcome, Primary::OutOfBand)
}

/// Close a toast. Stale ids leave the slot as it is.
#[instrument(skip(state))]
pub async fn dismiss_toast(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<impl IntoResponse> {
    let id = ToastId::new(id);
    if !state.toasts().dismiss(id) {
        tracing::debug!(toast_id = %id, "Stale toast dismiss ignored");
    }
    let current = state.toasts().current();
    Ok(Html(render::render_toast(
        current.as_ref().map(ToastView::from),
        false,
    )?))
}
