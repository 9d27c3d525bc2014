//! Newsletter subscription route handler.

use axum::{Form, extract::State, response::Response};
use serde::Deserialize;
use tracing::instrument;

use crate::error::Result;
use crate::router::{Command, EventRouter};
use crate::routes::actions::{Primary, respond};
use crate::state::AppState;

/// Newsletter subscription form data.
#[derive(Debug, Deserialize)]
pub struct SubscribeForm {
    #[serde(default)]
    pub email: String,
}

/// Subscribe to the newsletter (HTMX).
///
/// Replaces the form (cleared on success, kept on failure) and shows the
/// outcome as a toast.
#[instrument(skip(state, form))]
pub async fn subscribe(
    State(state): State<AppState>,
    Form(form): Form<SubscribeForm>,
) -> Result<Response> {
    let outcome = EventRouter::new(state.clone())
        .dispatch(Command::SubscribeNewsletter { email: form.email })
        .await?;
    respond(&state, outcome, Primary::Inline)
}
