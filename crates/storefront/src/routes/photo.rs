//! Pet photo upload handler.

use axum::{
    extract::{Multipart, State},
    response::Response,
};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::router::{Command, EventRouter};
use crate::routes::actions::{Primary, respond};
use crate::state::AppState;

/// Name of the file input in the upload form.
const PHOTO_FIELD: &str = "photo";

/// Accept a photo upload and store it as a data URI.
#[instrument(skip(state, multipart))]
pub async fn upload(State(state): State<AppState>, mut multipart: Multipart) -> Result<Response> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some(PHOTO_FIELD) {
            continue;
        }
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let outcome = EventRouter::new(state.clone())
            .dispatch(Command::UploadPhoto {
                content_type,
                bytes: bytes.to_vec(),
            })
            .await?;
        return respond(&state, outcome, Primary::Inline);
    }

    Err(AppError::InvalidUpload(format!(
        "missing '{PHOTO_FIELD}' field"
    )))
}
