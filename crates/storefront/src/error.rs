//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. All route handlers that can fail return
//! `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Application-level error type for the companion site.
#[derive(Debug, Error)]
pub enum AppError {
    /// Bad request from client (malformed command payload, bad form).
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// The uploaded file was missing or not an image.
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    /// Rendering a template failed.
    #[error("Render error: {0}")]
    Render(#[from] askama::Error),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::InvalidUpload(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Render(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        // Don't expose internal error details to clients
        let message = if status.is_server_error() {
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Record a dispatched action as a Sentry breadcrumb.
///
/// `target` is the pet, category, step or product the action named, if any.
/// Free text such as email addresses never goes here.
pub fn action_breadcrumb(action: &str, target: Option<&str>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some("action".to_string()),
        message: Some(action.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };
    if let Some(target) = target {
        breadcrumb.data.insert(
            "target".to_string(),
            serde_json::Value::String(target.to_string()),
        );
    }
    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::BadRequest("missing boundary".to_string());
        assert_eq!(err.to_string(), "Bad request: missing boundary");

        let err = AppError::InvalidUpload("not an image".to_string());
        assert_eq!(err.to_string(), "Invalid upload: not an image");
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let response = AppError::Internal("store lock poisoned".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::InvalidUpload("test".to_string())),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
