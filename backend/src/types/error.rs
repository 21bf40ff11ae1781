//! Universal error handling for the HTTP handlers

use std::fmt::Display;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::gallery::GalleryError;

/// Application error returned by handlers
///
/// Details are logged server-side only; the client receives the bare status code.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    code: &'static str,
    message: &'static str,
    detail: Option<String>,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub const fn new(status: StatusCode, code: &'static str, message: &'static str) -> Self {
        Self {
            status,
            code,
            message,
            detail: None,
        }
    }

    /// Attach the underlying cause, logged with the error
    #[must_use]
    pub fn with_detail(mut self, detail: impl Display) -> Self {
        self.detail = Some(detail.to_string());
        self
    }

    /// Status code sent to the client
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let detail = self.detail.as_deref().unwrap_or_default();
        match self.status.as_u16() {
            400..=499 => {
                tracing::warn!("Client error: {} - {} {detail}", self.code, self.message);
            }
            500..=599 => {
                tracing::error!("Server error: {} - {} {detail}", self.code, self.message);
            }
            _ => {}
        }

        self.status.into_response()
    }
}

/// Convert gallery errors to application errors
impl From<GalleryError> for AppError {
    fn from(err: GalleryError) -> Self {
        let error = match &err {
            GalleryError::Fetch(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "fetch_error",
                "Failed to fetch image records",
            ),
            GalleryError::Render(_) => Self::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                "render_error",
                "Failed to render gallery page",
            ),
            GalleryError::StorageDelete { .. } | GalleryError::MetadataDelete { .. } => {
                Self::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "delete_error",
                    "Failed to delete image",
                )
            }
        };

        error.with_detail(err)
    }
}
