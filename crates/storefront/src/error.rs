//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server-side failures to
//! Sentry before responding. Route handlers return `Result<T, AppError>`;
//! not-found outcomes with locale context render their own 404 pages and
//! never pass through here.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::cms::CmsError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// CMS read failed.
    #[error("CMS error: {0}")]
    Cms(#[from] CmsError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Bilingual error page, rendered standalone (no locale context survives
/// a failed fetch).
#[derive(Template, WebTemplate)]
#[template(path = "error.html")]
struct ErrorTemplate {
    status: u16,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // A CMS 404 is a user-facing miss, not a server failure.
        let handled_miss = matches!(&self, Self::Cms(e) if e.is_not_found());

        if !handled_miss && matches!(self, Self::Cms(_) | Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Cms(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Cms(_) => StatusCode::BAD_GATEWAY,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            ErrorTemplate {
                status: status.as_u16(),
            },
        )
            .into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
