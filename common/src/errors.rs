//! Error type shared by the gateway.
//!
//! Every failure of a backend call collapses into [`AppError`]; callers only
//! ever see its display string inside the `{"error": ...}` envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::response::ErrorEnvelope;

/// Result alias used across the workspace.
pub type AppResult<T> = Result<T, AppError>;

/// Gateway error.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required identifier or credential was not configured.
    #[error("missing configuration: {0}")]
    MissingConfig(&'static str),

    /// Invalid configuration value at startup.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Malformed request path, e.g. a name that is not valid UTF-8.
    #[error("invalid request path: {0}")]
    InvalidPath(String),

    /// Query request failed validation.
    #[error("invalid request: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// The backend could not be reached.
    #[error("{0}")]
    Transport(String),

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// The backend answered 2xx with a body that is not JSON.
    #[error("invalid response from backend: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::InvalidResponse(err.to_string())
        } else {
            AppError::Transport(err.to_string())
        }
    }
}

impl AppError {
    /// Status used when the gateway reports errors with distinct codes.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingConfig(_) | AppError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidPath(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Transport(_) | AppError::InvalidResponse(_) => StatusCode::BAD_GATEWAY,
            AppError::Remote { status, .. } => match *status {
                404 => StatusCode::NOT_FOUND,
                401 | 403 => StatusCode::BAD_GATEWAY,
                400..=499 => StatusCode::BAD_REQUEST,
                _ => StatusCode::BAD_GATEWAY,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorEnvelope::from(&self))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_error_displays_backend_message_only() {
        let err = AppError::Remote {
            status: 401,
            message: "Invalid API key".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid API key");
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::MissingConfig("APPWRITE_DATABASE_ID").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::Transport("connection refused".into()).status_code(),
            StatusCode::BAD_GATEWAY
        );
        let not_found = AppError::Remote {
            status: 404,
            message: "Collection not found".into(),
        };
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_missing_config_names_the_variable() {
        let err = AppError::MissingConfig("APPWRITE_PROJECT_ID");
        assert_eq!(err.to_string(), "missing configuration: APPWRITE_PROJECT_ID");
    }
}
