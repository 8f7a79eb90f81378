//! Mapping of backend errors to HTTP responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;
use tuxedo_core::TuxedoError;

/// An error response: status plus `{"error": message}`
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    #[cfg(test)]
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<TuxedoError> for ApiError {
    fn from(err: TuxedoError) -> Self {
        let status = match &err {
            TuxedoError::InvalidKey(_)
            | TuxedoError::InvalidSceneName(_)
            | TuxedoError::InvalidScene(_)
            | TuxedoError::Json(_) => StatusCode::BAD_REQUEST,
            TuxedoError::SceneNotFound(_) | TuxedoError::PrefabNotFound(_) => StatusCode::NOT_FOUND,
            TuxedoError::SceneExists(_) => StatusCode::CONFLICT,
            TuxedoError::CorruptScene { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(status, err.to_string())
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = self.status.as_u16(), error = %self.message, "request failed");
        }
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (TuxedoError::InvalidKey("k".into()), StatusCode::BAD_REQUEST),
            (TuxedoError::InvalidSceneName("..".into()), StatusCode::BAD_REQUEST),
            (TuxedoError::SceneNotFound("x".into()), StatusCode::NOT_FOUND),
            (TuxedoError::PrefabNotFound("p".into()), StatusCode::NOT_FOUND),
            (TuxedoError::SceneExists("x".into()), StatusCode::CONFLICT),
            (
                TuxedoError::CorruptScene {
                    name: "x".into(),
                    reason: "eof".into(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                TuxedoError::Resolution {
                    path: "/nope".into(),
                    reason: "missing".into(),
                },
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }
}
