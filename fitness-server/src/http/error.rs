//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! This is the only place domain errors become HTTP statuses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use super::body::MALFORMED_BODY_MESSAGE;
use crate::db::repos::DbError;
use crate::models::ValidationError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Body is not a JSON object (400)
    MalformedBody,

    /// Validation failed (400)
    Validation(ValidationError),

    /// Entity or link not found (404)
    NotFound { message: String },

    /// Unique name already taken (409)
    Conflict { message: String },

    /// Database error (500, logged)
    Database(sqlx::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedBody | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::MalformedBody => json!({
                "error": "malformed_body",
                "message": MALFORMED_BODY_MESSAGE
            }),
            Self::Validation(e) => json!({
                "error": "validation_error",
                "message": e.to_string()
            }),
            Self::NotFound { message } => json!({
                "error": "not_found",
                "message": message
            }),
            Self::Conflict { message } => json!({
                "error": "conflict",
                "message": message
            }),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                json!({
                    "error": "internal_error",
                    "message": "an internal error occurred"
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::Sqlx(err) => Self::Database(err),
            DbError::DuplicateEntry { .. } => Self::Conflict {
                message: e.to_string(),
            },
            DbError::NotFound { .. } | DbError::NotLinked { .. } => Self::NotFound {
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntityKind;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Empty { field: "name" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "'name' must not be empty.");
    }

    #[tokio::test]
    async fn malformed_body_has_fixed_message() {
        let response = ApiError::MalformedBody.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = body_json(response).await;
        assert_eq!(body["message"], MALFORMED_BODY_MESSAGE);
    }

    #[test]
    fn not_found_is_404() {
        let err = ApiError::from(DbError::NotFound {
            kind: EntityKind::Muscle,
            id: 3,
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = ApiError::from(DbError::NotLinked {
            exercise_id: 1,
            muscle_id: 2,
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn duplicate_is_409() {
        let err = ApiError::from(DbError::DuplicateEntry {
            kind: EntityKind::Muscle,
            name: "Biceps".into(),
        });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
        let body = body_json(response).await;
        assert_eq!(body["message"], "Muscle with name \"Biceps\" already exists");
    }

    #[tokio::test]
    async fn database_error_hides_details() {
        let err = ApiError::from(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(response).await;
        assert_eq!(body["message"], "an internal error occurred");
    }
}
