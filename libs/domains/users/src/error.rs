use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Failure reported by a [`UserRepository`](crate::repository::UserRepository)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage operation was cancelled")]
    Cancelled,
}

impl From<sea_orm::DbErr> for StorageError {
    fn from(err: sea_orm::DbErr) -> Self {
        StorageError::Database(err.to_string())
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Outcome kinds of the user service.
///
/// `Validation`, `DuplicateName` and `NotFound` are rejections decided before
/// any write is attempted. `Storage` carries the repository error exactly as
/// it was returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserError {
    #[error("{0}")]
    Validation(String),

    #[error("Name already exist")]
    DuplicateName(String),

    #[error("User not found")]
    NotFound(Uuid),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type UserResult<T> = Result<T, UserError>;

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match &self {
            UserError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "validation_error", msg.clone())
            }
            UserError::DuplicateName(_) => {
                (StatusCode::CONFLICT, "duplicate", self.to_string())
            }
            UserError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found", self.to_string()),
            UserError::Storage(err) => {
                tracing::error!(error = %err, "Storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".to_string(),
                )
            }
        };

        (
            status,
            Json(json!({
                "error": {
                    "type": error_type,
                    "message": message
                }
            })),
        )
            .into_response()
    }
}
