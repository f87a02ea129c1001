//! Unified error handling for Dogs Core

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Application-wide result type
pub type Result<T> = std::result::Result<T, AppError>;

/// Repository-backed operations exposed over HTTP.
///
/// Each operation carries its own prefix for the 500 message reported when the
/// repository call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListDogs,
    GetDog,
    CreateDog,
    UpdateDog,
    DeleteDog,
}

impl Operation {
    pub fn failure_prefix(self) -> &'static str {
        match self {
            Operation::ListDogs => "Something horrible happened, ",
            Operation::GetDog => "Error fetching dog: ",
            Operation::CreateDog => "Error creating dog: ",
            Operation::UpdateDog => "Error editing dog: ",
            Operation::DeleteDog => "Error deleting dog: ",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::ListDogs => "list_dogs",
            Operation::GetDog => "get_dog",
            Operation::CreateDog => "create_dog",
            Operation::UpdateDog => "update_dog",
            Operation::DeleteDog => "delete_dog",
        };
        f.write_str(name)
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    /// Storage fault raised outside a dog operation. Handlers wrap repository
    /// errors with [`AppError::during`], so this renders only a generic 500.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Non-repository fault; rendered as a generic 500 like `Database`.
    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),

    /// A repository call failed while serving `operation`
    #[error("{}{}", .operation.failure_prefix(), .detail)]
    Failed { operation: Operation, detail: String },
}

impl AppError {
    /// Description of the underlying fault, without the variant label.
    pub fn detail(&self) -> String {
        match self {
            AppError::NotFound(msg)
            | AppError::BadRequest(msg)
            | AppError::Validation(msg)
            | AppError::PayloadTooLarge(msg) => msg.clone(),
            AppError::Database(e) => e.to_string(),
            AppError::Internal(e) => e.to_string(),
            AppError::Failed { detail, .. } => detail.clone(),
        }
    }

    /// Attribute this error to a failed repository call.
    pub fn during(self, operation: Operation) -> Self {
        match self {
            failed @ AppError::Failed { .. } => failed,
            other => AppError::Failed {
                operation,
                detail: other.detail(),
            },
        }
    }
}

/// Maps repository errors to the operation that was being served.
pub trait OperationResultExt<T> {
    fn during(self, operation: Operation) -> Result<T>;
}

impl<T> OperationResultExt<T> for Result<T> {
    fn during(self, operation: Operation) -> Result<T> {
        self.map_err(|e| e.during(operation))
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg.clone()),
            AppError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal error occurred".to_string(),
                )
            }
            AppError::Failed { operation, detail } => {
                tracing::error!(%operation, "Repository failure: {}", detail);
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}
