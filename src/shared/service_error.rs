// src/shared/service_error.rs

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use thiserror::Error;

use super::shared_structs::MessageResponse;

pub const UNAUTHORIZED_ACCESS: &str = "Unauthorized access.";
pub const SOMETHING_WENT_WRONG: &str = "Something Went Wrong.";
pub const INVALID_DATA: &str = "Invalid data.";

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Result of a repository call; storage misses are expressed as `Option`/`bool`.
pub type RepoResult<T> = Result<T, sqlx::Error>;

/// Every failure a service operation can report.
///
/// Repository calls return `sqlx::Error`, which lands in `Storage` through `?`;
/// that is the only path by which an unexpected failure reaches the caller.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("caller is not an administrator")]
    AuthorizationDenied,

    #[error("request is missing a required field")]
    InvalidData,

    #[error("category {0} not found")]
    CategoryNotFound(i32),

    /// Missing product on a read path.
    #[error("product {0} not found")]
    ProductNotFound(i32),

    /// Missing product on a write path (update, delete).
    #[error("product {0} does not exist")]
    ProductDoesNotExist(i32),

    #[error("storage failure: {0}")]
    Storage(#[from] sqlx::Error),
}

impl ServiceError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServiceError::AuthorizationDenied => StatusCode::UNAUTHORIZED,
            ServiceError::InvalidData | ServiceError::ProductDoesNotExist(_) => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::CategoryNotFound(_) | ServiceError::ProductNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text placed in the response envelope. Storage details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            ServiceError::AuthorizationDenied => UNAUTHORIZED_ACCESS.to_string(),
            ServiceError::InvalidData => INVALID_DATA.to_string(),
            ServiceError::CategoryNotFound(id) => format!("Category {} not found", id),
            ServiceError::ProductNotFound(id) => format!("Product {} not found", id),
            ServiceError::ProductDoesNotExist(_) => "Product id does not exist".to_string(),
            ServiceError::Storage(_) => SOMETHING_WENT_WRONG.to_string(),
        }
    }

    /// Emits the log line for this failure. Expected conditions are logged at
    /// `warn`, storage failures at `error` with the underlying cause.
    pub fn log(&self, operation: &str) {
        match self {
            ServiceError::Storage(e) => {
                tracing::error!(operation, error = ?e, "product operation failed");
            }
            other => {
                tracing::warn!(operation, reason = %other, "product operation rejected");
            }
        }
    }
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status()).json(MessageResponse::new(self.public_message()))
    }
}
