use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use std::fmt;

use crate::models::ErrorResponse;
use crate::store::StoreError;

/// Errors surfaced to API clients.
///
/// `UserError` is client-correctable and maps to 400. `StorageError` is a
/// backing-store fault and maps to 500. Both render as `{"message": ...}`.
#[derive(Debug, Clone, PartialEq)]
pub enum AppError {
    UserError(String),
    StorageError(String),
}

impl AppError {
    pub fn message(&self) -> &str {
        match self {
            AppError::UserError(msg) | AppError::StorageError(msg) => msg,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        AppError::StorageError(e.to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::UserError(_) => StatusCode::BAD_REQUEST,
            AppError::StorageError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            message: self.message().to_string(),
        })
    }
}
