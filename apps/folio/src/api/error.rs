//! # API Errors
//!
//! Handler failures and their HTTP mapping:
//! - `Validation` → 400 with the message
//! - `NotFound` → 404 with the message
//! - `PayloadTooLarge` → 413 with the message
//! - `Internal` → 500 with a generic body; the detail is only logged

use super::types::{ErrorResponse, INTERNAL_ERROR};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use folio_core::{ContactError, FolioError};

/// Error returned by handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    Validation(String),
    NotFound(String),
    PayloadTooLarge(String),
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Validation(msg) | Self::NotFound(msg) | Self::PayloadTooLarge(msg) => {
                ErrorResponse::new(msg)
            }
            Self::Internal(detail) => {
                tracing::error!(error = %detail, "Server error");
                ErrorResponse::new(INTERNAL_ERROR)
            }
        };
        (status, Json(body)).into_response()
    }
}

impl From<ContactError> for ApiError {
    fn from(err: ContactError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<FolioError> for ApiError {
    fn from(err: FolioError) -> Self {
        Self::Internal(err.to_string())
    }
}

// =============================================================================
// TESTS
// =============================================================================
