//! # API Request/Response Types
//!
//! This module defines the JSON envelopes for the HTTP API. Every body
//! carries a `success` flag next to `data`, `message` or `error`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Acknowledgment returned for an accepted contact submission.
pub const CONTACT_ACK: &str = "Message received! Thank you for contacting me.";

/// Generic body for failures that must not leak details.
pub const INTERNAL_ERROR: &str = "Internal server error";

// =============================================================================
// DATA RESPONSE
// =============================================================================

/// Successful read: `{success: true, data}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

// =============================================================================
// MESSAGE RESPONSE
// =============================================================================

/// Successful action: `{success: true, message}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

// =============================================================================
// ERROR RESPONSE
// =============================================================================

/// Failure: `{success: false, error}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }

    /// Body for a request no route handles.
    pub fn route_not_found(method: &str, path: &str) -> Self {
        Self::new(format!("Route {} {} not found", method, path))
    }
}

// =============================================================================
// HEALTH RESPONSE
// =============================================================================

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    /// Health report stamped with the current time.
    pub fn now() -> Self {
        Self {
            success: true,
            message: "Server is running".to_string(),
            timestamp: Utc::now(),
        }
    }
}
