//! # Middleware Module
//!
//! CORS and panic handling for the Folio HTTP API.
//!
//! ## CORS
//!
//! Exactly one origin (the configured frontend URL) is allowed, with
//! credentials. Methods and headers come from fixed allow-lists.

use super::types::{ErrorResponse, INTERNAL_ERROR};
use crate::config::DEFAULT_FRONTEND_URL;
use axum::{
    Json,
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
};
use std::any::Any;
use tower_http::cors::CorsLayer;

/// Methods a cross-origin caller may use.
const ALLOWED_METHODS: [Method; 5] = [
    Method::GET,
    Method::POST,
    Method::PUT,
    Method::DELETE,
    Method::OPTIONS,
];

// =============================================================================
// CORS CONFIGURATION
// =============================================================================

/// Build the CORS layer for a single frontend origin.
///
/// An origin that is not a valid header value falls back to
/// [`DEFAULT_FRONTEND_URL`] with a warning.
pub fn build_cors_layer(frontend_url: &str) -> CorsLayer {
    let origin = match frontend_url.trim().parse::<HeaderValue>() {
        Ok(hv) => {
            tracing::info!("CORS: Allowing origin: {}", frontend_url);
            hv
        }
        Err(e) => {
            tracing::warn!(
                "CORS: Invalid origin '{}': {}, defaulting to {}",
                frontend_url,
                e,
                DEFAULT_FRONTEND_URL
            );
            HeaderValue::from_static(DEFAULT_FRONTEND_URL)
        }
    };

    CorsLayer::new()
        .allow_origin(vec![origin])
        .allow_credentials(true)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

// =============================================================================
// PANIC HANDLER
// =============================================================================

/// Turn a handler panic into the generic 500 body.
///
/// The panic payload is logged and never sent to the client.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = payload.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "Server error");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new(INTERNAL_ERROR)),
    )
        .into_response()
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_origin_still_builds_layer() {
        // Newlines are not valid in header values.
        let _layer = build_cors_layer("http://bad\norigin");
    }

    #[test]
    fn panic_payloads_map_to_500() {
        let from_str = handle_panic(Box::new("boom"));
        assert_eq!(from_str.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let from_string = handle_panic(Box::new(String::from("boom")));
        assert_eq!(from_string.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let from_other = handle_panic(Box::new(42_u8));
        assert_eq!(from_other.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
