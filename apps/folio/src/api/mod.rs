//! # Folio HTTP API Module
//!
//! This module implements the HTTP REST API server using axum.
//!
//! ## Endpoints
//!
//! - `GET /api/profile` - Profile record
//! - `GET /api/skills` - Skill categories
//! - `GET /api/experiences` - Work experience
//! - `GET /api/projects` - All projects
//! - `GET /api/projects/{id}` - One project, or 404
//! - `GET /api/socials` - Social links
//! - `POST /api/contact` - Submit the contact form
//! - `GET /api/health` - Health check
//! - `GET /static/*` - Files from the configured static directory
//!
//! Anything else answers 404 `{success: false, error: "Route <METHOD> <PATH> not found"}`.

mod error;
mod extract;
mod handlers;
mod middleware;
mod sink;
mod types;

pub use error::ApiError;
pub use extract::{BODY_TOO_LARGE, ContactBody, INVALID_BODY};
pub use handlers::{
    contact_handler, experiences_handler, health_handler, profile_handler, project_handler,
    projects_handler, route_not_found, skills_handler, socials_handler,
};
pub use middleware::{build_cors_layer, handle_panic};
pub use sink::TracingSink;
pub use types::{
    CONTACT_ACK, DataResponse, ErrorResponse, HealthResponse, INTERNAL_ERROR, MessageResponse,
};

use crate::config::ServerConfig;
use axum::{
    Router,
    extract::DefaultBodyLimit,
    handler::HandlerWithoutStateExt,
    routing::{get, post},
};
use folio_core::{ContactSink, Dataset, FolioError};
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Request body limit for JSON and form bodies (100 KiB).
const BODY_LIMIT: usize = 100 * 1024;

// =============================================================================
// SERVER STATE
// =============================================================================

/// Shared server state: the read-only dataset and the contact sink.
#[derive(Clone)]
pub struct AppState {
    pub dataset: Arc<Dataset>,
    pub sink: Arc<dyn ContactSink>,
}

impl AppState {
    /// State over `dataset` that logs contact submissions.
    #[must_use]
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the contact sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn ContactSink>) -> Self {
        self.sink = sink;
        self
    }
}

// =============================================================================
// ROUTER CREATION
// =============================================================================

/// API routes without middleware or fallbacks.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/profile", get(profile_handler))
        .route("/api/skills", get(skills_handler))
        .route("/api/experiences", get(experiences_handler))
        .route("/api/projects", get(projects_handler))
        .route("/api/projects/{id}", get(project_handler))
        .route("/api/socials", get(socials_handler))
        .route("/api/contact", post(contact_handler))
}

/// Wrap `router` in the server shell.
///
/// Middleware stack (outer to inner):
/// 1. Tracing - logs all requests
/// 2. CORS - handles preflight requests
/// 3. Body limit
/// 4. Panic catcher - generic 500 body
///
/// Static files are mounted under `/static`, and unmatched paths or
/// methods fall through to [`route_not_found`].
pub fn with_shell(router: Router<AppState>, config: &ServerConfig) -> Router<AppState> {
    let static_files = ServeDir::new(&config.static_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(route_not_found.into_service());

    router
        .nest_service("/static", static_files)
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(DefaultBodyLimit::max(BODY_LIMIT))
        .layer(build_cors_layer(&config.frontend_url))
        .layer(TraceLayer::new_for_http())
}

/// Create the axum router with all endpoints and middleware.
pub fn create_router(state: AppState, config: &ServerConfig) -> Router {
    with_shell(routes(), config).with_state(state)
}

// =============================================================================
// SERVER STARTUP
// =============================================================================

/// Start the HTTP server and run until Ctrl+C or SIGTERM.
pub async fn run_server(config: &ServerConfig, state: AppState) -> Result<(), FolioError> {
    let router = create_router(state, config);
    let addr = config.addr();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| FolioError::IoError(format!("Bind failed: {}", e)))?;

    tracing::info!(
        "Portfolio API listening on {} (frontend origin: {})",
        addr,
        config.frontend_url
    );

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| FolioError::IoError(format!("Server error: {}", e)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Cannot listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!("Cannot listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, stopping server");
}
