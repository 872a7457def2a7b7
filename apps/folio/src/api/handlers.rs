//! # API Endpoint Handlers
//!
//! This module implements the actual HTTP endpoint handlers. Read handlers
//! serialize straight from the shared dataset without cloning it.

use super::{
    AppState,
    error::ApiError,
    extract::ContactBody,
    types::{CONTACT_ACK, DataResponse, ErrorResponse, HealthResponse, MessageResponse},
};
use axum::{
    Json,
    extract::{OriginalUri, Path, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use chrono::Utc;
use folio_core::parse_id;

// =============================================================================
// HEALTH HANDLER
// =============================================================================

/// Health check endpoint.
pub async fn health_handler() -> impl IntoResponse {
    Json(HealthResponse::now())
}

// =============================================================================
// DATASET HANDLERS
// =============================================================================

/// Get the profile.
pub async fn profile_handler(State(state): State<AppState>) -> Response {
    Json(DataResponse::new(state.dataset.profile())).into_response()
}

/// Get all skill categories.
pub async fn skills_handler(State(state): State<AppState>) -> Response {
    Json(DataResponse::new(state.dataset.skills())).into_response()
}

/// Get all experiences.
pub async fn experiences_handler(State(state): State<AppState>) -> Response {
    Json(DataResponse::new(state.dataset.experiences())).into_response()
}

/// Get all projects.
pub async fn projects_handler(State(state): State<AppState>) -> Response {
    Json(DataResponse::new(state.dataset.projects())).into_response()
}

/// Get one project by its id.
///
/// Unknown and non-numeric ids both answer 404 "Project not found".
pub async fn project_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, ApiError> {
    let project = parse_id(&raw_id)
        .and_then(|id| state.dataset.find_project(id))
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))?;

    Ok(Json(DataResponse::new(project)).into_response())
}

/// Get all social links.
pub async fn socials_handler(State(state): State<AppState>) -> Response {
    Json(DataResponse::new(state.dataset.socials())).into_response()
}

// =============================================================================
// CONTACT HANDLER
// =============================================================================

/// Accept a contact submission.
pub async fn contact_handler(
    State(state): State<AppState>,
    ContactBody(request): ContactBody,
) -> Result<Json<MessageResponse>, ApiError> {
    let submission = request.validate(Utc::now())?;
    state.sink.record(&submission)?;
    Ok(Json(MessageResponse::new(CONTACT_ACK)))
}

// =============================================================================
// FALLBACK HANDLER
// =============================================================================

/// Answer any request no route handles, naming its method and path.
pub async fn route_not_found(method: Method, OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::route_not_found(method.as_str(), uri.path())),
    )
}
