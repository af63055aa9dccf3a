//! Lecture assignment handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    auth::Identity,
    error::AppResult,
    handlers::MessageResponse,
    services::AssignmentService,
    state::AppState,
};

use super::{
    request::{AssignLecturerRequest, UpdateAssignmentRequest},
    response::{AssignmentResponse, AssignmentsListResponse},
};

/// List all assignments
pub async fn list_assignments(
    State(state): State<AppState>,
    _identity: Identity,
) -> AppResult<Json<AssignmentsListResponse>> {
    let assignments = AssignmentService::list(state.db()).await?;
    Ok(Json(AssignmentsListResponse { assignments }))
}

/// Assign a lecturer
pub async fn assign_lecturer(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<AssignLecturerRequest>,
) -> AppResult<(StatusCode, Json<AssignmentResponse>)> {
    let assignment = AssignmentService::assign(state.db(), &identity, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(AssignmentResponse {
            message: "Lecturer assigned successfully".to_string(),
            assignment,
        }),
    ))
}

/// Update an assignment
pub async fn update_assignment(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateAssignmentRequest>,
) -> AppResult<Json<AssignmentResponse>> {
    let assignment = AssignmentService::update(state.db(), &identity, &id, payload.into()).await?;

    Ok(Json(AssignmentResponse {
        message: "Assignment updated successfully".to_string(),
        assignment,
    }))
}

/// Delete an assignment
pub async fn delete_assignment(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    AssignmentService::delete(state.db(), &identity, &id).await?;
    Ok(Json(MessageResponse::new("Assignment removed successfully")))
}
