//! Student handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{
    auth::Identity,
    authorization::require_student,
    error::{AppError, AppResult},
    models::{ChallengeStatus, Priority, StudentChallengeView},
    services::{Created, RatingService, StudentChallengeService, UserService},
    state::AppState,
    utils::{optional_text, parse_choice},
};

use super::{
    request::{CreateStudentChallengeRequest, UpdateStudentChallengeRequest},
    response::{
        StudentChallengeResponse, StudentChallengesListResponse, StudentModulesResponse,
        StudentRatingsListResponse,
    },
};

/// The caller's own challenges
pub async fn list_own_challenges(
    State(state): State<AppState>,
    identity: Identity,
) -> AppResult<Json<StudentChallengesListResponse>> {
    let challenges = StudentChallengeService::list_own(state.db(), &identity).await?;
    Ok(Json(StudentChallengesListResponse { challenges }))
}

/// Raise a module challenge
pub async fn create_challenge(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<CreateStudentChallengeRequest>,
) -> AppResult<(StatusCode, Json<Created<StudentChallengeView>>)> {
    require_student(&identity)?;

    let priority = optional_text(payload.priority)
        .map(|raw| parse_choice::<Priority>(&raw))
        .transpose()?;

    let created = StudentChallengeService::create(
        state.db(),
        &identity,
        payload.module_id,
        payload.title.as_deref(),
        payload.description.as_deref(),
        priority,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Change the status of one of the caller's challenges
pub async fn update_challenge_status(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateStudentChallengeRequest>,
) -> AppResult<Json<StudentChallengeResponse>> {
    require_student(&identity)?;

    let raw = optional_text(payload.status).ok_or_else(|| AppError::required("status"))?;
    let status = parse_choice::<ChallengeStatus>(&raw)?;

    let challenge =
        StudentChallengeService::update_status(state.db(), &identity, &id, status).await?;

    Ok(Json(StudentChallengeResponse {
        message: "Challenge status updated successfully".to_string(),
        challenge,
    }))
}

/// Modules of the caller's program
pub async fn list_my_modules(
    State(state): State<AppState>,
    identity: Identity,
) -> AppResult<Json<StudentModulesResponse>> {
    let modules = UserService::student_modules(state.db(), &identity).await?;

    Ok(Json(StudentModulesResponse {
        has_program: modules.is_some(),
        modules: modules.unwrap_or_default(),
    }))
}

/// The caller's module ratings
pub async fn list_my_module_ratings(
    State(state): State<AppState>,
    identity: Identity,
) -> AppResult<Json<StudentRatingsListResponse>> {
    let ratings = RatingService::list_for_student(state.db(), &identity).await?;
    Ok(Json(StudentRatingsListResponse { ratings }))
}
