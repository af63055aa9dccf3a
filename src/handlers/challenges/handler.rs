//! Lecturer challenge handler implementations

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
    models::{ChallengeStats, ChallengeUpdate, ChallengeView},
    services::{ChallengeService, Created},
    state::AppState,
};

use super::{
    request::{CreateChallengeRequest, UpdateChallengeRequest},
    response::{ChallengeResponse, ChallengesListResponse},
};

/// Challenges visible to the caller
pub async fn list_challenges(
    State(state): State<AppState>,
    identity: Identity,
) -> AppResult<Json<ChallengesListResponse>> {
    let challenges = ChallengeService::list_visible(state.db(), &identity).await?;
    Ok(Json(ChallengesListResponse { challenges }))
}

/// Raise a challenge
pub async fn create_challenge(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<CreateChallengeRequest>,
) -> AppResult<(StatusCode, Json<Created<ChallengeView>>)> {
    let new_challenge = payload.into_new_challenge()?;

    let created = ChallengeService::create(state.db(), &identity, new_challenge).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Per-status counts
pub async fn challenge_stats(
    State(state): State<AppState>,
    identity: Identity,
) -> AppResult<Json<ChallengeStats>> {
    let stats = ChallengeService::stats(state.db(), &identity).await?;
    Ok(Json(stats))
}

/// One challenge
pub async fn get_challenge(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ChallengeView>> {
    let challenge = ChallengeService::get(state.db(), &identity, &id).await?;
    Ok(Json(challenge))
}

/// Admin update
pub async fn update_challenge(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateChallengeRequest>,
) -> AppResult<Json<ChallengeResponse>> {
    let update = ChallengeUpdate::try_from(payload)?;

    let challenge = ChallengeService::update(state.db(), &identity, &id, update).await?;

    Ok(Json(ChallengeResponse {
        message: "Challenge updated successfully".to_string(),
        challenge,
    }))
}

/// Delete a challenge
pub async fn delete_challenge(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    ChallengeService::delete(state.db(), &identity, &id).await?;
    Ok(Json(MessageResponse::new("Challenge deleted successfully")))
}
