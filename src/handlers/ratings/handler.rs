//! Rating handler implementations

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
    models::RatingOutcome,
    services::RatingService,
    state::AppState,
};

use super::{
    request::{RateModuleRequest, RateReportRequest},
    response::{
        ModuleRatingResponse, ModuleRatingsListResponse, ReportRatingResponse,
        ReportRatingsListResponse,
    },
};

/// Rate a module; a repeat rating overwrites the previous one
pub async fn rate_module(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<RateModuleRequest>,
) -> AppResult<Json<ModuleRatingResponse>> {
    require_student(&identity)?;

    let module_id = payload.module_id.ok_or_else(|| AppError::required("module"))?;
    let rating = payload.rating.ok_or_else(|| AppError::required("rating"))?;

    let (rating, outcome) = RatingService::rate_module(
        state.db(),
        &identity,
        &module_id,
        rating,
        payload.comments.as_deref(),
    )
    .await?;

    let message = match outcome {
        RatingOutcome::Submitted => "Rating submitted successfully",
        RatingOutcome::Updated => "Rating updated successfully",
    };

    Ok(Json(ModuleRatingResponse {
        message: message.to_string(),
        outcome,
        rating,
    }))
}

/// Every module rating, for the staff dashboard
pub async fn list_module_ratings(
    State(state): State<AppState>,
    identity: Identity,
) -> AppResult<Json<ModuleRatingsListResponse>> {
    let ratings = RatingService::list_all(state.db(), &identity).await?;
    Ok(Json(ModuleRatingsListResponse { ratings }))
}

/// Rate a lecture report
pub async fn rate_report(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<RateReportRequest>,
) -> AppResult<(StatusCode, Json<ReportRatingResponse>)> {
    let report_id = payload.report_id.ok_or_else(|| AppError::required("report"))?;
    let rating = payload.rating.ok_or_else(|| AppError::required("rating"))?;

    let rating = RatingService::rate_report(
        state.db(),
        &identity,
        &report_id,
        rating,
        payload.comments.as_deref(),
    )
    .await?;

    Ok((
        StatusCode::CREATED,
        Json(ReportRatingResponse {
            message: "Rating submitted successfully".to_string(),
            rating,
        }),
    ))
}

/// Ratings of one report
pub async fn list_report_ratings(
    State(state): State<AppState>,
    _identity: Identity,
    Path(report_id): Path<Uuid>,
) -> AppResult<Json<ReportRatingsListResponse>> {
    let ratings = RatingService::list_for_report(state.db(), &report_id).await?;
    Ok(Json(ReportRatingsListResponse { ratings }))
}
