//! Lecture report handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;

use crate::{auth::Identity, error::AppResult, services::ReportService, state::AppState};

use super::{
    request::{FeedbackRequest, SignAttendanceRequest, SubmitReportRequest},
    response::{ReportResponse, ReportsListResponse},
};

/// Reports visible to the caller
pub async fn list_reports(
    State(state): State<AppState>,
    identity: Identity,
) -> AppResult<Json<ReportsListResponse>> {
    let reports = ReportService::list_visible(state.db(), &identity).await?;
    Ok(Json(ReportsListResponse { reports }))
}

/// Submit a lecture report
pub async fn submit_report(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<SubmitReportRequest>,
) -> AppResult<(StatusCode, Json<ReportResponse>)> {
    let new_report = payload.into_new_report()?;

    let report = ReportService::submit(state.db(), &identity, new_report).await?;

    Ok((
        StatusCode::CREATED,
        Json(ReportResponse {
            message: "Report submitted successfully".to_string(),
            report,
        }),
    ))
}

/// Attach principal feedback
pub async fn submit_feedback(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
    Json(payload): Json<FeedbackRequest>,
) -> AppResult<Json<ReportResponse>> {
    let report = ReportService::submit_feedback(
        state.db(),
        &identity,
        &id,
        payload.feedback.as_deref().unwrap_or_default(),
    )
    .await?;

    Ok(Json(ReportResponse {
        message: "Feedback submitted successfully".to_string(),
        report,
    }))
}

/// Sign attendance on a report
pub async fn sign_attendance(
    State(state): State<AppState>,
    _identity: Identity,
    Path(id): Path<Uuid>,
    Json(payload): Json<SignAttendanceRequest>,
) -> AppResult<Json<ReportResponse>> {
    let report = ReportService::sign_attendance(
        state.db(),
        &id,
        payload.student_name.as_deref().unwrap_or_default(),
        payload.student_number.as_deref().unwrap_or_default(),
    )
    .await?;

    Ok(Json(ReportResponse {
        message: "Attendance signed successfully".to_string(),
        report,
    }))
}
