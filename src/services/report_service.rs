//! Report workflow service

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    auth::Identity,
    authorization::scope_for,
    db::repositories::ReportRepository,
    error::{AppError, AppResult},
    models::{LectureReport, NewReport, ReportView},
};

/// Report workflow service
pub struct ReportService;

impl ReportService {
    /// Submit a report as the calling lecturer
    pub async fn submit(
        pool: &PgPool,
        identity: &Identity,
        report: NewReport,
    ) -> AppResult<LectureReport> {
        let report = ReportRepository::create(pool, &identity.user_id, &report).await?;

        info!(
            report_id = %report.id,
            lecturer_id = %identity.user_id,
            week = %report.week_of_reporting,
            "Lecture report submitted"
        );

        Ok(report)
    }

    /// Reports the caller may see
    pub async fn list_visible(pool: &PgPool, identity: &Identity) -> AppResult<Vec<ReportView>> {
        ReportRepository::list_views(pool, scope_for(identity).owner()).await
    }

    /// Record principal feedback; moves the report to `reviewed`
    pub async fn submit_feedback(
        pool: &PgPool,
        identity: &Identity,
        id: &Uuid,
        feedback: &str,
    ) -> AppResult<LectureReport> {
        let feedback = feedback.trim();
        if feedback.is_empty() {
            return Err(AppError::Validation("Feedback is required".to_string()));
        }

        let report = ReportRepository::set_feedback(pool, id, feedback)
            .await?
            .ok_or_else(|| AppError::NotFound("Report not found".to_string()))?;

        info!(report_id = %id, reviewer_id = %identity.user_id, "Report feedback recorded");

        Ok(report)
    }

    /// Record the student who signed the attendance sheet
    pub async fn sign_attendance(
        pool: &PgPool,
        id: &Uuid,
        student_name: &str,
        student_number: &str,
    ) -> AppResult<LectureReport> {
        let student_name = student_name.trim();
        if student_name.is_empty() {
            return Err(AppError::required("student_name"));
        }
        let student_number = student_number.trim();
        if student_number.is_empty() {
            return Err(AppError::required("student_number"));
        }

        let report = ReportRepository::sign_attendance(pool, id, student_name, student_number)
            .await?
            .ok_or_else(|| AppError::NotFound("Report not found".to_string()))?;

        info!(report_id = %id, "Attendance signed");

        Ok(report)
    }
}
