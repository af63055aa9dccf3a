//! Lecture report repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{LectureReport, NewReport, ReportView},
};

/// Repository for lecture report database operations
pub struct ReportRepository;

impl ReportRepository {
    /// Insert a new report in the `submitted` state
    pub async fn create(
        pool: &PgPool,
        lecturer_id: &Uuid,
        report: &NewReport,
    ) -> AppResult<LectureReport> {
        let report = sqlx::query_as::<_, LectureReport>(
            r#"
            INSERT INTO lecture_reports (
                faculty_id, module_id, program_id, week_of_reporting, date_of_lecture,
                lecturer_id, actual_students_present, total_registered_students, venue,
                scheduled_time, topic_taught, learning_outcomes, recommendations,
                student_name, student_number
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(report.faculty_id)
        .bind(report.module_id)
        .bind(report.program_id)
        .bind(&report.week_of_reporting)
        .bind(report.date_of_lecture)
        .bind(lecturer_id)
        .bind(report.actual_students_present)
        .bind(report.total_registered_students)
        .bind(&report.venue)
        .bind(&report.scheduled_time)
        .bind(&report.topic_taught)
        .bind(&report.learning_outcomes)
        .bind(&report.recommendations)
        .bind(report.student_name.as_deref())
        .bind(report.student_number.as_deref())
        .fetch_one(pool)
        .await?;

        Ok(report)
    }

    /// Check whether a report exists
    pub async fn exists(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM lecture_reports WHERE id = $1)"#,
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// List reports with names, newest first; `lecturer_id` narrows to one owner
    pub async fn list_views(pool: &PgPool, lecturer_id: Option<Uuid>) -> AppResult<Vec<ReportView>> {
        let reports = sqlx::query_as::<_, ReportView>(
            r#"
            SELECT
                r.*,
                f.name AS faculty_name,
                m.module_name,
                p.program_name,
                u.name AS lecturer_name
            FROM lecture_reports r
            JOIN faculties f ON f.id = r.faculty_id
            JOIN modules m ON m.id = r.module_id
            JOIN programs p ON p.id = r.program_id
            JOIN users u ON u.id = r.lecturer_id
            WHERE ($1::uuid IS NULL OR r.lecturer_id = $1)
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(lecturer_id)
        .fetch_all(pool)
        .await?;

        Ok(reports)
    }

    /// Store principal feedback and mark the report reviewed
    pub async fn set_feedback(
        pool: &PgPool,
        id: &Uuid,
        feedback: &str,
    ) -> AppResult<Option<LectureReport>> {
        let report = sqlx::query_as::<_, LectureReport>(
            r#"
            UPDATE lecture_reports
            SET principal_feedback = $2, status = 'reviewed'
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(feedback)
        .fetch_optional(pool)
        .await?;

        Ok(report)
    }

    /// Record the student who signed attendance
    pub async fn sign_attendance(
        pool: &PgPool,
        id: &Uuid,
        student_name: &str,
        student_number: &str,
    ) -> AppResult<Option<LectureReport>> {
        let report = sqlx::query_as::<_, LectureReport>(
            r#"
            UPDATE lecture_reports
            SET student_name = $2, student_number = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(student_name)
        .bind(student_number)
        .fetch_optional(pool)
        .await?;

        Ok(report)
    }
}
