//! Rating repository
//!
//! Module ratings and legacy report ratings live in separate tables.

use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{ModuleRating, ModuleRatingView, RatingOutcome, ReportRating, ReportRatingView},
};

/// Upserted row plus whether the insert branch ran
#[derive(Debug, FromRow)]
struct UpsertedRating {
    #[sqlx(flatten)]
    rating: ModuleRating,
    inserted: bool,
}

/// Repository for rating database operations
pub struct RatingRepository;

impl RatingRepository {
    /// Insert or overwrite a student's rating of a module in one statement
    pub async fn upsert_module_rating(
        pool: &PgPool,
        student_id: &Uuid,
        module_id: &Uuid,
        rating: i32,
        comments: &str,
    ) -> AppResult<(ModuleRating, RatingOutcome)> {
        let row = sqlx::query_as::<_, UpsertedRating>(
            r#"
            INSERT INTO module_ratings (student_id, module_id, rating, comments)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (student_id, module_id) DO UPDATE
            SET rating = EXCLUDED.rating,
                comments = EXCLUDED.comments,
                created_at = NOW()
            RETURNING *, (xmax = 0) AS inserted
            "#,
        )
        .bind(student_id)
        .bind(module_id)
        .bind(rating)
        .bind(comments)
        .fetch_one(pool)
        .await?;

        let outcome = if row.inserted {
            RatingOutcome::Submitted
        } else {
            RatingOutcome::Updated
        };

        Ok((row.rating, outcome))
    }

    /// Module ratings newest first; `student_id` narrows to one student
    pub async fn list_module_ratings(
        pool: &PgPool,
        student_id: Option<Uuid>,
    ) -> AppResult<Vec<ModuleRatingView>> {
        let ratings = sqlx::query_as::<_, ModuleRatingView>(
            r#"
            SELECT mr.*, m.module_name, p.program_name, u.name AS student_name
            FROM module_ratings mr
            JOIN modules m ON m.id = mr.module_id
            JOIN programs p ON p.id = m.program_id
            JOIN users u ON u.id = mr.student_id
            WHERE ($1::uuid IS NULL OR mr.student_id = $1)
            ORDER BY mr.created_at DESC
            "#,
        )
        .bind(student_id)
        .fetch_all(pool)
        .await?;

        Ok(ratings)
    }

    /// Append a rating to a report
    pub async fn create_report_rating(
        pool: &PgPool,
        report_id: &Uuid,
        rated_by: &Uuid,
        rating: i32,
        comments: &str,
    ) -> AppResult<ReportRating> {
        let rating = sqlx::query_as::<_, ReportRating>(
            r#"
            INSERT INTO ratings (report_id, rated_by, rating, comments)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(report_id)
        .bind(rated_by)
        .bind(rating)
        .bind(comments)
        .fetch_one(pool)
        .await?;

        Ok(rating)
    }

    /// Ratings of one report, newest first
    pub async fn list_for_report(
        pool: &PgPool,
        report_id: &Uuid,
    ) -> AppResult<Vec<ReportRatingView>> {
        let ratings = sqlx::query_as::<_, ReportRatingView>(
            r#"
            SELECT r.*, u.name AS rater_name
            FROM ratings r
            JOIN users u ON u.id = r.rated_by
            WHERE r.report_id = $1
            ORDER BY r.created_at DESC
            "#,
        )
        .bind(report_id)
        .fetch_all(pool)
        .await?;

        Ok(ratings)
    }
}
