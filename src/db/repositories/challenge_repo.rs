//! Lecturer challenge repository

use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Challenge, ChallengeStatus, ChallengeView, NewChallenge},
};

const CHALLENGE_VIEW_SELECT: &str = r#"
    SELECT
        c.*,
        u.name AS lecturer_name,
        m.module_name,
        p.program_name,
        f.name AS faculty_name
    FROM challenges c
    JOIN users u ON u.id = c.lecturer_id
    JOIN modules m ON m.id = c.module_id
    JOIN programs p ON p.id = c.program_id
    LEFT JOIN faculties f ON f.id = c.faculty_id
"#;

/// Repository for lecturer challenge database operations
pub struct ChallengeRepository;

impl ChallengeRepository {
    /// Insert a new challenge
    pub async fn create(
        pool: &PgPool,
        lecturer_id: &Uuid,
        challenge: &NewChallenge,
        submitted_date: NaiveDate,
        resolved_date: Option<NaiveDate>,
    ) -> AppResult<Challenge> {
        let challenge = sqlx::query_as::<_, Challenge>(
            r#"
            INSERT INTO challenges (
                lecturer_id, module_id, program_id, faculty_id, challenge_type,
                description, impact, proposed_solution, status, submitted_date, resolved_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(lecturer_id)
        .bind(challenge.module_id)
        .bind(challenge.program_id)
        .bind(challenge.faculty_id)
        .bind(challenge.challenge_type)
        .bind(&challenge.description)
        .bind(&challenge.impact)
        .bind(&challenge.proposed_solution)
        .bind(challenge.status)
        .bind(submitted_date)
        .bind(resolved_date)
        .fetch_one(pool)
        .await?;

        Ok(challenge)
    }

    /// Find challenge by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Challenge>> {
        let challenge = sqlx::query_as::<_, Challenge>(r#"SELECT * FROM challenges WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(challenge)
    }

    /// Find a challenge with lecturer and catalog names
    pub async fn find_view(pool: &PgPool, id: &Uuid) -> AppResult<Option<ChallengeView>> {
        let query = format!("{CHALLENGE_VIEW_SELECT} WHERE c.id = $1");
        let challenge = sqlx::query_as::<_, ChallengeView>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(challenge)
    }

    /// List challenges newest first; `lecturer_id` narrows to one owner
    pub async fn list_views(
        pool: &PgPool,
        lecturer_id: Option<Uuid>,
    ) -> AppResult<Vec<ChallengeView>> {
        let query = format!(
            "{CHALLENGE_VIEW_SELECT} WHERE ($1::uuid IS NULL OR c.lecturer_id = $1) \
             ORDER BY c.created_at DESC"
        );
        let challenges = sqlx::query_as::<_, ChallengeView>(&query)
            .bind(lecturer_id)
            .fetch_all(pool)
            .await?;

        Ok(challenges)
    }

    /// Admin update; `resolved_date` is only written when a status is supplied
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        admin_feedback: Option<&str>,
        status: Option<ChallengeStatus>,
        resolved_date: Option<NaiveDate>,
    ) -> AppResult<Option<Challenge>> {
        let challenge = sqlx::query_as::<_, Challenge>(
            r#"
            UPDATE challenges
            SET
                admin_feedback = COALESCE($2, admin_feedback),
                status = COALESCE($3, status),
                resolved_date = CASE WHEN $3::challenge_status IS NULL THEN resolved_date ELSE $4 END
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(admin_feedback)
        .bind(status)
        .bind(resolved_date)
        .fetch_optional(pool)
        .await?;

        Ok(challenge)
    }

    /// Delete a challenge
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM challenges WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Challenge counts grouped by status
    pub async fn count_by_status(
        pool: &PgPool,
        lecturer_id: Option<Uuid>,
    ) -> AppResult<Vec<(ChallengeStatus, i64)>> {
        let rows = sqlx::query_as::<_, (ChallengeStatus, i64)>(
            r#"
            SELECT status, COUNT(*)
            FROM challenges
            WHERE ($1::uuid IS NULL OR lecturer_id = $1)
            GROUP BY status
            "#,
        )
        .bind(lecturer_id)
        .fetch_all(pool)
        .await?;

        Ok(rows)
    }
}
