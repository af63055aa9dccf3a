//! Student challenge repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{ChallengeStatus, Priority, StudentChallenge, StudentChallengeView},
};

const STUDENT_CHALLENGE_VIEW_SELECT: &str = r#"
    SELECT sc.*, m.module_name, p.program_name
    FROM student_challenges sc
    JOIN modules m ON m.id = sc.module_id
    JOIN programs p ON p.id = m.program_id
"#;

/// Repository for student challenge database operations
pub struct StudentChallengeRepository;

impl StudentChallengeRepository {
    /// Insert a new challenge in the `pending` state
    pub async fn create(
        pool: &PgPool,
        student_id: &Uuid,
        module_id: &Uuid,
        title: &str,
        description: &str,
        priority: Priority,
    ) -> AppResult<StudentChallenge> {
        let challenge = sqlx::query_as::<_, StudentChallenge>(
            r#"
            INSERT INTO student_challenges (student_id, module_id, title, description, priority)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(student_id)
        .bind(module_id)
        .bind(title)
        .bind(description)
        .bind(priority)
        .fetch_one(pool)
        .await?;

        Ok(challenge)
    }

    /// Find challenge by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<StudentChallenge>> {
        let challenge = sqlx::query_as::<_, StudentChallenge>(
            r#"SELECT * FROM student_challenges WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(challenge)
    }

    /// Find a challenge with module and program names
    pub async fn find_view(pool: &PgPool, id: &Uuid) -> AppResult<Option<StudentChallengeView>> {
        let query = format!("{STUDENT_CHALLENGE_VIEW_SELECT} WHERE sc.id = $1");
        let challenge = sqlx::query_as::<_, StudentChallengeView>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(challenge)
    }

    /// All challenges raised by one student, unordered
    pub async fn list_for_student(
        pool: &PgPool,
        student_id: &Uuid,
    ) -> AppResult<Vec<StudentChallengeView>> {
        let query = format!("{STUDENT_CHALLENGE_VIEW_SELECT} WHERE sc.student_id = $1");
        let challenges = sqlx::query_as::<_, StudentChallengeView>(&query)
            .bind(student_id)
            .fetch_all(pool)
            .await?;

        Ok(challenges)
    }

    /// Set the status and refresh `updated_at`
    pub async fn update_status(
        pool: &PgPool,
        id: &Uuid,
        status: ChallengeStatus,
    ) -> AppResult<StudentChallenge> {
        let challenge = sqlx::query_as::<_, StudentChallenge>(
            r#"
            UPDATE student_challenges
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(status)
        .fetch_one(pool)
        .await?;

        Ok(challenge)
    }
}
