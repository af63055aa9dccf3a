//! Program repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{DeleteOutcome, DependencyCounts, Program, ProgramPatch, ProgramView},
};

/// Repository for program database operations
pub struct ProgramRepository;

impl ProgramRepository {
    /// Create a new program
    pub async fn create(
        pool: &PgPool,
        program_code: &str,
        program_name: &str,
        faculty_id: Option<Uuid>,
        created_by: &Uuid,
    ) -> AppResult<Program> {
        let program = sqlx::query_as::<_, Program>(
            r#"
            INSERT INTO programs (program_code, program_name, faculty_id, created_by)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(program_code)
        .bind(program_name)
        .bind(faculty_id)
        .bind(created_by)
        .fetch_one(pool)
        .await?;

        Ok(program)
    }

    /// Find program by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Program>> {
        let program = sqlx::query_as::<_, Program>(r#"SELECT * FROM programs WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(program)
    }

    /// Find program by its code
    pub async fn find_by_code(pool: &PgPool, program_code: &str) -> AppResult<Option<Program>> {
        let program =
            sqlx::query_as::<_, Program>(r#"SELECT * FROM programs WHERE program_code = $1"#)
                .bind(program_code)
                .fetch_optional(pool)
                .await?;

        Ok(program)
    }

    /// Check whether a program exists
    pub async fn exists(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM programs WHERE id = $1)"#,
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// List programs with faculty names, optionally restricted to one faculty
    pub async fn list(pool: &PgPool, faculty_id: Option<Uuid>) -> AppResult<Vec<ProgramView>> {
        let programs = sqlx::query_as::<_, ProgramView>(
            r#"
            SELECT p.*, f.name AS faculty_name
            FROM programs p
            LEFT JOIN faculties f ON f.id = p.faculty_id
            WHERE ($1::uuid IS NULL OR p.faculty_id = $1)
            ORDER BY p.program_name
            "#,
        )
        .bind(faculty_id)
        .fetch_all(pool)
        .await?;

        Ok(programs)
    }

    /// Apply a partial update
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        patch: &ProgramPatch,
    ) -> AppResult<Option<Program>> {
        let program = sqlx::query_as::<_, Program>(
            r#"
            UPDATE programs
            SET
                program_code = COALESCE($2, program_code),
                program_name = COALESCE($3, program_name),
                faculty_id = COALESCE($4, faculty_id)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.program_code.as_deref())
        .bind(patch.program_name.as_deref())
        .bind(patch.faculty_id)
        .fetch_optional(pool)
        .await?;

        Ok(program)
    }

    /// Delete a program unless anything still references it
    pub async fn delete_if_unreferenced(pool: &PgPool, id: &Uuid) -> AppResult<DeleteOutcome> {
        let mut tx = pool.begin().await?;

        let locked = sqlx::query_scalar::<_, Uuid>(
            r#"SELECT id FROM programs WHERE id = $1 FOR UPDATE"#,
        )
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        if locked.is_none() {
            return Ok(DeleteOutcome::NotFound);
        }

        let counts = sqlx::query_as::<_, DependencyCounts>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM modules WHERE program_id = $1) AS modules,
                (SELECT COUNT(*) FROM lecture_assignments WHERE program_id = $1) AS assignments,
                (SELECT COUNT(*) FROM lecture_reports WHERE program_id = $1) AS reports,
                (SELECT COUNT(*) FROM users WHERE program_id = $1) AS users,
                (SELECT COUNT(*) FROM challenges WHERE program_id = $1) AS challenges,
                0::BIGINT AS student_challenges,
                0::BIGINT AS module_ratings
            "#,
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        if counts.total() > 0 {
            return Ok(DeleteOutcome::Blocked(counts));
        }

        sqlx::query(r#"DELETE FROM programs WHERE id = $1"#)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(DeleteOutcome::Deleted)
    }
}
