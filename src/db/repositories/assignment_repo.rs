//! Lecture assignment repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{AssignmentPatch, AssignmentView, LectureAssignment},
};

/// Repository for lecture assignment database operations
pub struct AssignmentRepository;

impl AssignmentRepository {
    /// Record a new assignment
    pub async fn create(
        pool: &PgPool,
        module_id: &Uuid,
        program_id: &Uuid,
        lecturer_id: &Uuid,
        assigned_by: &Uuid,
    ) -> AppResult<LectureAssignment> {
        let assignment = sqlx::query_as::<_, LectureAssignment>(
            r#"
            INSERT INTO lecture_assignments (module_id, program_id, lecturer_id, assigned_by)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(module_id)
        .bind(program_id)
        .bind(lecturer_id)
        .bind(assigned_by)
        .fetch_one(pool)
        .await?;

        Ok(assignment)
    }

    /// Find assignment by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<LectureAssignment>> {
        let assignment = sqlx::query_as::<_, LectureAssignment>(
            r#"SELECT * FROM lecture_assignments WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(pool)
        .await?;

        Ok(assignment)
    }

    /// Find an assignment holding the given triple, other than `excluding`
    pub async fn find_triple(
        pool: &PgPool,
        module_id: &Uuid,
        program_id: &Uuid,
        lecturer_id: &Uuid,
        excluding: Option<Uuid>,
    ) -> AppResult<Option<LectureAssignment>> {
        let assignment = sqlx::query_as::<_, LectureAssignment>(
            r#"
            SELECT * FROM lecture_assignments
            WHERE module_id = $1 AND program_id = $2 AND lecturer_id = $3
              AND ($4::uuid IS NULL OR id <> $4)
            "#,
        )
        .bind(module_id)
        .bind(program_id)
        .bind(lecturer_id)
        .bind(excluding)
        .fetch_optional(pool)
        .await?;

        Ok(assignment)
    }

    /// List all assignments with names, newest first
    pub async fn list_views(pool: &PgPool) -> AppResult<Vec<AssignmentView>> {
        let assignments = sqlx::query_as::<_, AssignmentView>(
            r#"
            SELECT
                la.*,
                m.module_name,
                p.program_name,
                p.program_code,
                l.name AS lecturer_name,
                a.name AS assigned_by_name
            FROM lecture_assignments la
            JOIN modules m ON m.id = la.module_id
            JOIN programs p ON p.id = la.program_id
            JOIN users l ON l.id = la.lecturer_id
            JOIN users a ON a.id = la.assigned_by
            ORDER BY la.assigned_at DESC
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(assignments)
    }

    /// Apply a partial update
    pub async fn update(
        pool: &PgPool,
        id: &Uuid,
        patch: &AssignmentPatch,
    ) -> AppResult<Option<LectureAssignment>> {
        let assignment = sqlx::query_as::<_, LectureAssignment>(
            r#"
            UPDATE lecture_assignments
            SET
                module_id = COALESCE($2, module_id),
                program_id = COALESCE($3, program_id),
                lecturer_id = COALESCE($4, lecturer_id)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.module_id)
        .bind(patch.program_id)
        .bind(patch.lecturer_id)
        .fetch_optional(pool)
        .await?;

        Ok(assignment)
    }

    /// Delete an assignment; returns whether a row was removed
    pub async fn delete(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let result = sqlx::query(r#"DELETE FROM lecture_assignments WHERE id = $1"#)
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
