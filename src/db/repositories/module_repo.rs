//! Module repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{DeleteOutcome, DependencyCounts, Module, ModulePatch, ModuleView, StudentModule},
};

const MODULE_VIEW_SELECT: &str = r#"
    SELECT
        m.*,
        p.program_name,
        p.program_code,
        f.name AS faculty_name,
        u.name AS created_by_name,
        (SELECT COUNT(*) FROM lecture_assignments la WHERE la.module_id = m.id) AS assignment_count,
        (SELECT COUNT(*) FROM lecture_reports lr WHERE lr.module_id = m.id) AS report_count
    FROM modules m
    JOIN programs p ON p.id = m.program_id
    LEFT JOIN faculties f ON f.id = m.faculty_id
    LEFT JOIN users u ON u.id = m.created_by
"#;

/// Repository for module database operations
pub struct ModuleRepository;

impl ModuleRepository {
    /// Create a new module
    pub async fn create(
        pool: &PgPool,
        module_name: &str,
        program_id: &Uuid,
        faculty_id: Option<Uuid>,
        total_registered_students: i32,
        created_by: &Uuid,
    ) -> AppResult<Module> {
        let module = sqlx::query_as::<_, Module>(
            r#"
            INSERT INTO modules (module_name, program_id, faculty_id, total_registered_students, created_by)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(module_name)
        .bind(program_id)
        .bind(faculty_id)
        .bind(total_registered_students)
        .bind(created_by)
        .fetch_one(pool)
        .await?;

        Ok(module)
    }

    /// Find module by ID
    pub async fn find_by_id(pool: &PgPool, id: &Uuid) -> AppResult<Option<Module>> {
        let module = sqlx::query_as::<_, Module>(r#"SELECT * FROM modules WHERE id = $1"#)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(module)
    }

    /// Find a module by name within a program
    pub async fn find_by_name_in_program(
        pool: &PgPool,
        module_name: &str,
        program_id: &Uuid,
    ) -> AppResult<Option<Module>> {
        let module = sqlx::query_as::<_, Module>(
            r#"SELECT * FROM modules WHERE module_name = $1 AND program_id = $2"#,
        )
        .bind(module_name)
        .bind(program_id)
        .fetch_optional(pool)
        .await?;

        Ok(module)
    }

    /// Check whether a module exists
    pub async fn exists(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM modules WHERE id = $1)"#,
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }

    /// Find a module with catalog names and counts
    pub async fn find_view(pool: &PgPool, id: &Uuid) -> AppResult<Option<ModuleView>> {
        let query = format!("{MODULE_VIEW_SELECT} WHERE m.id = $1");
        let module = sqlx::query_as::<_, ModuleView>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        Ok(module)
    }

    /// List modules, optionally restricted to one program
    pub async fn list_views(pool: &PgPool, program_id: Option<Uuid>) -> AppResult<Vec<ModuleView>> {
        let query = format!(
            "{MODULE_VIEW_SELECT} WHERE ($1::uuid IS NULL OR m.program_id = $1) \
             ORDER BY p.program_name, m.module_name"
        );
        let modules = sqlx::query_as::<_, ModuleView>(&query)
            .bind(program_id)
            .fetch_all(pool)
            .await?;

        Ok(modules)
    }

    /// Modules of a program as listed to its students
    pub async fn list_for_program(pool: &PgPool, program_id: &Uuid) -> AppResult<Vec<StudentModule>> {
        let modules = sqlx::query_as::<_, StudentModule>(
            r#"
            SELECT m.id, m.module_name, m.total_registered_students,
                   p.program_name, p.program_code, f.name AS faculty_name
            FROM modules m
            JOIN programs p ON p.id = m.program_id
            LEFT JOIN faculties f ON f.id = m.faculty_id
            WHERE m.program_id = $1
            ORDER BY m.module_name
            "#,
        )
        .bind(program_id)
        .fetch_all(pool)
        .await?;

        Ok(modules)
    }

    /// Whether a student's program contains the module
    pub async fn student_can_access(
        pool: &PgPool,
        student_id: &Uuid,
        module_id: &Uuid,
    ) -> AppResult<bool> {
        let allowed = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1
                FROM modules m
                JOIN users u ON u.program_id = m.program_id
                WHERE m.id = $1 AND u.id = $2
            )
            "#,
        )
        .bind(module_id)
        .bind(student_id)
        .fetch_one(pool)
        .await?;

        Ok(allowed)
    }

    /// Apply a partial update
    pub async fn update(pool: &PgPool, id: &Uuid, patch: &ModulePatch) -> AppResult<Option<Module>> {
        let module = sqlx::query_as::<_, Module>(
            r#"
            UPDATE modules
            SET
                module_name = COALESCE($2, module_name),
                program_id = COALESCE($3, program_id),
                faculty_id = COALESCE($4, faculty_id),
                total_registered_students = COALESCE($5, total_registered_students)
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.module_name.as_deref())
        .bind(patch.program_id)
        .bind(patch.faculty_id)
        .bind(patch.total_registered_students)
        .fetch_optional(pool)
        .await?;

        Ok(module)
    }

    /// Delete a module unless anything still references it
    pub async fn delete_if_unreferenced(pool: &PgPool, id: &Uuid) -> AppResult<DeleteOutcome> {
        let mut tx = pool.begin().await?;

        let locked =
            sqlx::query_scalar::<_, Uuid>(r#"SELECT id FROM modules WHERE id = $1 FOR UPDATE"#)
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;

        if locked.is_none() {
            return Ok(DeleteOutcome::NotFound);
        }

        let counts = sqlx::query_as::<_, DependencyCounts>(
            r#"
            SELECT
                0::BIGINT AS modules,
                (SELECT COUNT(*) FROM lecture_assignments WHERE module_id = $1) AS assignments,
                (SELECT COUNT(*) FROM lecture_reports WHERE module_id = $1) AS reports,
                0::BIGINT AS users,
                (SELECT COUNT(*) FROM challenges WHERE module_id = $1) AS challenges,
                (SELECT COUNT(*) FROM student_challenges WHERE module_id = $1) AS student_challenges,
                (SELECT COUNT(*) FROM module_ratings WHERE module_id = $1) AS module_ratings
            "#,
        )
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        if counts.total() > 0 {
            return Ok(DeleteOutcome::Blocked(counts));
        }

        sqlx::query(r#"DELETE FROM modules WHERE id = $1"#)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(DeleteOutcome::Deleted)
    }
}
