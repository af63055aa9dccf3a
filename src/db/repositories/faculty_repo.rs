//! Faculty repository

use sqlx::PgPool;
use uuid::Uuid;

use crate::{error::AppResult, models::Faculty};

/// Repository for faculty reference data
pub struct FacultyRepository;

impl FacultyRepository {
    /// List all faculties ordered by name
    pub async fn list(pool: &PgPool) -> AppResult<Vec<Faculty>> {
        let faculties = sqlx::query_as::<_, Faculty>(r#"SELECT * FROM faculties ORDER BY name"#)
            .fetch_all(pool)
            .await?;

        Ok(faculties)
    }

    /// Check whether a faculty exists
    pub async fn exists(pool: &PgPool, id: &Uuid) -> AppResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            r#"SELECT EXISTS(SELECT 1 FROM faculties WHERE id = $1)"#,
        )
        .bind(id)
        .fetch_one(pool)
        .await?;

        Ok(exists)
    }
}
