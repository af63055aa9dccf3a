//! Directory service: the current user and user listings

use sqlx::PgPool;

use crate::{
    auth::Identity,
    authorization::{require_staff, require_student},
    db::repositories::{ModuleRepository, UserRepository},
    error::{AppError, AppResult},
    models::{Role, StudentModule, User},
};

/// Directory service
pub struct UserService;

impl UserService {
    /// The caller's own record
    pub async fn me(pool: &PgPool, identity: &Identity) -> AppResult<User> {
        UserRepository::find_by_id(pool, &identity.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// All lecturers, for assignment and filter dropdowns
    pub async fn list_lecturers(pool: &PgPool) -> AppResult<Vec<User>> {
        UserRepository::list_by_role(pool, Role::Lecturer).await
    }

    /// All students; staff only
    pub async fn list_students(pool: &PgPool, identity: &Identity) -> AppResult<Vec<User>> {
        require_staff(identity)?;
        UserRepository::list_by_role(pool, Role::Student).await
    }

    /// Modules of the calling student's program; `None` when the student has no program
    pub async fn student_modules(
        pool: &PgPool,
        identity: &Identity,
    ) -> AppResult<Option<Vec<StudentModule>>> {
        require_student(identity)?;

        let student = Self::me(pool, identity).await?;
        match student.program_id {
            Some(program_id) => Ok(Some(ModuleRepository::list_for_program(pool, &program_id).await?)),
            None => Ok(None),
        }
    }
}
