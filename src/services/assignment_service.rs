//! Assignment ledger service

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    auth::Identity,
    authorization::require_admin,
    db::repositories::{AssignmentRepository, ModuleRepository, ProgramRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::assignments::request::AssignLecturerRequest,
    models::{AssignmentPatch, AssignmentView, LectureAssignment, Role},
};

/// Assignment ledger service
pub struct AssignmentService;

impl AssignmentService {
    /// All assignments with names
    pub async fn list(pool: &PgPool) -> AppResult<Vec<AssignmentView>> {
        AssignmentRepository::list_views(pool).await
    }

    /// Bind a lecturer to a module within a program; admin only
    pub async fn assign(
        pool: &PgPool,
        identity: &Identity,
        payload: AssignLecturerRequest,
    ) -> AppResult<LectureAssignment> {
        require_admin(identity)?;

        let module_id = payload.module_id.ok_or_else(|| AppError::required("module"))?;
        let program_id = payload.program_id.ok_or_else(|| AppError::required("program"))?;
        let lecturer_id = payload.lecturer_id.ok_or_else(|| AppError::required("lecturer"))?;

        Self::ensure_references(pool, Some(module_id), Some(program_id), Some(lecturer_id)).await?;

        if AssignmentRepository::find_triple(pool, &module_id, &program_id, &lecturer_id, None)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("This assignment already exists".to_string()));
        }

        let assignment = AssignmentRepository::create(
            pool,
            &module_id,
            &program_id,
            &lecturer_id,
            &identity.user_id,
        )
        .await?;

        info!(
            assignment_id = %assignment.id,
            module_id = %module_id,
            lecturer_id = %lecturer_id,
            "Lecturer assigned"
        );

        Ok(assignment)
    }

    /// Change an assignment; admin only
    pub async fn update(
        pool: &PgPool,
        identity: &Identity,
        id: &Uuid,
        patch: AssignmentPatch,
    ) -> AppResult<LectureAssignment> {
        require_admin(identity)?;

        if patch.is_empty() {
            return Err(AppError::Validation("No fields to update".to_string()));
        }

        let current = AssignmentRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))?;

        Self::ensure_references(pool, patch.module_id, patch.program_id, patch.lecturer_id)
            .await?;

        let module_id = patch.module_id.unwrap_or(current.module_id);
        let program_id = patch.program_id.unwrap_or(current.program_id);
        let lecturer_id = patch.lecturer_id.unwrap_or(current.lecturer_id);
        if AssignmentRepository::find_triple(pool, &module_id, &program_id, &lecturer_id, Some(*id))
            .await?
            .is_some()
        {
            return Err(AppError::Conflict("This assignment already exists".to_string()));
        }

        let updated = AssignmentRepository::update(pool, id, &patch)
            .await?
            .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))?;

        info!(assignment_id = %id, "Assignment updated");

        Ok(updated)
    }

    /// Remove an assignment; admin only
    pub async fn delete(pool: &PgPool, identity: &Identity, id: &Uuid) -> AppResult<()> {
        require_admin(identity)?;

        if !AssignmentRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Assignment not found".to_string()));
        }

        info!(assignment_id = %id, "Assignment deleted");

        Ok(())
    }

    /// Check the supplied references exist and the target user lectures
    async fn ensure_references(
        pool: &PgPool,
        module_id: Option<Uuid>,
        program_id: Option<Uuid>,
        lecturer_id: Option<Uuid>,
    ) -> AppResult<()> {
        if let Some(id) = module_id {
            if !ModuleRepository::exists(pool, &id).await? {
                return Err(AppError::Referential("Module not found".to_string()));
            }
        }
        if let Some(id) = program_id {
            if !ProgramRepository::exists(pool, &id).await? {
                return Err(AppError::Referential("Program not found".to_string()));
            }
        }
        if let Some(id) = lecturer_id {
            let user = UserRepository::find_by_id(pool, &id)
                .await?
                .ok_or_else(|| AppError::Referential("Lecturer not found".to_string()))?;
            if user.role != Role::Lecturer {
                return Err(AppError::Validation(
                    "Selected user is not a lecturer".to_string(),
                ));
            }
        }
        Ok(())
    }
}
