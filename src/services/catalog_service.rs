//! Catalog service: faculties, programs and modules

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    auth::Identity,
    authorization::{require_owner_or_admin, require_staff},
    constants::MIN_REGISTERED_STUDENTS,
    db::repositories::{FacultyRepository, ModuleRepository, ProgramRepository},
    error::{AppError, AppResult},
    handlers::catalog::request::{CreateModuleRequest, CreateProgramRequest},
    models::{
        DeleteOutcome, Faculty, Module, ModulePatch, ModuleView, Program, ProgramPatch,
        ProgramView,
    },
    utils::non_blank,
};

use super::Created;

/// Catalog service
pub struct CatalogService;

impl CatalogService {
    // =========================================================================
    // Faculties
    // =========================================================================

    pub async fn list_faculties(pool: &PgPool) -> AppResult<Vec<Faculty>> {
        FacultyRepository::list(pool).await
    }

    // =========================================================================
    // Programs
    // =========================================================================

    /// List programs, optionally within one faculty
    pub async fn list_programs(
        pool: &PgPool,
        faculty_id: Option<Uuid>,
    ) -> AppResult<Vec<ProgramView>> {
        ProgramRepository::list(pool, faculty_id).await
    }

    /// Create a program; staff only
    pub async fn create_program(
        pool: &PgPool,
        identity: &Identity,
        payload: CreateProgramRequest,
    ) -> AppResult<Program> {
        require_staff(identity)?;

        let code = non_blank(
            payload.program_code.as_deref().unwrap_or_default(),
            "program_code",
        )?;
        let name = non_blank(
            payload.program_name.as_deref().unwrap_or_default(),
            "program_name",
        )?;

        if let Some(faculty_id) = payload.faculty_id {
            ensure_faculty(pool, &faculty_id).await?;
        }

        if ProgramRepository::find_by_code(pool, code).await?.is_some() {
            return Err(AppError::Conflict(
                "A program with this code already exists".to_string(),
            ));
        }

        let program =
            ProgramRepository::create(pool, code, name, payload.faculty_id, &identity.user_id)
                .await?;

        info!(program_id = %program.id, code = %program.program_code, "Program created");

        Ok(program)
    }

    /// Update a program; creator or admin only
    pub async fn update_program(
        pool: &PgPool,
        identity: &Identity,
        id: &Uuid,
        mut patch: ProgramPatch,
    ) -> AppResult<Program> {
        if patch.is_empty() {
            return Err(AppError::Validation("No fields to update".to_string()));
        }

        let program = ProgramRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Program not found".to_string()))?;
        require_owner_or_admin(identity, program.created_by)?;

        if let Some(code) = patch.program_code.as_deref() {
            let code = non_blank(code, "program_code")?.to_string();
            if let Some(existing) = ProgramRepository::find_by_code(pool, &code).await? {
                if existing.id != *id {
                    return Err(AppError::Conflict(
                        "A program with this code already exists".to_string(),
                    ));
                }
            }
            patch.program_code = Some(code);
        }
        if let Some(name) = patch.program_name.as_deref() {
            patch.program_name = Some(non_blank(name, "program_name")?.to_string());
        }
        if let Some(faculty_id) = patch.faculty_id {
            ensure_faculty(pool, &faculty_id).await?;
        }

        let updated = ProgramRepository::update(pool, id, &patch)
            .await?
            .ok_or_else(|| AppError::NotFound("Program not found".to_string()))?;

        info!(program_id = %id, "Program updated");

        Ok(updated)
    }

    /// Delete a program that nothing references; creator or admin only
    pub async fn delete_program(pool: &PgPool, identity: &Identity, id: &Uuid) -> AppResult<()> {
        let program = ProgramRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Program not found".to_string()))?;
        require_owner_or_admin(identity, program.created_by)?;

        match ProgramRepository::delete_if_unreferenced(pool, id).await? {
            DeleteOutcome::Deleted => {
                info!(program_id = %id, "Program deleted");
                Ok(())
            }
            DeleteOutcome::NotFound => Err(AppError::NotFound("Program not found".to_string())),
            DeleteOutcome::Blocked(counts) => Err(AppError::Conflict(format!(
                "Cannot delete program: it is still referenced by {}",
                counts.blocking().unwrap_or_default()
            ))),
        }
    }

    // =========================================================================
    // Modules
    // =========================================================================

    /// List modules, optionally within one program
    pub async fn list_modules(
        pool: &PgPool,
        program_id: Option<Uuid>,
    ) -> AppResult<Vec<ModuleView>> {
        ModuleRepository::list_views(pool, program_id).await
    }

    pub async fn get_module(pool: &PgPool, id: &Uuid) -> AppResult<ModuleView> {
        ModuleRepository::find_view(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Module not found".to_string()))
    }

    /// Create a module; staff only
    pub async fn create_module(
        pool: &PgPool,
        identity: &Identity,
        payload: CreateModuleRequest,
    ) -> AppResult<Created<ModuleView>> {
        require_staff(identity)?;

        let name = non_blank(
            payload.module_name.as_deref().unwrap_or_default(),
            "module_name",
        )?;
        let program_id = payload.program_id.ok_or_else(|| AppError::required("program"))?;
        let students = payload
            .total_registered_students
            .ok_or_else(|| AppError::required("total_registered_students"))?;
        ensure_student_count(students)?;

        let program = ProgramRepository::find_by_id(pool, &program_id)
            .await?
            .ok_or_else(|| AppError::Referential("Selected program does not exist".to_string()))?;

        if let Some(faculty_id) = payload.faculty_id {
            ensure_faculty(pool, &faculty_id).await?;
        }
        let faculty_id = payload.faculty_id.or(program.faculty_id);

        if ModuleRepository::find_by_name_in_program(pool, name, &program_id)
            .await?
            .is_some()
        {
            return Err(AppError::Conflict(
                "A module with this name already exists in the selected program".to_string(),
            ));
        }

        let module = ModuleRepository::create(
            pool,
            name,
            &program_id,
            faculty_id,
            students,
            &identity.user_id,
        )
        .await?;

        info!(module_id = %module.id, program_id = %program_id, "Module created");

        let lookup = ModuleRepository::find_view(pool, &module.id).await;
        Ok(Created::from_lookup(module.id, "Module", lookup))
    }

    /// Update a module; creator or admin only
    pub async fn update_module(
        pool: &PgPool,
        identity: &Identity,
        id: &Uuid,
        mut patch: ModulePatch,
    ) -> AppResult<Module> {
        if patch.is_empty() {
            return Err(AppError::Validation("No fields to update".to_string()));
        }

        let module = ModuleRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Module not found".to_string()))?;
        require_owner_or_admin(identity, module.created_by)?;

        if let Some(name) = patch.module_name.as_deref() {
            patch.module_name = Some(non_blank(name, "module_name")?.to_string());
        }
        if let Some(students) = patch.total_registered_students {
            ensure_student_count(students)?;
        }
        if let Some(program_id) = patch.program_id {
            if !ProgramRepository::exists(pool, &program_id).await? {
                return Err(AppError::Referential(
                    "Selected program does not exist".to_string(),
                ));
            }
        }
        if let Some(faculty_id) = patch.faculty_id {
            ensure_faculty(pool, &faculty_id).await?;
        }

        let name = patch.module_name.as_deref().unwrap_or(&module.module_name);
        let program_id = patch.program_id.unwrap_or(module.program_id);
        if let Some(existing) =
            ModuleRepository::find_by_name_in_program(pool, name, &program_id).await?
        {
            if existing.id != *id {
                return Err(AppError::Conflict(
                    "A module with this name already exists in the selected program".to_string(),
                ));
            }
        }

        let updated = ModuleRepository::update(pool, id, &patch)
            .await?
            .ok_or_else(|| AppError::NotFound("Module not found".to_string()))?;

        info!(module_id = %id, "Module updated");

        Ok(updated)
    }

    /// Delete a module that nothing references; creator or admin only
    pub async fn delete_module(pool: &PgPool, identity: &Identity, id: &Uuid) -> AppResult<()> {
        let module = ModuleRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Module not found".to_string()))?;
        require_owner_or_admin(identity, module.created_by)?;

        match ModuleRepository::delete_if_unreferenced(pool, id).await? {
            DeleteOutcome::Deleted => {
                info!(module_id = %id, "Module deleted");
                Ok(())
            }
            DeleteOutcome::NotFound => Err(AppError::NotFound("Module not found".to_string())),
            DeleteOutcome::Blocked(counts) => Err(AppError::Conflict(format!(
                "Cannot delete module: it is still referenced by {}",
                counts.blocking().unwrap_or_default()
            ))),
        }
    }
}

fn ensure_student_count(students: i32) -> AppResult<()> {
    if students < MIN_REGISTERED_STUDENTS {
        return Err(AppError::Validation(format!(
            "total registered students must be at least {}",
            MIN_REGISTERED_STUDENTS
        )));
    }
    Ok(())
}

async fn ensure_faculty(pool: &PgPool, faculty_id: &Uuid) -> AppResult<()> {
    if !FacultyRepository::exists(pool, faculty_id).await? {
        return Err(AppError::Referential(
            "Selected faculty does not exist".to_string(),
        ));
    }
    Ok(())
}
