//! Catalog request DTOs

use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use crate::{
    constants::{MAX_CATALOG_NAME_LENGTH, MAX_PROGRAM_CODE_LENGTH},
    models::{ModulePatch, ProgramPatch},
};

/// Create program request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProgramRequest {
    #[validate(length(max = MAX_PROGRAM_CODE_LENGTH))]
    pub program_code: Option<String>,

    #[validate(length(max = MAX_CATALOG_NAME_LENGTH))]
    pub program_name: Option<String>,

    pub faculty_id: Option<Uuid>,
}

/// Update program request; every field optional
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProgramRequest {
    #[validate(length(max = MAX_PROGRAM_CODE_LENGTH))]
    pub program_code: Option<String>,

    #[validate(length(max = MAX_CATALOG_NAME_LENGTH))]
    pub program_name: Option<String>,

    pub faculty_id: Option<Uuid>,
}

impl From<UpdateProgramRequest> for ProgramPatch {
    fn from(req: UpdateProgramRequest) -> Self {
        Self {
            program_code: req.program_code,
            program_name: req.program_name,
            faculty_id: req.faculty_id,
        }
    }
}

/// Create module request
#[derive(Debug, Deserialize, Validate)]
pub struct CreateModuleRequest {
    #[validate(length(max = MAX_CATALOG_NAME_LENGTH))]
    pub module_name: Option<String>,

    pub program_id: Option<Uuid>,

    /// Defaults to the program's faculty
    pub faculty_id: Option<Uuid>,

    pub total_registered_students: Option<i32>,
}

/// Update module request; every field optional
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateModuleRequest {
    #[validate(length(max = MAX_CATALOG_NAME_LENGTH))]
    pub module_name: Option<String>,

    pub program_id: Option<Uuid>,

    pub faculty_id: Option<Uuid>,

    pub total_registered_students: Option<i32>,
}

impl From<UpdateModuleRequest> for ModulePatch {
    fn from(req: UpdateModuleRequest) -> Self {
        Self {
            module_name: req.module_name,
            program_id: req.program_id,
            faculty_id: req.faculty_id,
            total_registered_students: req.total_registered_students,
        }
    }
}
