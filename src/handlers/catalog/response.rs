//! Catalog response DTOs

use serde::Serialize;

use crate::models::{Faculty, Module, ModuleView, Program, ProgramView};

/// Faculty list response
#[derive(Debug, Serialize)]
pub struct FacultiesListResponse {
    pub faculties: Vec<Faculty>,
}

/// Program list response
#[derive(Debug, Serialize)]
pub struct ProgramsListResponse {
    pub programs: Vec<ProgramView>,
}

/// Program mutation response
#[derive(Debug, Serialize)]
pub struct ProgramResponse {
    pub message: String,
    pub program: Program,
}

/// Module list response
#[derive(Debug, Serialize)]
pub struct ModulesListResponse {
    pub modules: Vec<ModuleView>,
}

/// Module update response
#[derive(Debug, Serialize)]
pub struct ModuleResponse {
    pub message: String,
    pub module: Module,
}
