//! Catalog handler implementations

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    auth::Identity,
    error::AppResult,
    handlers::MessageResponse,
    models::ModuleView,
    services::{CatalogService, Created},
    state::AppState,
};

use super::{
    request::{
        CreateModuleRequest, CreateProgramRequest, UpdateModuleRequest, UpdateProgramRequest,
    },
    response::{
        FacultiesListResponse, ModuleResponse, ModulesListResponse, ProgramResponse,
        ProgramsListResponse,
    },
};

/// List faculties
pub async fn list_faculties(
    State(state): State<AppState>,
) -> AppResult<Json<FacultiesListResponse>> {
    let faculties = CatalogService::list_faculties(state.db()).await?;
    Ok(Json(FacultiesListResponse { faculties }))
}

/// List all programs
pub async fn list_programs(
    State(state): State<AppState>,
) -> AppResult<Json<ProgramsListResponse>> {
    let programs = CatalogService::list_programs(state.db(), None).await?;
    Ok(Json(ProgramsListResponse { programs }))
}

/// List programs of one faculty
pub async fn list_programs_by_faculty(
    State(state): State<AppState>,
    Path(faculty_id): Path<Uuid>,
) -> AppResult<Json<ProgramsListResponse>> {
    let programs = CatalogService::list_programs(state.db(), Some(faculty_id)).await?;
    Ok(Json(ProgramsListResponse { programs }))
}

/// Create a program
pub async fn create_program(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<CreateProgramRequest>,
) -> AppResult<(StatusCode, Json<ProgramResponse>)> {
    payload.validate()?;

    let program = CatalogService::create_program(state.db(), &identity, payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(ProgramResponse {
            message: "Program created successfully".to_string(),
            program,
        }),
    ))
}

/// Update a program
pub async fn update_program(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateProgramRequest>,
) -> AppResult<Json<ProgramResponse>> {
    payload.validate()?;

    let program =
        CatalogService::update_program(state.db(), &identity, &id, payload.into()).await?;

    Ok(Json(ProgramResponse {
        message: "Program updated successfully".to_string(),
        program,
    }))
}

/// Delete a program
pub async fn delete_program(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    CatalogService::delete_program(state.db(), &identity, &id).await?;
    Ok(Json(MessageResponse::new("Program deleted successfully")))
}

/// List all modules
pub async fn list_modules(
    State(state): State<AppState>,
    _identity: Identity,
) -> AppResult<Json<ModulesListResponse>> {
    let modules = CatalogService::list_modules(state.db(), None).await?;
    Ok(Json(ModulesListResponse { modules }))
}

/// List modules of one program
pub async fn list_modules_by_program(
    State(state): State<AppState>,
    _identity: Identity,
    Path(program_id): Path<Uuid>,
) -> AppResult<Json<ModulesListResponse>> {
    let modules = CatalogService::list_modules(state.db(), Some(program_id)).await?;
    Ok(Json(ModulesListResponse { modules }))
}

/// Get one module
pub async fn get_module(
    State(state): State<AppState>,
    _identity: Identity,
    Path(id): Path<Uuid>,
) -> AppResult<Json<ModuleView>> {
    let module = CatalogService::get_module(state.db(), &id).await?;
    Ok(Json(module))
}

/// Create a module
pub async fn create_module(
    State(state): State<AppState>,
    identity: Identity,
    Json(payload): Json<CreateModuleRequest>,
) -> AppResult<(StatusCode, Json<Created<ModuleView>>)> {
    payload.validate()?;

    let created = CatalogService::create_module(state.db(), &identity, payload).await?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a module
pub async fn update_module(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateModuleRequest>,
) -> AppResult<Json<ModuleResponse>> {
    payload.validate()?;

    let module =
        CatalogService::update_module(state.db(), &identity, &id, payload.into()).await?;

    Ok(Json(ModuleResponse {
        message: "Module updated successfully".to_string(),
        module,
    }))
}

/// Delete a module
pub async fn delete_module(
    State(state): State<AppState>,
    identity: Identity,
    Path(id): Path<Uuid>,
) -> AppResult<Json<MessageResponse>> {
    CatalogService::delete_module(state.db(), &identity, &id).await?;
    Ok(Json(MessageResponse::new("Module deleted successfully")))
}
