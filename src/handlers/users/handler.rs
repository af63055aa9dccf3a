//! User directory handler implementations

use axum::{extract::State, Json};

use crate::{auth::Identity, error::AppResult, services::UserService, state::AppState};

use super::response::UsersListResponse;

/// All lecturers
pub async fn list_lecturers(
    State(state): State<AppState>,
    _identity: Identity,
) -> AppResult<Json<UsersListResponse>> {
    let users = UserService::list_lecturers(state.db()).await?;

    Ok(Json(UsersListResponse {
        users: users.into_iter().map(Into::into).collect(),
    }))
}

/// All students; staff only
pub async fn list_students(
    State(state): State<AppState>,
    identity: Identity,
) -> AppResult<Json<UsersListResponse>> {
    let users = UserService::list_students(state.db(), &identity).await?;

    Ok(Json(UsersListResponse {
        users: users.into_iter().map(Into::into).collect(),
    }))
}
