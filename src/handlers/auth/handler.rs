//! Authentication handler implementations

use axum::{extract::State, http::StatusCode, Json};
use validator::Validate;

use crate::{
    auth::Identity,
    error::AppResult,
    services::{AuthService, UserService},
    state::AppState,
};

use super::{
    request::{LoginRequest, SignupRequest},
    response::{AuthResponse, CurrentUserResponse, SignupResponse, UserResponse},
};

/// Register a new user
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<SignupResponse>)> {
    payload.validate()?;

    let user = AuthService::signup(state.db(), payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            message: "User registered successfully".to_string(),
            user: user.into(),
        }),
    ))
}

/// Exchange email and password for a bearer token
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    payload.validate()?;

    let (user, credential) =
        AuthService::login(state.db(), state.auth(), &payload.email, &payload.password).await?;

    Ok(Json(AuthResponse {
        token: credential.token,
        token_type: "Bearer".to_string(),
        expires_in: credential.expires_in,
        user: UserResponse::from(user),
    }))
}

/// Get current authenticated user
pub async fn get_current_user(
    State(state): State<AppState>,
    identity: Identity,
) -> AppResult<Json<CurrentUserResponse>> {
    let user = UserService::me(state.db(), &identity).await?;

    Ok(Json(CurrentUserResponse { user: user.into() }))
}
