//! User directory response DTOs

use serde::Serialize;

use crate::handlers::auth::UserResponse;

/// User listing
#[derive(Debug, Serialize)]
pub struct UsersListResponse {
    pub users: Vec<UserResponse>,
}
