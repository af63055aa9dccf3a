//! Authentication response DTOs

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{Role, User};

/// Token response
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserResponse,
}

/// Public user record
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub faculty_id: Option<Uuid>,
    pub program_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
            faculty_id: user.faculty_id,
            program_id: user.program_id,
            created_at: user.created_at,
        }
    }
}

/// Signup success response
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub user: UserResponse,
}

/// Current user response (for /me endpoint)
#[derive(Debug, Serialize)]
pub struct CurrentUserResponse {
    pub user: UserResponse,
}
