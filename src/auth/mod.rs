//! Identity resolution
//!
//! Turns an opaque bearer credential into the caller's `{user_id, role}`.
//! The role carried by the credential is trusted for the whole request.

pub mod jwt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{error::AppResult, models::Role};

pub use jwt::JwtAuthProvider;

/// The resolved caller of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub user_id: Uuid,
    pub role: Role,
}

/// A freshly issued credential
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssuedCredential {
    pub token: String,
    /// Lifetime in seconds
    pub expires_in: i64,
}

/// Issues and verifies credentials
#[cfg_attr(test, mockall::automock)]
pub trait AuthProvider: Send + Sync {
    /// Issue a credential for a user
    fn issue(&self, user_id: Uuid, role: Role) -> AppResult<IssuedCredential>;

    /// Verify a credential; fails with `InvalidCredential`
    fn resolve(&self, credential: &str) -> AppResult<Identity>;
}
