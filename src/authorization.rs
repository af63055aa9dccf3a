//! Authorization rules
//!
//! One function per permission rule. Handlers and services call these
//! instead of comparing roles inline.

use uuid::Uuid;

use crate::{
    auth::Identity,
    error::{AppError, AppResult},
    models::Role,
};

/// Visibility of reports and lecturer challenges for a caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Only rows owned by this user
    Own(Uuid),
    All,
}

impl Scope {
    /// Owner filter to bind into a query; `None` means unrestricted
    pub fn owner(self) -> Option<Uuid> {
        match self {
            Scope::Own(user_id) => Some(user_id),
            Scope::All => None,
        }
    }
}

// =============================================================================
// Authorization check functions
// =============================================================================

/// Program leaders and principal lecturers only.
pub fn require_admin(identity: &Identity) -> AppResult<()> {
    if !identity.role.is_admin() {
        return Err(AppError::Forbidden(
            "Only program leaders and principal lecturers can perform this action".to_string(),
        ));
    }
    Ok(())
}

/// Any role except Student.
pub fn require_staff(identity: &Identity) -> AppResult<()> {
    if identity.role.is_student() {
        return Err(AppError::Forbidden(
            "Students cannot perform this action".to_string(),
        ));
    }
    Ok(())
}

/// Students only.
pub fn require_student(identity: &Identity) -> AppResult<()> {
    if !identity.role.is_student() {
        return Err(AppError::Forbidden(
            "Only students can access this resource".to_string(),
        ));
    }
    Ok(())
}

/// The owner of a record, or an admin.
pub fn require_owner_or_admin(identity: &Identity, owner_id: Option<Uuid>) -> AppResult<()> {
    if owner_id == Some(identity.user_id) || identity.role.is_admin() {
        return Ok(());
    }
    Err(AppError::Forbidden(
        "Only the creator or an administrator can modify this record".to_string(),
    ))
}

/// Lecturers see their own rows; every other role sees everything.
pub fn scope_for(identity: &Identity) -> Scope {
    match identity.role {
        Role::Lecturer => Scope::Own(identity.user_id),
        _ => Scope::All,
    }
}
