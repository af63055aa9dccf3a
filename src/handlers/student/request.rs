//! Student request DTOs

use serde::Deserialize;
use uuid::Uuid;

/// Raise a challenge against a module
#[derive(Debug, Deserialize)]
pub struct CreateStudentChallengeRequest {
    pub module_id: Option<Uuid>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// `low`, `medium` (default) or `high`
    pub priority: Option<String>,
}

/// Move a challenge to another status
#[derive(Debug, Deserialize)]
pub struct UpdateStudentChallengeRequest {
    pub status: Option<String>,
}
