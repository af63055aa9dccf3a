//! Program model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Program database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Program {
    pub id: Uuid,
    pub program_code: String,
    pub program_name: String,
    pub faculty_id: Option<Uuid>,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Program joined with its faculty name
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProgramView {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub program: Program,
    pub faculty_name: Option<String>,
}

/// Partial update of a program
#[derive(Debug, Clone, Default)]
pub struct ProgramPatch {
    pub program_code: Option<String>,
    pub program_name: Option<String>,
    pub faculty_id: Option<Uuid>,
}

impl ProgramPatch {
    pub fn is_empty(&self) -> bool {
        self.program_code.is_none() && self.program_name.is_none() && self.faculty_id.is_none()
    }
}
