//! Lecture assignment model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Binding of a lecturer to a module within a program
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct LectureAssignment {
    pub id: Uuid,
    pub module_id: Uuid,
    pub program_id: Uuid,
    pub lecturer_id: Uuid,
    pub assigned_by: Uuid,
    pub assigned_at: DateTime<Utc>,
}

/// Assignment with the names of everything it points at
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssignmentView {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub assignment: LectureAssignment,
    pub module_name: String,
    pub program_name: String,
    pub program_code: String,
    pub lecturer_name: String,
    pub assigned_by_name: String,
}

/// Partial update of an assignment
#[derive(Debug, Clone, Default)]
pub struct AssignmentPatch {
    pub module_id: Option<Uuid>,
    pub program_id: Option<Uuid>,
    pub lecturer_id: Option<Uuid>,
}

impl AssignmentPatch {
    pub fn is_empty(&self) -> bool {
        self.module_id.is_none() && self.program_id.is_none() && self.lecturer_id.is_none()
    }
}
