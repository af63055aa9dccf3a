//! Lecture assignment request DTOs

use serde::Deserialize;
use uuid::Uuid;

use crate::models::AssignmentPatch;

/// Assign a lecturer to a module within a program
#[derive(Debug, Deserialize)]
pub struct AssignLecturerRequest {
    pub module_id: Option<Uuid>,
    pub program_id: Option<Uuid>,
    pub lecturer_id: Option<Uuid>,
}

/// Change any part of an assignment
#[derive(Debug, Deserialize)]
pub struct UpdateAssignmentRequest {
    pub module_id: Option<Uuid>,
    pub program_id: Option<Uuid>,
    pub lecturer_id: Option<Uuid>,
}

impl From<UpdateAssignmentRequest> for AssignmentPatch {
    fn from(req: UpdateAssignmentRequest) -> Self {
        Self {
            module_id: req.module_id,
            program_id: req.program_id,
            lecturer_id: req.lecturer_id,
        }
    }
}
