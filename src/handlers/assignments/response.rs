//! Lecture assignment response DTOs

use serde::Serialize;

use crate::models::{AssignmentView, LectureAssignment};

/// Assignment list response
#[derive(Debug, Serialize)]
pub struct AssignmentsListResponse {
    pub assignments: Vec<AssignmentView>,
}

/// Assignment mutation response
#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub message: String,
    pub assignment: LectureAssignment,
}
