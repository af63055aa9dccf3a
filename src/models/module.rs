//! Module (course unit) model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Module database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Module {
    pub id: Uuid,
    pub module_name: String,
    pub program_id: Uuid,
    pub faculty_id: Option<Uuid>,
    pub total_registered_students: i32,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// Module with catalog names and usage counts
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ModuleView {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub module: Module,
    pub program_name: String,
    pub program_code: String,
    pub faculty_name: Option<String>,
    pub created_by_name: Option<String>,
    pub assignment_count: i64,
    pub report_count: i64,
}

/// Module as listed to an enrolled student
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentModule {
    pub id: Uuid,
    pub module_name: String,
    pub total_registered_students: i32,
    pub program_name: String,
    pub program_code: String,
    pub faculty_name: Option<String>,
}

/// Partial update of a module
#[derive(Debug, Clone, Default)]
pub struct ModulePatch {
    pub module_name: Option<String>,
    pub program_id: Option<Uuid>,
    pub faculty_id: Option<Uuid>,
    pub total_registered_students: Option<i32>,
}

impl ModulePatch {
    pub fn is_empty(&self) -> bool {
        self.module_name.is_none()
            && self.program_id.is_none()
            && self.faculty_id.is_none()
            && self.total_registered_students.is_none()
    }
}

/// Rows that still reference a catalog entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, FromRow)]
pub struct DependencyCounts {
    pub modules: i64,
    pub assignments: i64,
    pub reports: i64,
    pub users: i64,
    pub challenges: i64,
    pub student_challenges: i64,
    pub module_ratings: i64,
}

impl DependencyCounts {
    pub fn total(&self) -> i64 {
        self.modules
            + self.assignments
            + self.reports
            + self.users
            + self.challenges
            + self.student_challenges
            + self.module_ratings
    }

    /// Human readable list of the non-zero dependents, `None` when nothing blocks
    pub fn blocking(&self) -> Option<String> {
        if self.total() == 0 {
            return None;
        }

        let parts: Vec<String> = [
            (self.modules, "module(s)"),
            (self.assignments, "assignment(s)"),
            (self.reports, "report(s)"),
            (self.users, "user(s)"),
            (self.challenges, "challenge(s)"),
            (self.student_challenges, "student challenge(s)"),
            (self.module_ratings, "module rating(s)"),
        ]
        .iter()
        .filter(|(count, _)| *count > 0)
        .map(|(count, label)| format!("{} {}", count, label))
        .collect();

        Some(parts.join(", "))
    }
}

/// Result of a dependency-guarded delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    Blocked(DependencyCounts),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_dependents_does_not_block() {
        assert_eq!(DependencyCounts::default().blocking(), None);
    }

    #[test]
    fn test_blocking_lists_only_nonzero_counts() {
        let counts = DependencyCounts {
            assignments: 2,
            module_ratings: 1,
            ..Default::default()
        };
        assert_eq!(
            counts.blocking().as_deref(),
            Some("2 assignment(s), 1 module rating(s)")
        );
    }

    #[test]
    fn test_empty_patch() {
        assert!(ModulePatch::default().is_empty());
        let patch = ModulePatch {
            total_registered_students: Some(10),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
