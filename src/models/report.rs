//! Lecture report model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Review state of a lecture report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "report_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Submitted,
    Reviewed,
}

/// Lecture report database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct LectureReport {
    pub id: Uuid,
    pub faculty_id: Uuid,
    pub module_id: Uuid,
    pub program_id: Uuid,
    pub week_of_reporting: String,
    pub date_of_lecture: NaiveDate,
    pub lecturer_id: Uuid,
    pub actual_students_present: i32,
    pub total_registered_students: i32,
    pub venue: String,
    pub scheduled_time: String,
    pub topic_taught: String,
    pub learning_outcomes: String,
    pub recommendations: String,
    pub student_name: Option<String>,
    pub student_number: Option<String>,
    pub principal_feedback: Option<String>,
    pub status: ReportStatus,
    pub created_at: DateTime<Utc>,
}

/// Report joined with faculty, module, program and lecturer names
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReportView {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub report: LectureReport,
    pub faculty_name: String,
    pub module_name: String,
    pub program_name: String,
    pub lecturer_name: String,
}

/// Validated input of a new report; the lecturer is the caller
#[derive(Debug, Clone, PartialEq)]
pub struct NewReport {
    pub faculty_id: Uuid,
    pub module_id: Uuid,
    pub program_id: Uuid,
    pub week_of_reporting: String,
    pub date_of_lecture: NaiveDate,
    pub actual_students_present: i32,
    pub total_registered_students: i32,
    pub venue: String,
    pub scheduled_time: String,
    pub topic_taught: String,
    pub learning_outcomes: String,
    pub recommendations: String,
    pub student_name: Option<String>,
    pub student_number: Option<String>,
}
