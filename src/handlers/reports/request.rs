//! Lecture report request DTOs

use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::NewReport,
    utils::{optional_text, required_count, required_text},
};

/// Report submission; every field is checked in form order by
/// [`SubmitReportRequest::into_new_report`]
#[derive(Debug, Default, Deserialize)]
pub struct SubmitReportRequest {
    pub faculty_id: Option<Uuid>,
    pub module_id: Option<Uuid>,
    pub program_id: Option<Uuid>,
    pub week_of_reporting: Option<String>,
    /// `YYYY-MM-DD`
    pub date_of_lecture: Option<String>,
    pub actual_students_present: Option<i32>,
    pub total_registered_students: Option<i32>,
    pub venue: Option<String>,
    pub scheduled_time: Option<String>,
    pub topic_taught: Option<String>,
    pub learning_outcomes: Option<String>,
    pub recommendations: Option<String>,
    pub student_name: Option<String>,
    pub student_number: Option<String>,
}

impl SubmitReportRequest {
    /// Validate, naming the first missing field
    pub fn into_new_report(self) -> AppResult<NewReport> {
        let faculty_id = self.faculty_id.ok_or_else(|| AppError::required("faculty"))?;
        let module_id = self.module_id.ok_or_else(|| AppError::required("module"))?;
        let program_id = self.program_id.ok_or_else(|| AppError::required("program"))?;
        let week_of_reporting = required_text(self.week_of_reporting, "week_of_reporting")?;
        let date_of_lecture = required_text(self.date_of_lecture, "date_of_lecture")?;
        let date_of_lecture = NaiveDate::parse_from_str(&date_of_lecture, "%Y-%m-%d")
            .map_err(|_| {
                AppError::Validation("date of lecture must be a date (YYYY-MM-DD)".to_string())
            })?;
        let actual_students_present =
            required_count(self.actual_students_present, "actual_students_present")?;
        let total_registered_students =
            required_count(self.total_registered_students, "total_registered_students")?;

        Ok(NewReport {
            faculty_id,
            module_id,
            program_id,
            week_of_reporting,
            date_of_lecture,
            actual_students_present,
            total_registered_students,
            venue: required_text(self.venue, "venue")?,
            scheduled_time: required_text(self.scheduled_time, "scheduled_time")?,
            topic_taught: required_text(self.topic_taught, "topic_taught")?,
            learning_outcomes: required_text(self.learning_outcomes, "learning_outcomes")?,
            recommendations: required_text(self.recommendations, "recommendations")?,
            student_name: optional_text(self.student_name),
            student_number: optional_text(self.student_number),
        })
    }
}

/// Principal feedback on a report
#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    #[serde(alias = "principal_feedback")]
    pub feedback: Option<String>,
}

/// Student signature on a report's attendance
#[derive(Debug, Deserialize)]
pub struct SignAttendanceRequest {
    pub student_name: Option<String>,
    pub student_number: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> SubmitReportRequest {
        SubmitReportRequest {
            faculty_id: Some(Uuid::new_v4()),
            module_id: Some(Uuid::new_v4()),
            program_id: Some(Uuid::new_v4()),
            week_of_reporting: Some("Week 6".to_string()),
            date_of_lecture: Some("2025-03-14".to_string()),
            actual_students_present: Some(30),
            total_registered_students: Some(40),
            venue: Some("Hall 3".to_string()),
            scheduled_time: Some("10:00".to_string()),
            topic_taught: Some("Normalisation".to_string()),
            learning_outcomes: Some("Explain 3NF".to_string()),
            recommendations: Some("More exercises".to_string()),
            student_name: None,
            student_number: None,
        }
    }

    fn message(req: SubmitReportRequest) -> String {
        req.into_new_report().unwrap_err().to_string()
    }

    #[test]
    fn test_complete_report_is_accepted() {
        let report = complete().into_new_report().unwrap();
        assert_eq!(report.actual_students_present, 30);
        assert_eq!(report.total_registered_students, 40);
        assert_eq!(
            report.date_of_lecture,
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
        );
        assert_eq!(report.student_name, None);
    }

    #[test]
    fn test_first_missing_field_is_named() {
        let mut req = complete();
        req.venue = None;
        req.recommendations = None;
        assert_eq!(message(req), "venue is required");

        let mut req = complete();
        req.week_of_reporting = None;
        req.venue = None;
        assert_eq!(message(req), "week of reporting is required");

        assert_eq!(message(SubmitReportRequest::default()), "faculty is required");
    }

    #[test]
    fn test_blank_strings_count_as_missing() {
        let mut req = complete();
        req.topic_taught = Some("   ".to_string());
        assert_eq!(message(req), "topic taught is required");
    }

    #[test]
    fn test_negative_counts_rejected() {
        let mut req = complete();
        req.actual_students_present = Some(-1);
        assert_eq!(message(req), "actual students present must not be negative");
    }

    #[test]
    fn test_zero_attendance_is_allowed() {
        let mut req = complete();
        req.actual_students_present = Some(0);
        assert!(req.into_new_report().is_ok());
    }

    #[test]
    fn test_malformed_date_rejected() {
        let mut req = complete();
        req.date_of_lecture = Some("14/03/2025".to_string());
        assert!(matches!(req.into_new_report(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_optional_signature_fields_are_trimmed() {
        let mut req = complete();
        req.student_name = Some("  Palesa ".to_string());
        req.student_number = Some("".to_string());
        let report = req.into_new_report().unwrap();
        assert_eq!(report.student_name.as_deref(), Some("Palesa"));
        assert_eq!(report.student_number, None);
    }

    #[test]
    fn test_feedback_accepts_column_name() {
        let req: FeedbackRequest =
            serde_json::from_str(r#"{"principal_feedback":"Good pace"}"#).unwrap();
        assert_eq!(req.feedback.as_deref(), Some("Good pace"));

        let req: FeedbackRequest = serde_json::from_str(r#"{"feedback":"Good pace"}"#).unwrap();
        assert_eq!(req.feedback.as_deref(), Some("Good pace"));
    }
}
