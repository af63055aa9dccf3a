//! Lecture report response DTOs

use serde::Serialize;

use crate::models::{LectureReport, ReportView};

/// Report list response
#[derive(Debug, Serialize)]
pub struct ReportsListResponse {
    pub reports: Vec<ReportView>,
}

/// Report mutation response
#[derive(Debug, Serialize)]
pub struct ReportResponse {
    pub message: String,
    pub report: LectureReport,
}
