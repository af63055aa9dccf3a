//! Rating request DTOs

use serde::Deserialize;
use uuid::Uuid;

/// Rate a module
#[derive(Debug, Deserialize)]
pub struct RateModuleRequest {
    pub module_id: Option<Uuid>,
    pub rating: Option<i32>,
    pub comments: Option<String>,
}

/// Rate a lecture report
#[derive(Debug, Deserialize)]
pub struct RateReportRequest {
    pub report_id: Option<Uuid>,
    pub rating: Option<i32>,
    pub comments: Option<String>,
}
