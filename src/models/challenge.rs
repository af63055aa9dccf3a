//! Lecturer challenge model and the statuses shared by both challenge workflows

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Resolution state of a challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "challenge_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ChallengeStatus {
    Pending,
    InProgress,
    Resolved,
}

/// Category of a lecturer challenge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "challenge_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ChallengeType {
    Attendance,
    Resources,
    Technical,
    StudentEngagement,
    ContentCoverage,
    TimeManagement,
    Other,
}

impl FromStr for ChallengeStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            other => Err(format!(
                "Invalid status '{}'; expected pending, in_progress or resolved",
                other
            )),
        }
    }
}

impl FromStr for ChallengeType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attendance" => Ok(Self::Attendance),
            "resources" => Ok(Self::Resources),
            "technical" => Ok(Self::Technical),
            "student_engagement" => Ok(Self::StudentEngagement),
            "content_coverage" => Ok(Self::ContentCoverage),
            "time_management" => Ok(Self::TimeManagement),
            "other" => Ok(Self::Other),
            other => Err(format!("Invalid challenge type '{}'", other)),
        }
    }
}

/// `resolved_date` to store when a challenge moves to `status`
pub fn resolved_date_for(status: ChallengeStatus, today: NaiveDate) -> Option<NaiveDate> {
    match status {
        ChallengeStatus::Resolved => Some(today),
        ChallengeStatus::Pending | ChallengeStatus::InProgress => None,
    }
}

/// Lecturer challenge database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Challenge {
    pub id: Uuid,
    pub lecturer_id: Uuid,
    pub module_id: Uuid,
    pub program_id: Uuid,
    pub faculty_id: Option<Uuid>,
    pub challenge_type: ChallengeType,
    pub description: String,
    pub impact: String,
    pub proposed_solution: String,
    pub status: ChallengeStatus,
    pub admin_feedback: Option<String>,
    pub submitted_date: NaiveDate,
    pub resolved_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

/// Challenge joined with lecturer and catalog names
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ChallengeView {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub challenge: Challenge,
    pub lecturer_name: String,
    pub module_name: String,
    pub program_name: String,
    pub faculty_name: Option<String>,
}

/// Validated input of a new lecturer challenge
#[derive(Debug, Clone, PartialEq)]
pub struct NewChallenge {
    pub module_id: Uuid,
    pub program_id: Uuid,
    pub faculty_id: Option<Uuid>,
    pub challenge_type: ChallengeType,
    pub description: String,
    pub impact: String,
    pub proposed_solution: String,
    pub status: ChallengeStatus,
}

/// Admin update of a challenge
#[derive(Debug, Clone, Default)]
pub struct ChallengeUpdate {
    pub admin_feedback: Option<String>,
    pub status: Option<ChallengeStatus>,
}

impl ChallengeUpdate {
    pub fn is_empty(&self) -> bool {
        self.admin_feedback.is_none() && self.status.is_none()
    }
}

/// Per-status challenge counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ChallengeStats {
    pub pending: i64,
    pub in_progress: i64,
    pub resolved: i64,
}

impl ChallengeStats {
    /// Fold grouped `(status, count)` rows; absent statuses stay at zero
    pub fn from_counts<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (ChallengeStatus, i64)>,
    {
        rows.into_iter()
            .fold(Self::default(), |mut stats, (status, count)| {
                match status {
                    ChallengeStatus::Pending => stats.pending += count,
                    ChallengeStatus::InProgress => stats.in_progress += count,
                    ChallengeStatus::Resolved => stats.resolved += count,
                }
                stats
            })
    }
}
