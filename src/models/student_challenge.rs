//! Student challenge model

use std::{cmp::Ordering, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::ChallengeStatus;

/// Urgency a student attaches to a challenge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "challenge_priority", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Sort rank, most urgent first
    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(format!(
                "Invalid priority '{}'; expected low, medium or high",
                other
            )),
        }
    }
}

/// Student challenge database model
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct StudentChallenge {
    pub id: Uuid,
    pub student_id: Uuid,
    pub module_id: Uuid,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub status: ChallengeStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Student challenge with module and program names
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StudentChallengeView {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub challenge: StudentChallenge,
    pub module_name: String,
    pub program_name: String,
}

/// Order for a student's own list: priority rank, then newest first
pub fn by_priority_then_newest(a: &StudentChallengeView, b: &StudentChallengeView) -> Ordering {
    a.challenge
        .priority
        .rank()
        .cmp(&b.challenge.priority.rank())
        .then_with(|| b.challenge.created_at.cmp(&a.challenge.created_at))
}
