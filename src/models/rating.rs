//! Module ratings and legacy report ratings

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::constants::{MAX_RATING, MIN_RATING};

/// A student's rating of one module; at most one per (student, module)
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ModuleRating {
    pub id: Uuid,
    pub student_id: Uuid,
    pub module_id: Uuid,
    pub rating: i32,
    pub comments: String,
    pub created_at: DateTime<Utc>,
}

/// Module rating with module, program and student names
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ModuleRatingView {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub rating: ModuleRating,
    pub module_name: String,
    pub program_name: String,
    pub student_name: String,
}

/// Whether an upsert created the row or overwrote an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingOutcome {
    Submitted,
    Updated,
}

/// Legacy append-only rating of a lecture report
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct ReportRating {
    pub id: Uuid,
    pub report_id: Uuid,
    pub rated_by: Uuid,
    pub rating: i32,
    pub comments: String,
    pub created_at: DateTime<Utc>,
}

/// Report rating with the rater's name
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ReportRatingView {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub rating: ReportRating,
    pub rater_name: String,
}

pub fn rating_in_range(rating: i32) -> bool {
    (MIN_RATING..=MAX_RATING).contains(&rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_bounds() {
        assert!(!rating_in_range(0));
        assert!(rating_in_range(1));
        assert!(rating_in_range(5));
        assert!(!rating_in_range(6));
    }
}
