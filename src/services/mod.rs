//! Business logic services

pub mod assignment_service;
pub mod auth_service;
pub mod catalog_service;
pub mod challenge_service;
pub mod rating_service;
pub mod report_service;
pub mod student_challenge_service;
pub mod user_service;

pub use assignment_service::AssignmentService;
pub use auth_service::AuthService;
pub use catalog_service::CatalogService;
pub use challenge_service::ChallengeService;
pub use rating_service::RatingService;
pub use report_service::ReportService;
pub use student_challenge_service::StudentChallengeService;
pub use user_service::UserService;

use serde::Serialize;
use uuid::Uuid;

use crate::error::AppResult;

/// Payload returned after a create: the joined detail row, or just the id
/// when the follow-up lookup failed after the write had committed
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Created<T> {
    Detailed(T),
    Minimal { id: Uuid, message: String },
}

impl<T> Created<T> {
    /// Wrap the result of a post-write detail lookup
    pub(crate) fn from_lookup(id: Uuid, what: &str, lookup: AppResult<Option<T>>) -> Self {
        match lookup {
            Ok(Some(detail)) => Created::Detailed(detail),
            Ok(None) => {
                tracing::warn!(%id, what, "Created record vanished before detail lookup");
                Self::minimal(id, what)
            }
            Err(e) => {
                tracing::warn!(%id, what, error = %e, "Detail lookup after create failed");
                Self::minimal(id, what)
            }
        }
    }

    fn minimal(id: Uuid, what: &str) -> Self {
        Created::Minimal {
            id,
            message: format!("{} created successfully", what),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    #[test]
    fn test_detail_is_returned_when_lookup_succeeds() {
        let id = Uuid::new_v4();
        let created = Created::from_lookup(id, "Challenge", Ok(Some(42)));
        assert!(matches!(created, Created::Detailed(42)));
    }

    #[test]
    fn test_degrades_to_id_and_message() {
        let id = Uuid::new_v4();
        let created: Created<i32> =
            Created::from_lookup(id, "Challenge", Err(AppError::Database("gone".into())));

        let json = serde_json::to_value(&created).unwrap();
        assert_eq!(json["id"], id.to_string());
        assert_eq!(json["message"], "Challenge created successfully");
    }
}
