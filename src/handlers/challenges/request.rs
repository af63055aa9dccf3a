//! Lecturer challenge request DTOs

use serde::Deserialize;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{ChallengeStatus, ChallengeUpdate, NewChallenge},
    utils::{optional_text, parse_choice, required_text},
};

/// Raise a challenge
#[derive(Debug, Default, Deserialize)]
pub struct CreateChallengeRequest {
    pub module_id: Option<Uuid>,
    pub program_id: Option<Uuid>,
    pub faculty_id: Option<Uuid>,
    pub challenge_type: Option<String>,
    pub description: Option<String>,
    pub impact: Option<String>,
    pub proposed_solution: Option<String>,
    /// Initial status, `pending` when omitted
    pub status: Option<String>,
}

impl CreateChallengeRequest {
    /// Validate, naming the first missing field
    pub fn into_new_challenge(self) -> AppResult<NewChallenge> {
        let module_id = self.module_id.ok_or_else(|| AppError::required("module"))?;
        let program_id = self.program_id.ok_or_else(|| AppError::required("program"))?;
        let challenge_type = parse_choice(&required_text(self.challenge_type, "challenge_type")?)?;
        let description = required_text(self.description, "description")?;
        let impact = required_text(self.impact, "impact")?;
        let status = match optional_text(self.status) {
            Some(raw) => parse_choice(&raw)?,
            None => ChallengeStatus::Pending,
        };

        Ok(NewChallenge {
            module_id,
            program_id,
            faculty_id: self.faculty_id,
            challenge_type,
            description,
            impact,
            proposed_solution: optional_text(self.proposed_solution).unwrap_or_default(),
            status,
        })
    }
}

/// Admin feedback and/or status change
#[derive(Debug, Default, Deserialize)]
pub struct UpdateChallengeRequest {
    pub admin_feedback: Option<String>,
    pub status: Option<String>,
}

impl TryFrom<UpdateChallengeRequest> for ChallengeUpdate {
    type Error = AppError;

    fn try_from(req: UpdateChallengeRequest) -> AppResult<Self> {
        let status = optional_text(req.status)
            .map(|raw| parse_choice(&raw))
            .transpose()?;

        // A supplied but blank feedback clears the stored text.
        Ok(Self {
            admin_feedback: req.admin_feedback.map(|text| text.trim().to_string()),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ChallengeType;

    fn complete() -> CreateChallengeRequest {
        CreateChallengeRequest {
            module_id: Some(Uuid::new_v4()),
            program_id: Some(Uuid::new_v4()),
            faculty_id: None,
            challenge_type: Some("resources".to_string()),
            description: Some("Projector broken".to_string()),
            impact: Some("Slides unreadable".to_string()),
            proposed_solution: None,
            status: None,
        }
    }

    #[test]
    fn test_defaults() {
        let challenge = complete().into_new_challenge().unwrap();
        assert_eq!(challenge.challenge_type, ChallengeType::Resources);
        assert_eq!(challenge.status, ChallengeStatus::Pending);
        assert_eq!(challenge.proposed_solution, "");
    }

    #[test]
    fn test_first_missing_field_is_named() {
        let mut req = complete();
        req.challenge_type = None;
        req.impact = None;
        assert_eq!(
            req.into_new_challenge().unwrap_err().to_string(),
            "challenge type is required"
        );

        assert_eq!(
            CreateChallengeRequest::default()
                .into_new_challenge()
                .unwrap_err()
                .to_string(),
            "module is required"
        );
    }

    #[test]
    fn test_unknown_challenge_type_is_a_validation_error() {
        let mut req = complete();
        req.challenge_type = Some("weather".to_string());
        assert!(matches!(
            req.into_new_challenge(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_explicit_initial_status() {
        let mut req = complete();
        req.status = Some("in_progress".to_string());
        assert_eq!(
            req.into_new_challenge().unwrap().status,
            ChallengeStatus::InProgress
        );
    }

    #[test]
    fn test_update_conversion() {
        let update = ChallengeUpdate::try_from(UpdateChallengeRequest {
            admin_feedback: Some("  Replaced projector ".to_string()),
            status: Some("resolved".to_string()),
        })
        .unwrap();
        assert_eq!(update.admin_feedback.as_deref(), Some("Replaced projector"));
        assert_eq!(update.status, Some(ChallengeStatus::Resolved));

        let empty = ChallengeUpdate::try_from(UpdateChallengeRequest::default()).unwrap();
        assert!(empty.is_empty());

        assert!(ChallengeUpdate::try_from(UpdateChallengeRequest {
            admin_feedback: None,
            status: Some("closed".to_string()),
        })
        .is_err());
    }

    #[test]
    fn test_blank_feedback_still_counts_as_supplied() {
        let update = ChallengeUpdate::try_from(UpdateChallengeRequest {
            admin_feedback: Some("   ".to_string()),
            status: None,
        })
        .unwrap();
        assert_eq!(update.admin_feedback.as_deref(), Some(""));
        assert!(!update.is_empty());
    }
}
