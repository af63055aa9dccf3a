//! Student response DTOs

use serde::Serialize;

use crate::models::{ModuleRatingView, StudentChallenge, StudentChallengeView, StudentModule};

/// The student's own challenges
#[derive(Debug, Serialize)]
pub struct StudentChallengesListResponse {
    pub challenges: Vec<StudentChallengeView>,
}

/// Status change response
#[derive(Debug, Serialize)]
pub struct StudentChallengeResponse {
    pub message: String,
    pub challenge: StudentChallenge,
}

/// Modules available to the calling student
#[derive(Debug, Serialize)]
pub struct StudentModulesResponse {
    pub has_program: bool,
    pub modules: Vec<StudentModule>,
}

/// The student's module ratings
#[derive(Debug, Serialize)]
pub struct StudentRatingsListResponse {
    pub ratings: Vec<ModuleRatingView>,
}
