//! Lecturer challenge response DTOs

use serde::Serialize;

use crate::models::{Challenge, ChallengeView};

/// Challenge list response
#[derive(Debug, Serialize)]
pub struct ChallengesListResponse {
    pub challenges: Vec<ChallengeView>,
}

/// Challenge update response
#[derive(Debug, Serialize)]
pub struct ChallengeResponse {
    pub message: String,
    pub challenge: Challenge,
}
