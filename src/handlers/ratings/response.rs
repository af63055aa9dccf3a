//! Rating response DTOs

use serde::Serialize;

use crate::models::{
    ModuleRating, ModuleRatingView, RatingOutcome, ReportRating, ReportRatingView,
};

/// Module rating upsert response
#[derive(Debug, Serialize)]
pub struct ModuleRatingResponse {
    pub message: String,
    pub outcome: RatingOutcome,
    pub rating: ModuleRating,
}

/// All module ratings
#[derive(Debug, Serialize)]
pub struct ModuleRatingsListResponse {
    pub ratings: Vec<ModuleRatingView>,
}

/// Report rating response
#[derive(Debug, Serialize)]
pub struct ReportRatingResponse {
    pub message: String,
    pub rating: ReportRating,
}

/// Ratings of one report
#[derive(Debug, Serialize)]
pub struct ReportRatingsListResponse {
    pub ratings: Vec<ReportRatingView>,
}
