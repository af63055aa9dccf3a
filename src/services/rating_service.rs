//! Rating ledger service

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    auth::Identity,
    authorization::{require_staff, require_student},
    constants::{MAX_RATING, MIN_RATING},
    db::repositories::{ModuleRepository, RatingRepository, ReportRepository},
    error::{AppError, AppResult},
    models::{
        rating_in_range, ModuleRating, ModuleRatingView, RatingOutcome, ReportRating,
        ReportRatingView,
    },
};

/// Rating ledger service
pub struct RatingService;

impl RatingService {
    /// Rate a module of the student's program; re-rating overwrites
    pub async fn rate_module(
        pool: &PgPool,
        identity: &Identity,
        module_id: &Uuid,
        rating: i32,
        comments: Option<&str>,
    ) -> AppResult<(ModuleRating, RatingOutcome)> {
        require_student(identity)?;
        ensure_in_range(rating)?;

        if !ModuleRepository::student_can_access(pool, &identity.user_id, module_id).await? {
            return Err(AppError::AccessDenied(
                "You can only rate modules in your program".to_string(),
            ));
        }

        let (saved, outcome) = RatingRepository::upsert_module_rating(
            pool,
            &identity.user_id,
            module_id,
            rating,
            comments.map(str::trim).unwrap_or_default(),
        )
        .await?;

        info!(
            module_id = %module_id,
            student_id = %identity.user_id,
            outcome = ?outcome,
            "Module rated"
        );

        Ok((saved, outcome))
    }

    /// The calling student's module ratings
    pub async fn list_for_student(
        pool: &PgPool,
        identity: &Identity,
    ) -> AppResult<Vec<ModuleRatingView>> {
        require_student(identity)?;
        RatingRepository::list_module_ratings(pool, Some(identity.user_id)).await
    }

    /// Every module rating; staff only
    pub async fn list_all(pool: &PgPool, identity: &Identity) -> AppResult<Vec<ModuleRatingView>> {
        require_staff(identity)?;
        RatingRepository::list_module_ratings(pool, None).await
    }

    /// Append a rating to a lecture report
    pub async fn rate_report(
        pool: &PgPool,
        identity: &Identity,
        report_id: &Uuid,
        rating: i32,
        comments: Option<&str>,
    ) -> AppResult<ReportRating> {
        ensure_in_range(rating)?;

        if !ReportRepository::exists(pool, report_id).await? {
            return Err(AppError::Referential("Report not found".to_string()));
        }

        let saved = RatingRepository::create_report_rating(
            pool,
            report_id,
            &identity.user_id,
            rating,
            comments.map(str::trim).unwrap_or_default(),
        )
        .await?;

        info!(report_id = %report_id, rated_by = %identity.user_id, "Report rated");

        Ok(saved)
    }

    /// Ratings attached to one report
    pub async fn list_for_report(
        pool: &PgPool,
        report_id: &Uuid,
    ) -> AppResult<Vec<ReportRatingView>> {
        RatingRepository::list_for_report(pool, report_id).await
    }
}

fn ensure_in_range(rating: i32) -> AppResult<()> {
    if !rating_in_range(rating) {
        return Err(AppError::Validation(format!(
            "Rating must be between {} and {}",
            MIN_RATING, MAX_RATING
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_rating_message() {
        let err = ensure_in_range(6).unwrap_err();
        assert_eq!(err.to_string(), "Rating must be between 1 and 5");
        assert!(ensure_in_range(3).is_ok());
    }
}
