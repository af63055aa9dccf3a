//! Student challenge workflow service

use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    auth::Identity,
    authorization::require_student,
    db::repositories::{ModuleRepository, StudentChallengeRepository},
    error::{AppError, AppResult},
    models::{
        by_priority_then_newest, ChallengeStatus, Priority, StudentChallenge,
        StudentChallengeView,
    },
};

use super::Created;

/// Student challenge service
pub struct StudentChallengeService;

impl StudentChallengeService {
    /// Raise a challenge against a module of the student's own program
    pub async fn create(
        pool: &PgPool,
        identity: &Identity,
        module_id: Option<Uuid>,
        title: Option<&str>,
        description: Option<&str>,
        priority: Option<Priority>,
    ) -> AppResult<Created<StudentChallengeView>> {
        require_student(identity)?;

        let module_id = module_id.ok_or_else(|| AppError::required("module"))?;
        let title = title.map(str::trim).unwrap_or_default();
        if title.is_empty() {
            return Err(AppError::required("title"));
        }
        let description = description.map(str::trim).unwrap_or_default();
        if description.is_empty() {
            return Err(AppError::required("description"));
        }

        if !ModuleRepository::student_can_access(pool, &identity.user_id, &module_id).await? {
            return Err(AppError::AccessDenied(
                "You can only raise challenges for modules in your program".to_string(),
            ));
        }

        let challenge = StudentChallengeRepository::create(
            pool,
            &identity.user_id,
            &module_id,
            title,
            description,
            priority.unwrap_or_default(),
        )
        .await?;

        info!(
            challenge_id = %challenge.id,
            student_id = %identity.user_id,
            priority = ?challenge.priority,
            "Student challenge created"
        );

        let lookup = StudentChallengeRepository::find_view(pool, &challenge.id).await;
        Ok(Created::from_lookup(challenge.id, "Challenge", lookup))
    }

    /// The student's own challenges, most urgent and newest first
    pub async fn list_own(
        pool: &PgPool,
        identity: &Identity,
    ) -> AppResult<Vec<StudentChallengeView>> {
        require_student(identity)?;

        let mut challenges =
            StudentChallengeRepository::list_for_student(pool, &identity.user_id).await?;
        challenges.sort_by(by_priority_then_newest);

        Ok(challenges)
    }

    /// Move one of the student's own challenges to any status
    pub async fn update_status(
        pool: &PgPool,
        identity: &Identity,
        id: &Uuid,
        status: ChallengeStatus,
    ) -> AppResult<StudentChallenge> {
        require_student(identity)?;

        let challenge = StudentChallengeRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Challenge not found".to_string()))?;

        if challenge.student_id != identity.user_id {
            return Err(AppError::AccessDenied(
                "You can only update your own challenges".to_string(),
            ));
        }

        let updated = StudentChallengeRepository::update_status(pool, id, status).await?;

        info!(challenge_id = %id, status = ?status, "Student challenge status updated");

        Ok(updated)
    }
}
