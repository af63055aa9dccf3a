//! Lecturer challenge workflow service

use std::future::Future;

use chrono::Utc;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::{
    auth::Identity,
    authorization::{require_admin, require_owner_or_admin, scope_for, Scope},
    db::repositories::{
        ChallengeRepository, FacultyRepository, ModuleRepository, ProgramRepository,
        UserRepository,
    },
    error::{AppError, AppResult},
    models::{
        resolved_date_for, Challenge, ChallengeStats, ChallengeUpdate, ChallengeView, NewChallenge,
    },
};

use super::Created;

/// Lecturer challenge service
pub struct ChallengeService;

impl ChallengeService {
    /// Raise a challenge as the calling lecturer
    pub async fn create(
        pool: &PgPool,
        identity: &Identity,
        challenge: NewChallenge,
    ) -> AppResult<Created<ChallengeView>> {
        futures::try_join!(
            must_exist(ModuleRepository::exists(pool, &challenge.module_id), "Module"),
            must_exist(ProgramRepository::exists(pool, &challenge.program_id), "Program"),
            must_exist(
                async {
                    match challenge.faculty_id {
                        Some(id) => FacultyRepository::exists(pool, &id).await,
                        None => Ok(true),
                    }
                },
                "Faculty"
            ),
            must_exist(UserRepository::exists(pool, &identity.user_id), "Lecturer"),
        )?;

        let today = Utc::now().date_naive();
        let resolved_date = resolved_date_for(challenge.status, today);

        let created =
            ChallengeRepository::create(pool, &identity.user_id, &challenge, today, resolved_date)
                .await?;

        info!(
            challenge_id = %created.id,
            lecturer_id = %identity.user_id,
            challenge_type = ?created.challenge_type,
            "Challenge created"
        );

        let lookup = ChallengeRepository::find_view(pool, &created.id).await;
        Ok(Created::from_lookup(created.id, "Challenge", lookup))
    }

    /// One challenge; lecturers may only read their own
    pub async fn get(pool: &PgPool, identity: &Identity, id: &Uuid) -> AppResult<ChallengeView> {
        let view = ChallengeRepository::find_view(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Challenge not found".to_string()))?;

        if let Scope::Own(user_id) = scope_for(identity) {
            if view.challenge.lecturer_id != user_id {
                return Err(AppError::Forbidden(
                    "You can only view your own challenges".to_string(),
                ));
            }
        }

        Ok(view)
    }

    /// Challenges the caller may see
    pub async fn list_visible(pool: &PgPool, identity: &Identity) -> AppResult<Vec<ChallengeView>> {
        ChallengeRepository::list_views(pool, scope_for(identity).owner()).await
    }

    /// Admin feedback and/or status change
    pub async fn update(
        pool: &PgPool,
        identity: &Identity,
        id: &Uuid,
        update: ChallengeUpdate,
    ) -> AppResult<Challenge> {
        require_admin(identity)?;

        if update.is_empty() {
            return Err(AppError::Validation(
                "Provide admin_feedback or status".to_string(),
            ));
        }

        let resolved_date = update
            .status
            .and_then(|status| resolved_date_for(status, Utc::now().date_naive()));

        let challenge = ChallengeRepository::update(
            pool,
            id,
            update.admin_feedback.as_deref(),
            update.status,
            resolved_date,
        )
        .await?
        .ok_or_else(|| AppError::NotFound("Challenge not found".to_string()))?;

        info!(
            challenge_id = %id,
            status = ?challenge.status,
            updated_by = %identity.user_id,
            "Challenge updated"
        );

        Ok(challenge)
    }

    /// Delete a challenge; its lecturer or an admin
    pub async fn delete(pool: &PgPool, identity: &Identity, id: &Uuid) -> AppResult<()> {
        let challenge = ChallengeRepository::find_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Challenge not found".to_string()))?;
        require_owner_or_admin(identity, Some(challenge.lecturer_id))?;

        if !ChallengeRepository::delete(pool, id).await? {
            return Err(AppError::NotFound("Challenge not found".to_string()));
        }

        info!(challenge_id = %id, deleted_by = %identity.user_id, "Challenge deleted");

        Ok(())
    }

    /// Per-status counts within the caller's scope
    pub async fn stats(pool: &PgPool, identity: &Identity) -> AppResult<ChallengeStats> {
        let rows = ChallengeRepository::count_by_status(pool, scope_for(identity).owner()).await?;
        Ok(ChallengeStats::from_counts(rows))
    }
}

/// Turn an existence check into a referential failure
async fn must_exist<F>(lookup: F, what: &str) -> AppResult<()>
where
    F: Future<Output = AppResult<bool>>,
{
    if lookup.await? {
        Ok(())
    } else {
        Err(AppError::Referential(format!("{} not found", what)))
    }
}
