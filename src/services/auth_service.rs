//! Authentication service

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use sqlx::PgPool;
use tracing::info;

use crate::{
    auth::{AuthProvider, IssuedCredential},
    db::repositories::{FacultyRepository, ProgramRepository, UserRepository},
    error::{AppError, AppResult},
    handlers::auth::request::SignupRequest,
    models::{Role, User},
};

/// Authentication service
pub struct AuthService;

impl AuthService {
    /// Register a new user
    pub async fn signup(pool: &PgPool, payload: SignupRequest) -> AppResult<User> {
        if payload.role == Role::Student && payload.program_id.is_none() {
            return Err(AppError::Validation(
                "Students must select a program".to_string(),
            ));
        }

        let mut faculty_id = payload.faculty_id;
        if let Some(program_id) = payload.program_id {
            let program = ProgramRepository::find_by_id(pool, &program_id)
                .await?
                .ok_or_else(|| AppError::Referential("Selected program does not exist".to_string()))?;
            faculty_id = faculty_id.or(program.faculty_id);
        }

        if let Some(id) = payload.faculty_id {
            if !FacultyRepository::exists(pool, &id).await? {
                return Err(AppError::Referential(
                    "Selected faculty does not exist".to_string(),
                ));
            }
        }

        let email = payload.email.trim().to_lowercase();
        if UserRepository::find_by_email(pool, &email).await?.is_some() {
            return Err(AppError::Conflict(
                "User already exists with this email".to_string(),
            ));
        }

        let password_hash = Self::hash_password(&payload.password)?;

        let user = UserRepository::create(
            pool,
            payload.name.trim(),
            &email,
            &password_hash,
            payload.role,
            faculty_id,
            payload.program_id,
        )
        .await?;

        info!(user_id = %user.id, role = %user.role, "User registered");

        Ok(user)
    }

    /// Verify credentials and issue a bearer token
    pub async fn login(
        pool: &PgPool,
        provider: &dyn AuthProvider,
        email: &str,
        password: &str,
    ) -> AppResult<(User, IssuedCredential)> {
        let user = UserRepository::find_by_email(pool, &email.trim().to_lowercase())
            .await?
            .ok_or(AppError::InvalidCredential)?;

        if !Self::verify_password(password, &user.password_hash)? {
            return Err(AppError::InvalidCredential);
        }

        let credential = provider.issue(user.id, user.role)?;

        info!(user_id = %user.id, "User logged in");

        Ok((user, credential))
    }

    /// Hash password using Argon2
    fn hash_password(password: &str) -> AppResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        let hash = argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(hash)
    }

    /// Verify password against hash
    fn verify_password(password: &str, hash: &str) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_round_trip() {
        let hash = AuthService::hash_password("correct horse").unwrap();
        assert!(hash.starts_with("$argon2"));
        assert!(AuthService::verify_password("correct horse", &hash).unwrap());
        assert!(!AuthService::verify_password("wrong horse", &hash).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = AuthService::hash_password("same password").unwrap();
        let b = AuthService::hash_password("same password").unwrap();
        assert_ne!(a, b);
    }
}
