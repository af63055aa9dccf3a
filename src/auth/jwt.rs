//! HS256 JWT credential provider

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    config::JwtConfig,
    error::{AppError, AppResult},
    models::Role,
};

use super::{AuthProvider, Identity, IssuedCredential};

/// JWT claims
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: Uuid,
    pub role: Role,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
}

/// Signs and verifies HS256 tokens with a shared secret
pub struct JwtAuthProvider {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expiry_hours: i64,
}

impl JwtAuthProvider {
    pub fn new(secret: &str, expiry_hours: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expiry_hours,
        }
    }

    pub fn from_config(config: &JwtConfig) -> Self {
        Self::new(&config.secret, config.expiry_hours)
    }
}

impl AuthProvider for JwtAuthProvider {
    fn issue(&self, user_id: Uuid, role: Role) -> AppResult<IssuedCredential> {
        let now = Utc::now();
        let expires_at = now + Duration::hours(self.expiry_hours);

        let claims = Claims {
            sub: user_id,
            role,
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("Token generation failed: {}", e)))?;

        Ok(IssuedCredential {
            token,
            expires_in: self.expiry_hours * 3600,
        })
    }

    fn resolve(&self, credential: &str) -> AppResult<Identity> {
        let data = decode::<Claims>(credential, &self.decoding_key, &Validation::default())?;

        Ok(Identity {
            user_id: data.claims.sub,
            role: data.claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_then_resolve() {
        let provider = JwtAuthProvider::new("test-secret", 1);
        let user_id = Uuid::new_v4();

        let issued = provider.issue(user_id, Role::PrincipalLecturer).unwrap();
        assert_eq!(issued.expires_in, 3600);

        let identity = provider.resolve(&issued.token).unwrap();
        assert_eq!(identity.user_id, user_id);
        assert_eq!(identity.role, Role::PrincipalLecturer);
    }

    #[test]
    fn test_foreign_signature_is_rejected() {
        let issued = JwtAuthProvider::new("secret-a", 1)
            .issue(Uuid::new_v4(), Role::Lecturer)
            .unwrap();

        let err = JwtAuthProvider::new("secret-b", 1)
            .resolve(&issued.token)
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidCredential));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let provider = JwtAuthProvider::new("test-secret", 1);
        let now = Utc::now();
        let claims = Claims {
            sub: Uuid::new_v4(),
            role: Role::Student,
            iat: (now - Duration::hours(3)).timestamp(),
            exp: (now - Duration::hours(2)).timestamp(),
        };
        let token = encode(&Header::default(), &claims, &provider.encoding_key).unwrap();

        assert!(matches!(
            provider.resolve(&token),
            Err(AppError::InvalidCredential)
        ));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let provider = JwtAuthProvider::new("test-secret", 1);
        assert!(matches!(
            provider.resolve("not-a-jwt"),
            Err(AppError::InvalidCredential)
        ));
    }
}
