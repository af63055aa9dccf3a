//! Authentication extractor
//!
//! Handlers that need a caller take an [`Identity`] argument; the bearer
//! token is resolved through the state's auth provider.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::debug;

use crate::{auth::Identity, constants::BEARER_PREFIX, error::AppError, state::AppState};

impl FromRequestParts<AppState> for Identity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| {
            debug!(path = %parts.uri.path(), "Auth failed: missing or malformed Authorization header");
            AppError::Unauthenticated
        })?;

        let identity = state.auth().resolve(token).map_err(|e| {
            debug!(path = %parts.uri.path(), error = %e, "Auth failed: credential rejected");
            e
        })?;

        debug!(
            path = %parts.uri.path(),
            user_id = %identity.user_id,
            role = %identity.role,
            "User authenticated"
        );

        Ok(identity)
    }
}

/// The token of an `Authorization: Bearer <token>` header
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use axum::http::Request;

    use super::*;

    fn parts(header: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/api/v1/reports");
        if let Some(value) = header {
            builder = builder.header(AUTHORIZATION, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn test_bearer_token_extraction() {
        assert_eq!(bearer_token(&parts(Some("Bearer abc.def"))), Some("abc.def"));
        assert_eq!(bearer_token(&parts(None)), None);
        assert_eq!(bearer_token(&parts(Some("Basic abc"))), None);
        assert_eq!(bearer_token(&parts(Some("Bearer   "))), None);
    }
}
