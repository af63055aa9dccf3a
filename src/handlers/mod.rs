//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod assignments;
pub mod auth;
pub mod catalog;
pub mod challenges;
pub mod health;
pub mod ratings;
pub mod reports;
pub mod student;
pub mod users;

use axum::{middleware, Router};
use serde::Serialize;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{constants::API_BASE_PATH, middleware::logging_middleware, state::AppState};

/// Plain acknowledgement body
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(catalog::routes())
        .merge(ratings::routes())
        .nest("/auth", auth::routes())
        .nest("/lecture-assignments", assignments::routes())
        .nest("/reports", reports::routes())
        .nest("/challenges", challenges::routes())
        .nest("/student", student::routes())
        .nest("/users", users::routes())
}

/// The complete application with its middleware stack
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest(API_BASE_PATH, routes())
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
