//! Lecture report handlers

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, put},
    Router,
};

use crate::state::AppState;

/// Lecture report routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_reports).post(handler::submit_report))
        .route("/{id}/feedback", put(handler::submit_feedback))
        .route("/{id}/sign-attendance", put(handler::sign_attendance))
}
