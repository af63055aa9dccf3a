//! Student self-service handlers

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

/// Student routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/challenges",
            get(handler::list_own_challenges).post(handler::create_challenge),
        )
        .route("/challenges/{id}", put(handler::update_challenge_status))
        .route("/modules", get(handler::list_my_modules))
        .route("/module-ratings", get(handler::list_my_module_ratings))
}
