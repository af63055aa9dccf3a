//! Rating handlers: module ratings and legacy report ratings

mod handler;
pub mod request;
pub mod response;

pub use handler::*;
pub use request::*;
pub use response::*;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Rating routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/module-ratings", post(handler::rate_module))
        .route(
            "/ratings",
            get(handler::list_module_ratings).post(handler::rate_report),
        )
        .route("/ratings/report/{report_id}", get(handler::list_report_ratings))
}
