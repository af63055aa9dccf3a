//! Lecture assignment handlers

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

/// Lecture assignment routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handler::list_assignments).post(handler::assign_lecturer),
        )
        .route(
            "/{id}",
            put(handler::update_assignment).delete(handler::delete_assignment),
        )
}
