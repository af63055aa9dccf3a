//! User directory handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{routing::get, Router};

use crate::state::AppState;

/// User directory routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/lecturers", get(handler::list_lecturers))
        .route("/students", get(handler::list_students))
}
