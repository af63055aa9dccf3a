//! Catalog handlers: faculties, programs and modules

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

/// Catalog routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/faculties", get(handler::list_faculties))
        // Programs
        .route(
            "/programs",
            get(handler::list_programs).post(handler::create_program),
        )
        .route(
            "/programs/faculty/{faculty_id}",
            get(handler::list_programs_by_faculty),
        )
        .route(
            "/programs/{id}",
            put(handler::update_program).delete(handler::delete_program),
        )
        // Modules
        .route(
            "/modules",
            get(handler::list_modules).post(handler::create_module),
        )
        .route(
            "/modules/program/{program_id}",
            get(handler::list_modules_by_program),
        )
        .route(
            "/modules/{id}",
            get(handler::get_module)
                .put(handler::update_module)
                .delete(handler::delete_module),
        )
}
