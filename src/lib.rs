//! LUCT Reporting - Lecture Reporting Platform
//!
//! This library provides the core functionality behind the LUCT faculty
//! reporting API: weekly lecture reports, challenge tracking and module
//! ratings, backed by a shared academic catalog.
//!
//! # Features
//!
//! - Bearer-token authentication with four roles
//! - Faculty, program and module catalog with guarded deletes
//! - Lecture assignments and weekly lecture reports with feedback
//! - Lecturer and student challenge tracking
//! - Module ratings with one rating per student and module
//!
//! # Architecture
//!
//! The application follows a layered architecture:
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Business logic and permission checks
//! - **Repositories**: Database access
//! - **Models**: Domain models and DTOs

pub mod auth;
pub mod authorization;
pub mod config;
pub mod constants;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
