//! HTTP middleware

pub mod auth;
pub mod logging;

pub use logging::logging_middleware;
