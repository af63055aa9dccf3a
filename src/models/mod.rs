//! Domain models
//!
//! This module contains all domain models used throughout the application.

pub mod assignment;
pub mod challenge;
pub mod faculty;
pub mod module;
pub mod program;
pub mod rating;
pub mod report;
pub mod student_challenge;
pub mod user;

pub use assignment::*;
pub use challenge::*;
pub use faculty::*;
pub use module::*;
pub use program::*;
pub use rating::*;
pub use report::*;
pub use student_challenge::*;
pub use user::*;
