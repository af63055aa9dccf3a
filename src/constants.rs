//! Application-wide constants
//!
//! This module contains all constant values used throughout the application.
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 5000;

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// DATABASE DEFAULTS
// =============================================================================

/// Default maximum database connections in the pool
pub const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;

// =============================================================================
// AUTHENTICATION DEFAULTS
// =============================================================================

/// Default JWT token expiry in hours
pub const DEFAULT_JWT_EXPIRY_HOURS: i64 = 1;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: u64 = 8;

/// Maximum password length
pub const MAX_PASSWORD_LENGTH: u64 = 128;

/// Maximum display name length
pub const MAX_NAME_LENGTH: u64 = 100;

/// Prefix of the Authorization header value carrying a token
pub const BEARER_PREFIX: &str = "Bearer ";

// =============================================================================
// RATINGS
// =============================================================================

/// Lowest accepted rating value
pub const MIN_RATING: i32 = 1;

/// Highest accepted rating value
pub const MAX_RATING: i32 = 5;

// =============================================================================
// CATALOG
// =============================================================================

/// Maximum program code length
pub const MAX_PROGRAM_CODE_LENGTH: u64 = 20;

/// Maximum program / module name length
pub const MAX_CATALOG_NAME_LENGTH: u64 = 200;

/// A module must have at least this many registered students
pub const MIN_REGISTERED_STUDENTS: i32 = 1;

// =============================================================================
// API VERSIONING
// =============================================================================

/// API base path
pub const API_BASE_PATH: &str = "/api/v1";
