//! Faculty model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Faculty reference data
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Faculty {
    pub id: Uuid,
    pub name: String,
}
