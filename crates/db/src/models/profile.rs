//! Author profile model and DTOs.

use recipes_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `profiles` table. One-to-one with `users`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub author_id: DbId,
    pub bio: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for updating a profile.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfile {
    pub bio: Option<String>,
}
