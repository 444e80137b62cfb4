//! Tag entity model and DTOs.

use recipes_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Lightweight tag info embedded in recipe payloads.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct TagInfo {
    pub id: DbId,
    pub name: String,
    pub slug: String,
}

/// DTO for creating a new tag. The slug is derived from `name`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTag {
    pub name: String,
}
