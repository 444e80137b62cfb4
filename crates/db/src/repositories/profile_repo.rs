//! Repository for the `profiles` table.

use recipes_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{Profile, UpdateProfile};

const COLUMNS: &str = "id, author_id, bio, created_at, updated_at";

pub struct ProfileRepo;

impl ProfileRepo {
    /// Find the profile belonging to `author_id`.
    pub async fn find_by_author(
        pool: &PgPool,
        author_id: DbId,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE author_id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(author_id)
            .fetch_optional(pool)
            .await
    }

    /// Update the author's profile. Returns `None` if the author has none.
    pub async fn update(
        pool: &PgPool,
        author_id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET bio = COALESCE($2, bio)
             WHERE author_id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(author_id)
            .bind(&input.bio)
            .fetch_optional(pool)
            .await
    }
}
