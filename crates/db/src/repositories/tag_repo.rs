//! Repository for the `tags` table.

use recipes_core::slug::{generate_slug, next_available_slug, slug_base, TAG_SLUG_FALLBACK};
use recipes_core::types::DbId;
use sqlx::PgPool;

use crate::models::tag::{CreateTag, Tag};

/// Column list for `tags` queries.
const TAG_COLUMNS: &str = "id, name, slug, created_at, updated_at";

/// Provides CRUD operations for tags.
pub struct TagRepo;

impl TagRepo {
    /// Create a tag or return the existing one with the same name.
    ///
    /// Names that reduce to the same slug ("Vegan", "vegan ") are the same
    /// tag; the stored name is replaced so the most recent spelling wins.
    /// Names with no ASCII letters or digits get `tag`, `tag-2`, ... and are
    /// matched by exact name instead.
    pub async fn create_or_get(pool: &PgPool, input: &CreateTag) -> Result<Tag, sqlx::Error> {
        let name = input.name.trim();
        let generated = generate_slug(name);
        let base = slug_base(name, TAG_SLUG_FALLBACK);

        let mut tx = pool.begin().await?;

        let query = format!(
            "SELECT {TAG_COLUMNS} FROM tags \
             WHERE slug = $1 OR slug LIKE $1 || '-%' \
             ORDER BY id"
        );
        let candidates = sqlx::query_as::<_, Tag>(&query)
            .bind(&base)
            .fetch_all(&mut *tx)
            .await?;

        let same_tag = |tag: &&Tag| {
            let existing = generate_slug(&tag.name);
            if generated.is_empty() {
                existing.is_empty() && tag.name == name
            } else {
                existing == generated
            }
        };

        let tag = match candidates.iter().find(same_tag) {
            Some(existing) if existing.name == name => existing.clone(),
            Some(existing) => {
                let query =
                    format!("UPDATE tags SET name = $2 WHERE id = $1 RETURNING {TAG_COLUMNS}");
                sqlx::query_as::<_, Tag>(&query)
                    .bind(existing.id)
                    .bind(name)
                    .fetch_one(&mut *tx)
                    .await?
            }
            None => {
                let taken: Vec<String> = candidates.iter().map(|t| t.slug.clone()).collect();
                let slug = next_available_slug(&base, &taken);
                let query = format!(
                    "INSERT INTO tags (name, slug) VALUES ($1, $2) RETURNING {TAG_COLUMNS}"
                );
                sqlx::query_as::<_, Tag>(&query)
                    .bind(name)
                    .bind(&slug)
                    .fetch_one(&mut *tx)
                    .await?
            }
        };

        tx.commit().await?;
        Ok(tag)
    }

    /// Find a tag by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!("SELECT {TAG_COLUMNS} FROM tags WHERE id = $1");
        sqlx::query_as::<_, Tag>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a tag by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!("SELECT {TAG_COLUMNS} FROM tags WHERE slug = $1");
        sqlx::query_as::<_, Tag>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Return the subset of `ids` that do not exist, preserving input order.
    pub async fn missing_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<DbId>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let existing: Vec<DbId> = sqlx::query_scalar("SELECT id FROM tags WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await?;
        Ok(ids
            .iter()
            .copied()
            .filter(|id| !existing.contains(id))
            .collect())
    }

    /// Delete a tag. Its recipe associations go with it; the recipes stay.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tags WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
