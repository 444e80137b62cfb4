//! Repository for the `recipes` and `recipe_tags` tables.
//!
//! Every read returns [`RecipeWithTags`]: recipe rows are joined with their
//! category and author, then tags are loaded for the whole batch in a single
//! extra query.

use std::collections::HashMap;

use recipes_core::slug::{next_available_slug, slug_base, RECIPE_SLUG_FALLBACK};
use recipes_core::types::DbId;
use sqlx::{FromRow, PgPool};

use crate::models::recipe::{CreateRecipe, Recipe, RecipeWithTags, UpdateRecipe};
use crate::models::tag::TagInfo;

/// Shared SELECT with the category and author joins.
const SELECT_RECIPES: &str = "\
    SELECT r.id, r.title, r.slug, r.description, \
           r.preparation_time, r.preparation_time_unit, \
           r.servings, r.servings_unit, \
           r.preparation_steps, r.preparation_steps_is_html, r.cover, \
           r.category_id, c.name AS category_name, \
           r.author_id, u.username AS author_username, \
           r.is_published, r.created_at, r.updated_at \
    FROM recipes r \
    JOIN categories c ON c.id = r.category_id \
    JOIN users u ON u.id = r.author_id";

/// One `(recipe, tag)` association with the tag columns.
#[derive(Debug, FromRow)]
struct RecipeTagRow {
    recipe_id: DbId,
    id: DbId,
    name: String,
    slug: String,
}

/// Provides CRUD operations for recipes.
pub struct RecipeRepo;

impl RecipeRepo {
    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// List published recipes, newest first.
    pub async fn list_published(pool: &PgPool) -> Result<Vec<RecipeWithTags>, sqlx::Error> {
        let query = format!(
            "{SELECT_RECIPES} WHERE r.is_published = TRUE ORDER BY r.created_at DESC, r.id DESC"
        );
        let recipes = sqlx::query_as::<_, Recipe>(&query).fetch_all(pool).await?;
        Self::attach_tags(pool, recipes).await
    }

    /// List every recipe by `author_id` regardless of publication state.
    pub async fn list_by_author(
        pool: &PgPool,
        author_id: DbId,
    ) -> Result<Vec<RecipeWithTags>, sqlx::Error> {
        let query = format!(
            "{SELECT_RECIPES} WHERE r.author_id = $1 ORDER BY r.created_at DESC, r.id DESC"
        );
        let recipes = sqlx::query_as::<_, Recipe>(&query)
            .bind(author_id)
            .fetch_all(pool)
            .await?;
        Self::attach_tags(pool, recipes).await
    }

    /// Find a recipe by id regardless of publication state.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<RecipeWithTags>, sqlx::Error> {
        let query = format!("{SELECT_RECIPES} WHERE r.id = $1");
        let recipe = sqlx::query_as::<_, Recipe>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        match recipe {
            Some(recipe) => Ok(Self::attach_tags(pool, vec![recipe]).await?.pop()),
            None => Ok(None),
        }
    }

    /// Load tags for `recipes` in one query and pair them up.
    async fn attach_tags(
        pool: &PgPool,
        recipes: Vec<Recipe>,
    ) -> Result<Vec<RecipeWithTags>, sqlx::Error> {
        if recipes.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<DbId> = recipes.iter().map(|r| r.id).collect();
        let rows = sqlx::query_as::<_, RecipeTagRow>(
            "SELECT rt.recipe_id, t.id, t.name, t.slug \
             FROM recipe_tags rt \
             JOIN tags t ON t.id = rt.tag_id \
             WHERE rt.recipe_id = ANY($1) \
             ORDER BY t.name",
        )
        .bind(&ids)
        .fetch_all(pool)
        .await?;

        let mut by_recipe: HashMap<DbId, Vec<TagInfo>> = HashMap::new();
        for row in rows {
            by_recipe.entry(row.recipe_id).or_default().push(TagInfo {
                id: row.id,
                name: row.name,
                slug: row.slug,
            });
        }

        Ok(recipes
            .into_iter()
            .map(|recipe| {
                let tags = by_recipe.remove(&recipe.id).unwrap_or_default();
                RecipeWithTags { recipe, tags }
            })
            .collect())
    }

    // -----------------------------------------------------------------------
    // Writes
    // -----------------------------------------------------------------------

    /// Insert a new draft recipe owned by `author_id`, with its tags, in one
    /// transaction.
    ///
    /// The slug is derived from the title (`recipe` when the title has no
    /// ASCII letters or digits) and suffixed with `-2`, `-3`, ... when
    /// already taken.
    pub async fn create(
        pool: &PgPool,
        author_id: DbId,
        input: &CreateRecipe,
    ) -> Result<RecipeWithTags, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let base = slug_base(&input.title, RECIPE_SLUG_FALLBACK);
        let taken: Vec<String> = sqlx::query_scalar(
            "SELECT slug FROM recipes WHERE slug = $1 OR slug LIKE $1 || '-%'",
        )
        .bind(&base)
        .fetch_all(&mut *tx)
        .await?;
        let slug = next_available_slug(&base, &taken);

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO recipes (title, slug, description, \
                 preparation_time, preparation_time_unit, servings, servings_unit, \
                 preparation_steps, preparation_steps_is_html, cover, \
                 category_id, author_id, is_published) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, FALSE) \
             RETURNING id",
        )
        .bind(&input.title)
        .bind(&slug)
        .bind(&input.description)
        .bind(input.preparation_time)
        .bind(&input.preparation_time_unit)
        .bind(input.servings)
        .bind(&input.servings_unit)
        .bind(&input.preparation_steps)
        .bind(input.preparation_steps_is_html)
        .bind(&input.cover)
        .bind(input.category)
        .bind(author_id)
        .fetch_one(&mut *tx)
        .await?;

        Self::insert_tags(&mut tx, id, &input.tags).await?;
        tx.commit().await?;

        tracing::debug!(recipe_id = id, slug = %slug, "Recipe inserted");

        Self::find_by_id(pool, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    /// Apply a partial update. Only non-`None` fields in `input` are applied;
    /// `tags`, when present, replaces the whole tag set.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRecipe,
    ) -> Result<Option<RecipeWithTags>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let updated: Option<DbId> = sqlx::query_scalar(
            "UPDATE recipes SET \
                 title = COALESCE($2, title), \
                 description = COALESCE($3, description), \
                 preparation_time = COALESCE($4, preparation_time), \
                 preparation_time_unit = COALESCE($5, preparation_time_unit), \
                 servings = COALESCE($6, servings), \
                 servings_unit = COALESCE($7, servings_unit), \
                 preparation_steps = COALESCE($8, preparation_steps), \
                 preparation_steps_is_html = COALESCE($9, preparation_steps_is_html), \
                 cover = COALESCE($10, cover), \
                 category_id = COALESCE($11, category_id) \
             WHERE id = $1 \
             RETURNING id",
        )
        .bind(id)
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.preparation_time)
        .bind(&input.preparation_time_unit)
        .bind(input.servings)
        .bind(&input.servings_unit)
        .bind(&input.preparation_steps)
        .bind(input.preparation_steps_is_html)
        .bind(&input.cover)
        .bind(input.category)
        .fetch_optional(&mut *tx)
        .await?;

        if updated.is_none() {
            return Ok(None);
        }

        if let Some(tags) = &input.tags {
            sqlx::query("DELETE FROM recipe_tags WHERE recipe_id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await?;
            Self::insert_tags(&mut tx, id, tags).await?;
        }

        tx.commit().await?;
        Self::find_by_id(pool, id).await
    }

    async fn insert_tags(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        recipe_id: DbId,
        tag_ids: &[DbId],
    ) -> Result<(), sqlx::Error> {
        if tag_ids.is_empty() {
            return Ok(());
        }
        sqlx::query(
            "INSERT INTO recipe_tags (recipe_id, tag_id) \
             SELECT $1, UNNEST($2::BIGINT[]) \
             ON CONFLICT DO NOTHING",
        )
        .bind(recipe_id)
        .bind(tag_ids)
        .execute(&mut **tx)
        .await?;
        Ok(())
    }

    /// Set the publication flag. Returns `true` if a row was updated.
    pub async fn set_published(
        pool: &PgPool,
        id: DbId,
        is_published: bool,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE recipes SET is_published = $2 WHERE id = $1")
            .bind(id)
            .bind(is_published)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Permanently delete a recipe by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
