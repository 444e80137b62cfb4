//! Recipe entity model and DTOs.

use recipes_core::record::{RecipeRecord, TagKey};
use recipes_core::types::{DbId, Timestamp};
use recipes_core::validation::RecipeFields;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::tag::TagInfo;

/// A row from the `recipes` table joined with its category name and author
/// username.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Recipe {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub preparation_time: i32,
    pub preparation_time_unit: String,
    pub servings: i32,
    pub servings_unit: String,
    pub preparation_steps: String,
    pub preparation_steps_is_html: bool,
    pub cover: Option<String>,
    pub category_id: DbId,
    pub category_name: String,
    pub author_id: DbId,
    pub author_username: String,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A recipe with its tags loaded. This is what handlers and the retrieval
/// pipeline work with.
#[derive(Debug, Clone, Serialize)]
pub struct RecipeWithTags {
    #[serde(flatten)]
    pub recipe: Recipe,
    pub tags: Vec<TagInfo>,
}

impl RecipeRecord for RecipeWithTags {
    fn id(&self) -> DbId {
        self.recipe.id
    }

    fn author_id(&self) -> DbId {
        self.recipe.author_id
    }

    fn is_published(&self) -> bool {
        self.recipe.is_published
    }

    fn category_id(&self) -> DbId {
        self.recipe.category_id
    }

    fn title(&self) -> &str {
        &self.recipe.title
    }

    fn description(&self) -> &str {
        &self.recipe.description
    }

    fn preparation_steps(&self) -> &str {
        &self.recipe.preparation_steps
    }

    fn created_at(&self) -> Timestamp {
        self.recipe.created_at
    }

    fn tags(&self) -> impl Iterator<Item = TagKey<'_>> {
        self.tags.iter().map(|t| TagKey {
            id: t.id,
            slug: t.slug.as_str(),
        })
    }
}

/// DTO for creating a recipe.
///
/// Has no `author` or `is_published` field: the author is always the
/// requester and new recipes always start as drafts. Unknown keys in the
/// payload are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecipe {
    pub title: String,
    pub description: String,
    pub preparation_time: i32,
    pub preparation_time_unit: String,
    pub servings: i32,
    pub servings_unit: String,
    pub preparation_steps: String,
    #[serde(default)]
    pub preparation_steps_is_html: bool,
    pub cover: Option<String>,
    /// Category id.
    pub category: DbId,
    /// Tag ids.
    #[serde(default)]
    pub tags: Vec<DbId>,
}

impl CreateRecipe {
    pub fn fields(&self) -> RecipeFields {
        RecipeFields {
            title: Some(self.title.clone()),
            description: Some(self.description.clone()),
            preparation_time: Some(self.preparation_time),
            preparation_time_unit: Some(self.preparation_time_unit.clone()),
            servings: Some(self.servings),
            servings_unit: Some(self.servings_unit.clone()),
            preparation_steps: Some(self.preparation_steps.clone()),
        }
    }
}

/// DTO for a partial update. All fields are optional; `author` and
/// `is_published` are not updatable here.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateRecipe {
    pub title: Option<String>,
    pub description: Option<String>,
    pub preparation_time: Option<i32>,
    pub preparation_time_unit: Option<String>,
    pub servings: Option<i32>,
    pub servings_unit: Option<String>,
    pub preparation_steps: Option<String>,
    pub preparation_steps_is_html: Option<bool>,
    pub cover: Option<String>,
    pub category: Option<DbId>,
    /// When present, replaces the full tag set.
    pub tags: Option<Vec<DbId>>,
}

impl UpdateRecipe {
    /// The fields as they will be once this patch is applied to `existing`.
    pub fn fields_over(&self, existing: &Recipe) -> RecipeFields {
        RecipeFields {
            title: Some(self.title.clone().unwrap_or_else(|| existing.title.clone())),
            description: Some(
                self.description
                    .clone()
                    .unwrap_or_else(|| existing.description.clone()),
            ),
            preparation_time: self.preparation_time.or(Some(existing.preparation_time)),
            preparation_time_unit: self.preparation_time_unit.clone(),
            servings: self.servings.or(Some(existing.servings)),
            servings_unit: self.servings_unit.clone(),
            preparation_steps: self.preparation_steps.clone(),
        }
    }
}
