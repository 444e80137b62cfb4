//! In-memory recipe fixture shared by the unit tests of this crate.

use chrono::{Duration, TimeZone, Utc};

use crate::record::{RecipeRecord, TagKey};
use crate::types::{DbId, Timestamp};

#[derive(Debug, Clone, PartialEq)]
pub struct FakeRecipe {
    pub id: DbId,
    pub author_id: DbId,
    pub is_published: bool,
    pub category_id: DbId,
    pub title: String,
    pub description: String,
    pub preparation_steps: String,
    pub created_at: Timestamp,
    pub tags: Vec<(DbId, String)>,
}

impl FakeRecipe {
    /// A published recipe by author 1 in category 1, created `id` minutes
    /// after a fixed epoch so higher ids are newer.
    pub fn published(id: DbId) -> Self {
        let epoch = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        Self {
            id,
            author_id: 1,
            is_published: true,
            category_id: 1,
            title: format!("Recipe Title {id}"),
            description: "Recipe Description".into(),
            preparation_steps: "Recipe Preparation Steps".into(),
            created_at: epoch + Duration::minutes(id),
            tags: Vec::new(),
        }
    }

    pub fn draft(id: DbId) -> Self {
        Self {
            is_published: false,
            ..Self::published(id)
        }
    }

    pub fn by(mut self, author_id: DbId) -> Self {
        self.author_id = author_id;
        self
    }

    pub fn in_category(mut self, category_id: DbId) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn titled(mut self, title: &str) -> Self {
        self.title = title.into();
        self
    }

    pub fn tagged(mut self, id: DbId, slug: &str) -> Self {
        self.tags.push((id, slug.into()));
        self
    }
}

impl RecipeRecord for FakeRecipe {
    fn id(&self) -> DbId {
        self.id
    }

    fn author_id(&self) -> DbId {
        self.author_id
    }

    fn is_published(&self) -> bool {
        self.is_published
    }

    fn category_id(&self) -> DbId {
        self.category_id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn preparation_steps(&self) -> &str {
        &self.preparation_steps
    }

    fn created_at(&self) -> Timestamp {
        self.created_at
    }

    fn tags(&self) -> impl Iterator<Item = TagKey<'_>> {
        self.tags.iter().map(|(id, slug)| TagKey {
            id: *id,
            slug: slug.as_str(),
        })
    }
}

pub fn ids<R: RecipeRecord>(items: &[R]) -> Vec<DbId> {
    items.iter().map(RecipeRecord::id).collect()
}
