//! The read-only view of a recipe that the retrieval pipeline works on.
//!
//! Persistence models implement [`RecipeRecord`] so the filters in this crate
//! never depend on how a recipe was loaded.

use crate::types::{DbId, Timestamp};

/// A tag attached to a recipe, as seen by the tag filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagKey<'a> {
    pub id: DbId,
    pub slug: &'a str,
}

/// Accessors the visibility, ownership, filter, search and ordering steps need.
pub trait RecipeRecord {
    fn id(&self) -> DbId;
    fn author_id(&self) -> DbId;
    fn is_published(&self) -> bool;
    fn category_id(&self) -> DbId;
    fn title(&self) -> &str;
    fn description(&self) -> &str;
    fn preparation_steps(&self) -> &str;
    fn created_at(&self) -> Timestamp;
    fn tags(&self) -> impl Iterator<Item = TagKey<'_>>;
}
