//! Category and tag narrowing.
//!
//! Category ids arrive as raw query-string values. Anything that is not a
//! plain non-negative integer is ignored rather than rejected, so API
//! consumers sending `?category_id=` or `?category_id=abc` get the unfiltered
//! list instead of an error.

use crate::record::RecipeRecord;
use crate::types::DbId;

/// Reference to a tag, either by primary key or by slug.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagRef {
    Id(DbId),
    Slug(String),
}

impl TagRef {
    fn matches(&self, id: DbId, slug: &str) -> bool {
        match self {
            TagRef::Id(wanted) => *wanted == id,
            TagRef::Slug(wanted) => wanted == slug,
        }
    }
}

/// Parse a `category_id` query value.
///
/// Only a non-empty run of ASCII digits that fits a [`DbId`] yields a value;
/// absent, empty, signed or non-numeric input yields `None`.
pub fn parse_category_id(raw: Option<&str>) -> Option<DbId> {
    let raw = raw?;
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Keep recipes in `category_id`. `None` is a no-op.
pub fn filter_by_category<R: RecipeRecord>(collection: Vec<R>, category_id: Option<DbId>) -> Vec<R> {
    match category_id {
        Some(category_id) => collection
            .into_iter()
            .filter(|r| r.category_id() == category_id)
            .collect(),
        None => collection,
    }
}

/// Keep recipes carrying `tag`.
pub fn filter_by_tag<R: RecipeRecord>(collection: Vec<R>, tag: &TagRef) -> Vec<R> {
    collection
        .into_iter()
        .filter(|r| r.tags().any(|t| tag.matches(t.id, t.slug)))
        .collect()
}
