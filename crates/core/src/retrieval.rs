//! Recipe retrieval orchestration.
//!
//! Every listing goes through the same pipeline:
//!
//! ```text
//! visibility -> category -> tag -> search -> newest first -> paginate
//! ```
//!
//! Single-recipe lookups apply visibility with the author override, so a
//! draft resolves for its author and is `NotFound` for everyone else.

use std::cmp::Reverse;

use crate::error::CoreError;
use crate::filters::{filter_by_category, filter_by_tag, TagRef};
use crate::pagination::{paginate, Page};
use crate::record::RecipeRecord;
use crate::requester::Requester;
use crate::search::search;
use crate::types::DbId;
use crate::visibility::{filter_published, is_visible_to};

/// Optional narrowing applied after the visibility filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilters {
    pub category_id: Option<DbId>,
    pub tag: Option<TagRef>,
    pub query: Option<String>,
}

/// Order newest first; ties broken by id, also descending.
pub fn order_by_recency<R: RecipeRecord>(collection: &mut [R]) {
    collection.sort_by_key(|r| Reverse((r.created_at(), r.id())));
}

/// Public listing: published recipes only, narrowed, ordered and paginated.
pub fn list_recipes<R: RecipeRecord>(
    collection: Vec<R>,
    filters: &RecipeFilters,
    page_size: usize,
    page_number: usize,
) -> Page<R> {
    let mut recipes = filter_published(collection);
    recipes = filter_by_category(recipes, filters.category_id);
    if let Some(tag) = &filters.tag {
        recipes = filter_by_tag(recipes, tag);
    }
    recipes = search(recipes, filters.query.as_deref());
    order_by_recency(&mut recipes);
    paginate(recipes, page_size, page_number)
}

/// Resolve recipe `id` for `requester`.
///
/// Returns [`CoreError::NotFound`] when no recipe has that id, or when the
/// match is a draft and the requester is not its author.
pub fn get_recipe<R: RecipeRecord>(
    collection: impl IntoIterator<Item = R>,
    id: DbId,
    requester: Requester,
) -> Result<R, CoreError> {
    collection
        .into_iter()
        .find(|r| r.id() == id && is_visible_to(r, requester))
        .ok_or(CoreError::NotFound {
            entity: "Recipe",
            id,
        })
}

/// The requester's own recipes in every publication state, newest first.
pub fn list_owned<R: RecipeRecord>(
    collection: Vec<R>,
    requester: Requester,
    page_size: usize,
    page_number: usize,
) -> Result<Page<R>, CoreError> {
    let Some(user_id) = requester.user_id() else {
        return Err(CoreError::Unauthorized(
            "Authentication credentials were not provided".into(),
        ));
    };
    let mut recipes: Vec<R> = collection
        .into_iter()
        .filter(|r| r.author_id() == user_id)
        .collect();
    order_by_recency(&mut recipes);
    Ok(paginate(recipes, page_size, page_number))
}
