//! Publication-state gating.
//!
//! Public listings only ever contain published recipes. A draft is visible to
//! exactly one requester: its author.

use crate::record::RecipeRecord;
use crate::requester::Requester;

/// Keep only published recipes. Order is preserved.
pub fn filter_published<R: RecipeRecord>(collection: Vec<R>) -> Vec<R> {
    collection.into_iter().filter(R::is_published).collect()
}

/// Whether `requester` may read `recipe`.
///
/// Published recipes are readable by everyone; drafts only by their author.
/// Authenticated non-owners are treated exactly like anonymous readers.
pub fn is_visible_to<R: RecipeRecord>(recipe: &R, requester: Requester) -> bool {
    recipe.is_published() || requester.user_id() == Some(recipe.author_id())
}
