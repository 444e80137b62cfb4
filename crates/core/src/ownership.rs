//! Author-ownership checks for recipe mutation.

use crate::error::CoreError;
use crate::record::RecipeRecord;
use crate::requester::Requester;

/// True iff the requester is authenticated and is the recipe's author.
pub fn can_mutate<R: RecipeRecord>(requester: Requester, recipe: &R) -> bool {
    requester.user_id() == Some(recipe.author_id())
}

/// Reject a mutation before any state change.
///
/// Anonymous requesters get [`CoreError::Unauthorized`] (401), authenticated
/// non-owners get [`CoreError::Forbidden`] (403).
pub fn ensure_can_mutate<R: RecipeRecord>(
    requester: Requester,
    recipe: &R,
) -> Result<(), CoreError> {
    if !requester.is_authenticated() {
        return Err(CoreError::Unauthorized(
            "Authentication credentials were not provided".into(),
        ));
    }
    if !can_mutate(requester, recipe) {
        return Err(CoreError::Forbidden(
            "Only the recipe's author may modify it".into(),
        ));
    }
    Ok(())
}
