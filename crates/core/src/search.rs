//! Free-text recipe search.
//!
//! Matching is a case-insensitive substring test against the title, the
//! description and the preparation steps. A recipe matches if any one of the
//! three contains the query.

use crate::record::RecipeRecord;

// ---------------------------------------------------------------------------
// Query normalisation
// ---------------------------------------------------------------------------

/// Maximum accepted length of a search query, in characters.
pub const MAX_QUERY_CHARS: usize = 200;

/// Trim and lowercase a raw `q` value.
///
/// Returns `None` for absent, empty or whitespace-only input. Overlong input
/// is truncated to [`MAX_QUERY_CHARS`].
pub fn normalize_query(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(trimmed.chars().take(MAX_QUERY_CHARS).collect::<String>().to_lowercase())
}

// ---------------------------------------------------------------------------
// Matching
// ---------------------------------------------------------------------------

/// Whether `recipe` contains the already-normalised `needle`.
pub fn matches_query<R: RecipeRecord>(recipe: &R, needle: &str) -> bool {
    [recipe.title(), recipe.description(), recipe.preparation_steps()]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Keep recipes matching `query`. An absent or blank query is a no-op.
pub fn search<R: RecipeRecord>(collection: Vec<R>, query: Option<&str>) -> Vec<R> {
    let Some(needle) = normalize_query(query) else {
        return collection;
    };
    collection
        .into_iter()
        .filter(|r| matches_query(r, &needle))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
