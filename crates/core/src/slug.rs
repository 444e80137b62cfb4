//! URL slugs for recipes and tags.

use crate::error::CoreError;

/// Generate a URL-safe slug from a title.
///
/// Converts to lowercase, replaces every non-alphanumeric character with a
/// hyphen, collapses consecutive hyphens, and trims leading/trailing hyphens.
pub fn generate_slug(title: &str) -> String {
    let mut result = String::with_capacity(title.len());
    let mut prev_hyphen = false;
    for c in title.to_lowercase().chars() {
        if c.is_ascii_alphanumeric() {
            result.push(c);
            prev_hyphen = false;
        } else if !prev_hyphen {
            result.push('-');
            prev_hyphen = true;
        }
    }
    result.trim_matches('-').to_string()
}

/// Slug base for a recipe whose title has no ASCII letters or digits.
pub const RECIPE_SLUG_FALLBACK: &str = "recipe";

/// Slug base for a tag whose name has no ASCII letters or digits.
pub const TAG_SLUG_FALLBACK: &str = "tag";

/// [`generate_slug`], or `fallback` when the text yields an empty slug.
///
/// The result is the base both for the collision lookup and for
/// [`next_available_slug`], so the two always agree.
pub fn slug_base(text: &str, fallback: &str) -> String {
    let slug = generate_slug(text);
    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug
    }
}

/// Pick the first of `base`, `base-2`, `base-3`, ... not present in `taken`.
pub fn next_available_slug(base: &str, taken: &[String]) -> String {
    if !taken.iter().any(|s| s == base) {
        return base.to_string();
    }
    (2..)
        .map(|n| format!("{base}-{n}"))
        .find(|candidate| !taken.contains(candidate))
        .unwrap_or_else(|| base.to_string())
}

/// Validate a slug (non-empty, only lowercase alphanumeric + hyphens).
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(CoreError::Validation(
            "Slug must contain only lowercase alphanumeric characters and hyphens".into(),
        ));
    }
    Ok(())
}
