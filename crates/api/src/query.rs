//! Shared query parameter types for API and page handlers.
//!
//! Values are kept as raw strings and parsed leniently by `recipes_core`:
//! a malformed `page` means page 1, a malformed `category_id` means no
//! category filter.

use serde::Deserialize;

/// `?page=` on any paginated listing.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

/// Query parameters of the recipe listing endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct RecipeListParams {
    pub page: Option<String>,
    pub category_id: Option<String>,
    pub q: Option<String>,
}

/// `?q=&page=` on the search page.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub page: Option<String>,
}
