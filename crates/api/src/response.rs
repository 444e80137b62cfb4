//! Shared response envelope types for API handlers.
//!
//! Single objects use a `{ "data": ... }` envelope; listings use
//! [`PaginatedResponse`], which carries page metadata next to `results`.

use recipes_core::pagination::Page;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: recipe }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// One page of a listing.
///
/// `next` and `previous` are page numbers, `null` at either end.
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T: Serialize> {
    pub count: usize,
    pub page_size: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub next: Option<usize>,
    pub previous: Option<usize>,
    pub results: Vec<T>,
}

impl<T: Serialize> From<Page<T>> for PaginatedResponse<T> {
    fn from(page: Page<T>) -> Self {
        Self {
            count: page.count,
            page_size: page.page_size,
            current_page: page.current_page,
            total_pages: page.total_pages,
            next: page.next_page(),
            previous: page.previous_page(),
            results: page.items,
        }
    }
}
