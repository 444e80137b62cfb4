//! Fixed-size pagination and the page-number widget window.
//!
//! Out-of-range page numbers clamp to the nearest valid page instead of
//! erroring. An empty collection still has one (empty) page.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Recipes per HTML listing page. Overridable via `PER_PAGE`.
pub const DEFAULT_PER_PAGE: usize = 6;

/// Recipes per REST API page. Overridable via `API_PAGE_SIZE`.
pub const API_PAGE_SIZE: usize = 10;

/// Number of page links shown by the pagination widget.
pub const PAGE_RANGE_WINDOW: usize = 4;

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// A bounded slice of a collection plus page-count metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Number of elements in the whole (filtered) collection.
    pub count: usize,
    pub page_size: usize,
    /// 1-based, always within `1..=total_pages`.
    pub current_page: usize,
    /// `ceil(count / page_size)`, never less than 1.
    pub total_pages: usize,
}

impl<T> Page<T> {
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn next_page(&self) -> Option<usize> {
        self.has_next().then_some(self.current_page + 1)
    }

    pub fn previous_page(&self) -> Option<usize> {
        self.has_previous().then_some(self.current_page - 1)
    }

    /// Convert the items while keeping the metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            count: self.count,
            page_size: self.page_size,
            current_page: self.current_page,
            total_pages: self.total_pages,
        }
    }
}

/// Total number of pages for `count` elements, minimum 1.
pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1)).max(1)
}

/// Slice `collection` into the page numbered `page_number` (1-based).
///
/// A `page_size` of zero is treated as one. `page_number` is clamped into
/// `1..=total_pages`.
pub fn paginate<T>(collection: Vec<T>, page_size: usize, page_number: usize) -> Page<T> {
    let page_size = page_size.max(1);
    let count = collection.len();
    let total_pages = total_pages(count, page_size);
    let current_page = page_number.clamp(1, total_pages);

    let items = collection
        .into_iter()
        .skip((current_page - 1) * page_size)
        .take(page_size)
        .collect();

    Page {
        items,
        count,
        page_size,
        current_page,
        total_pages,
    }
}

/// Parse a raw `page` query value. Missing or non-numeric input means page 1.
pub fn parse_page_number(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .unwrap_or(1)
        .max(1)
}

// ---------------------------------------------------------------------------
// Widget window
// ---------------------------------------------------------------------------

/// The page numbers the pagination widget renders around the current page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRange {
    pub pages: Vec<usize>,
    pub current_page: usize,
    pub total_pages: usize,
    /// Page 1 is not part of `pages`; the widget shows a "first" link.
    pub first_page_out_of_range: bool,
    /// The last page is not part of `pages`; the widget shows a "last" link.
    pub last_page_out_of_range: bool,
}

/// Compute a window of `window` page numbers centred on `current`.
///
/// Near either edge the window shifts so it always holds `window` pages
/// (or all pages, when there are fewer).
pub fn page_range(current: usize, total: usize, window: usize) -> PageRange {
    let total = total.max(1);
    let current = current.clamp(1, total);
    let middle = window.max(1).div_ceil(2);

    // 0-based, half-open [start, stop).
    let mut start = current as isize - middle as isize;
    let mut stop = (current + middle) as isize;
    if start < 0 {
        stop += -start;
        start = 0;
    }
    if stop > total as isize {
        start = (start - (stop - total as isize)).max(0);
        stop = total as isize;
    }

    PageRange {
        pages: ((start as usize + 1)..=(stop as usize)).collect(),
        current_page: current,
        total_pages: total,
        first_page_out_of_range: current > middle,
        last_page_out_of_range: (stop as usize) < total,
    }
}
