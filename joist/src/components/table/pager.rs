//! Pagination window over an externally supplied row count.

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Default number of page buttons shown around the current page.
pub const DEFAULT_VISIBLE_PAGES: usize = 5;

/// A 1-indexed pagination window.
///
/// The window never stores the row count; callers pass the current total
/// to each derivation, so the window cannot go stale against the data.
///
/// # Example
///
/// ```
/// use joist::components::table::PageWindow;
///
/// let window = PageWindow::new(2, 10);
/// assert_eq!(window.bounds(25), 10..20);
/// assert_eq!(window.summary(25), (11, 20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageWindow {
    page: usize,
    page_size: usize,
}

impl PageWindow {
    /// Create a new window.
    ///
    /// `page` is 1-indexed; both arguments are silently raised to 1 when
    /// 0 is passed.
    pub fn new(page: usize, page_size: usize) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// The current 1-indexed page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Move to another page.
    ///
    /// Pages past the end are accepted; they slice empty until the caller
    /// corrects them.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Change the page size. The current page is kept as-is.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    /// Number of pages needed for `total` rows.
    pub fn total_pages(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// The index range this window selects out of `total` rows.
    ///
    /// A page past the end yields an empty range rather than clamping to
    /// the last page.
    pub fn bounds(&self, total: usize) -> Range<usize> {
        let start = (self.page - 1).saturating_mul(self.page_size);
        if start >= total {
            return total..total;
        }
        start..start.saturating_add(self.page_size).min(total)
    }

    /// The 1-indexed inclusive display range for "Showing X-Y of Z".
    ///
    /// `end` is clamped to `total`; an empty total reads as `(0, 0)`.
    pub fn summary(&self, total: usize) -> (usize, usize) {
        if total == 0 {
            return (0, 0);
        }
        let start = (self.page - 1).saturating_mul(self.page_size).saturating_add(1);
        let end = self.page.saturating_mul(self.page_size).min(total);
        (start, end)
    }
}

impl Default for PageWindow {
    fn default() -> Self {
        Self::new(1, DEFAULT_PAGE_SIZE)
    }
}

/// Page numbers to render, with ellipsis markers standing in for gaps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageItem {
    /// A clickable page number.
    Page(usize),
    /// A gap between page numbers.
    Ellipsis,
}

/// Build the compact page-number sequence for a pager control.
///
/// Small page counts list every page. Larger counts always show the
/// first and last page plus the neighbors of `current`, with a single
/// ellipsis marker wherever pages were elided.
///
/// # Example
///
/// ```
/// use joist::components::table::{PageItem, page_list};
///
/// assert_eq!(
///     page_list(10, 5, 5),
///     vec![
///         PageItem::Page(1),
///         PageItem::Ellipsis,
///         PageItem::Page(4),
///         PageItem::Page(5),
///         PageItem::Page(6),
///         PageItem::Ellipsis,
///         PageItem::Page(10),
///     ],
/// );
/// ```
pub fn page_list(total_pages: usize, current: usize, max_visible: usize) -> Vec<PageItem> {
    if total_pages == 0 {
        return Vec::new();
    }
    if total_pages <= max_visible + 2 {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let mut items = vec![PageItem::Page(1)];
    if current > 3 {
        items.push(PageItem::Ellipsis);
    }
    let low = current.saturating_sub(1).max(2);
    let high = current.saturating_add(1).min(total_pages - 1);
    for page in low..=high {
        items.push(PageItem::Page(page));
    }
    if current.saturating_add(2) < total_pages {
        items.push(PageItem::Ellipsis);
    }
    items.push(PageItem::Page(total_pages));
    items
}
