//! Query results and pagination.

use serde::{Deserialize, Serialize};

/// Pagination info for "showing N of M" displays.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of matching items.
    pub total: usize,
    /// Total number of pages: ceil(total / per_page), zero when nothing
    /// matched.
    pub total_pages: usize,
}

impl Pagination {
    /// Create pagination info. `page` is forced to at least 1 and
    /// `per_page` to at least 1.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        Self {
            page,
            per_page,
            total,
            total_pages: total.div_ceil(per_page),
        }
    }

    /// Whether there is a page after the current one.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether there is a page before the current one.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Check if on the first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Check if on the last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Index of the first item on this page (1-indexed), 0 when empty.
    pub fn start_item(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            (self.page - 1) * self.per_page + 1
        }
    }

    /// Index of the last item on this page.
    pub fn end_item(&self) -> usize {
        (self.page * self.per_page).min(self.total)
    }

    /// Page numbers for display, windowed around the current page.
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        let max_visible = max_visible.max(1);
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        let half = max_visible / 2;
        let start = self.page.saturating_sub(half).max(1);
        let end = (start + max_visible - 1).min(self.total_pages);
        let start = end.saturating_sub(max_visible - 1).max(1);

        (start..=end).collect()
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 12, 0)
    }
}

/// A filtered, sorted, paginated view over a list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueryResults<T> {
    /// The items on the requested page.
    pub items: Vec<T>,
    /// Pagination info for the whole match set.
    pub pagination: Pagination,
}

impl<T> QueryResults<T> {
    /// Slice an already filtered and sorted list into the requested page.
    ///
    /// A page past the end yields an empty slice, not an error.
    pub fn paginate(matched: Vec<T>, page: usize, per_page: usize) -> Self {
        let pagination = Pagination::new(page, per_page, matched.len());
        let start = (pagination.page - 1) * pagination.per_page;
        let items = matched
            .into_iter()
            .skip(start)
            .take(pagination.per_page)
            .collect();
        Self { items, pagination }
    }

    /// Create empty results.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            pagination: Pagination::default(),
        }
    }

    /// Check if this page is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }
}
