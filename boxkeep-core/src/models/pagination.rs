//! Page-number to offset/limit arithmetic for container listings

use serde::Serialize;

/// Maximum items per page
const MAX_PER_PAGE: u32 = 100;

/// Default items per page
pub const DEFAULT_PER_PAGE: u32 = 5;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page (max 100)
    pub per_page: u32,
}

impl Pagination {
    /// Create pagination with validation.
    ///
    /// - Page is clamped to minimum of 1
    /// - Per page is clamped to 1..=100
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.clamp(1, MAX_PER_PAGE),
        }
    }

    /// Build from a signed page number as it arrives from a query string.
    /// Anything below 1 lands on the first page.
    pub fn from_signed(page: i64, per_page: u32) -> Self {
        let page = u32::try_from(page.max(1)).unwrap_or(u32::MAX);
        Self::new(page, per_page)
    }

    /// SQL OFFSET: `(page - 1) * per_page`, never negative.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }

    /// SQL LIMIT
    pub fn limit(&self) -> u32 {
        self.per_page
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T> {
    /// Items for current page
    pub items: Vec<T>,
    /// Total count across all pages
    pub total: i64,
    /// Current page number
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: i64, page: Pagination) -> Self {
        Self {
            items,
            total,
            page: page.page,
            per_page: page.per_page,
        }
    }

    /// Calculate total number of pages.
    pub fn total_pages(&self) -> u32 {
        if self.total <= 0 {
            1
        } else {
            let total = self.total as u64;
            let per_page = u64::from(self.per_page.max(1));
            u32::try_from(total.div_ceil(per_page)).unwrap_or(u32::MAX)
        }
    }

    /// Check if there's a next page.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages()
    }

    /// Check if there's a previous page.
    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    /// Convert the items while keeping page metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            per_page: self.per_page,
        }
    }
}
