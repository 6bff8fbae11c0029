//! Pagination inputs supplied by the caller
//!
//! A config is rebuilt on every recompute: the caller owns the current
//! page and the data source owns the item count. Everything else
//! (page count, item window, clamped position) is derived here.

use std::ops::Range;

use crate::PaginationError;

/// Pages shown on each side of the current page unless overridden
pub const DEFAULT_SIBLING_COUNT: usize = 1;

/// Inputs for one range computation
///
/// Fields are public so callers can build a config literally; invalid
/// values are caught by [`PaginationConfig::validate`], which every
/// computation runs first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaginationConfig {
    /// Number of items in the underlying data set
    pub total_count: usize,

    /// Items per page (must be > 0)
    pub page_size: usize,

    /// 1-based page the caller currently displays
    pub current_page: usize,

    /// Pages shown immediately before and after the current page
    pub sibling_count: usize,
}

impl PaginationConfig {
    /// Create fluent builder
    pub fn builder(total_count: usize, page_size: usize) -> PaginationConfigBuilder {
        PaginationConfigBuilder::new(total_count, page_size)
    }

    /// Create validated config with the default sibling count
    pub fn new(
        total_count: usize,
        page_size: usize,
        current_page: usize,
    ) -> Result<Self, PaginationError> {
        Self::builder(total_count, page_size)
            .current_page(current_page)
            .build()
    }

    /// Create validated config from signed inputs.
    ///
    /// Used at boundaries where values arrive as signed integers (command
    /// line, foreign callers); negative values are rejected instead of
    /// wrapping.
    pub fn from_signed(
        total_count: i64,
        page_size: i64,
        current_page: i64,
        sibling_count: i64,
    ) -> Result<Self, PaginationError> {
        Self::builder(
            non_negative("total count", total_count)?,
            non_negative("page size", page_size)?,
        )
        .current_page(non_negative("current page", current_page)?)
        .sibling_count(non_negative("sibling count", sibling_count)?)
        .build()
    }

    /// Reject configurations the range algorithm cannot work with
    pub fn validate(&self) -> Result<(), PaginationError> {
        if self.page_size == 0 {
            return Err(PaginationError::invalid("page size must be > 0"));
        }
        if self.current_page == 0 {
            return Err(PaginationError::invalid("current page must be >= 1"));
        }
        Ok(())
    }

    /// Number of pages `⌈total_count / page_size⌉` (0 for an empty set)
    pub fn total_pages(&self) -> usize {
        self.total_count.div_ceil(self.page_size.max(1))
    }

    /// Current page clamped into `[1, max(total_pages, 1)]`
    pub fn clamped_current_page(&self) -> usize {
        self.current_page.clamp(1, self.total_pages().max(1))
    }

    /// Same config pointing at another page.
    ///
    /// This is the only transition: the caller applies the page received
    /// from a page-change callback and recomputes.
    pub fn with_current_page(mut self, page: usize) -> Self {
        self.current_page = page;
        self
    }

    /// Half-open item index range `[start, end)` belonging to `page`.
    ///
    /// Pages past the end yield an empty range at `total_count`, so the
    /// result can always be used to slice the data set.
    pub fn item_range(&self, page: usize) -> Range<usize> {
        let page_size = self.page_size.max(1);
        let start = page
            .saturating_sub(1)
            .saturating_mul(page_size)
            .min(self.total_count);
        let end = start.saturating_add(page_size).min(self.total_count);
        start..end
    }

    /// Item index range of the (clamped) current page
    pub fn current_item_range(&self) -> Range<usize> {
        self.item_range(self.clamped_current_page())
    }
}

fn non_negative(field: &str, value: i64) -> Result<usize, PaginationError> {
    usize::try_from(value)
        .map_err(|_| PaginationError::invalid(format!("{field} must be >= 0, got {value}")))
}

/// Builder for pagination configs (fluent API)
#[derive(Debug, Clone)]
pub struct PaginationConfigBuilder {
    total_count: usize,
    page_size: usize,
    current_page: usize,
    sibling_count: usize,
}

impl PaginationConfigBuilder {
    /// Create new builder positioned on page 1
    pub fn new(total_count: usize, page_size: usize) -> Self {
        Self {
            total_count,
            page_size,
            current_page: 1,
            sibling_count: DEFAULT_SIBLING_COUNT,
        }
    }

    /// Set current page (1-based)
    pub fn current_page(mut self, page: usize) -> Self {
        self.current_page = page;
        self
    }

    /// Set sibling count
    pub fn sibling_count(mut self, sibling_count: usize) -> Self {
        self.sibling_count = sibling_count;
        self
    }

    /// Build and validate
    pub fn build(self) -> Result<PaginationConfig, PaginationError> {
        let config = PaginationConfig {
            total_count: self.total_count,
            page_size: self.page_size,
            current_page: self.current_page,
            sibling_count: self.sibling_count,
        };
        config.validate()?;
        Ok(config)
    }
}
