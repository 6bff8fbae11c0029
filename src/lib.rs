//! # Bounded-width pagination ranges
//!
//! This library computes the page-index control shown under a paginated
//! list: a short sequence of page numbers and gap markers whose width does
//! not grow with the number of pages.
//!
//! ## Core Algorithm
//!
//! 1. **Page count**: `T = ⌈total_count / page_size⌉`
//! 2. **Fast path**: if `T <= s + 5`, every page is listed
//! 3. **Sibling window**: `[current - s, current + s]` clamped to `[1, T]`
//! 4. **Gap collapse**: an ellipsis replaces pages only when it hides at
//!    least one of them; otherwise every page is listed
//!
//! Result: at most `2·s + 5` tokens, whatever `T` is.
//!
//! ## Usage Example
//!
//! ```
//! use pagenav::{PageToken, PaginationConfig, PaginationController};
//!
//! let config = PaginationConfig::builder(100, 5).current_page(10).build()?;
//! let view = PaginationController::derive(&config)?;
//!
//! assert!(view.visible);
//! assert_eq!(view.tokens.to_string(), "1 … 9 10 11 … 20");
//!
//! let mut requested = None;
//! view.select_token(PageToken::PageNumber(11), &mut |page: usize| requested = Some(page));
//! assert_eq!(requested, Some(11));
//! # Ok::<(), pagenav::PaginationError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod config;     // Inputs, validation, derived page arithmetic
pub mod range;      // Page token sequence computation
pub mod controller; // Navigation affordances and the page-change contract

// Re-exports for convenience
pub use config::{PaginationConfig, PaginationConfigBuilder, DEFAULT_SIBLING_COUNT};
pub use controller::{
    NavButton, NavigationKind, NavigationState, PageChangeHandler, PageEntry,
    PaginationController, PaginationView,
};
pub use range::{PageRange, PageToken, RangeCalculator};

use thiserror::Error;

/// Errors that can occur while computing a pagination range
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaginationError {
    /// Configuration rejected before any range was computed
    #[error("invalid pagination configuration: {0}")]
    InvalidConfiguration(String),
}

impl PaginationError {
    /// Helper for constructing configuration errors.
    pub fn invalid(msg: impl Into<String>) -> Self {
        PaginationError::InvalidConfiguration(msg.into())
    }
}
