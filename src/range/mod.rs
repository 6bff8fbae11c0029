//! Page range computation
//!
//! Maps a [`PaginationConfig`] to the ordered tokens of the page-index
//! control. Up to `s + 5` pages every page is listed; beyond that the
//! output is bounded by `2·s + 5` tokens: first + last + current + two
//! gap slots + `2·s` siblings.

mod token;

pub use token::{PageRange, PageToken};

use token::page_numbers;
use tracing::{debug, trace};

use crate::{PaginationConfig, PaginationError};

/// Pure range calculator (no state, no caching)
#[derive(Debug, Clone, Copy)]
pub struct RangeCalculator;

impl RangeCalculator {
    /// Compute the token sequence for `config`.
    ///
    /// Fails only when the config is invalid. A current page beyond the
    /// last page is accepted and produces the trailing window.
    pub fn compute(config: &PaginationConfig) -> Result<PageRange, PaginationError> {
        config.validate()?;

        let total_pages = config.total_pages();
        let siblings = config.sibling_count;
        let window_width = Self::window_width(siblings);

        // Collapsing would not make the control any narrower
        if window_width >= total_pages {
            trace!(total_pages, window_width, "listing every page");
            return Ok(PageRange::contiguous(1, total_pages));
        }

        let current = config.current_page;
        let left_sibling = current.saturating_sub(siblings).max(1);
        let right_sibling = current.saturating_add(siblings).min(total_pages);

        // Left marker covers at least page 2; right marker at least the
        // two pages before the last one
        let show_left = left_sibling > 2;
        let show_right = right_sibling < total_pages - 2;

        // Pages listed next to a single marker: current + 2·s siblings + 2
        let edge_count = Self::max_tokens(siblings) - 2;
        // A one-sided block must leave at least one page for its marker
        let edge_fits = edge_count.saturating_add(1) < total_pages;

        let tokens: Vec<PageToken> = match (show_left, show_right) {
            (false, true) if edge_fits => page_numbers(1, edge_count)
                .chain([PageToken::Ellipsis, PageToken::PageNumber(total_pages)])
                .collect(),
            (true, false) if edge_fits => [PageToken::PageNumber(1), PageToken::Ellipsis]
                .into_iter()
                .chain(page_numbers(total_pages - edge_count + 1, total_pages))
                .collect(),
            (true, true) => [PageToken::PageNumber(1), PageToken::Ellipsis]
                .into_iter()
                .chain(page_numbers(left_sibling, right_sibling))
                .chain([PageToken::Ellipsis, PageToken::PageNumber(total_pages)])
                .collect(),
            // Reachable only for s >= 2 with total_pages <= 2·s + 4: the
            // sibling window spans the range, or the marker would hide nothing
            _ => {
                trace!(total_pages, edge_count, "collapse hides nothing, listing every page");
                page_numbers(1, total_pages).collect()
            }
        };

        debug!(
            total_pages,
            current_page = current,
            left_sibling,
            right_sibling,
            show_left,
            show_right,
            tokens = tokens.len(),
            "collapsed page range"
        );

        Ok(PageRange::from_tokens(tokens))
    }

    /// Page count up to which every page is listed: `s + 5`
    pub fn window_width(sibling_count: usize) -> usize {
        sibling_count.saturating_add(5)
    }

    /// Upper bound on the token count for a sibling count: `2·s + 5`
    pub fn max_tokens(sibling_count: usize) -> usize {
        sibling_count.saturating_mul(2).saturating_add(5)
    }
}
