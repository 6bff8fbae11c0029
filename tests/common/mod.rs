#![allow(dead_code)]

use pagenav::{PageRange, PageToken, PaginationConfig, RangeCalculator};

/// Build a validated config or panic with the offending inputs
pub fn config(total_count: usize, page_size: usize, current_page: usize, siblings: usize) -> PaginationConfig {
    PaginationConfig::builder(total_count, page_size)
        .current_page(current_page)
        .sibling_count(siblings)
        .build()
        .unwrap_or_else(|err| {
            panic!("config ({total_count}, {page_size}, {current_page}, {siblings}) rejected: {err}")
        })
}

/// Shorthand token list: 0 stands for an ellipsis
pub fn tokens(pages: &[usize]) -> Vec<PageToken> {
    pages
        .iter()
        .map(|&page| match page {
            0 => PageToken::Ellipsis,
            page => PageToken::PageNumber(page),
        })
        .collect()
}

/// Check the shape rules every computed range must follow
pub fn assert_range_invariants(config: &PaginationConfig, range: &PageRange) {
    let total_pages = config.total_pages();
    let tokens = range.tokens();

    let budget = RangeCalculator::max_tokens(config.sibling_count);
    assert!(
        tokens.len() <= budget,
        "{} tokens exceed budget {} for {:?}",
        tokens.len(),
        budget,
        config
    );

    if tokens.is_empty() {
        assert_eq!(total_pages, 0, "empty range for {} pages", total_pages);
        return;
    }

    assert_eq!(range.first_page(), Some(1), "range must start at page 1: {range}");
    assert_eq!(
        range.last_page(),
        Some(total_pages),
        "range must end at page {total_pages}: {range}"
    );

    let mut previous: Option<usize> = None;
    for window in tokens.windows(3) {
        if window[1].is_ellipsis() {
            let before = window[0].page().expect("ellipsis preceded by a page");
            let after = window[2].page().expect("ellipsis followed by a page");
            assert!(after - before > 1, "ellipsis hides nothing between {before} and {after}: {range}");
        }
    }
    for page in range.pages() {
        if let Some(prev) = previous {
            assert!(page > prev, "pages not strictly increasing: {range}");
        }
        assert!(page >= 1 && page <= total_pages, "page {page} out of bounds: {range}");
        previous = Some(page);
    }

    assert!(range.ellipsis_count() <= 2, "too many ellipses: {range}");
    for pair in tokens.windows(2) {
        assert!(
            !(pair[0].is_ellipsis() && pair[1].is_ellipsis()),
            "adjacent ellipses: {range}"
        );
    }
}
