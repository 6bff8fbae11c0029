use std::fmt;
use std::slice;

/// One position in the page-index control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PageToken {
    /// Navigable 1-based page number.
    PageNumber(usize),
    /// Gap marker standing for one or more omitted pages.
    Ellipsis,
}

impl PageToken {
    /// Page number carried by the token, `None` for an ellipsis.
    pub fn page(&self) -> Option<usize> {
        match self {
            PageToken::PageNumber(page) => Some(*page),
            PageToken::Ellipsis => None,
        }
    }

    /// Whether the token is a gap marker.
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageToken::Ellipsis)
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageToken::PageNumber(page) => write!(f, "{page}"),
            PageToken::Ellipsis => f.write_str("…"),
        }
    }
}

/// Ordered token sequence produced by [`RangeCalculator`](super::RangeCalculator).
///
/// Only the calculator builds non-empty ranges, so every range observed
/// through the public API starts at page 1, ends at the last page, and
/// never places two ellipses side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PageRange {
    tokens: Vec<PageToken>,
}

impl PageRange {
    pub(crate) fn from_tokens(tokens: Vec<PageToken>) -> Self {
        Self { tokens }
    }

    /// `[start ..= end]` without gaps; empty when `end < start`.
    pub(crate) fn contiguous(start: usize, end: usize) -> Self {
        Self::from_tokens(page_numbers(start, end).collect())
    }

    /// Tokens in display order
    pub fn tokens(&self) -> &[PageToken] {
        &self.tokens
    }

    /// Number of tokens, ellipses included
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Whether there is nothing to display
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate tokens in display order
    pub fn iter(&self) -> slice::Iter<'_, PageToken> {
        self.tokens.iter()
    }

    /// Visible page numbers, skipping ellipses
    pub fn pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.tokens.iter().filter_map(PageToken::page)
    }

    /// Page of the first token
    pub fn first_page(&self) -> Option<usize> {
        self.tokens.first().and_then(PageToken::page)
    }

    /// Page of the last token
    pub fn last_page(&self) -> Option<usize> {
        self.tokens.last().and_then(PageToken::page)
    }

    /// Number of gap markers (0, 1 or 2)
    pub fn ellipsis_count(&self) -> usize {
        self.tokens.iter().filter(|token| token.is_ellipsis()).count()
    }

    /// Whether `page` is shown as its own token
    pub fn contains_page(&self, page: usize) -> bool {
        self.pages().any(|visible| visible == page)
    }

    /// Consume into the raw token vector
    pub fn into_tokens(self) -> Vec<PageToken> {
        self.tokens
    }
}

impl<'a> IntoIterator for &'a PageRange {
    type Item = &'a PageToken;
    type IntoIter = slice::Iter<'a, PageToken>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for PageRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, token) in self.tokens.iter().enumerate() {
            if idx > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{token}")?;
        }
        Ok(())
    }
}

pub(crate) fn page_numbers(start: usize, end: usize) -> impl Iterator<Item = PageToken> {
    (start..=end).map(PageToken::PageNumber)
}
