//! Navigation affordances around a page range
//!
//! The controller turns a config into everything a render layer needs:
//! tokens to draw, whether to draw at all, and first/previous/next/last
//! buttons. Page changes flow back through a single
//! [`PageChangeHandler`]; the controller itself keeps no state.

mod handler;

pub use handler::PageChangeHandler;

use tracing::{debug, warn};

use crate::range::{PageRange, PageToken, RangeCalculator};
use crate::{PaginationConfig, PaginationError};

/// The four fixed navigation buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NavigationKind {
    /// Jump to page 1
    First,
    /// Step one page back
    Previous,
    /// Step one page forward
    Next,
    /// Jump to the last page
    Last,
}

impl NavigationKind {
    /// Buttons in display order
    pub const ALL: [NavigationKind; 4] = [
        NavigationKind::First,
        NavigationKind::Previous,
        NavigationKind::Next,
        NavigationKind::Last,
    ];

    /// Stable accessibility label for the button
    pub fn label(self) -> &'static str {
        match self {
            NavigationKind::First => "first-page",
            NavigationKind::Previous => "previous-page",
            NavigationKind::Next => "next-page",
            NavigationKind::Last => "last-page",
        }
    }
}

/// State of one navigation button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavButton {
    /// Whether the button may be pressed
    pub enabled: bool,
    /// Page requested when pressed
    pub target_page: usize,
}

/// First/previous/next/last buttons for one view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NavigationState {
    /// Jump to page 1
    pub first: NavButton,
    /// Step back
    pub previous: NavButton,
    /// Step forward
    pub next: NavButton,
    /// Jump to the last page
    pub last: NavButton,
}

impl NavigationState {
    /// Derive buttons for `current_page` in a range ending at `last_page`
    pub fn new(current_page: usize, last_page: usize) -> Self {
        let not_first = current_page != 1;
        let not_last = current_page != last_page;

        Self {
            first: NavButton {
                enabled: not_first,
                target_page: 1,
            },
            previous: NavButton {
                enabled: not_first,
                target_page: current_page.saturating_sub(1),
            },
            next: NavButton {
                enabled: not_last,
                target_page: current_page.saturating_add(1),
            },
            last: NavButton {
                enabled: not_last,
                target_page: last_page,
            },
        }
    }

    /// Button for `kind`
    pub fn button(&self, kind: NavigationKind) -> NavButton {
        match kind {
            NavigationKind::First => self.first,
            NavigationKind::Previous => self.previous,
            NavigationKind::Next => self.next,
            NavigationKind::Last => self.last,
        }
    }

    /// Buttons paired with their kind, in display order
    pub fn iter(&self) -> impl Iterator<Item = (NavigationKind, NavButton)> + '_ {
        NavigationKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.button(kind)))
    }
}

/// Render-ready token with its highlight state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageEntry {
    /// Token to draw
    pub token: PageToken,
    /// Whether this is the current page
    pub selected: bool,
}

/// Everything the render layer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PaginationView {
    /// Tokens to display
    pub tokens: PageRange,
    /// Navigation buttons
    pub navigation: NavigationState,
    /// Whether the control should be drawn at all
    pub visible: bool,
    /// Current page after clamping into the valid range
    pub current_page: usize,
    /// Page of the final token
    pub last_page: usize,
}

impl PaginationView {
    /// Tokens annotated with the selected flag
    pub fn entries(&self) -> Vec<PageEntry> {
        self.tokens
            .iter()
            .map(|&token| PageEntry {
                token,
                selected: token.page() == Some(self.current_page),
            })
            .collect()
    }

    /// Handle a click on `token`.
    ///
    /// A page number always reaches the handler, the current page
    /// included; an ellipsis never does. Returns whether the handler ran.
    pub fn select_token<H>(&self, token: PageToken, handler: &mut H) -> bool
    where
        H: PageChangeHandler + ?Sized,
    {
        match token {
            PageToken::PageNumber(page) => {
                handler.on_page_change(page);
                true
            }
            PageToken::Ellipsis => false,
        }
    }

    /// Handle a click on a navigation button.
    ///
    /// Disabled buttons are inert. Returns whether the handler ran.
    pub fn navigate<H>(&self, kind: NavigationKind, handler: &mut H) -> bool
    where
        H: PageChangeHandler + ?Sized,
    {
        let button = self.navigation.button(kind);
        if !button.enabled {
            return false;
        }
        handler.on_page_change(button.target_page);
        true
    }
}

/// Stateless projection of a config onto a [`PaginationView`]
#[derive(Debug, Clone, Copy)]
pub struct PaginationController;

impl PaginationController {
    /// Derive tokens, visibility and navigation for `config`.
    ///
    /// The current page is clamped into `[1, max(total_pages, 1)]` first,
    /// so no button ever targets a page past the end.
    pub fn derive(config: &PaginationConfig) -> Result<PaginationView, PaginationError> {
        config.validate()?;

        let total_pages = config.total_pages();
        let current_page = config.clamped_current_page();
        if current_page != config.current_page {
            warn!(
                requested = config.current_page,
                clamped = current_page,
                total_pages,
                "current page out of range"
            );
        }

        let tokens = RangeCalculator::compute(&config.with_current_page(current_page))?;
        let last_page = tokens.last_page().unwrap_or(total_pages.max(1));
        let visible = current_page != 0 && tokens.len() >= 2;
        let navigation = NavigationState::new(current_page, last_page);

        debug!(current_page, last_page, visible, "derived pagination view");

        Ok(PaginationView {
            tokens,
            navigation,
            visible,
            current_page,
            last_page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view(total_count: usize, page_size: usize, current: usize) -> PaginationView {
        let config = PaginationConfig::new(total_count, page_size, current).unwrap();
        PaginationController::derive(&config).unwrap()
    }

    #[test]
    fn test_navigation_on_first_page() {
        let view = view(100, 5, 1);
        assert!(view.visible);
        assert!(!view.navigation.first.enabled);
        assert!(!view.navigation.previous.enabled);
        assert!(view.navigation.next.enabled);
        assert!(view.navigation.last.enabled);
        assert_eq!(view.navigation.next.target_page, 2);
        assert_eq!(view.navigation.last.target_page, 20);
    }

    #[test]
    fn test_navigation_on_last_page() {
        let view = view(100, 5, 20);
        assert!(view.navigation.first.enabled);
        assert_eq!(view.navigation.previous.target_page, 19);
        assert!(!view.navigation.next.enabled);
        assert!(!view.navigation.last.enabled);
    }

    #[test]
    fn test_single_page_is_hidden() {
        let view = view(3, 5, 1);
        assert_eq!(view.tokens.tokens(), &[PageToken::PageNumber(1)]);
        assert!(!view.visible);
    }

    #[test]
    fn test_empty_data_set_is_hidden() {
        let view = view(0, 5, 1);
        assert!(view.tokens.is_empty());
        assert!(!view.visible);
        assert_eq!(view.last_page, 1);
        assert!(!view.navigation.next.enabled);
    }

    #[test]
    fn test_out_of_range_page_is_clamped() {
        let view = view(100, 5, 99);
        assert_eq!(view.current_page, 20);
        assert!(!view.navigation.next.enabled);
        assert_eq!(view.navigation.previous.target_page, 19);
    }

    #[test]
    fn test_ellipsis_click_is_inert() {
        let view = view(100, 5, 10);
        let mut calls = Vec::new();
        assert!(!view.select_token(PageToken::Ellipsis, &mut |page: usize| calls.push(page)));
        assert!(calls.is_empty());
    }

    #[test]
    fn test_reselecting_current_page_still_notifies() {
        let view = view(100, 5, 10);
        let mut calls = Vec::new();
        assert!(view.select_token(PageToken::PageNumber(10), &mut |page: usize| calls.push(page)));
        assert_eq!(calls, vec![10]);
    }

    #[test]
    fn test_disabled_button_is_inert() {
        let view = view(100, 5, 1);
        let mut calls = Vec::new();
        let mut record = |page: usize| calls.push(page);
        assert!(!view.navigate(NavigationKind::Previous, &mut record));
        assert!(view.navigate(NavigationKind::Last, &mut record));
        assert_eq!(calls, vec![20]);
    }

    #[test]
    fn test_entries_mark_current_page() {
        let view = view(100, 5, 10);
        let selected: Vec<_> = view
            .entries()
            .into_iter()
            .filter(|entry| entry.selected)
            .map(|entry| entry.token)
            .collect();
        assert_eq!(selected, vec![PageToken::PageNumber(10)]);
    }

    #[test]
    fn test_labels_in_display_order() {
        let labels: Vec<_> = view(100, 5, 10)
            .navigation
            .iter()
            .map(|(kind, _)| kind.label())
            .collect();
        assert_eq!(
            labels,
            vec!["first-page", "previous-page", "next-page", "last-page"]
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_view_types_are_serializable() {
        fn assert_serde<T: serde::Serialize + serde::de::DeserializeOwned>() {}
        assert_serde::<PageEntry>();
        assert_serde::<PaginationView>();
        assert_serde::<NavigationKind>();
        assert_serde::<PaginationConfig>();
    }
}
