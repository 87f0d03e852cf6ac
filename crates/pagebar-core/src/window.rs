//! Page-window computation: which page numbers (and ellipses) to show.

/// Maximum number of concrete page numbers in the window before truncation.
pub const MAX_VISIBLE: usize = 5;

/// Total page count above which first/last anchor buttons become relevant.
pub const ANCHOR_THRESHOLD: usize = 7;

/// Errors produced by the strict pagination constructors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// The current page lies outside `1..=total_pages`.
    #[error("page {page} is out of range 1..={total_pages}")]
    PageOutOfRange {
        /// The offending page number.
        page: usize,
        /// The total page count it was checked against.
        total_pages: usize,
    },
    /// A 1-indexed operation was given page 0, with no total page count
    /// available to report a full range against.
    #[error("page numbers start at 1")]
    PageZero,
    /// An item range was requested with zero items per page.
    #[error("items per page must be at least 1")]
    ZeroItemsPerPage,
}

/// A single renderable unit in a pagination control: a page number or an
/// ellipsis standing in for a run of hidden pages.
///
/// Pages are 1-indexed. Ellipses carry no page value and are not selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageIndicator {
    /// A concrete, selectable page number.
    Page {
        /// The page number (1-indexed).
        page: usize,
        /// Whether this is the current page.
        active: bool,
    },
    /// A marker for one or more hidden pages.
    Ellipsis,
}

impl PageIndicator {
    /// The page number, if this indicator is a concrete page.
    pub fn page(&self) -> Option<usize> {
        match *self {
            PageIndicator::Page { page, .. } => Some(page),
            PageIndicator::Ellipsis => None,
        }
    }

    /// Whether this indicator is the current page.
    pub fn is_active(&self) -> bool {
        matches!(*self, PageIndicator::Page { active: true, .. })
    }

    /// Whether this indicator is an ellipsis marker.
    pub fn is_ellipsis(&self) -> bool {
        matches!(*self, PageIndicator::Ellipsis)
    }
}

/// The computed pagination display: an ordered indicator sequence plus the
/// enabled state of the previous/next controls.
///
/// A `PageWindow` is a pure value derived from `(current_page, total_pages)`.
/// It holds no other state and is meant to be recomputed on every render
/// pass rather than stored.
///
/// The layout rule: up to [`MAX_VISIBLE`] page numbers centered on the
/// current page, pinned to `[1, 5]` or `[total-4, total]` near the edges.
/// Once the total page count exceeds [`ANCHOR_THRESHOLD`], a "page 1" anchor
/// appears before the window when the current page is past 4 (with an
/// ellipsis once past 5), and a last-page anchor appears after it while the
/// current page is more than 3 short of the end (with an ellipsis while more
/// than 4 short). The leading and trailing thresholds are deliberately
/// asymmetric; see the repository design notes before "fixing" either.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageWindow {
    /// Ordered indicators to render, left to right.
    pub indicators: Vec<PageIndicator>,
    /// Whether a "previous page" control should be enabled.
    pub can_go_previous: bool,
    /// Whether a "next page" control should be enabled.
    pub can_go_next: bool,
}

impl PageWindow {
    /// Compute the window, validating that `current_page` lies in
    /// `1..=total_pages`.
    ///
    /// With `total_pages == 0` there is no valid range to check against;
    /// `current_page` is ignored and the empty window is returned.
    pub fn compute(current_page: usize, total_pages: usize) -> Result<Self, WindowError> {
        if total_pages > 0 && (current_page < 1 || current_page > total_pages) {
            return Err(WindowError::PageOutOfRange {
                page: current_page,
                total_pages,
            });
        }
        Ok(Self::clamped(current_page, total_pages))
    }

    /// Compute the window, clamping `current_page` into `1..=total_pages`
    /// instead of rejecting out-of-range input.
    ///
    /// With zero or one total pages there is nothing to navigate: the
    /// indicator list is empty and both navigation flags are false.
    pub fn clamped(current_page: usize, total_pages: usize) -> Self {
        if total_pages <= 1 {
            return Self::default();
        }
        let current = current_page.clamp(1, total_pages);

        let (first, last) = if total_pages <= MAX_VISIBLE {
            (1, total_pages)
        } else if current <= 3 {
            (1, MAX_VISIBLE)
        } else if current >= total_pages - 2 {
            (total_pages - (MAX_VISIBLE - 1), total_pages)
        } else {
            (current - 2, current + 2)
        };

        let mut indicators: Vec<PageIndicator> = (first..=last)
            .map(|page| PageIndicator::Page {
                page,
                active: page == current,
            })
            .collect();

        if total_pages > ANCHOR_THRESHOLD {
            if current > 4 {
                if current > 5 {
                    indicators.insert(0, PageIndicator::Ellipsis);
                }
                indicators.insert(
                    0,
                    PageIndicator::Page {
                        page: 1,
                        active: false,
                    },
                );
            }
            if current < total_pages - 3 {
                if current < total_pages - 4 {
                    indicators.push(PageIndicator::Ellipsis);
                }
                indicators.push(PageIndicator::Page {
                    page: total_pages,
                    active: false,
                });
            }
        }

        Self {
            indicators,
            can_go_previous: current > 1,
            can_go_next: current < total_pages,
        }
    }

    /// Whether there is anything to render.
    pub fn is_empty(&self) -> bool {
        self.indicators.is_empty()
    }

    /// The concrete page numbers in display order.
    pub fn pages(&self) -> impl Iterator<Item = usize> + '_ {
        self.indicators.iter().filter_map(PageIndicator::page)
    }

    /// The page marked active, if any.
    pub fn active_page(&self) -> Option<usize> {
        self.indicators
            .iter()
            .find(|i| i.is_active())
            .and_then(PageIndicator::page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: usize) -> PageIndicator {
        PageIndicator::Page {
            page,
            active: false,
        }
    }

    fn active(page: usize) -> PageIndicator {
        PageIndicator::Page { page, active: true }
    }

    // ── Nothing to navigate ──

    #[test]
    fn zero_pages_yields_empty_window() {
        let w = PageWindow::clamped(1, 0);
        assert!(w.is_empty());
        assert!(!w.can_go_previous);
        assert!(!w.can_go_next);
    }

    #[test]
    fn single_page_yields_empty_window() {
        let w = PageWindow::clamped(1, 1);
        assert!(w.is_empty());
        assert!(!w.can_go_previous);
        assert!(!w.can_go_next);
    }

    #[test]
    fn compute_ignores_current_page_when_no_pages() {
        assert_eq!(PageWindow::compute(7, 0), Ok(PageWindow::default()));
    }

    // ── Full run (no truncation) ──

    #[test]
    fn three_pages_shows_all_without_ellipsis() {
        let w = PageWindow::clamped(2, 3);
        assert_eq!(w.indicators, vec![page(1), active(2), page(3)]);
        assert!(w.can_go_previous);
        assert!(w.can_go_next);
    }

    #[test]
    fn five_pages_shows_all() {
        let w = PageWindow::clamped(5, 5);
        assert_eq!(
            w.indicators,
            vec![page(1), page(2), page(3), page(4), page(5)]
        );
        assert_eq!(w.active_page(), Some(5));
        assert!(!w.can_go_next);
    }

    // ── Truncated window, below the anchor threshold ──

    #[test]
    fn seven_pages_truncates_without_anchors() {
        let w = PageWindow::clamped(1, 7);
        assert_eq!(
            w.indicators,
            vec![active(1), page(2), page(3), page(4), page(5)]
        );
        assert!(w.can_go_next);
    }

    #[test]
    fn seven_pages_right_edge_has_no_leading_anchor() {
        let w = PageWindow::clamped(7, 7);
        assert_eq!(
            w.indicators,
            vec![page(3), page(4), page(5), page(6), active(7)]
        );
    }

    // ── Anchors and ellipses ──

    #[test]
    fn first_page_of_ten_gets_trailing_ellipsis_and_anchor() {
        let w = PageWindow::clamped(1, 10);
        assert_eq!(
            w.indicators,
            vec![
                active(1),
                page(2),
                page(3),
                page(4),
                page(5),
                PageIndicator::Ellipsis,
                page(10),
            ]
        );
        assert!(!w.can_go_previous);
        assert!(w.can_go_next);
    }

    #[test]
    fn last_page_of_ten_gets_leading_anchor_and_ellipsis() {
        let w = PageWindow::clamped(10, 10);
        assert_eq!(
            w.indicators,
            vec![
                page(1),
                PageIndicator::Ellipsis,
                page(6),
                page(7),
                page(8),
                page(9),
                active(10),
            ]
        );
        assert!(w.can_go_previous);
        assert!(!w.can_go_next);
    }

    #[test]
    fn middle_page_gets_both_anchors() {
        let w = PageWindow::clamped(10, 20);
        assert_eq!(
            w.indicators,
            vec![
                page(1),
                PageIndicator::Ellipsis,
                page(8),
                page(9),
                active(10),
                page(11),
                page(12),
                PageIndicator::Ellipsis,
                page(20),
            ]
        );
    }

    // Four pages from the end: the last-page anchor still appears, but the
    // trailing ellipsis threshold is already missed. Matches the leading
    // side's off-by-one counterpart below; both are pinned on purpose.
    #[test]
    fn page_six_of_ten_trailing_anchor_without_ellipsis() {
        let w = PageWindow::clamped(6, 10);
        assert_eq!(
            w.indicators,
            vec![
                page(1),
                PageIndicator::Ellipsis,
                page(4),
                page(5),
                active(6),
                page(7),
                page(8),
                page(10),
            ]
        );
    }

    #[test]
    fn page_five_of_ten_leading_anchor_without_ellipsis() {
        let w = PageWindow::clamped(5, 10);
        assert_eq!(
            w.indicators,
            vec![
                page(1),
                page(3),
                page(4),
                active(5),
                page(6),
                page(7),
                PageIndicator::Ellipsis,
                page(10),
            ]
        );
    }

    // At page 4 the window starts at 2 but the leading-anchor rule has not
    // fired yet, so page 1 is unreachable by direct click.
    #[test]
    fn page_four_of_ten_omits_page_one_entirely() {
        let w = PageWindow::clamped(4, 10);
        assert_eq!(
            w.indicators,
            vec![
                page(2),
                page(3),
                active(4),
                page(5),
                page(6),
                PageIndicator::Ellipsis,
                page(10),
            ]
        );
    }

    #[test]
    fn eight_pages_is_first_total_with_anchors() {
        let w = PageWindow::clamped(8, 8);
        assert_eq!(
            w.indicators,
            vec![
                page(1),
                PageIndicator::Ellipsis,
                page(4),
                page(5),
                page(6),
                page(7),
                active(8),
            ]
        );
    }

    // ── Navigation flags ──

    #[test]
    fn nav_flags_follow_position() {
        let w = PageWindow::clamped(1, 4);
        assert!(!w.can_go_previous);
        assert!(w.can_go_next);

        let w = PageWindow::clamped(2, 4);
        assert!(w.can_go_previous);
        assert!(w.can_go_next);

        let w = PageWindow::clamped(4, 4);
        assert!(w.can_go_previous);
        assert!(!w.can_go_next);
    }

    // ── Clamping and validation ──

    #[test]
    fn clamped_pulls_zero_up_to_first_page() {
        let w = PageWindow::clamped(0, 10);
        assert_eq!(w.active_page(), Some(1));
        assert!(!w.can_go_previous);
    }

    #[test]
    fn clamped_pulls_overshoot_down_to_last_page() {
        let w = PageWindow::clamped(99, 10);
        assert_eq!(w.active_page(), Some(10));
        assert!(!w.can_go_next);
    }

    #[test]
    fn compute_rejects_page_zero() {
        assert_eq!(
            PageWindow::compute(0, 10),
            Err(WindowError::PageOutOfRange {
                page: 0,
                total_pages: 10
            })
        );
    }

    #[test]
    fn compute_rejects_page_past_end() {
        assert_eq!(
            PageWindow::compute(11, 10),
            Err(WindowError::PageOutOfRange {
                page: 11,
                total_pages: 10
            })
        );
    }

    #[test]
    fn error_message_names_the_range() {
        let err = PageWindow::compute(11, 10).unwrap_err();
        assert_eq!(err.to_string(), "page 11 is out of range 1..=10");
    }

    // ── Structural invariants, swept across inputs ──

    #[test]
    fn pages_are_strictly_increasing_and_in_range() {
        for total in 0..=25 {
            for current in 1..=total.max(1) {
                let w = PageWindow::clamped(current, total);
                let pages: Vec<usize> = w.pages().collect();
                assert!(
                    pages.windows(2).all(|p| p[0] < p[1]),
                    "not increasing: current={current} total={total} {pages:?}"
                );
                assert!(
                    pages.iter().all(|&p| p >= 1 && p <= total),
                    "out of range: current={current} total={total} {pages:?}"
                );
            }
        }
    }

    #[test]
    fn exactly_one_active_indicator_matching_current() {
        for total in 2..=25 {
            for current in 1..=total {
                let w = PageWindow::clamped(current, total);
                let actives: Vec<usize> = w
                    .indicators
                    .iter()
                    .filter(|i| i.is_active())
                    .filter_map(PageIndicator::page)
                    .collect();
                assert_eq!(actives, vec![current], "total={total}");
            }
        }
    }

    #[test]
    fn at_most_one_ellipsis_per_side_never_at_the_edges() {
        for total in 2..=25 {
            for current in 1..=total {
                let w = PageWindow::clamped(current, total);
                let ellipses = w.indicators.iter().filter(|i| i.is_ellipsis()).count();
                assert!(ellipses <= 2, "current={current} total={total}");
                // An ellipsis always sits between an anchor and the window,
                // so it can be neither first nor last, and two never touch.
                if let (Some(first), Some(last)) =
                    (w.indicators.first(), w.indicators.last())
                {
                    assert!(!first.is_ellipsis() && !last.is_ellipsis());
                }
                assert!(w
                    .indicators
                    .windows(2)
                    .all(|p| !(p[0].is_ellipsis() && p[1].is_ellipsis())));
            }
        }
    }

    #[test]
    fn recomputation_is_deterministic() {
        for (current, total) in [(1, 10), (6, 10), (13, 40), (3, 3)] {
            assert_eq!(
                PageWindow::clamped(current, total),
                PageWindow::clamped(current, total)
            );
        }
    }
}
