//! Item-range arithmetic for "showing X–Y of Z" labels.

use crate::window::WindowError;

/// The inclusive 1-indexed span of items visible on a page.
///
/// Derived from `(current_page, per_page, total_items)`; carries no other
/// state. `start` is not clamped to the data set, so a page past the end
/// produces `end < start` — check [`is_empty`](ItemRange::is_empty) before
/// formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemRange {
    /// First item on the page (1-indexed).
    pub start: usize,
    /// Last item on the page (1-indexed, inclusive).
    pub end: usize,
}

impl ItemRange {
    /// Compute the item range for a page.
    ///
    /// `current_page` is 1-indexed and must be at least 1; `per_page` must
    /// be at least 1. `total_items` may be 0, in which case the range is
    /// empty.
    pub fn compute(
        current_page: usize,
        per_page: usize,
        total_items: usize,
    ) -> Result<Self, WindowError> {
        if per_page == 0 {
            return Err(WindowError::ZeroItemsPerPage);
        }
        // The range itself is open-ended: a page past the data is allowed
        // and comes back empty, so only the 1-indexed floor is enforced.
        if current_page == 0 {
            return Err(WindowError::PageZero);
        }
        Ok(Self {
            start: (current_page - 1) * per_page + 1,
            end: (current_page * per_page).min(total_items),
        })
    }

    /// Whether the page holds no items.
    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }

    /// Number of items on the page.
    pub fn len(&self) -> usize {
        if self.is_empty() {
            0
        } else {
            self.end - self.start + 1
        }
    }
}

/// Number of pages needed to hold `total_items` at `per_page` items each.
///
/// Zero items means zero pages.
pub fn page_count(total_items: usize, per_page: usize) -> Result<usize, WindowError> {
    if per_page == 0 {
        return Err(WindowError::ZeroItemsPerPage);
    }
    Ok(total_items.div_ceil(per_page))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_page_in_the_middle() {
        let r = ItemRange::compute(2, 10, 45).unwrap();
        assert_eq!(r, ItemRange { start: 11, end: 20 });
        assert_eq!(r.len(), 10);
    }

    #[test]
    fn partial_last_page() {
        let r = ItemRange::compute(3, 20, 45).unwrap();
        assert_eq!(r, ItemRange { start: 41, end: 45 });
        assert_eq!(r.len(), 5);
    }

    #[test]
    fn page_past_the_data_is_empty() {
        let r = ItemRange::compute(4, 20, 45).unwrap();
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
    }

    #[test]
    fn zero_items_is_empty() {
        let r = ItemRange::compute(1, 20, 0).unwrap();
        assert_eq!(r.start, 1);
        assert_eq!(r.end, 0);
        assert!(r.is_empty());
    }

    #[test]
    fn zero_per_page_is_rejected() {
        assert_eq!(
            ItemRange::compute(1, 0, 45),
            Err(WindowError::ZeroItemsPerPage)
        );
    }

    #[test]
    fn page_zero_is_rejected_without_claiming_a_bound() {
        let err = ItemRange::compute(0, 20, 45).unwrap_err();
        assert_eq!(err, WindowError::PageZero);
        // The message states only the 1-indexed contract: pages past the
        // data are accepted (as empty), so no upper bound exists to report.
        assert_eq!(err.to_string(), "page numbers start at 1");
    }

    #[test]
    fn page_count_rounds_up() {
        assert_eq!(page_count(45, 20), Ok(3));
        assert_eq!(page_count(40, 20), Ok(2));
        assert_eq!(page_count(1, 20), Ok(1));
        assert_eq!(page_count(0, 20), Ok(0));
        assert_eq!(page_count(45, 0), Err(WindowError::ZeroItemsPerPage));
    }
}
