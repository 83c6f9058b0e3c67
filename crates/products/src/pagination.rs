//! Page arithmetic over an ordered sequence.
//!
//! Pages are 1-indexed. A collection always has at least one page, even when
//! empty, so `page == 1` is always a valid cursor.

use core::num::NonZeroUsize;
use core::ops::Range;

/// `ceil(count / per_page)`, minimum 1.
pub fn total_pages(count: usize, per_page: NonZeroUsize) -> usize {
    count.div_ceil(per_page.get()).max(1)
}

/// Index range of `page` inside a sequence of `len` items.
///
/// Out-of-range pages yield an empty range at the end; page 0 is treated as
/// page 1.
pub fn page_bounds(page: usize, per_page: NonZeroUsize, len: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(per_page.get()).min(len);
    let end = start.saturating_add(per_page.get()).min(len);
    start..end
}

/// Clamp a cursor into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Page before `page`, if any.
pub fn prev_page(page: usize) -> Option<usize> {
    (page > 1).then(|| page - 1)
}

/// Page after `page`, if it exists.
pub fn next_page(page: usize, total_pages: usize) -> Option<usize> {
    (page < total_pages).then(|| page + 1)
}

/// One page of items plus enough context to render pager controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub per_page: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// Slice `page` out of `items`.
    pub fn slice<I>(items: I, page: usize, per_page: NonZeroUsize) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let all: Vec<T> = items.into_iter().collect();
        let total_items = all.len();
        let bounds = page_bounds(page, per_page, total_items);

        Self {
            items: all.into_iter().skip(bounds.start).take(bounds.len()).collect(),
            page,
            per_page: per_page.get(),
            total_items,
            total_pages: total_pages(total_items, per_page),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_prev(&self) -> bool {
        prev_page(self.page).is_some()
    }

    pub fn has_next(&self) -> bool {
        next_page(self.page, self.total_pages).is_some()
    }

    /// 1-based position of the `index`-th row of this page within the whole
    /// sequence (the "Sr. No." column).
    pub fn serial_number(&self, index: usize) -> usize {
        self.page.saturating_sub(1) * self.per_page + index + 1
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            per_page: self.per_page,
            total_items: self.total_items,
            total_pages: self.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn per_page(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    #[test]
    fn total_pages_rounds_up_with_minimum_one() {
        assert_eq!(total_pages(0, per_page(5)), 1);
        assert_eq!(total_pages(5, per_page(5)), 1);
        assert_eq!(total_pages(9, per_page(5)), 2);
        assert_eq!(total_pages(12, per_page(5)), 3);
    }

    #[test]
    fn bounds_cover_a_partial_last_page() {
        assert_eq!(page_bounds(1, per_page(5), 12), 0..5);
        assert_eq!(page_bounds(3, per_page(5), 12), 10..12);
    }

    #[test]
    fn bounds_past_the_end_are_empty() {
        assert!(page_bounds(4, per_page(5), 12).is_empty());
        assert!(page_bounds(usize::MAX, per_page(5), 12).is_empty());
    }

    #[test]
    fn page_zero_reads_as_first_page() {
        assert_eq!(page_bounds(0, per_page(5), 12), 0..5);
    }

    #[test]
    fn clamp_keeps_cursor_in_range() {
        assert_eq!(clamp_page(3, 2), 2);
        assert_eq!(clamp_page(0, 2), 1);
        assert_eq!(clamp_page(2, 0), 1);
    }

    #[test]
    fn prev_and_next_stop_at_the_edges() {
        assert_eq!(prev_page(1), None);
        assert_eq!(prev_page(3), Some(2));
        assert_eq!(next_page(3, 3), None);
        assert_eq!(next_page(1, 3), Some(2));
    }

    #[test]
    fn slice_reports_context_for_pager_controls() {
        let page = Page::slice(1..=12, 2, per_page(5));
        assert_eq!(page.items, vec![6, 7, 8, 9, 10]);
        assert_eq!(page.total_items, 12);
        assert_eq!(page.total_pages, 3);
        assert!(page.has_prev());
        assert!(page.has_next());
        assert_eq!(page.serial_number(0), 6);
    }

    #[test]
    fn map_keeps_page_context() {
        let page = Page::slice(1..=3, 1, per_page(2)).map(|n| n * 10);
        assert_eq!(page.items, vec![10, 20]);
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_prev());
    }
}
