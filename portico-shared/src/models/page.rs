use serde::{Deserialize, Serialize};

/// Page size used by the entity pages unless the paginator says otherwise.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A bounded slice of a remote table's rows plus the total matching count.
///
/// Page indices are zero-based everywhere in this workspace. `total` is the
/// full server-side row count and is independent of `items.len()`; the two
/// come from separate round trips, so a concurrent insert or delete can make
/// them momentarily inconsistent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Page<T> {
    /// Rows of the requested slice, in the query's order.
    pub items: Vec<T>,
    /// Exact matching row count on the server side.
    pub total: u64,
    /// Zero-based index of this slice.
    pub page_index: u32,
    /// Requested slice length; `items.len() <= page_size`.
    pub page_size: u32,
}

impl<T> Page<T> {
    /// An empty page, used to seed feeds before the first fetch.
    #[must_use]
    pub fn empty(page_index: u32, page_size: u32) -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page_index,
            page_size,
        }
    }

    /// Inclusive row offsets `(first, last)` covered by a page request.
    ///
    /// This is the one place the `[index * size, index * size + size - 1]`
    /// arithmetic lives; both the services and their tests go through it.
    ///
    /// # Panics
    /// Panics if `page_size` is zero; callers validate sizes at the UI edge.
    #[must_use]
    pub fn offsets(page_index: u32, page_size: u32) -> (u64, u64) {
        assert!(page_size > 0, "page size must be positive");
        let first = u64::from(page_index) * u64::from(page_size);
        (first, first + u64::from(page_size) - 1)
    }

    /// Number of pages needed to cover `total` rows at this page size.
    #[must_use]
    pub fn page_count(&self) -> u32 {
        if self.page_size == 0 {
            return 0;
        }
        let size = u64::from(self.page_size);
        u32::try_from(self.total.div_ceil(size)).unwrap_or(u32::MAX)
    }

    /// Whether a further page exists after this one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.page_index + 1) * u64::from(self.page_size) < self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_are_zero_based_inclusive() {
        assert_eq!(Page::<()>::offsets(0, 10), (0, 9));
        assert_eq!(Page::<()>::offsets(1, 10), (10, 19));
        assert_eq!(Page::<()>::offsets(3, 5), (15, 19));
        assert_eq!(Page::<()>::offsets(0, 1), (0, 0));
    }

    #[test]
    fn offsets_do_not_overflow_large_indices() {
        let (first, last) = Page::<()>::offsets(u32::MAX, 100);
        assert_eq!(first, u64::from(u32::MAX) * 100);
        assert_eq!(last, first + 99);
    }

    #[test]
    fn empty_page_holds_the_requested_window() {
        let page = Page::<i64>::empty(2, 25);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.page_index, 2);
        assert_eq!(page.page_size, 25);
    }

    #[test]
    fn page_count_rounds_up() {
        let mut page = Page::<i64>::empty(0, 10);
        page.total = 0;
        assert_eq!(page.page_count(), 0);
        page.total = 10;
        assert_eq!(page.page_count(), 1);
        page.total = 11;
        assert_eq!(page.page_count(), 2);
    }

    #[test]
    fn has_next_respects_total() {
        let mut page = Page::<i64>::empty(0, 10);
        page.total = 10;
        assert!(!page.has_next());
        page.total = 11;
        assert!(page.has_next());
        page.page_index = 1;
        assert!(!page.has_next());
    }

    #[test]
    fn page_serializes_with_plain_field_names() {
        let page = Page {
            items: vec![1_i64, 2, 3],
            total: 57,
            page_index: 0,
            page_size: 3,
        };
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["total"], 57);
        assert_eq!(json["page_index"], 0);
        assert_eq!(json["items"].as_array().unwrap().len(), 3);
    }
}
