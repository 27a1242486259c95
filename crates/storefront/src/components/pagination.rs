//! Page number navigation.

use std::ops::Range;

/// Number of pages needed for `items` at `per_page` (zero when `per_page` is zero).
#[must_use]
pub const fn page_count(items: usize, per_page: usize) -> usize {
    if per_page == 0 {
        0
    } else {
        items.div_ceil(per_page)
    }
}

/// Slice range of the items on `page` (1-based).
#[must_use]
pub fn page_range(page: usize, per_page: usize, items: usize) -> Range<usize> {
    let start = page.saturating_sub(1).saturating_mul(per_page).min(items);
    let end = start.saturating_add(per_page).min(items);
    start..end
}

/// A page link or an ellipsis gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageItem {
    /// `None` for an ellipsis.
    pub number: Option<usize>,
    pub active: bool,
    pub href: String,
}

impl PageItem {
    #[must_use]
    pub const fn is_ellipsis(&self) -> bool {
        self.number.is_none()
    }
}

/// Pagination bar state.
#[derive(Debug, Clone)]
pub struct Pagination {
    pub current: usize,
    pub total: usize,
    pub items: Vec<PageItem>,
    pub prev_href: Option<String>,
    pub next_href: Option<String>,
}

impl Pagination {
    /// Build the bar. `requested` is clamped into `1..=total`.
    #[must_use]
    pub fn new(requested: usize, total: usize, href_for: impl Fn(usize) -> String) -> Self {
        let current = requested.clamp(1, total.max(1));

        let items = (1..=total)
            .filter_map(|page| {
                let near_current = page + 1 >= current && page <= current + 1;
                if total <= 5 || page == 1 || page == total || near_current {
                    Some(PageItem {
                        number: Some(page),
                        active: page == current,
                        href: href_for(page),
                    })
                } else if page + 2 == current || page == current + 2 {
                    Some(PageItem {
                        number: None,
                        active: false,
                        href: String::new(),
                    })
                } else {
                    None
                }
            })
            .collect();

        Self {
            current,
            total,
            items,
            prev_href: (current > 1).then(|| href_for(current - 1)),
            next_href: (current < total).then(|| href_for(current + 1)),
        }
    }

    /// Hidden when everything fits on one page.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.total > 1
    }
}
