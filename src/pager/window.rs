//! Page window computation
//! Collapses large page counts into a bounded selector sequence

use crate::pager::types::{PageMarker, PageWindow};

/// Largest page count rendered in full; above this the sequence
/// collapses around the current page with ellipsis gaps
pub const MAX_VISIBLE_PAGES: usize = 7;

/// Total page count for an item count at a page size
///
/// Formula: ceil(total_items / items_per_page), with a zero-size guard.
/// Zero items means zero pages.
pub fn total_pages(total_items: usize, items_per_page: usize) -> usize {
    total_items.div_ceil(items_per_page.max(1))
}

/// Compute the selector window for the given paging state
///
/// Guarantees:
/// - At most 9 markers regardless of page count
/// - First and last page always present once there are pages
/// - The current page always present, clamped into range first
/// - Pure: equal inputs produce equal windows
pub fn compute_window(current_page: usize, items_per_page: usize, total_items: usize) -> PageWindow {
    let total = total_pages(total_items, items_per_page);
    if total == 0 {
        return PageWindow::default();
    }

    let current = current_page.clamp(1, total);

    let markers = if total <= MAX_VISIBLE_PAGES {
        // Small enough to show every page
        (1..=total).map(PageMarker::Page).collect()
    } else if current <= 4 {
        // Near the start: first five pages, one gap, the last page
        vec![
            PageMarker::Page(1),
            PageMarker::Page(2),
            PageMarker::Page(3),
            PageMarker::Page(4),
            PageMarker::Page(5),
            PageMarker::Ellipsis,
            PageMarker::Page(total),
        ]
    } else if current >= total - 3 {
        // Near the end: first page, one gap, the last five pages
        let mut markers = vec![PageMarker::Page(1), PageMarker::Ellipsis];
        markers.extend((total - 4..=total).map(PageMarker::Page));
        markers
    } else {
        // Middle: anchors at both ends, gaps around the local triple
        vec![
            PageMarker::Page(1),
            PageMarker::Ellipsis,
            PageMarker::Page(current - 1),
            PageMarker::Page(current),
            PageMarker::Page(current + 1),
            PageMarker::Ellipsis,
            PageMarker::Page(total),
        ]
    };

    PageWindow {
        total_pages: total,
        markers,
    }
}

/// 1-indexed inclusive item bounds for the current page
///
/// Feeds display strings like "Showing 11-20 of 47 rows". The last page
/// caps at the item count; an empty state yields the empty range (1, 0).
pub fn visible_range(current_page: usize, items_per_page: usize, total_items: usize) -> (usize, usize) {
    let per = items_per_page.max(1);
    let page = current_page.max(1);
    let start = (page - 1) * per + 1;
    let end = (page * per).min(total_items);
    (start, end)
}
