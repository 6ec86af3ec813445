//! Stateful paging manager
//! Owns one view's paging state and recomputes the selector window on every change

use crate::pager::types::{PageEvent, PageMarker, PagerConfig, PageWindow};
use crate::pager::window;

/// Paging state for a single rendered list view
///
/// Navigation methods return `Some(PageEvent)` only when state actually
/// changed; invalid or redundant targets are ignored, never faulted.
#[derive(Debug, Clone)]
pub struct PageManager {
    /// Paging configuration
    config: PagerConfig,

    /// Active 1-indexed page
    current_page: usize,

    /// Rows shown per page
    items_per_page: usize,

    /// Total rows across all pages
    total_items: usize,

    /// Selector window for the current state
    window: PageWindow,
}

impl PageManager {
    /// Create a manager with the default configuration
    pub fn new() -> Self {
        Self::with_config(PagerConfig::default())
    }

    /// Create a manager with a custom configuration
    pub fn with_config(config: PagerConfig) -> Self {
        let items_per_page = config.default_page_size.max(1);
        let mut manager = Self {
            config,
            current_page: 1,
            items_per_page,
            total_items: 0,
            window: PageWindow::default(),
        };
        manager.recompute();
        manager
    }

    /// Active 1-indexed page
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Rows shown per page
    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    /// Total rows across all pages
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Total page count for the current state
    pub fn total_pages(&self) -> usize {
        self.window.total_pages
    }

    /// Selector window for the current state
    pub fn window(&self) -> &PageWindow {
        &self.window
    }

    /// Paging configuration
    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// Jump to a page number
    ///
    /// Ignored when the target is below 1, past the last page, or already
    /// the active page. Complexity: O(1).
    pub fn go_to_page(&mut self, target: usize) -> Option<PageEvent> {
        if target < 1 || target > self.window.total_pages || target == self.current_page {
            return None;
        }
        let from = self.current_page;
        self.current_page = target;
        self.recompute();
        Some(PageEvent::PageChanged { from, to: target })
    }

    /// Jump to the page behind a selector marker; ellipsis markers are
    /// placeholders and never navigate
    pub fn go_to(&mut self, marker: PageMarker) -> Option<PageEvent> {
        self.go_to_page(marker.page()?)
    }

    /// Step back one page; no-op on the first page
    pub fn previous_page(&mut self) -> Option<PageEvent> {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    /// Step forward one page; no-op on the last page
    pub fn next_page(&mut self) -> Option<PageEvent> {
        self.go_to_page(self.current_page + 1)
    }

    /// Jump to the first page
    pub fn first_page(&mut self) -> Option<PageEvent> {
        self.go_to_page(1)
    }

    /// Jump to the last page
    pub fn last_page(&mut self) -> Option<PageEvent> {
        self.go_to_page(self.window.total_pages)
    }

    /// Change the page size and return to the first page
    ///
    /// Always resets to page 1, even when the size is unchanged, so the
    /// view can never be stranded past the new last page. Sizes below 1
    /// are clamped.
    pub fn set_items_per_page(&mut self, size: usize) -> PageEvent {
        self.items_per_page = size.max(1);
        self.current_page = 1;
        self.recompute();
        PageEvent::PageSizeChanged {
            items_per_page: self.items_per_page,
            page: self.current_page,
        }
    }

    /// Apply a new total row count, keeping the active page in range
    ///
    /// A shrinking total silently clamps the active page to the new last
    /// page; no event fires.
    pub fn set_total_items(&mut self, total: usize) {
        self.total_items = total;
        let total_pages = window::total_pages(total, self.items_per_page);
        self.current_page = self.current_page.clamp(1, total_pages.max(1));
        self.recompute();
    }

    /// 1-indexed inclusive row bounds of the active page
    pub fn visible_range(&self) -> (usize, usize) {
        window::visible_range(self.current_page, self.items_per_page, self.total_items)
    }

    /// True when a previous page exists
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// True when a further page exists
    pub fn has_next(&self) -> bool {
        self.current_page < self.window.total_pages
    }

    fn recompute(&mut self) {
        self.window = window::compute_window(self.current_page, self.items_per_page, self.total_items);
    }
}

impl Default for PageManager {
    fn default() -> Self {
        Self::new()
    }
}
