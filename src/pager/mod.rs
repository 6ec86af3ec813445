//! Paging engine
//! Turns (current page, page size, item count) into a bounded selector window

pub mod manager;
pub mod types;
pub mod window;

pub use manager::PageManager;
pub use types::{PageEvent, PageMarker, PagerConfig, PageWindow};
pub use window::{compute_window, total_pages, visible_range, MAX_VISIBLE_PAGES};
