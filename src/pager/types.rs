//! Paging system type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Configuration for the paging engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PagerConfig {
    /// Allowed page sizes, in menu order (default: 10/25/50/100)
    pub page_sizes: Vec<usize>,

    /// Page size used before a caller picks one (default: 25)
    pub default_page_size: usize,
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            page_sizes: vec![10, 25, 50, 100],
            default_page_size: 25,
        }
    }
}

/// One slot in the page-selector sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMarker {
    /// A selectable page number
    Page(usize),

    /// A non-interactive gap; never resolves to a page
    Ellipsis,
}

impl PageMarker {
    /// Page number behind this marker, if it has one
    pub fn page(&self) -> Option<usize> {
        match self {
            PageMarker::Page(n) => Some(*n),
            PageMarker::Ellipsis => None,
        }
    }

    /// True for the gap marker
    pub fn is_ellipsis(&self) -> bool {
        matches!(self, PageMarker::Ellipsis)
    }
}

impl fmt::Display for PageMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageMarker::Page(n) => write!(f, "{}", n),
            PageMarker::Ellipsis => write!(f, "…"),
        }
    }
}

/// Computed selector window: total page count plus the marker sequence
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageWindow {
    /// Total number of pages for the current size and item count
    pub total_pages: usize,

    /// Markers to render, in display order
    pub markers: Vec<PageMarker>,
}

impl PageWindow {
    /// True when there is nothing to page through
    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }

    /// True when the sequence carries the given page number
    pub fn contains_page(&self, page: usize) -> bool {
        self.markers.iter().any(|m| m.page() == Some(page))
    }
}

/// Signals emitted when navigation actually changes state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The active page moved
    PageChanged { from: usize, to: usize },

    /// The page size changed and the view returned to the first page
    PageSizeChanged { items_per_page: usize, page: usize },
}
