//! pagebuddy - Paginated Data Browser
//!
//! A terminal tool for browsing row-oriented data one page at a time,
//! built around a small paging engine that other programs can reuse.
//!
//! # Architecture
//!
//! - **pager**: page window calculation and navigation state
//! - **dataset**: row sources (files and generated samples)
//! - **store** / **settings**: remembered per-view preferences
//! - **viewer**: the interactive terminal session

pub mod cli;
pub mod config;
pub mod dataset;
pub mod errors;
pub mod pager;
pub mod settings;
pub mod store;
pub mod viewer;

// Re-export commonly used types
pub use errors::{PagerError, Result};
pub use pager::{PageEvent, PageManager, PageMarker, PageWindow, PagerConfig};
