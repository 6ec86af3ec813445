//! CLI module for pagebuddy
//!
//! Handles command-line argument parsing.

pub mod args;

pub use args::{sanitize_view_name, Args, Commands};
