//! # Campground List
//!
//! This crate holds the in-memory campground list that the web handlers display
//! and the startup fetch replaces, along with the row projection used for display.

/// Shared list state
mod campground_list;
pub use campground_list::*;

/// Display rows derived from campgrounds
mod campground_row;
pub use campground_row::*;
