//! # Web Handlers for the Campgrounds Web Application
//!
//! This crate provides the web handlers that expose the campground list over HTTP.

/// Request and response types for campground endpoints
mod campground_types;
pub use campground_types::*;

/// Handlers for campground API endpoints
mod campground_handlers;
pub use campground_handlers::*;
