//! # NPS
//!
//! This crate provides a client for the National Park Service API, which is used to list campgrounds,
//! together with the campground records it returns.

/// Campground records and their derived display fields
mod campground;
pub use campground::*;

/// Payload decoding with bare-array fallback
mod decode;
pub use decode::*;

/// HTTP client for the campgrounds endpoint
mod nps_client;
pub use nps_client::*;

/// Error type for NPS operations
mod nps_error;
pub use nps_error::*;
