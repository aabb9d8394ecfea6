//! Top-releases feed integration
//!
//! Reads the static "most played albums" JSON feed per storefront.

pub mod dto;
mod client;

pub use client::{DEFAULT_BASE_URL, FEED_ARTWORK, FeedClient};
