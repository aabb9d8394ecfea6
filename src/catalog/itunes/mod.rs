//! iTunes Search API integration
//!
//! The commerce catalog: album/artist search plus lookup by collection ID,
//! artist ID, AllMusic ID, or barcode.
//!
//! API docs: https://performance-partners.apple.com/search-api

pub mod dto;
mod adapter;
mod client;

pub use client::{DEFAULT_BASE_URL, ItunesClient};
