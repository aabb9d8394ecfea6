//! MusicBrainz API integration
//!
//! The metadata-lookup provider: free-text release search that fills in
//! what the commerce catalog lacks (barcode, release country, release type).
//!
//! API docs: https://musicbrainz.org/doc/MusicBrainz_API

pub mod dto;
mod adapter;
mod client;

pub use client::{DEFAULT_BASE_URL, MusicBrainzClient};
