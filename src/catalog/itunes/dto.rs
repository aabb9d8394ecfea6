//! iTunes Search API Data Transfer Objects
//!
//! These types match EXACTLY what the iTunes Search API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the itunes module - convert to domain types.
//!
//! API Reference: https://performance-partners.apple.com/search-api
//!
//! Both `/search` and `/lookup` return the same envelope. Each entry carries
//! a `wrapperType` that says which shape it has:
//!
//! ```json
//! {
//!   "resultCount": 2,
//!   "results": [
//!     {"wrapperType": "artist", "artistId": 262836961, "artistName": "Adele"},
//!     {"wrapperType": "collection", "collectionId": 1051394208, "collectionName": "25"}
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Envelope shared by search and lookup responses
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    #[serde(default)]
    pub result_count: u32,
    #[serde(default)]
    pub results: Vec<CatalogItem>,
}

/// A single result, tagged by `wrapperType`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "wrapperType", rename_all = "lowercase")]
pub enum CatalogItem {
    Collection(Collection),
    Artist(Artist),
    Track(Track),
    /// Audiobooks, software, and anything else we don't consume
    #[serde(other)]
    Unknown,
}

/// Album (collection) entry
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub collection_id: u64,
    pub collection_name: Option<String>,
    /// "Album" for albums, "Compilation" etc. otherwise
    pub collection_type: Option<String>,
    pub artist_id: Option<u64>,
    pub artist_name: Option<String>,
    pub artwork_url100: Option<String>,
    pub primary_genre_name: Option<String>,
    /// RFC 3339 (e.g. "2015-11-20T08:00:00Z")
    pub release_date: Option<String>,
    pub track_count: Option<u32>,
    pub collection_view_url: Option<String>,
}

/// Artist entry
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Artist {
    pub artist_id: u64,
    pub artist_name: Option<String>,
    pub artist_link_url: Option<String>,
    pub primary_genre_name: Option<String>,
    pub amg_artist_id: Option<u64>,
}

/// Track entry
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub track_id: u64,
    pub track_name: Option<String>,
    /// "song", "music-video", ...
    pub kind: Option<String>,
    pub artist_name: Option<String>,
    pub collection_name: Option<String>,
    pub track_number: Option<u32>,
    pub disc_number: Option<u32>,
    pub track_time_millis: Option<u64>,
    pub preview_url: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// These verify our DTOs match what the real API returns.
// If these fail, the API has changed and we need to update our DTOs.
// ============================================================================
