//! MusicBrainz API Data Transfer Objects
//!
//! These types match EXACTLY what the MusicBrainz API returns.
//! DO NOT add fields that aren't in the API response.
//! DO NOT use these types outside the musicbrainz module - convert to domain types.
//!
//! API Reference: https://musicbrainz.org/doc/MusicBrainz_API/Search
//!
//! We use the /release search endpoint with a free-text query to find
//! release metadata (barcode, country, release type) for a title or artist.

use serde::{Deserialize, Serialize};

/// Release search response
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReleaseSearchResponse {
    /// Total number of matches (not just this page)
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub offset: u32,
    #[serde(default)]
    pub releases: Vec<Release>,
}

/// A matching release
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Release {
    /// MusicBrainz release ID
    pub id: String,
    /// Search relevance (0-100)
    #[serde(default)]
    pub score: u8,
    pub title: String,
    /// Official, Bootleg, Promotion, ...
    pub status: Option<String>,
    /// YYYY, YYYY-MM, or YYYY-MM-DD
    pub date: Option<String>,
    pub country: Option<String>,
    pub barcode: Option<String>,
    #[serde(default)]
    pub artist_credit: Vec<ArtistCredit>,
    pub release_group: Option<ReleaseGroup>,
    pub track_count: Option<u32>,
}

/// Artist credit (can be multiple for collaborations)
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ArtistCredit {
    pub artist: Artist,
    /// How this artist is credited (may differ from official name)
    pub name: Option<String>,
    /// Join phrase (e.g., " & ", " feat. ")
    pub joinphrase: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub sort_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ReleaseGroup {
    pub id: String,
    /// Album, Single, EP, ...
    pub primary_type: Option<String>,
}

// ============================================================================
// CONTRACT TESTS
// ============================================================================
