//! Internal domain models for catalog search and lookup.
//!
//! These types are OUR types - they don't change when provider APIs change.
//! Every provider response is converted into these types by an adapter.

use std::time::Duration;

/// An album (collection) returned by a catalog search or lookup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogSearchResult {
    /// Provider collection ID
    pub id: u64,
    /// Album title
    pub title: String,
    /// Artist display name
    pub artist_name: String,
    /// Provider artist ID
    pub artist_id: Option<u64>,
    /// Artwork URL (empty if the provider had none)
    pub artwork_url: String,
    /// Primary genre label
    pub genre: String,
    /// Release date as formatted by the provider (usually RFC 3339)
    pub release_date: String,
    /// Number of tracks on the release
    pub track_count: u32,
    /// Store page for the release
    pub view_url: Option<String>,
}

/// An artist returned by a search or external-id lookup
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ArtistResult {
    /// Provider artist ID
    pub id: u64,
    /// Artist name
    pub name: String,
    /// Primary genre label
    pub genre: Option<String>,
    /// Store page for the artist
    pub link_url: Option<String>,
    /// AllMusic artist ID
    pub amg_artist_id: Option<u64>,
}

/// A track on an album
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackResult {
    /// Provider track ID
    pub id: u64,
    /// Track title
    pub title: String,
    /// Artist display name
    pub artist_name: String,
    /// Album title
    pub album_title: String,
    /// Position on the disc
    pub track_number: Option<u32>,
    /// Disc number
    pub disc_number: Option<u32>,
    /// Track length
    pub duration: Option<Duration>,
    /// 30-second preview clip
    pub preview_url: Option<String>,
}

/// An album listed in the top-releases feed
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeedAlbumResult {
    /// Provider album ID (string in the feed)
    pub id: String,
    /// Album title
    pub title: String,
    /// Artist display name
    pub artist_name: String,
    /// Artwork URL, already rewritten to the feed display size
    pub artwork_url: String,
    /// Release date (YYYY-MM-DD)
    pub release_date: String,
    /// Genre names
    pub genres: Vec<String>,
    /// Store page for the album
    pub url: String,
}

/// Release metadata from the metadata-lookup provider
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReleaseMetadata {
    /// MusicBrainz release ID
    pub id: String,
    /// Release title
    pub title: String,
    /// Combined artist credit (e.g. "Simon & Garfunkel")
    pub artist: Option<String>,
    /// Release date (YYYY, YYYY-MM, or YYYY-MM-DD)
    pub date: Option<String>,
    /// Release country code
    pub country: Option<String>,
    /// Barcode (UPC/EAN) printed on the release
    pub barcode: Option<String>,
    /// Primary type of the release group (Album, Single, EP, ...)
    pub primary_type: Option<String>,
    /// Search relevance (0-100)
    pub score: u8,
}

/// Errors surfaced by the catalog client.
///
/// "No results" is deliberately absent: an empty response is a value,
/// never an error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("Rate limited - try again later")]
    RateLimited,
}

impl CatalogError {
    /// Whether this failure came from the transport rather than the caller
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network(_) | Self::RateLimited)
    }
}
