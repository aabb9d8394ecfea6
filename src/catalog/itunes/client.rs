//! iTunes Search API client
//!
//! Uncached access to the `/search` and `/lookup` endpoints. Caching lives
//! one level up in [`CatalogClient`](crate::catalog::CatalogClient).
//!
//! No API key required. Apple asks for roughly 20 calls per minute at most.

use std::sync::Arc;

use super::{adapter, dto};
use crate::catalog::domain::{ArtistResult, CatalogError, CatalogSearchResult, TrackResult};
use crate::catalog::traits::Transport;
use crate::catalog::transport::{build_url, decode, require};

pub const DEFAULT_BASE_URL: &str = "https://itunes.apple.com";

/// iTunes Search API client
pub struct ItunesClient {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl ItunesClient {
    pub fn new(transport: Arc<dyn Transport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Search albums by free text
    pub async fn search_albums(
        &self,
        term: &str,
        country: &str,
    ) -> Result<Vec<CatalogSearchResult>, CatalogError> {
        require("term", term)?;
        let response = self
            .send(
                "search",
                &[
                    ("term", term.trim()),
                    ("country", country),
                    ("media", "music"),
                    ("entity", "album"),
                ],
            )
            .await?;
        Ok(adapter::to_albums(response))
    }

    /// Search artists by free text
    pub async fn search_artists(
        &self,
        term: &str,
        country: &str,
    ) -> Result<Vec<ArtistResult>, CatalogError> {
        require("term", term)?;
        let response = self
            .send(
                "search",
                &[
                    ("term", term.trim()),
                    ("country", country),
                    ("media", "music"),
                    ("entity", "musicArtist"),
                ],
            )
            .await?;
        Ok(adapter::to_artists(response))
    }

    /// Look up albums by barcode
    pub async fn lookup_upc(&self, upc: &str) -> Result<Vec<CatalogSearchResult>, CatalogError> {
        require("upc", upc)?;
        let response = self
            .send("lookup", &[("upc", upc.trim()), ("entity", "album")])
            .await?;
        Ok(adapter::to_albums(response))
    }

    /// Look up artists by AllMusic artist ID
    pub async fn lookup_amg_artist(&self, amg_id: &str) -> Result<Vec<ArtistResult>, CatalogError> {
        require("amgArtistId", amg_id)?;
        let response = self.send("lookup", &[("amgArtistId", amg_id.trim())]).await?;
        Ok(adapter::to_artists(response))
    }

    /// Look up an artist's albums
    pub async fn lookup_artist_albums(
        &self,
        artist_id: &str,
        limit: u32,
    ) -> Result<Vec<CatalogSearchResult>, CatalogError> {
        require("artist id", artist_id)?;
        if limit == 0 {
            return Err(CatalogError::InvalidRequest("limit must be at least 1".to_string()));
        }
        let limit = limit.to_string();
        let response = self
            .send(
                "lookup",
                &[("id", artist_id.trim()), ("entity", "album"), ("limit", limit.as_str())],
            )
            .await?;
        Ok(adapter::to_albums(response))
    }

    /// Look up the songs on an album
    pub async fn lookup_album_tracks(&self, album_id: &str) -> Result<Vec<TrackResult>, CatalogError> {
        require("album id", album_id)?;
        let response = self
            .send("lookup", &[("id", album_id.trim()), ("entity", "song")])
            .await?;
        Ok(adapter::to_tracks(response))
    }

    /// Look up a single album by ID
    pub async fn lookup_album(&self, album_id: &str) -> Result<Vec<CatalogSearchResult>, CatalogError> {
        require("album id", album_id)?;
        let response = self.send("lookup", &[("id", album_id.trim())]).await?;
        Ok(adapter::to_albums(response))
    }

    async fn send(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<dto::SearchResponse, CatalogError> {
        let url = build_url(&self.base_url, endpoint, params)?;
        let body = self.transport.get(&url).await?;
        decode(&body)
    }
}
