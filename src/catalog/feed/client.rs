//! Top-releases feed client
//!
//! The feed is a static JSON file per (country, limit), so it is never
//! cached here: the CDN in front of it already is.

use std::sync::Arc;

use super::dto;
use crate::catalog::artwork::{ArtworkSize, rewrite_artwork};
use crate::catalog::domain::{CatalogError, FeedAlbumResult};
use crate::catalog::traits::Transport;
use crate::catalog::transport::{build_url, decode, require};

pub const DEFAULT_BASE_URL: &str = "https://rss.applemarketingtools.com";

/// Artwork size for feed entries
pub const FEED_ARTWORK: ArtworkSize = ArtworkSize::Medium;

/// Feed client
pub struct FeedClient {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl FeedClient {
    pub fn new(transport: Arc<dyn Transport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Fetch the most-played albums for a storefront
    pub async fn top_albums(
        &self,
        limit: u32,
        country: &str,
    ) -> Result<Vec<FeedAlbumResult>, CatalogError> {
        require("country", country)?;
        if limit == 0 {
            return Err(CatalogError::InvalidRequest("limit must be at least 1".to_string()));
        }

        let path = format!(
            "api/v2/{}/music/most-played/{}/albums.json",
            urlencoding::encode(&country.trim().to_lowercase()),
            limit
        );
        let url = build_url(&self.base_url, &path, &[])?;
        let body = self.transport.get(&url).await?;
        let response: dto::FeedResponse = decode(&body)?;

        Ok(response.feed.results.into_iter().map(to_feed_album).collect())
    }
}

fn to_feed_album(entry: dto::FeedEntry) -> FeedAlbumResult {
    FeedAlbumResult {
        artwork_url: rewrite_artwork(entry.artwork_url100.as_deref(), FEED_ARTWORK),
        id: entry.id,
        title: entry.name.unwrap_or_default(),
        artist_name: entry.artist_name.unwrap_or_default(),
        release_date: entry.release_date.unwrap_or_default(),
        genres: entry.genres.into_iter().map(|g| g.name).collect(),
        url: entry.url.unwrap_or_default(),
    }
}
