//! MusicBrainz HTTP client
//!
//! Free-text release search against the MusicBrainz web service.
//! See: https://musicbrainz.org/doc/MusicBrainz_API
//!
//! IMPORTANT: MusicBrainz requires a User-Agent header and rate limits to
//! 1 req/sec. The User-Agent is set on the shared transport; callers issuing
//! bursts must pace themselves.

use std::sync::Arc;

use super::{adapter, dto};
use crate::catalog::domain::{CatalogError, ReleaseMetadata};
use crate::catalog::traits::Transport;
use crate::catalog::transport::{build_url, decode, require};

pub const DEFAULT_BASE_URL: &str = "https://musicbrainz.org/ws/2";

/// Upper bound accepted by the search endpoint
const MAX_LIMIT: u32 = 100;

/// MusicBrainz API client
pub struct MusicBrainzClient {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl MusicBrainzClient {
    pub fn new(transport: Arc<dyn Transport>, base_url: impl Into<String>) -> Self {
        Self {
            transport,
            base_url: base_url.into(),
        }
    }

    /// Search releases by a free-text release/artist query
    pub async fn search_releases(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<ReleaseMetadata>, CatalogError> {
        require("query", query)?;
        if limit == 0 || limit > MAX_LIMIT {
            return Err(CatalogError::InvalidRequest(format!(
                "limit must be between 1 and {}",
                MAX_LIMIT
            )));
        }

        let limit = limit.to_string();
        let url = build_url(
            &self.base_url,
            "release",
            &[("query", query.trim()), ("fmt", "json"), ("limit", limit.as_str())],
        )?;

        let body = self.transport.get(&url).await?;
        let response: dto::ReleaseSearchResponse = decode(&body)?;
        tracing::debug!(
            "MusicBrainz returned {} of {} releases for {:?}",
            response.releases.len(),
            response.count,
            query
        );

        Ok(adapter::to_release_metadata(response))
    }
}
