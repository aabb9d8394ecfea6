//! Test utilities and fixtures for crate-minder tests.
//!
//! This module provides JSON fixtures in the iTunes response shape and a
//! catalog client wired to a scripted transport and a manual clock.
//!
//! # Example
//!
//! ```ignore
//! use crate::test_utils::{album_json, catalog_response, test_client};
//!
//! #[tokio::test]
//! async fn test_something() {
//!     let transport = MockTransport::new()
//!         .respond("/search", catalog_response(&[album_json(1, "25", "Adele", 11)]));
//!     let (client, transport, clock) = test_client(transport);
//!     // ... test logic
//! }
//! ```

use std::sync::Arc;

use serde_json::{Value, json};

use crate::catalog::traits::mocks::{ManualClock, MockTransport};
use crate::catalog::{CatalogClient, CatalogSettings};

/// Creates a catalog client around a scripted transport.
///
/// Returns the client plus handles to the transport (for request counts)
/// and the clock (to expire cache entries).
pub fn test_client(
    transport: MockTransport,
) -> (CatalogClient, Arc<MockTransport>, Arc<ManualClock>) {
    let transport = Arc::new(transport);
    let clock = Arc::new(ManualClock::new());
    let settings = CatalogSettings {
        itunes_base_url: "https://itunes.test".to_string(),
        feed_base_url: "https://rss.test".to_string(),
        musicbrainz_base_url: "https://musicbrainz.test/ws/2".to_string(),
        ..Default::default()
    };

    let client = CatalogClient::with_parts(settings, transport.clone(), clock.clone());
    (client, transport, clock)
}

/// A `collection` entry with 100x100 artwork
pub fn album_json(id: u64, title: &str, artist: &str, track_count: u32) -> Value {
    json!({
        "wrapperType": "collection",
        "collectionType": "Album",
        "collectionId": id,
        "collectionName": title,
        "artistId": 1,
        "artistName": artist,
        "artworkUrl100": format!("https://is1-ssl.mzstatic.com/image/thumb/Music/{}/100x100bb.jpg", id),
        "primaryGenreName": "Pop",
        "releaseDate": "2015-11-20T08:00:00Z",
        "trackCount": track_count,
    })
}

/// An `artist` entry
pub fn artist_json(id: u64, name: &str) -> Value {
    json!({
        "wrapperType": "artist",
        "artistType": "Artist",
        "artistId": id,
        "artistName": name,
        "primaryGenreName": "Pop",
    })
}

/// A `track` entry
pub fn track_json(id: u64, title: &str, number: u32) -> Value {
    json!({
        "wrapperType": "track",
        "kind": "song",
        "trackId": id,
        "trackName": title,
        "artistName": "Test Artist",
        "collectionName": "Test Album",
        "trackNumber": number,
        "discNumber": 1,
        "trackTimeMillis": 180_000,
    })
}

/// Wrap entries in the search/lookup envelope
pub fn catalog_response(results: &[Value]) -> String {
    json!({
        "resultCount": results.len(),
        "results": results,
    })
    .to_string()
}

/// A successful response with no results
pub fn empty_response() -> String {
    catalog_response(&[])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::itunes::dto::SearchResponse;

    #[test]
    fn test_fixtures_match_dto_shape() {
        let body = catalog_response(&[
            album_json(1, "A", "X", 3),
            artist_json(2, "X"),
            track_json(3, "T", 1),
        ]);
        let response: SearchResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(response.result_count, 3);
        assert_eq!(response.results.len(), 3);
    }

    #[test]
    fn test_empty_response() {
        let response: SearchResponse = serde_json::from_str(&empty_response()).unwrap();
        assert!(response.results.is_empty());
    }

    #[tokio::test]
    async fn test_client_uses_test_urls() {
        let (client, transport, _) =
            test_client(MockTransport::new().respond("itunes.test", empty_response()));
        client.search("x", "US").await.unwrap();
        assert!(transport.requests()[0].starts_with("https://itunes.test/search?"));
    }
}
