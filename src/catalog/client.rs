//! Catalog client - read-through cached access to all three providers
//!
//! This is the high-level API the rest of the application uses:
//! - album/artist search and lookups go to the iTunes Search API
//! - the top-releases list comes from the RSS feed
//! - release metadata search goes to MusicBrainz
//!
//! Four operations are cached (see [`CatalogClient::search`] and friends).
//! A hit never touches the transport. A miss fetches once and stores the
//! result only on success; failures propagate and leave the cache as it was.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use super::artwork::{ArtworkSize, rewrite_artwork};
use super::cache::{TtlCache, cache_key};
use super::discography;
use super::domain::{
    ArtistResult, CatalogError, CatalogSearchResult, FeedAlbumResult, ReleaseMetadata, TrackResult,
};
use super::feed::{self, FeedClient};
use super::itunes::{self, ItunesClient};
use super::musicbrainz::{self, MusicBrainzClient};
use super::traits::{Clock, SystemClock, Transport};
use super::transport::{HttpTransport, USER_AGENT, require};

/// Storefront used when the caller has no preference
pub const DEFAULT_COUNTRY: &str = "US";
/// Related albums shown on an artist page
pub const DEFAULT_RELATED_LIMIT: u32 = 5;
/// Entries in the top-releases list
pub const DEFAULT_TOP_LIMIT: u32 = 20;

/// Artwork size for related albums
const RELATED_ARTWORK: ArtworkSize = ArtworkSize::Medium;
/// Artwork size for album detail
const DETAIL_ARTWORK: ArtworkSize = ArtworkSize::Large;

/// Settings for building a [`CatalogClient`]
#[derive(Debug, Clone)]
pub struct CatalogSettings {
    pub itunes_base_url: String,
    pub feed_base_url: String,
    pub musicbrainz_base_url: String,
    pub user_agent: String,
    pub request_timeout: Duration,
    /// TTL for album searches
    pub search_ttl: Duration,
    /// TTL for UPC, artist-id, and artwork lookups
    pub lookup_ttl: Duration,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            itunes_base_url: itunes::DEFAULT_BASE_URL.to_string(),
            feed_base_url: feed::DEFAULT_BASE_URL.to_string(),
            musicbrainz_base_url: musicbrainz::DEFAULT_BASE_URL.to_string(),
            user_agent: USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(10),
            search_ttl: Duration::from_secs(5 * 60),
            lookup_ttl: Duration::from_secs(30 * 24 * 60 * 60),
        }
    }
}

/// Number of entries held by each cache
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub search: usize,
    pub upc: usize,
    pub artist: usize,
    pub artwork: usize,
}

impl CacheStats {
    pub fn total(&self) -> usize {
        self.search + self.upc + self.artist + self.artwork
    }
}

/// Cached catalog client
pub struct CatalogClient {
    itunes: ItunesClient,
    feed: FeedClient,
    musicbrainz: MusicBrainzClient,
    clock: Arc<dyn Clock>,
    search_cache: TtlCache<Vec<CatalogSearchResult>>,
    upc_cache: TtlCache<Option<CatalogSearchResult>>,
    artist_cache: TtlCache<Vec<ArtistResult>>,
    artwork_cache: TtlCache<String>,
}

impl CatalogClient {
    /// Create a client backed by HTTP and the system clock
    pub fn new(settings: CatalogSettings) -> Result<Self, CatalogError> {
        let transport = HttpTransport::new(&settings.user_agent, settings.request_timeout)?;
        Ok(Self::with_parts(
            settings,
            Arc::new(transport),
            Arc::new(SystemClock),
        ))
    }

    /// Create a client with explicit transport and clock
    pub fn with_parts(
        settings: CatalogSettings,
        transport: Arc<dyn Transport>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            itunes: ItunesClient::new(transport.clone(), settings.itunes_base_url),
            feed: FeedClient::new(transport.clone(), settings.feed_base_url),
            musicbrainz: MusicBrainzClient::new(transport, settings.musicbrainz_base_url),
            clock,
            search_cache: TtlCache::new(settings.search_ttl),
            upc_cache: TtlCache::new(settings.lookup_ttl),
            artist_cache: TtlCache::new(settings.lookup_ttl),
            artwork_cache: TtlCache::new(settings.lookup_ttl),
        }
    }

    /// Search albums. Cached per (term, country), case-insensitive.
    pub async fn search(
        &self,
        term: &str,
        country: &str,
    ) -> Result<Vec<CatalogSearchResult>, CatalogError> {
        require("country", country)?;
        let key = cache_key("search", &[term, country]);
        self.read_through(&self.search_cache, key, || {
            self.itunes.search_albums(term, country)
        })
        .await
    }

    /// Search artists. Not cached.
    pub async fn artist_search(
        &self,
        term: &str,
        country: &str,
    ) -> Result<Vec<ArtistResult>, CatalogError> {
        require("country", country)?;
        self.itunes.search_artists(term, country).await
    }

    /// Look up an album by barcode. Cached per code.
    ///
    /// `Ok(None)` means the catalog has no match, which is cached like any
    /// other answer.
    pub async fn lookup_by_upc(&self, code: &str) -> Result<Option<CatalogSearchResult>, CatalogError> {
        let key = cache_key("upc", &[code]);
        self.read_through(&self.upc_cache, key, || async {
            let albums = self.itunes.lookup_upc(code).await?;
            Ok(albums.into_iter().next())
        })
        .await
    }

    /// Look up artists by AllMusic ID. Cached per id.
    pub async fn lookup_artist_by_external_id(
        &self,
        id: &str,
    ) -> Result<Vec<ArtistResult>, CatalogError> {
        let key = cache_key("artist", &[id]);
        self.read_through(&self.artist_cache, key, || self.itunes.lookup_amg_artist(id))
            .await
    }

    /// Albums by an artist, with artwork at list size. Not cached.
    pub async fn lookup_related_albums(
        &self,
        artist_id: &str,
        limit: u32,
    ) -> Result<Vec<CatalogSearchResult>, CatalogError> {
        let albums = self.itunes.lookup_artist_albums(artist_id, limit).await?;
        Ok(albums
            .into_iter()
            .map(|album| CatalogSearchResult {
                artwork_url: rewrite_artwork(non_empty(&album.artwork_url), RELATED_ARTWORK),
                ..album
            })
            .collect())
    }

    /// Related albums with duplicate editions removed, newest first
    pub async fn artist_discography(
        &self,
        artist_id: &str,
        limit: u32,
    ) -> Result<Vec<CatalogSearchResult>, CatalogError> {
        let albums = self.lookup_related_albums(artist_id, limit).await?;
        Ok(discography::dedupe(albums))
    }

    /// Songs on an album. Not cached.
    pub async fn lookup_tracks(&self, album_id: &str) -> Result<Vec<TrackResult>, CatalogError> {
        self.itunes.lookup_album_tracks(album_id).await
    }

    /// Large artwork URL for an album. Cached per id.
    ///
    /// Returns an empty string when the album is unknown or has no artwork.
    pub async fn lookup_artwork(&self, album_id: &str) -> Result<String, CatalogError> {
        let key = cache_key("artwork", &[album_id]);
        self.read_through(&self.artwork_cache, key, || async {
            let albums = self.itunes.lookup_album(album_id).await?;
            let source = albums
                .first()
                .and_then(|album| non_empty(&album.artwork_url));
            Ok(rewrite_artwork(source, DETAIL_ARTWORK))
        })
        .await
    }

    /// Most-played albums for a storefront. Not cached.
    pub async fn fetch_top_releases(
        &self,
        limit: u32,
        country: &str,
    ) -> Result<Vec<FeedAlbumResult>, CatalogError> {
        self.feed.top_albums(limit, country).await
    }

    /// Free-text release metadata search. Not cached.
    pub async fn search_releases(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<ReleaseMetadata>, CatalogError> {
        self.musicbrainz.search_releases(query, limit).await
    }

    /// Entry counts of every cache
    pub fn cache_stats(&self) -> CacheStats {
        CacheStats {
            search: self.search_cache.len(),
            upc: self.upc_cache.len(),
            artist: self.artist_cache.len(),
            artwork: self.artwork_cache.len(),
        }
    }

    /// Drop every cached response
    pub fn clear_caches(&self) {
        self.search_cache.clear();
        self.upc_cache.clear();
        self.artist_cache.clear();
        self.artwork_cache.clear();
        tracing::info!("Catalog caches cleared");
    }

    /// Return a fresh cached value or fetch, store, and return a new one
    async fn read_through<T, F, Fut>(
        &self,
        cache: &TtlCache<T>,
        key: String,
        fetch: F,
    ) -> Result<T, CatalogError>
    where
        T: Clone,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, CatalogError>>,
    {
        if let Some(hit) = cache.get(&key, self.clock.now()) {
            tracing::debug!("Cache hit: {}", key);
            return Ok(hit);
        }

        tracing::debug!("Cache miss: {}", key);
        let value = fetch().await?;
        cache.insert(key, value.clone(), self.clock.now());
        Ok(value)
    }
}

fn non_empty(url: &str) -> Option<&str> {
    (!url.is_empty()).then_some(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::traits::mocks::{ManualClock, MockTransport};
    use crate::test_utils::{
        album_json, artist_json, catalog_response, empty_response, test_client, track_json,
    };

    const SEARCH: &str = "/search";
    const LOOKUP: &str = "/lookup";

    #[tokio::test]
    async fn test_search_is_cached_until_ttl() {
        let transport = MockTransport::new()
            .respond(SEARCH, catalog_response(&[album_json(1, "25", "Adele", 11)]));
        let (client, transport, clock) = test_client(transport);

        let first = client.search("Adele", "US").await.unwrap();
        let second = client.search("Adele", "US").await.unwrap();
        assert_eq!(first, second);
        assert_eq!(transport.request_count(), 1);

        clock.advance(Duration::from_secs(5 * 60));
        client.search("Adele", "US").await.unwrap();
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_cache_forever_ttl_from_config() {
        let config: crate::config::Config =
            toml::from_str("[cache]\nsearch_ttl_secs = 9223372036854775807\n").unwrap();
        let settings = CatalogSettings {
            itunes_base_url: "https://itunes.test".to_string(),
            ..config.catalog_settings()
        };
        let transport = Arc::new(MockTransport::new().respond(SEARCH, empty_response()));
        let clock = Arc::new(ManualClock::new());
        let client = CatalogClient::with_parts(settings, transport.clone(), clock.clone());

        client.search("adele", "US").await.unwrap();
        clock.advance(Duration::from_secs(365 * 24 * 60 * 60));
        client.search("adele", "US").await.unwrap();
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_search_key_is_case_insensitive() {
        let transport = MockTransport::new().respond(SEARCH, empty_response());
        let (client, transport, _) = test_client(transport);

        client.search("Adele", "US").await.unwrap();
        client.search("adele", "us").await.unwrap();
        client.search("  ADELE ", "US").await.unwrap();
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_search_country_is_part_of_key() {
        let transport = MockTransport::new().respond(SEARCH, empty_response());
        let (client, transport, _) = test_client(transport);

        client.search("Adele", "US").await.unwrap();
        client.search("Adele", "GB").await.unwrap();
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_failure_leaves_no_cache_entry() {
        let transport =
            MockTransport::new().fail(SEARCH, CatalogError::Network("unreachable".to_string()));
        let (client, transport, _) = test_client(transport);

        let err = client.search("Adele", "US").await.unwrap_err();
        assert!(matches!(err, CatalogError::Network(_)));
        assert_eq!(client.cache_stats().search, 0);

        // Next call retries the network and caches the success
        transport.set_route(SEARCH, Ok(empty_response()));
        client.search("Adele", "US").await.unwrap();
        client.search("Adele", "US").await.unwrap();
        assert_eq!(transport.request_count(), 2);
        assert_eq!(client.cache_stats().search, 1);
    }

    #[tokio::test]
    async fn test_parse_failure_propagates_and_is_not_cached() {
        let transport = MockTransport::new().respond(LOOKUP, "not json");
        let (client, _, _) = test_client(transport);

        let err = client.lookup_artwork("42").await.unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert_eq!(client.cache_stats().artwork, 0);
    }

    #[tokio::test]
    async fn test_upc_without_match_is_none_not_error() {
        let transport = MockTransport::new().respond(LOOKUP, empty_response());
        let (client, transport, _) = test_client(transport);

        assert_eq!(client.lookup_by_upc("0000000000000").await.unwrap(), None);
        // The absent answer is cached too
        assert_eq!(client.lookup_by_upc("0000000000000").await.unwrap(), None);
        assert_eq!(transport.request_count(), 1);
    }

    #[tokio::test]
    async fn test_upc_returns_first_album_and_caches_30_days() {
        let transport = MockTransport::new().respond(
            "upc=",
            catalog_response(&[
                album_json(7, "Abbey Road", "The Beatles", 17),
                album_json(8, "Abbey Road (Remastered)", "The Beatles", 17),
            ]),
        );
        let (client, transport, clock) = test_client(transport);

        let album = client.lookup_by_upc("094638246817").await.unwrap().unwrap();
        assert_eq!(album.id, 7);

        clock.advance(Duration::from_secs(29 * 24 * 60 * 60));
        client.lookup_by_upc("094638246817").await.unwrap();
        assert_eq!(transport.request_count(), 1);

        clock.advance(Duration::from_secs(24 * 60 * 60));
        client.lookup_by_upc("094638246817").await.unwrap();
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_artist_by_external_id_is_cached() {
        let transport = MockTransport::new()
            .respond("amgArtistId=", catalog_response(&[artist_json(262836961, "Adele")]));
        let (client, transport, clock) = test_client(transport);

        let artists = client.lookup_artist_by_external_id("1091634").await.unwrap();
        assert_eq!(artists[0].name, "Adele");
        client.lookup_artist_by_external_id("1091634").await.unwrap();
        assert_eq!(transport.request_count(), 1);

        clock.advance(Duration::from_secs(30 * 24 * 60 * 60));
        client.lookup_artist_by_external_id("1091634").await.unwrap();
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_related_albums_only_collections_with_larger_artwork() {
        let transport = MockTransport::new().respond(
            "entity=album",
            catalog_response(&[
                artist_json(1, "Adele"),
                album_json(10, "25", "Adele", 11),
                track_json(100, "Hello", 1),
            ]),
        );
        let (client, transport, _) = test_client(transport);

        let albums = client.lookup_related_albums("1", DEFAULT_RELATED_LIMIT).await.unwrap();
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].id, 10);
        assert!(albums[0].artwork_url.ends_with("/600x600bb.jpg"));
        assert!(transport.requests()[0].contains("limit=5"));

        // Not cached
        client.lookup_related_albums("1", DEFAULT_RELATED_LIMIT).await.unwrap();
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_tracks_only_track_entries() {
        let transport = MockTransport::new().respond(
            "entity=song",
            catalog_response(&[
                album_json(10, "25", "Adele", 2),
                track_json(100, "Hello", 1),
                track_json(101, "Send My Love", 2),
            ]),
        );
        let (client, _, _) = test_client(transport);

        let tracks = client.lookup_tracks("10").await.unwrap();
        let titles: Vec<&str> = tracks.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["Hello", "Send My Love"]);
    }

    #[tokio::test]
    async fn test_artwork_resolves_large_and_caches() {
        let transport = MockTransport::new()
            .respond(LOOKUP, catalog_response(&[album_json(10, "25", "Adele", 11)]));
        let (client, transport, clock) = test_client(transport);

        let url = client.lookup_artwork("10").await.unwrap();
        assert!(url.ends_with("/1200x1200bb.jpg"));
        assert_eq!(client.lookup_artwork("10").await.unwrap(), url);
        assert_eq!(transport.request_count(), 1);

        clock.advance(Duration::from_secs(30 * 24 * 60 * 60));
        client.lookup_artwork("10").await.unwrap();
        assert_eq!(transport.request_count(), 2);
    }

    #[tokio::test]
    async fn test_artwork_unknown_album_is_empty_string() {
        let transport = MockTransport::new().respond(LOOKUP, empty_response());
        let (client, _, _) = test_client(transport);

        assert_eq!(client.lookup_artwork("999").await.unwrap(), "");
        assert_eq!(client.cache_stats().artwork, 1);
    }

    #[tokio::test]
    async fn test_invalid_request_makes_no_call() {
        let (client, transport, _) = test_client(MockTransport::new());

        assert!(matches!(
            client.search("", "US").await,
            Err(CatalogError::InvalidRequest(_))
        ));
        assert!(matches!(
            client.lookup_by_upc(" ").await,
            Err(CatalogError::InvalidRequest(_))
        ));
        assert!(matches!(
            client.artist_search("Adele", "").await,
            Err(CatalogError::InvalidRequest(_))
        ));
        assert_eq!(transport.request_count(), 0);
        assert_eq!(client.cache_stats().total(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_propagates_on_every_operation() {
        let err = CatalogError::Network("down".to_string());
        let transport = MockTransport::new().fail("/", err.clone());
        let (client, _, _) = test_client(transport);

        assert_eq!(client.search("a", "US").await.unwrap_err(), err);
        assert_eq!(client.artist_search("a", "US").await.unwrap_err(), err);
        assert_eq!(client.lookup_by_upc("1").await.unwrap_err(), err);
        assert_eq!(client.lookup_artist_by_external_id("1").await.unwrap_err(), err);
        assert_eq!(client.lookup_related_albums("1", 5).await.unwrap_err(), err);
        assert_eq!(client.lookup_tracks("1").await.unwrap_err(), err);
        assert_eq!(client.lookup_artwork("1").await.unwrap_err(), err);
        assert_eq!(client.fetch_top_releases(20, "us").await.unwrap_err(), err);
        assert_eq!(client.search_releases("a", 5).await.unwrap_err(), err);
        assert_eq!(client.cache_stats().total(), 0);
    }

    #[tokio::test]
    async fn test_discography_dedupes_editions() {
        let transport = MockTransport::new().respond(
            "entity=album",
            catalog_response(&[
                album_json(1, "25", "Adele", 11),
                album_json(2, "25 (Deluxe Edition)", "Adele", 14),
            ]),
        );
        let (client, _, _) = test_client(transport);

        let albums = client.artist_discography("1", 10).await.unwrap();
        assert_eq!(albums.len(), 1);
        assert_eq!(albums[0].id, 2);
    }

    #[tokio::test]
    async fn test_clear_caches_forces_refetch() {
        let transport = MockTransport::new().respond(SEARCH, empty_response());
        let (client, transport, _) = test_client(transport);

        client.search("Adele", "US").await.unwrap();
        client.clear_caches();
        assert_eq!(client.cache_stats(), CacheStats::default());

        client.search("Adele", "US").await.unwrap();
        assert_eq!(transport.request_count(), 2);
    }

    #[test]
    fn test_default_settings() {
        let settings = CatalogSettings::default();
        assert_eq!(settings.search_ttl, Duration::from_secs(300));
        assert_eq!(settings.lookup_ttl, Duration::from_secs(2_592_000));
        assert_eq!(settings.itunes_base_url, "https://itunes.apple.com");
    }
}
