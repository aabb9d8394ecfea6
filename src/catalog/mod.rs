//! Catalog module - search and lookup against external music catalogs.
//!
//! # Architecture
//!
//! This module follows a clean separation between:
//! - **Domain models** (`domain.rs`) - Internal types the rest of the app uses
//! - **API DTOs** (`itunes/dto.rs`, `feed/dto.rs`, `musicbrainz/dto.rs`) - Exact API response shapes
//! - **Adapters** - Convert DTOs to domain models
//! - **Provider clients** - One per external API, uncached
//! - **Transport/Clock** (`traits.rs`) - Injected seams for HTTP and time
//! - **CatalogClient** (`client.rs`) - Read-through TTL caching over the providers
//!
//! # Usage
//!
//! ```ignore
//! use crate_minder::catalog::{CatalogClient, CatalogSettings, DEFAULT_COUNTRY};
//!
//! let client = CatalogClient::new(CatalogSettings::default())?;
//!
//! let albums = client.search("Adele", DEFAULT_COUNTRY).await?;
//! match client.lookup_by_upc("886445503589").await? {
//!     Some(album) => println!("{} - {}", album.artist_name, album.title),
//!     None => println!("No match"),
//! }
//! ```

pub mod artwork;
pub mod cache;
pub mod client;
pub mod discography;
pub mod domain;
pub mod feed;
pub mod itunes;
pub mod musicbrainz;
pub mod traits;
pub mod transport;

pub use artwork::{ArtworkSize, rewrite_artwork};
pub use client::{
    CacheStats, CatalogClient, CatalogSettings, DEFAULT_COUNTRY, DEFAULT_RELATED_LIMIT,
    DEFAULT_TOP_LIMIT,
};
pub use domain::{
    ArtistResult, CatalogError, CatalogSearchResult, FeedAlbumResult, ReleaseMetadata, TrackResult,
};
