//! Adapter layer: Convert iTunes DTOs to domain models
//!
//! This is the ONLY place where iTunes DTO types are converted to domain
//! types. Each converter keeps only the entries of its own `wrapperType`;
//! everything else in a mixed lookup response is dropped here.

use std::time::Duration;

use super::dto::{self, CatalogItem};
use crate::catalog::domain::{ArtistResult, CatalogSearchResult, TrackResult};

/// Keep the album entries of a response
pub fn to_albums(response: dto::SearchResponse) -> Vec<CatalogSearchResult> {
    response
        .results
        .into_iter()
        .filter_map(|item| match item {
            CatalogItem::Collection(collection) => Some(to_album(collection)),
            _ => None,
        })
        .collect()
}

/// Keep the artist entries of a response
pub fn to_artists(response: dto::SearchResponse) -> Vec<ArtistResult> {
    response
        .results
        .into_iter()
        .filter_map(|item| match item {
            CatalogItem::Artist(artist) => Some(to_artist(artist)),
            _ => None,
        })
        .collect()
}

/// Keep the track entries of a response
pub fn to_tracks(response: dto::SearchResponse) -> Vec<TrackResult> {
    response
        .results
        .into_iter()
        .filter_map(|item| match item {
            CatalogItem::Track(track) => Some(to_track(track)),
            _ => None,
        })
        .collect()
}

fn to_album(collection: dto::Collection) -> CatalogSearchResult {
    CatalogSearchResult {
        id: collection.collection_id,
        title: collection.collection_name.unwrap_or_default(),
        artist_name: collection.artist_name.unwrap_or_default(),
        artist_id: collection.artist_id,
        artwork_url: collection.artwork_url100.unwrap_or_default(),
        genre: collection.primary_genre_name.unwrap_or_default(),
        release_date: collection.release_date.unwrap_or_default(),
        track_count: collection.track_count.unwrap_or(0),
        view_url: collection.collection_view_url,
    }
}

fn to_artist(artist: dto::Artist) -> ArtistResult {
    ArtistResult {
        id: artist.artist_id,
        name: artist.artist_name.unwrap_or_default(),
        genre: artist.primary_genre_name,
        link_url: artist.artist_link_url,
        amg_artist_id: artist.amg_artist_id,
    }
}

fn to_track(track: dto::Track) -> TrackResult {
    TrackResult {
        id: track.track_id,
        title: track.track_name.unwrap_or_default(),
        artist_name: track.artist_name.unwrap_or_default(),
        album_title: track.collection_name.unwrap_or_default(),
        track_number: track.track_number,
        disc_number: track.disc_number,
        duration: track.track_time_millis.map(Duration::from_millis),
        preview_url: track.preview_url,
    }
}
