//! Lookups by barcode, artist ID, and album ID.

use tokio::runtime::Runtime;

use crate::catalog::{CatalogClient, CatalogSearchResult, TrackResult};

use super::{format_duration, release_year};

/// Identify an album by barcode
pub fn cmd_upc(rt: &Runtime, client: &CatalogClient, code: &str) -> anyhow::Result<()> {
    match rt.block_on(client.lookup_by_upc(code))? {
        Some(album) => {
            println!("✓ Match found!");
            println!();
            print_album(&album);
        }
        None => {
            println!("✗ No match for barcode {}", code);
            println!("  Try searching by title instead.");
        }
    }
    Ok(())
}

/// Look up an artist by AllMusic ID
pub fn cmd_artist(rt: &Runtime, client: &CatalogClient, amg_id: &str) -> anyhow::Result<()> {
    let artists = rt.block_on(client.lookup_artist_by_external_id(amg_id))?;

    if artists.is_empty() {
        println!("✗ No artist with AllMusic ID {}", amg_id);
        return Ok(());
    }

    for artist in &artists {
        println!("  Name:  {}", artist.name);
        println!("  ID:    {}", artist.id);
        if let Some(genre) = &artist.genre {
            println!("  Genre: {}", genre);
        }
        if let Some(url) = &artist.link_url {
            println!("  Link:  {}", url);
        }
    }
    Ok(())
}

/// List an artist's albums
pub fn cmd_related(
    rt: &Runtime,
    client: &CatalogClient,
    artist_id: &str,
    limit: u32,
    dedupe: bool,
) -> anyhow::Result<()> {
    let albums = rt.block_on(async {
        if dedupe {
            client.artist_discography(artist_id, limit).await
        } else {
            client.lookup_related_albums(artist_id, limit).await
        }
    })?;

    if albums.is_empty() {
        println!("✗ No albums for artist {}", artist_id);
        return Ok(());
    }

    for album in &albums {
        println!(
            "  [{}] {} ({}, {} tracks)",
            album.id,
            album.title,
            release_year(&album.release_date),
            album.track_count
        );
    }
    Ok(())
}

/// List the songs on an album
pub fn cmd_tracks(rt: &Runtime, client: &CatalogClient, album_id: &str) -> anyhow::Result<()> {
    let tracks = rt.block_on(client.lookup_tracks(album_id))?;
    print_tracks(album_id, &tracks);
    Ok(())
}

/// Print the high-resolution artwork URL for an album
pub fn cmd_artwork(rt: &Runtime, client: &CatalogClient, album_id: &str) -> anyhow::Result<()> {
    let url = rt.block_on(client.lookup_artwork(album_id))?;
    if url.is_empty() {
        println!("✗ No artwork for album {}", album_id);
    } else {
        println!("{}", url);
    }
    Ok(())
}

/// Show artwork and track list, fetched concurrently
pub fn cmd_album(rt: &Runtime, client: &CatalogClient, album_id: &str) -> anyhow::Result<()> {
    let (artwork, tracks) = rt.block_on(async {
        futures::try_join!(client.lookup_artwork(album_id), client.lookup_tracks(album_id))
    })?;

    if artwork.is_empty() && tracks.is_empty() {
        println!("✗ Album {} not found", album_id);
        return Ok(());
    }

    if !artwork.is_empty() {
        println!("  Artwork: {}", artwork);
        println!();
    }
    print_tracks(album_id, &tracks);
    Ok(())
}

fn print_album(album: &CatalogSearchResult) {
    println!("  Title:   {}", album.title);
    println!("  Artist:  {}", album.artist_name);
    println!("  Year:    {}", release_year(&album.release_date));
    println!("  Genre:   {}", album.genre);
    println!("  Tracks:  {}", album.track_count);
    println!("  ID:      {}", album.id);
    if let Some(url) = &album.view_url {
        println!("  Store:   {}", url);
    }
}

fn print_tracks(album_id: &str, tracks: &[TrackResult]) {
    if tracks.is_empty() {
        println!("✗ No tracks for album {}", album_id);
        return;
    }

    for track in tracks {
        let number = match (track.disc_number, track.track_number) {
            (Some(disc), Some(num)) if disc > 1 => format!("{}-{:02}", disc, num),
            (_, Some(num)) => format!("{:02}", num),
            _ => "--".to_string(),
        };
        let length = track
            .duration
            .map(format_duration)
            .unwrap_or_default();
        println!("  {} {} {}", number, track.title, length);
    }
}
