//! Album, artist, and release-metadata search commands.

use tokio::runtime::Runtime;

use crate::catalog::CatalogClient;

use super::release_year;

/// Search albums by free text
pub fn cmd_search(rt: &Runtime, client: &CatalogClient, term: &str, country: &str) -> anyhow::Result<()> {
    let albums = rt.block_on(client.search(term, country))?;

    if albums.is_empty() {
        println!("✗ No albums found for {:?} in {}", term, country.to_uppercase());
        return Ok(());
    }

    println!("Found {} albums:", albums.len());
    println!();
    for album in &albums {
        println!(
            "  [{}] {} - {} ({}, {} tracks)",
            album.id,
            album.artist_name,
            album.title,
            release_year(&album.release_date),
            album.track_count
        );
    }
    Ok(())
}

/// Search artists by free text
pub fn cmd_artists(rt: &Runtime, client: &CatalogClient, term: &str, country: &str) -> anyhow::Result<()> {
    let artists = rt.block_on(client.artist_search(term, country))?;

    if artists.is_empty() {
        println!("✗ No artists found for {:?}", term);
        return Ok(());
    }

    for artist in &artists {
        match &artist.genre {
            Some(genre) => println!("  [{}] {} ({})", artist.id, artist.name, genre),
            None => println!("  [{}] {}", artist.id, artist.name),
        }
    }
    Ok(())
}

/// Search release metadata on MusicBrainz
pub fn cmd_releases(rt: &Runtime, client: &CatalogClient, query: &str, limit: u32) -> anyhow::Result<()> {
    let releases = rt.block_on(client.search_releases(query, limit))?;

    if releases.is_empty() {
        println!("✗ No releases found for {:?}", query);
        return Ok(());
    }

    for release in &releases {
        println!(
            "  {:>3}% {} - {}",
            release.score,
            release.artist.as_deref().unwrap_or("Unknown Artist"),
            release.title
        );
        let details: Vec<String> = [
            release.date.clone(),
            release.country.clone(),
            release.primary_type.clone(),
            release.barcode.as_ref().map(|b| format!("barcode {}", b)),
        ]
        .into_iter()
        .flatten()
        .collect();
        if !details.is_empty() {
            println!("       {}", details.join(" · "));
        }
        println!("       https://musicbrainz.org/release/{}", release.id);
    }
    Ok(())
}
