//! Top releases command.

use tokio::runtime::Runtime;

use crate::catalog::CatalogClient;

/// Show the most-played albums for a storefront
pub fn cmd_top(rt: &Runtime, client: &CatalogClient, limit: u32, country: &str) -> anyhow::Result<()> {
    let albums = rt.block_on(client.fetch_top_releases(limit, country))?;

    if albums.is_empty() {
        println!("✗ The {} feed is empty", country.to_uppercase());
        return Ok(());
    }

    println!("Top {} albums ({}):", albums.len(), country.to_uppercase());
    println!();
    for (rank, album) in albums.iter().enumerate() {
        println!("  {:>3}. {} - {}", rank + 1, album.artist_name, album.title);
        if !album.genres.is_empty() {
            println!("       {}", album.genres.join(", "));
        }
    }
    Ok(())
}
