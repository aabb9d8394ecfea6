//! CLI command definitions and dispatch.
//!
//! Each group of subcommands is implemented in its own submodule:
//! - `search`: album, artist, and release-metadata search
//! - `lookup`: lookups by barcode, artist ID, or album ID
//! - `feed`: top releases
//! - `settings`: config file inspection

mod feed;
mod lookup;
mod search;
mod settings;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use tokio::runtime::Runtime;

use crate::catalog::{CatalogClient, CatalogError, DEFAULT_RELATED_LIMIT, DEFAULT_TOP_LIMIT};
use crate::config::{self, Config};
use crate::error::{Result, ResultExt};

pub use feed::cmd_top;
pub use lookup::{cmd_album, cmd_artist, cmd_artwork, cmd_related, cmd_tracks, cmd_upc};
pub use search::{cmd_artists, cmd_releases, cmd_search};
pub use settings::cmd_config;

/// Crate Minder CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to the OS config directory)
    #[arg(long, global = true, env = "CRATE_MINDER_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Search albums
    Search {
        /// Search term
        term: String,
        /// Storefront country code (defaults to config)
        #[arg(short, long)]
        country: Option<String>,
    },
    /// Search artists
    Artists {
        /// Search term
        term: String,
        /// Storefront country code (defaults to config)
        #[arg(short, long)]
        country: Option<String>,
    },
    /// Identify an album by its barcode
    Upc {
        /// UPC/EAN printed on the release
        code: String,
    },
    /// Look up an artist by AllMusic ID
    Artist {
        /// AllMusic artist ID
        amg_id: String,
    },
    /// List an artist's albums
    Related {
        /// Catalog artist ID
        artist_id: String,
        /// Maximum number of albums
        #[arg(short, long, default_value_t = DEFAULT_RELATED_LIMIT)]
        limit: u32,
        /// Collapse duplicate editions and sort newest first
        #[arg(long)]
        dedupe: bool,
    },
    /// List the songs on an album
    Tracks {
        /// Catalog album ID
        album_id: String,
    },
    /// Print a high-resolution artwork URL for an album
    Artwork {
        /// Catalog album ID
        album_id: String,
    },
    /// Show an album's artwork and track list
    Album {
        /// Catalog album ID
        album_id: String,
    },
    /// Show the most-played albums
    Top {
        /// Number of albums
        #[arg(short, long, default_value_t = DEFAULT_TOP_LIMIT)]
        limit: u32,
        /// Storefront country code (defaults to config)
        #[arg(short, long)]
        country: Option<String>,
    },
    /// Search release metadata (barcode, country, type) on MusicBrainz
    Releases {
        /// Free-text release or artist query
        query: String,
        /// Maximum number of releases
        #[arg(short, long, default_value_t = 10)]
        limit: u32,
    },
    /// Show the config file location and effective settings
    Config {
        /// Write the effective settings to the config file
        #[arg(long)]
        init: bool,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => config::load_from(path),
        None => config::load(),
    };

    let rt = Runtime::new()?;
    let client = open_client(&config)?;

    dispatch(cli, &config, &rt, &client).map_err(explain)
}

fn dispatch(cli: &Cli, config: &Config, rt: &Runtime, client: &CatalogClient) -> anyhow::Result<()> {
    let default_country = config.catalog.country.as_str();

    match &cli.command {
        Commands::Search { term, country } => {
            cmd_search(rt, client, term, country.as_deref().unwrap_or(default_country))?
        }
        Commands::Artists { term, country } => {
            cmd_artists(rt, client, term, country.as_deref().unwrap_or(default_country))?
        }
        Commands::Upc { code } => cmd_upc(rt, client, code)?,
        Commands::Artist { amg_id } => cmd_artist(rt, client, amg_id)?,
        Commands::Related {
            artist_id,
            limit,
            dedupe,
        } => cmd_related(rt, client, artist_id, *limit, *dedupe)?,
        Commands::Tracks { album_id } => cmd_tracks(rt, client, album_id)?,
        Commands::Artwork { album_id } => cmd_artwork(rt, client, album_id)?,
        Commands::Album { album_id } => cmd_album(rt, client, album_id)?,
        Commands::Top { limit, country } => {
            cmd_top(rt, client, *limit, country.as_deref().unwrap_or(default_country))?
        }
        Commands::Releases { query, limit } => cmd_releases(rt, client, query, *limit)?,
        Commands::Config { init } => cmd_config(config, cli.config.as_deref(), *init)?,
    }

    Ok(())
}

// ============================================================================
// Shared helper functions
// ============================================================================

/// Add a hint to provider failures that are worth retrying
fn explain(err: anyhow::Error) -> anyhow::Error {
    let transport = err
        .downcast_ref::<CatalogError>()
        .is_some_and(CatalogError::is_transport);
    if transport {
        err.context("Catalog unreachable - check the connection or try again later")
    } else {
        err
    }
}

/// Build the catalog client from config
fn open_client(config: &Config) -> Result<CatalogClient> {
    CatalogClient::new(config.catalog_settings()).with_context("building catalog client")
}

/// Format a track length as m:ss
pub(crate) fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Year part of a provider release date ("2015-11-20T08:00:00Z" -> "2015")
pub(crate) fn release_year(date: &str) -> &str {
    date.get(..4).filter(|y| y.chars().all(|c| c.is_ascii_digit())).unwrap_or("----")
}
