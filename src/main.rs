//! Crate Minder - catalog lookups for a music-cataloging app.
//!
//! Wraps the iTunes Search API, the Apple Music RSS feed, and the
//! MusicBrainz release search behind one cached client, with a CLI for
//! exercising every operation.

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Logs go to stderr so command output stays pipeable
    let filter = match "crate_minder=info".parse::<Directive>() {
        Ok(directive) => EnvFilter::from_default_env().add_directive(directive),
        Err(_) => EnvFilter::from_default_env(),
    };
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(filter)
        .init();

    cli::run_command(&args)
}
