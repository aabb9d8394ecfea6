//! Command-line interface for crate-minder.
//!
//! Every catalog operation has a subcommand, so the client can be exercised
//! against the live providers without the app.

mod commands;

pub use commands::{Cli, Commands, run_command};
