//! Config file inspection.

use std::path::{Path, PathBuf};

use crate::config::{self, Config};
use crate::error::{Error, Result, ResultExt};

/// Print the config location and effective settings, optionally saving them
pub fn cmd_config(config: &Config, explicit_path: Option<&Path>, init: bool) -> anyhow::Result<()> {
    if init {
        let path = write_config(config, explicit_path)?;
        println!("✓ Written to {}", path.display());
    } else {
        let path = match explicit_path {
            Some(path) => path.to_path_buf(),
            None => config::config_path()
                .ok_or_else(|| Error::invalid_input("no config directory; pass --config"))?,
        };
        println!("Config file: {}", path.display());
    }

    println!();
    println!("{}", toml::to_string_pretty(config)?);
    Ok(())
}

/// Save to the given path, or to the OS config directory
fn write_config(config: &Config, explicit_path: Option<&Path>) -> Result<PathBuf> {
    match explicit_path {
        Some(path) => {
            config::save_to(config, path).with_context(format!("writing {}", path.display()))?;
            Ok(path.to_path_buf())
        }
        None => config::save(config).with_context("writing config"),
    }
}
