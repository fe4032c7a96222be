use crate::commands::Out;
use crate::{Config, ConfigFile, Result};
use anyhow::Context;
use std::path::Path;

/// Creates the home directory, its backups directory, an empty data file and a `config.json`
/// holding `config_file`.
///
/// # Arguments
/// - `home` - The directory that will be the root of the data directory, e.g. `$HOME/expenses`
/// - `config_file` - The settings to write to `config.json`
///
/// # Errors
/// - Returns an error if a `config.json` already exists in `home`.
/// - Returns an error if any file operations fail.
pub async fn init(home: &Path, config_file: ConfigFile) -> Result<Out<()>> {
    let config = Config::create(home, config_file)
        .await
        .context("Unable to create the data directory and configs")?;
    Ok(format!(
        "Successfully created the expenses directory at {}",
        config.root().display()
    )
    .into())
}
