//! Configuration file handling.
//!
//! The configuration file is stored at `$EXPENSES_HOME/config.json` and contains the address the
//! server listens on and the backup settings. The data file and the backups directory live next to
//! it in the home directory.

use crate::backup::Backup;
use crate::store::Store;
use crate::{utils, Result};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

const APP_NAME: &str = "expenses";
const CONFIG_VERSION: u8 = 1;
const BACKUP_COPIES: u32 = 5;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const BACKUPS: &str = ".backups";
const CONFIG_JSON: &str = "config.json";
const EXPENSES_JSON: &str = "expenses.json";

/// The `Config` object represents the configuration of the app. You instantiate it by providing
/// the path to `$EXPENSES_HOME` and from there it loads `$EXPENSES_HOME/config.json`. It owns the
/// `Store` for the data file inside the home directory.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    backups: PathBuf,
    config_path: PathBuf,
    config_file: ConfigFile,
    store: Store,
}

impl Config {
    /// Creates the home directory, its backups subdirectory, an empty data file if there is none,
    /// and writes `config.json` from `config_file`.
    ///
    /// # Errors
    /// - Returns an error if `config.json` already exists.
    /// - Returns an error if any file operations fail.
    pub async fn create(dir: impl Into<PathBuf>, config_file: ConfigFile) -> Result<Self> {
        let maybe_relative = dir.into();
        utils::make_dir(&maybe_relative)
            .await
            .context("Unable to create the expenses home directory")?;
        let root = utils::canonicalize(&maybe_relative).await?;

        let config_path = root.join(CONFIG_JSON);
        if config_path.is_file() {
            bail!("A config file already exists at {}", config_path.display())
        }

        let backups = root.join(BACKUPS);
        utils::make_dir(&backups).await?;

        config_file.save(&config_path).await?;

        let config = Self::assemble(root, config_path, config_file);
        config
            .store
            .init()
            .await
            .context("Unable to create the data file")?;
        Ok(config)
    }

    /// This will
    /// - validate that `home` exists, creating it with defaults if there is no config file yet
    /// - load and validate the config file
    /// - validate that the backups directory exists
    /// - return the loaded configuration object
    pub async fn load(home: impl Into<PathBuf>) -> Result<Self> {
        let home = home.into();
        if !home.join(CONFIG_JSON).is_file() {
            info!(
                "No configuration found in {}, creating one with default settings",
                home.display()
            );
            return Self::create(home, ConfigFile::default()).await;
        }

        let root = utils::canonicalize(&home).await?;
        let config_path = root.join(CONFIG_JSON);
        let config_file = ConfigFile::load(&config_path).await?;
        let config = Self::assemble(root, config_path, config_file);
        if !config.backups.is_dir() {
            bail!(
                "The backups directory is missing '{}'",
                config.backups.display()
            )
        }
        Ok(config)
    }

    fn assemble(root: PathBuf, config_path: PathBuf, config_file: ConfigFile) -> Self {
        let backups = root.join(BACKUPS);
        let backup = Backup::new(&backups, config_file.backup_copies);
        let store = Store::new(root.join(EXPENSES_JSON), backup);
        Self {
            root,
            backups,
            config_path,
            config_file,
            store,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn backups(&self) -> &Path {
        &self.backups
    }

    pub fn host(&self) -> &str {
        &self.config_file.host
    }

    pub fn port(&self) -> u16 {
        self.config_file.port
    }

    pub fn backup_copies(&self) -> u32 {
        self.config_file.backup_copies
    }
}

/// Represents the serialization and deserialization format of the configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "expenses",
///   "config_version": 1,
///   "host": "0.0.0.0",
///   "port": 5000,
///   "backup_copies": 5
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
pub struct ConfigFile {
    /// Application name, should always be "expenses"
    app_name: String,

    /// Configuration file version
    config_version: u8,

    /// The address the server binds to
    #[serde(default = "default_host")]
    host: String,

    /// The port the server listens on
    #[serde(default = "default_port")]
    port: u16,

    /// Number of data file backups to keep, zero disables backups
    #[serde(default = "default_backup_copies")]
    backup_copies: u32,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            host: default_host(),
            port: DEFAULT_PORT,
            backup_copies: BACKUP_COPIES,
        }
    }
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_backup_copies() -> u32 {
    BACKUP_COPIES
}

impl ConfigFile {
    /// Creates a new ConfigFile with the specified settings.
    pub fn new(host: impl Into<String>, port: u16, backup_copies: u32) -> Self {
        Self {
            host: host.into(),
            port,
            backup_copies,
            ..Default::default()
        }
    }

    /// Loads a ConfigFile from the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed, or if `app_name` or
    /// `config_version` are not the expected values.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: ConfigFile = utils::deserialize(path)
            .await
            .context("Unable to load the config file")?;

        anyhow::ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );
        anyhow::ensure!(
            config.config_version == CONFIG_VERSION,
            "Unsupported config_version {} in {}. Is a newer version of expenses available?",
            config.config_version,
            path.display()
        );

        Ok(config)
    }

    /// Saves the ConfigFile to the specified path.
    pub async fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let p = path.as_ref();
        let data = serde_json::to_string_pretty(self).context("Unable to serialize config")?;
        utils::write(p, data)
            .await
            .context("Unable to write config file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_config_create() {
        let dir = TempDir::new().unwrap();
        let home_dir = dir.path().join("expenses_home");

        let config = Config::create(&home_dir, ConfigFile::new("127.0.0.1", 8080, 3))
            .await
            .unwrap();

        assert_eq!(config.host(), "127.0.0.1");
        assert_eq!(config.port(), 8080);
        assert_eq!(config.backup_copies(), 3);
        assert!(config.backups().is_dir());
        assert!(config.config_path().is_file());
        assert_eq!(utils::read(config.store().path()).await.unwrap(), "[]");
    }

    #[tokio::test]
    async fn test_config_create_refuses_overwrite() {
        let dir = TempDir::new().unwrap();
        Config::create(dir.path(), ConfigFile::default())
            .await
            .unwrap();
        let result = Config::create(dir.path(), ConfigFile::default()).await;
        assert!(result.unwrap_err().to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn test_config_load_creates_defaults() {
        let dir = TempDir::new().unwrap();
        let home_dir = dir.path().join("fresh");
        let config = Config::load(&home_dir).await.unwrap();
        assert_eq!(config.host(), DEFAULT_HOST);
        assert_eq!(config.port(), DEFAULT_PORT);
        assert!(config.config_path().is_file());
    }

    #[tokio::test]
    async fn test_config_load_existing() {
        let dir = TempDir::new().unwrap();
        Config::create(dir.path(), ConfigFile::new("localhost", 9000, 1))
            .await
            .unwrap();
        let config = Config::load(dir.path()).await.unwrap();
        assert_eq!(config.host(), "localhost");
        assert_eq!(config.port(), 9000);
        assert_eq!(config.backup_copies(), 1);
    }

    #[tokio::test]
    async fn test_config_file_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");

        let original = ConfigFile::new("127.0.0.1", 3000, 7);
        original.save(&config_path).await.unwrap();
        let loaded = ConfigFile::load(&config_path).await.unwrap();

        assert_eq!(original, loaded);
    }

    #[tokio::test]
    async fn test_config_file_load_with_minimal_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        let json = r#"{
            "app_name": "expenses",
            "config_version": 1
        }"#;
        utils::write(&config_path, json).await.unwrap();

        let config = ConfigFile::load(&config_path).await.unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[tokio::test]
    async fn test_config_file_load_invalid_app_name() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        let json = r#"{
            "app_name": "wrong_app",
            "config_version": 1
        }"#;
        utils::write(&config_path, json).await.unwrap();

        let result = ConfigFile::load(&config_path).await;
        assert!(result.unwrap_err().to_string().contains("Invalid app_name"));
    }

    #[tokio::test]
    async fn test_config_file_load_unsupported_version() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.json");
        let json = r#"{
            "app_name": "expenses",
            "config_version": 99
        }"#;
        utils::write(&config_path, json).await.unwrap();

        let result = ConfigFile::load(&config_path).await;
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Unsupported config_version"));
    }
}
