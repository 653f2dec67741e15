//! JSON config file loading.
//!
//! Responsibilities:
//! - Resolve the config file path (explicit, `REDDIT_CONFIG_PATH`, or platform default).
//! - Parse the file and apply its values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Environment variable parsing (see env.rs).
//! - Building the final Config (see builder.rs).
//!
//! Invariants:
//! - File settings are applied before environment variables (env vars take precedence).
//! - A missing file at the default location is not an error; a missing file at an
//!   explicitly requested path is.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use secrecy::SecretString;
use serde::Deserialize;

use super::builder::ConfigLoader;
use super::env::{ENV_CONFIG_PATH, env_var_or_none};
use super::error::ConfigError;
use crate::constants::{APP_NAME, CONFIG_FILE_NAME};

/// On-disk representation of the config file. Every field is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileConfig {
    pub base_url: Option<String>,
    pub user_agent: Option<String>,
    pub access_token: Option<String>,
    pub timeout_seconds: Option<u64>,
}

/// Returns the default path to the configuration file.
///
/// - Linux: `~/.config/reddit-client/config.json`
/// - macOS: `~/Library/Application Support/reddit-client/config.json`
/// - Windows: `%AppData%\reddit-client\config\config.json`
pub fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Apply the config file, if any, to the loader.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let explicit = loader
        .config_path()
        .cloned()
        .or_else(|| env_var_or_none(ENV_CONFIG_PATH).map(PathBuf::from));

    let (path, required) = match explicit {
        Some(path) => (path, true),
        None => (
            default_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?,
            false,
        ),
    };

    if !path.exists() {
        if required {
            return Err(ConfigError::ConfigFileRead { path });
        }
        tracing::debug!(path = %path.display(), "No config file found, skipping");
        return Ok(());
    }

    let file = read_file_config(&path)?;
    apply_file_config(loader, file);
    Ok(())
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|_| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

fn apply_file_config(loader: &mut ConfigLoader, file: FileConfig) {
    if let Some(url) = file.base_url {
        loader.set_base_url(Some(url));
    }
    if let Some(user_agent) = file.user_agent {
        loader.set_user_agent(Some(user_agent));
    }
    if let Some(token) = file.access_token {
        loader.set_access_token(Some(SecretString::new(token.into())));
    }
    if let Some(secs) = file.timeout_seconds {
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
}
