//! Gallery settings loaded from `settings.yaml`

use std::env;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// Settings file used when `GALLERY_SETTINGS_PATH` is not set
pub const DEFAULT_SETTINGS_PATH: &str = "configs/settings.yaml";

/// Prefix for environment variables overriding individual settings
const ENV_PREFIX: &str = "GALLERY";

/// Errors raised while loading settings
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The settings file is missing, unreadable or malformed
    #[error("Failed to load settings from {path}: {source}")]
    Load {
        /// Path of the settings file
        path: String,
        /// Underlying parser error
        #[source]
        source: config::ConfigError,
    },
}

/// Read-only settings for the lifetime of the process
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Settings {
    /// AWS region of the bucket and table
    pub region: String,
    /// S3 bucket holding original and resized images
    pub bucket_name: String,
    /// Dynamo DB table holding one record per image
    pub table_name: String,
    /// Prefix joined with object keys to build public image URLs
    pub base_url: String,
    /// Path of the gallery page template
    pub tmpl_path: String,
    /// HTTP listen port
    pub port: u16,
}

impl Settings {
    /// Path of the settings file, from `GALLERY_SETTINGS_PATH` or the default
    #[must_use]
    pub fn path_from_env() -> PathBuf {
        env::var("GALLERY_SETTINGS_PATH")
            .map_or_else(|_| PathBuf::from(DEFAULT_SETTINGS_PATH), PathBuf::from)
    }

    /// Loads settings from a YAML file, then applies `GALLERY_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::Load` if the file does not exist, is not valid YAML or lacks a
    /// required key
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let display_path = path.display().to_string();
        let to_error = |source| SettingsError::Load {
            path: display_path.clone(),
            source,
        };

        config::Config::builder()
            .add_source(
                config::File::new(&display_path, config::FileFormat::Yaml).required(true),
            )
            .add_source(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()
            .map_err(to_error)?
            .try_deserialize()
            .map_err(to_error)
    }
}
