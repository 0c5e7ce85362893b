//! Configuration for FolderKV
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{FolderKvError, Result};

/// Default namespace folder name
pub const DEFAULT_FOLDER: &str = "reduxPersist";

/// Main configuration for a KeyedFileStore
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base directory under which the namespace folder lives
    /// Internal structure:
    ///   {location}/
    ///     └── {folder}/
    ///           ├── <encoded key 1>   (raw value)
    ///           └── <encoded key 2>
    pub location: PathBuf,

    /// Namespace folder name, joined onto `location`
    pub folder: String,
}

/// Platform base directories a store can live under
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseDir {
    /// Persistent, user-visible documents directory
    Documents,

    /// Cache directory (may be purged by the platform)
    Cache,
}

impl BaseDir {
    /// Resolve to a concrete directory on this platform
    pub fn resolve(self) -> Result<PathBuf> {
        let dir = match self {
            BaseDir::Documents => dirs::document_dir().or_else(dirs::data_dir),
            BaseDir::Cache => dirs::cache_dir(),
        };
        dir.ok_or_else(|| {
            FolderKvError::Config(format!("no {:?} directory on this platform", self))
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: BaseDir::Documents.resolve().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to the working directory", e);
                PathBuf::from(".")
            }),
            folder: DEFAULT_FOLDER.to_string(),
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the base location explicitly
    pub fn location(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.location = path.into();
        self
    }

    /// Set the base location to a platform directory
    pub fn base_dir(mut self, base: BaseDir) -> Result<Self> {
        self.config.location = base.resolve()?;
        Ok(self)
    }

    /// Set the namespace folder name
    pub fn folder(mut self, folder: impl Into<String>) -> Self {
        self.config.folder = folder.into();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
