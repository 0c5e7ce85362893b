//! Keyed File Store
//!
//! One regular file per key under `{location}/{folder}`; the file content
//! is the raw value.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;

use crate::backend::{DeleteOptions, FileBackend, LocalFileBackend};
use crate::config::Config;
use crate::error::{FolderKvError, Result};
use crate::path::{decode_file_name, encode_key, resolve_path};

use super::AsyncStorage;

/// File-backed key-value store
///
/// Cheap to clone: clones share the backend.
/// Nothing is cached between calls; the file system is inspected fresh
/// on every operation.
#[derive(Clone)]
pub struct KeyedFileStore {
    /// Normalized `{location}/{folder}`
    namespace_root: String,

    /// File-system primitives
    backend: Arc<dyn FileBackend>,
}

impl KeyedFileStore {
    /// Create a store on the local file system
    pub fn open(config: Config) -> Result<Self> {
        Self::with_backend(config, Arc::new(LocalFileBackend::new()))
    }

    /// Create a store over any backend
    ///
    /// Only validates and normalizes the namespace root. The folder itself
    /// is created lazily by the first `set_item` or `get_all_keys`.
    pub fn with_backend(config: Config, backend: Arc<dyn FileBackend>) -> Result<Self> {
        let location = config.location.to_str().ok_or_else(|| {
            FolderKvError::Config(format!(
                "location is not valid UTF-8: {}",
                config.location.display()
            ))
        })?;

        if resolve_path([config.folder.as_str()])
            .trim_start_matches('/')
            .is_empty()
        {
            return Err(FolderKvError::Config(format!(
                "folder {:?} does not name a directory",
                config.folder
            )));
        }

        let namespace_root = resolve_path([location, config.folder.as_str()]);
        tracing::debug!("Namespace root: {}", namespace_root);

        Ok(Self {
            namespace_root,
            backend,
        })
    }

    /// Directory holding every entry of this store
    pub fn namespace_root(&self) -> &Path {
        Path::new(&self.namespace_root)
    }

    /// File path for `key`
    pub fn path_for_key(&self, key: &str) -> PathBuf {
        PathBuf::from(resolve_path([
            self.namespace_root.as_str(),
            encode_key(key).as_str(),
        ]))
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    /// Create the namespace root if it is missing
    ///
    /// Checks first so the common case costs one `exists` and no `mkdir_all`.
    async fn ensure_namespace_root(&self) -> Result<()> {
        let root = self.namespace_root();
        if !self.backend.exists(root).await? {
            tracing::debug!("Creating namespace root {}", root.display());
            self.backend.mkdir_all(root).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl AsyncStorage for KeyedFileStore {
    async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.ensure_namespace_root().await?;

        let path = self.path_for_key(key);
        tracing::debug!("set_item {:?} -> {}", key, path.display());
        self.backend.write_file(&path, value).await
    }

    async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for_key(key);
        tracing::debug!("get_item {:?} <- {}", key, path.display());

        if !self.backend.exists(&path).await? {
            return Ok(None);
        }

        match self.backend.read_file(&path).await {
            Ok(value) => Ok(Some(value)),
            // Removed between the existence check and the read
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn remove_item(&self, key: &str) -> Result<()> {
        let path = self.path_for_key(key);
        tracing::debug!("remove_item {:?} ({})", key, path.display());
        self.backend
            .delete_file(&path, DeleteOptions::idempotent())
            .await
    }

    async fn get_all_keys(&self) -> Result<Vec<String>> {
        self.ensure_namespace_root().await?;

        let names = self.backend.list_dir(self.namespace_root()).await?;
        let keys = names
            .into_iter()
            .filter_map(|name| match decode_file_name(&name) {
                Ok(key) => Some(key),
                Err(e) => {
                    tracing::warn!("Skipping entry in {}: {}", self.namespace_root, e);
                    None
                }
            })
            .collect();

        Ok(keys)
    }
}

impl fmt::Debug for KeyedFileStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedFileStore")
            .field("namespace_root", &self.namespace_root)
            .finish_non_exhaustive()
    }
}
