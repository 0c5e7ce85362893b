//! Local file-system backend
//!
//! Thin async wrapper over `tokio::fs`.

use std::io;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs;

use crate::error::{FolderKvError, Result};

use super::{DeleteOptions, FileBackend};

/// Backend over the real file system
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileBackend;

impl LocalFileBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileBackend for LocalFileBackend {
    async fn exists(&self, path: &Path) -> Result<bool> {
        fs::try_exists(path)
            .await
            .map_err(|e| FolderKvError::backend("exists", path, e))
    }

    async fn mkdir_all(&self, path: &Path) -> Result<()> {
        fs::create_dir_all(path)
            .await
            .map_err(|e| FolderKvError::backend("mkdir_all", path, e))
    }

    async fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        fs::write(path, content)
            .await
            .map_err(|e| FolderKvError::backend("write_file", path, e))
    }

    async fn read_file(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path)
            .await
            .map_err(|e| FolderKvError::backend("read_file", path, e))
    }

    async fn delete_file(&self, path: &Path, options: DeleteOptions) -> Result<()> {
        match fs::remove_file(path).await {
            Ok(()) => Ok(()),
            Err(e) if options.idempotent && e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(FolderKvError::backend("delete_file", path, e)),
        }
    }

    async fn list_dir(&self, path: &Path) -> Result<Vec<String>> {
        let map_err = |e: io::Error| FolderKvError::backend("list_dir", path, e);

        let mut entries = fs::read_dir(path).await.map_err(map_err)?;
        let mut names = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(map_err)? {
            if !entry.file_type().await.map_err(map_err)?.is_file() {
                continue;
            }
            names.push(entry.file_name().to_string_lossy().into_owned());
        }

        Ok(names)
    }
}
