//! Backend Module
//!
//! File-system primitives the store is built on, injected as a trait object.
//!
//! ## Responsibilities
//! - Existence checks, recursive directory creation
//! - Whole-file read/write of UTF-8 content
//! - Deletion with optional idempotent semantics
//! - Directory listing by bare file name (files only)
//!
//! ## Implementations
//! - [`LocalFileBackend`]: the real file system via `tokio::fs`
//! - [`MemoryBackend`]: in-process tree for tests and embedders

mod local;
mod memory;

use std::path::Path;

use async_trait::async_trait;

use crate::error::Result;

pub use local::LocalFileBackend;
pub use memory::MemoryBackend;

/// Options for [`FileBackend::delete_file`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteOptions {
    /// Deleting a missing file succeeds instead of failing with `NotFound`
    pub idempotent: bool,
}

impl DeleteOptions {
    pub fn idempotent() -> Self {
        Self { idempotent: true }
    }
}

/// Abstract file-system interface for different storage implementations.
///
/// Object-safe: the store holds an `Arc<dyn FileBackend>`.
/// Failures are reported as [`FolderKvError::Backend`](crate::FolderKvError::Backend)
/// carrying the operation, the path and the underlying `io::Error`.
#[async_trait]
pub trait FileBackend: Send + Sync {
    async fn exists(&self, path: &Path) -> Result<bool>;

    /// Create `path` and any missing parents. Succeeds if it already exists.
    async fn mkdir_all(&self, path: &Path) -> Result<()>;

    /// Replace the whole content of the file at `path`
    async fn write_file(&self, path: &Path, content: &str) -> Result<()>;

    async fn read_file(&self, path: &Path) -> Result<String>;

    async fn delete_file(&self, path: &Path, options: DeleteOptions) -> Result<()>;

    /// Bare names of the regular files directly inside `path`, in backend order.
    /// Subdirectories are not listed.
    async fn list_dir(&self, path: &Path) -> Result<Vec<String>>;
}
