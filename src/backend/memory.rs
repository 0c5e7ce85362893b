//! In-memory backend
//!
//! Directory-aware tree behind a `parking_lot::RwLock`. Mirrors the
//! failure modes of a real file system that the store relies on:
//! writing into a missing directory and listing a missing directory both
//! fail with `NotFound`.

use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::error::{FolderKvError, Result};

use super::{DeleteOptions, FileBackend};

#[derive(Debug, Default)]
struct Tree {
    dirs: BTreeSet<PathBuf>,
    files: BTreeMap<PathBuf, String>,
}

impl Tree {
    /// The root ("" or "/") always exists
    fn is_dir(&self, path: &Path) -> bool {
        path.parent().is_none() || self.dirs.contains(path)
    }
}

/// Backend that keeps everything in process memory
///
/// ## Test Hooks:
/// - `set_read_only(true)`: every mutating primitive fails with `PermissionDenied`
/// - `mkdir_calls()`: number of `mkdir_all` invocations so far
#[derive(Debug, Default)]
pub struct MemoryBackend {
    tree: RwLock<Tree>,
    read_only: AtomicBool,
    mkdir_calls: AtomicUsize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.store(read_only, Ordering::SeqCst);
    }

    pub fn mkdir_calls(&self) -> usize {
        self.mkdir_calls.load(Ordering::SeqCst)
    }

    fn check_writable(&self, operation: &'static str, path: &Path) -> Result<()> {
        if self.read_only.load(Ordering::SeqCst) {
            return Err(FolderKvError::backend(
                operation,
                path,
                io::Error::new(io::ErrorKind::PermissionDenied, "backend is read-only"),
            ));
        }
        Ok(())
    }
}

fn not_found(operation: &'static str, path: &Path) -> FolderKvError {
    FolderKvError::backend(operation, path, io::ErrorKind::NotFound.into())
}

#[async_trait]
impl FileBackend for MemoryBackend {
    async fn exists(&self, path: &Path) -> Result<bool> {
        let tree = self.tree.read();
        Ok(tree.is_dir(path) || tree.files.contains_key(path))
    }

    async fn mkdir_all(&self, path: &Path) -> Result<()> {
        self.mkdir_calls.fetch_add(1, Ordering::SeqCst);
        self.check_writable("mkdir_all", path)?;

        let mut tree = self.tree.write();
        let missing: Vec<PathBuf> = path
            .ancestors()
            .filter(|dir| dir.parent().is_some() && !tree.dirs.contains(*dir))
            .map(Path::to_path_buf)
            .collect();

        if let Some(file) = missing.iter().find(|dir| tree.files.contains_key(*dir)) {
            return Err(FolderKvError::backend(
                "mkdir_all",
                file,
                io::Error::new(io::ErrorKind::AlreadyExists, "a file is in the way"),
            ));
        }

        tree.dirs.extend(missing);
        Ok(())
    }

    async fn write_file(&self, path: &Path, content: &str) -> Result<()> {
        self.check_writable("write_file", path)?;

        let mut tree = self.tree.write();
        if tree.is_dir(path) {
            return Err(FolderKvError::backend(
                "write_file",
                path,
                io::Error::other("is a directory"),
            ));
        }
        match path.parent() {
            Some(parent) if tree.is_dir(parent) => {}
            _ => return Err(not_found("write_file", path)),
        }

        tree.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    async fn read_file(&self, path: &Path) -> Result<String> {
        self.tree
            .read()
            .files
            .get(path)
            .cloned()
            .ok_or_else(|| not_found("read_file", path))
    }

    async fn delete_file(&self, path: &Path, options: DeleteOptions) -> Result<()> {
        self.check_writable("delete_file", path)?;

        match self.tree.write().files.remove(path) {
            Some(_) => Ok(()),
            None if options.idempotent => Ok(()),
            None => Err(not_found("delete_file", path)),
        }
    }

    async fn list_dir(&self, path: &Path) -> Result<Vec<String>> {
        let tree = self.tree.read();
        if !tree.is_dir(path) {
            return Err(not_found("list_dir", path));
        }

        let children = tree
            .files
            .keys()
            .filter(|child| child.parent() == Some(path))
            .filter_map(|child| child.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect();

        Ok(children)
    }
}
