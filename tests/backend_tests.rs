//! Tests for FileBackend implementations
//!
//! These tests verify:
//! - LocalFileBackend against a real temp directory
//! - MemoryBackend directory semantics
//! - Idempotent vs strict deletion
//! - Listing returns bare names, never paths
//! - Failures carry operation, path and io::ErrorKind

use std::io;
use std::path::Path;

use folderkv::backend::{DeleteOptions, FileBackend, LocalFileBackend, MemoryBackend};
use folderkv::FolderKvError;
use tempfile::TempDir;

// =============================================================================
// LocalFileBackend Tests
// =============================================================================

#[tokio::test]
async fn test_local_exists() {
    let temp = TempDir::new().unwrap();
    let backend = LocalFileBackend::new();

    assert!(backend.exists(temp.path()).await.unwrap());
    assert!(!backend.exists(&temp.path().join("missing")).await.unwrap());
}

#[tokio::test]
async fn test_local_mkdir_all_nested() {
    let temp = TempDir::new().unwrap();
    let backend = LocalFileBackend::new();
    let dir = temp.path().join("a").join("b").join("c");

    backend.mkdir_all(&dir).await.unwrap();
    assert!(dir.is_dir());

    // Already existing is fine
    backend.mkdir_all(&dir).await.unwrap();
}

#[tokio::test]
async fn test_local_write_read_overwrite() {
    let temp = TempDir::new().unwrap();
    let backend = LocalFileBackend::new();
    let file = temp.path().join("entry");

    backend.write_file(&file, "first value").await.unwrap();
    assert_eq!(backend.read_file(&file).await.unwrap(), "first value");

    backend.write_file(&file, "v2").await.unwrap();
    assert_eq!(backend.read_file(&file).await.unwrap(), "v2");
    assert_eq!(std::fs::read_to_string(&file).unwrap(), "v2");
}

#[tokio::test]
async fn test_local_read_missing_is_not_found() {
    let temp = TempDir::new().unwrap();
    let backend = LocalFileBackend::new();
    let file = temp.path().join("missing");

    let err = backend.read_file(&file).await.unwrap_err();

    assert!(err.is_not_found());
    match err {
        FolderKvError::Backend { operation, path, .. } => {
            assert_eq!(operation, "read_file");
            assert_eq!(path, file);
        }
        other => panic!("expected Backend error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_local_delete_idempotent() {
    let temp = TempDir::new().unwrap();
    let backend = LocalFileBackend::new();
    let file = temp.path().join("entry");
    backend.write_file(&file, "x").await.unwrap();

    backend.delete_file(&file, DeleteOptions::idempotent()).await.unwrap();
    assert!(!file.exists());

    backend.delete_file(&file, DeleteOptions::idempotent()).await.unwrap();
}

#[tokio::test]
async fn test_local_delete_strict_missing_fails() {
    let temp = TempDir::new().unwrap();
    let backend = LocalFileBackend::new();

    let err = backend
        .delete_file(&temp.path().join("missing"), DeleteOptions::default())
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_local_list_dir_bare_names() {
    let temp = TempDir::new().unwrap();
    let backend = LocalFileBackend::new();
    for name in ["one", "two", "a%2Fb"] {
        backend
            .write_file(&temp.path().join(name), "x")
            .await
            .unwrap();
    }

    let mut names = backend.list_dir(temp.path()).await.unwrap();
    names.sort();

    assert_eq!(names, vec!["a%2Fb", "one", "two"]);
}

#[tokio::test]
async fn test_local_list_dir_skips_subdirectories() {
    let temp = TempDir::new().unwrap();
    let backend = LocalFileBackend::new();
    backend
        .write_file(&temp.path().join("entry"), "x")
        .await
        .unwrap();
    backend.mkdir_all(&temp.path().join("sub")).await.unwrap();

    let names = backend.list_dir(temp.path()).await.unwrap();

    assert_eq!(names, vec!["entry"]);
}

#[tokio::test]
async fn test_local_list_missing_dir_fails() {
    let temp = TempDir::new().unwrap();
    let backend = LocalFileBackend::new();

    let err = backend
        .list_dir(&temp.path().join("missing"))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
}

// =============================================================================
// MemoryBackend Tests
// =============================================================================

#[tokio::test]
async fn test_memory_root_always_exists() {
    let backend = MemoryBackend::new();

    assert!(backend.exists(Path::new("/")).await.unwrap());
    assert!(!backend.exists(Path::new("/data")).await.unwrap());
}

#[tokio::test]
async fn test_memory_mkdir_all_creates_parents() {
    let backend = MemoryBackend::new();

    backend.mkdir_all(Path::new("/data/app/store")).await.unwrap();

    assert!(backend.exists(Path::new("/data")).await.unwrap());
    assert!(backend.exists(Path::new("/data/app")).await.unwrap());
    assert!(backend.exists(Path::new("/data/app/store")).await.unwrap());
    assert_eq!(backend.mkdir_calls(), 1);
}

#[tokio::test]
async fn test_memory_write_requires_parent_dir() {
    let backend = MemoryBackend::new();

    let err = backend
        .write_file(Path::new("/data/entry"), "x")
        .await
        .unwrap_err();
    assert!(err.is_not_found());

    backend.mkdir_all(Path::new("/data")).await.unwrap();
    backend.write_file(Path::new("/data/entry"), "x").await.unwrap();
    assert_eq!(backend.read_file(Path::new("/data/entry")).await.unwrap(), "x");
}

#[tokio::test]
async fn test_memory_mkdir_over_file_fails() {
    let backend = MemoryBackend::new();
    backend.mkdir_all(Path::new("/data")).await.unwrap();
    backend.write_file(Path::new("/data/entry"), "x").await.unwrap();

    let err = backend
        .mkdir_all(Path::new("/data/entry/sub"))
        .await
        .unwrap_err();

    assert_eq!(err.io_kind(), Some(io::ErrorKind::AlreadyExists));
}

#[tokio::test]
async fn test_memory_list_dir_direct_files_only() {
    let backend = MemoryBackend::new();
    backend.mkdir_all(Path::new("/data/sub")).await.unwrap();
    backend.write_file(Path::new("/data/a"), "1").await.unwrap();
    backend.write_file(Path::new("/data/sub/b"), "2").await.unwrap();

    let names = backend.list_dir(Path::new("/data")).await.unwrap();

    assert_eq!(names, vec!["a"]);
}

#[tokio::test]
async fn test_memory_list_missing_dir_fails() {
    let backend = MemoryBackend::new();

    let err = backend.list_dir(Path::new("/nowhere")).await.unwrap_err();

    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_memory_delete_semantics() {
    let backend = MemoryBackend::new();
    let file = Path::new("/entry");
    backend.write_file(file, "x").await.unwrap();

    backend.delete_file(file, DeleteOptions::default()).await.unwrap();
    assert!(!backend.exists(file).await.unwrap());

    backend.delete_file(file, DeleteOptions::idempotent()).await.unwrap();
    let err = backend
        .delete_file(file, DeleteOptions::default())
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_memory_read_only_rejects_mutations() {
    let backend = MemoryBackend::new();
    backend.mkdir_all(Path::new("/data")).await.unwrap();
    backend.write_file(Path::new("/data/entry"), "x").await.unwrap();
    backend.set_read_only(true);

    let denied = Some(io::ErrorKind::PermissionDenied);
    assert_eq!(
        backend.write_file(Path::new("/data/entry"), "y").await.unwrap_err().io_kind(),
        denied
    );
    assert_eq!(
        backend
            .delete_file(Path::new("/data/entry"), DeleteOptions::idempotent())
            .await
            .unwrap_err()
            .io_kind(),
        denied
    );
    assert_eq!(
        backend.mkdir_all(Path::new("/other")).await.unwrap_err().io_kind(),
        denied
    );

    // Reads still work
    assert_eq!(backend.read_file(Path::new("/data/entry")).await.unwrap(), "x");

    backend.set_read_only(false);
    backend.write_file(Path::new("/data/entry"), "y").await.unwrap();
}
