//! # FolderKV
//!
//! An asynchronous key-value storage adapter that keeps each entry as one
//! file inside a namespace folder:
//! - Reversible, collision-free key → file name encoding
//! - Lazy creation of the namespace folder
//! - Pluggable file-system backend
//! - Every operation consumable by `await` or by a terminal callback
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   AsyncStorage (trait)                       │
//! │     set_item / get_item / remove_item / get_all_keys         │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │  *_with variants
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                  Callback Adapter                            │
//! │            (Deferred  XOR  Callback(err, result))            │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                   KeyedFileStore                             │
//! │        {location}/{folder}/{encode_key(key)}                 │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          ▼                         ▼
//!   ┌──────────────────┐     ┌──────────────────┐
//!   │ LocalFileBackend │     │  MemoryBackend   │
//!   │   (tokio::fs)    │     │    (RwLock)      │
//!   └──────────────────┘     └──────────────────┘
//! ```
//!
//! ## Example
//!
//! ```no_run
//! use folderkv::{AsyncStorage, Config, KeyedFileStore};
//!
//! # async fn run() -> folderkv::Result<()> {
//! let config = Config::builder().location("/tmp/app").folder("store").build();
//! let store = KeyedFileStore::open(config)?;
//!
//! store.set_item("alpha", "1").await?;
//! assert_eq!(store.get_item("alpha").await?, Some("1".to_string()));
//! # Ok(())
//! # }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod path;
pub mod backend;
pub mod callback;
pub mod store;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{FolderKvError, Result};
pub use config::{BaseDir, Config};
pub use backend::{DeleteOptions, FileBackend, LocalFileBackend, MemoryBackend};
pub use callback::{with_callback, Callback, Completion, Outcome};
pub use store::{AsyncStorage, KeyedFileStore};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of FolderKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
