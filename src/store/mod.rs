//! Store Module
//!
//! The storage-engine contract and its file-backed implementation.
//!
//! ## Responsibilities
//! - `set_item` / `get_item` / `remove_item` / `get_all_keys`
//! - Callback-or-await completion for every operation
//! - Lazy creation of the namespace folder
//!
//! ## Concurrency
//! Every call is an independent unit of work. There is no locking and no
//! per-key ordering: overlapping writes to one key race at the backend and
//! the last to finish wins. `get_all_keys` may observe a listing from
//! before or after a concurrent mutation.

mod keyed;

use async_trait::async_trait;

use crate::callback::{with_callback, Completion, Outcome};
use crate::error::Result;

pub use keyed::KeyedFileStore;

/// Asynchronous string key-value storage engine
///
/// The `*_with` variants accept a [`Completion`] and follow the rules in
/// [`crate::callback`]: with a callback, a failure is delivered to the
/// callback and the returned value resolves to [`Outcome::Handled`].
#[async_trait]
pub trait AsyncStorage: Send + Sync {
    /// Store `value` under `key`, replacing any previous value
    async fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Fetch the value for `key`, `Ok(None)` if it was never set
    async fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Delete `key`. Deleting a missing key succeeds.
    async fn remove_item(&self, key: &str) -> Result<()>;

    /// All stored keys, in no particular order
    async fn get_all_keys(&self) -> Result<Vec<String>>;

    async fn set_item_with(
        &self,
        key: &str,
        value: &str,
        completion: Completion<()>,
    ) -> Result<Outcome<()>> {
        with_callback(completion, self.set_item(key, value)).await
    }

    async fn get_item_with(
        &self,
        key: &str,
        completion: Completion<Option<String>>,
    ) -> Result<Outcome<Option<String>>> {
        with_callback(completion, self.get_item(key)).await
    }

    async fn remove_item_with(
        &self,
        key: &str,
        completion: Completion<()>,
    ) -> Result<Outcome<()>> {
        with_callback(completion, self.remove_item(key)).await
    }

    async fn get_all_keys_with(
        &self,
        completion: Completion<Vec<String>>,
    ) -> Result<Outcome<Vec<String>>> {
        with_callback(completion, self.get_all_keys()).await
    }
}
