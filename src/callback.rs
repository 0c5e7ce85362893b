//! Callback Adapter
//!
//! Lets every storage operation be consumed either by awaiting its result
//! or through a terminal callback, from one implementation.
//!
//! ## Completion Rules
//! ```text
//! Completion   work result   callback invoked with   returned
//! ──────────   ───────────   ─────────────────────   ─────────────
//! Deferred     Ok(v)         -                       Ok(Ready(v))
//! Deferred     Err(e)        -                       Err(e)
//! Callback     Ok(v)         Ok(&v)                  Ok(Ready(v))
//! Callback     Err(e)        Err(e)                  Ok(Handled)
//! ```
//!
//! The last row is intentional: once a callback has been handed the
//! failure, the awaited result resolves successfully with no value and the
//! error is not raised a second time.

use std::fmt;
use std::future::Future;

use crate::error::Result;

/// Terminal callback: receives `Ok(&result)` or `Err(error)` exactly once
pub type Callback<T> = Box<dyn FnOnce(Result<&T>) + Send + 'static>;

/// How the caller wants to be told about completion
pub enum Completion<T> {
    /// Await the returned value only
    Deferred,

    /// Invoke the callback, and still resolve the returned value
    Callback(Callback<T>),
}

impl<T> Completion<T> {
    /// Wrap a closure as a callback completion
    pub fn callback<F>(f: F) -> Self
    where
        F: FnOnce(Result<&T>) + Send + 'static,
    {
        Completion::Callback(Box::new(f))
    }
}

impl<T> From<Option<Callback<T>>> for Completion<T> {
    fn from(callback: Option<Callback<T>>) -> Self {
        match callback {
            Some(cb) => Completion::Callback(cb),
            None => Completion::Deferred,
        }
    }
}

impl<T> fmt::Debug for Completion<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Completion::Deferred => f.write_str("Deferred"),
            Completion::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

/// Successful resolution of the awaited value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The operation produced a value
    Ready(T),

    /// The operation failed and the failure went to the callback
    Handled,
}

impl<T> Outcome<T> {
    pub fn into_value(self) -> Option<T> {
        match self {
            Outcome::Ready(value) => Some(value),
            Outcome::Handled => None,
        }
    }

    pub fn is_handled(&self) -> bool {
        matches!(self, Outcome::Handled)
    }
}

/// Run `work` and report its result through `completion`
pub async fn with_callback<T, F>(completion: Completion<T>, work: F) -> Result<Outcome<T>>
where
    F: Future<Output = Result<T>>,
{
    let result = work.await;

    match completion {
        Completion::Deferred => result.map(Outcome::Ready),
        Completion::Callback(callback) => match result {
            Ok(value) => {
                callback(Ok(&value));
                Ok(Outcome::Ready(value))
            }
            Err(e) => {
                tracing::debug!("Operation failed, error handed to callback: {}", e);
                callback(Err(e));
                Ok(Outcome::Handled)
            }
        },
    }
}
