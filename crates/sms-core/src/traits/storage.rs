//! Durable key/value storage port.

use crate::result::AppResult;

/// String-valued durable storage, the equivalent of a browser's
/// `localStorage`.
///
/// Operations are synchronous: every session mutation is a single-step
/// assignment and must not yield halfway through.
pub trait KeyValueStore: Send + Sync + std::fmt::Debug + 'static {
    /// Get a value by key. Returns `None` if the key is absent.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Set a value, replacing any previous one.
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> AppResult<()>;
}
