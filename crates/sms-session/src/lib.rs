//! # sms-session
//!
//! The client's single session context: bearer token, user type, admin
//! sub-role and identity, mirrored into durable key/value storage.
//!
//! ## Modules
//!
//! - `keys` — fixed storage key names
//! - `snapshot` — an immutable view of the session fields
//! - `store` — the owned session context with its mutation operations
//! - `storage` — `KeyValueStore` adapters (in-memory, JSON file)

pub mod keys;
pub mod snapshot;
pub mod storage;
pub mod store;

pub use snapshot::SessionSnapshot;
pub use storage::{FileStore, MemoryStore, open_storage};
pub use store::SessionStore;
