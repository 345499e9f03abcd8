//! Ports the host environment must implement.
//!
//! The session store, request pipeline and route guard never touch a
//! browser, terminal or file system directly; they talk to these traits.

pub mod navigator;
pub mod storage;

pub use navigator::{Navigator, Notifier, RouteResolver};
pub use storage::KeyValueStore;
