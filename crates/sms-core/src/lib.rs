//! # sms-core
//!
//! Core crate for the student-status management client. Contains the
//! unified error system, configuration schemas, the wire envelope and
//! pagination types, and the ports (durable storage, navigation, toast
//! notifications) that every host has to provide.
//!
//! This crate has **no** internal dependencies on other SMS crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
