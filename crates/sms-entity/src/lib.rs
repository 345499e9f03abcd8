//! # sms-entity
//!
//! Typed records for every resource the student-status backend exposes.
//! All records use camelCase JSON to match the wire format. Status columns
//! whose value sets are Chinese literals (`待审批`, `已通过`, ...) are kept as
//! strings; the backend owns those vocabularies.
//!
//! Each resource module also defines the filter struct its `/page`
//! endpoint accepts.

pub mod appeal;
pub mod attachment;
pub mod award;
pub mod dashboard;
pub mod leave;
pub mod log;
pub mod notice;
pub mod punishment;
pub mod status_change;
pub mod student;
pub mod user;

pub use user::{AdminRole, UserInfo, UserType};
