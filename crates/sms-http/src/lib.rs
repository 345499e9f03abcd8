//! # sms-http
//!
//! The single outbound HTTP path of the client. Every API call goes
//! through [`RequestPipeline`], which
//!
//! - attaches the session's bearer token,
//! - turns transport failures and non-success envelopes into [`AppError`]s
//!   and shows them to the user,
//! - hands authentication failures to the [`SessionExpiryHandler`], which
//!   tears the session down and redirects to the login route exactly once
//!   no matter how many calls fail together,
//! - persists tokens the server rotates through a response header,
//! - returns the envelope's `data` unwrapped.
//!
//! [`AppError`]: sms_core::AppError

pub mod download;
pub mod expiry;
pub mod markers;
pub mod pipeline;

pub use download::Download;
pub use expiry::SessionExpiryHandler;
pub use markers::ExpiryMarkers;
pub use pipeline::RequestPipeline;

/// Message shown when the session expired and the server gave no reason.
pub const DEFAULT_EXPIRED_MESSAGE: &str = "登录已过期，请重新登录";

/// Message shown for a failed call the server gave no reason for.
pub const DEFAULT_FAILURE_MESSAGE: &str = "请求失败";
