//! # sms-api
//!
//! Typed access to every backend resource, built on the shared
//! [`RequestPipeline`](sms_http::RequestPipeline), plus the
//! [`SessionManager`] that logs in and out.
//!
//! Resources are addressed through [`SmsApi`]:
//!
//! ```ignore
//! let page = api.awards().page(&AwardQuery { stu_id: Some(id), ..Default::default() }).await?;
//! ```

pub mod attachment;
pub mod auth;
pub mod client;
pub mod dashboard;
pub mod export;
pub mod profile;
pub mod record;
pub mod resource;

pub use attachment::{AttachmentApi, AttachmentUpload};
pub use auth::SessionManager;
pub use client::SmsApi;
pub use dashboard::DashboardApi;
pub use export::{ExportApi, ExportKind};
pub use profile::ProfileApi;
pub use record::{ApiRecord, PagedRecord, StudentRecord, WritableRecord};
pub use resource::Resource;
