//! Wire-level type definitions shared across the SMS workspace.

pub mod envelope;
pub mod pagination;

pub use envelope::{ApiEnvelope, SUCCESS_CODE, UNAUTHORIZED_CODE};
pub use pagination::{DEFAULT_PAGE_SIZE, PageQuery, PageResult};
