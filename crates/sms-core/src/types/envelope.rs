//! The uniform `{code, message, data}` response envelope.

use serde::{Deserialize, Serialize};

/// Envelope `code` that denotes success.
pub const SUCCESS_CODE: i64 = 200;
/// Envelope `code` that denotes an authentication failure.
pub const UNAUTHORIZED_CODE: i64 = 401;

/// Every backend endpoint wraps its payload in this envelope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Application status code; `200` on success.
    pub code: i64,
    /// Human-readable message; may be empty or null.
    #[serde(default)]
    pub message: Option<String>,
    /// The payload; `null` on most failures.
    #[serde(default = "Option::default")]
    pub data: Option<T>,
}

impl<T> ApiEnvelope<T> {
    /// Build a success envelope around `data`.
    pub fn success(data: T) -> Self {
        Self {
            code: SUCCESS_CODE,
            message: Some("操作成功".to_string()),
            data: Some(data),
        }
    }

    /// Build a failure envelope without payload.
    pub fn failure(code: i64, message: impl Into<String>) -> Self {
        Self {
            code,
            message: Some(message.into()),
            data: None,
        }
    }

    /// Whether `code` denotes success.
    pub fn is_success(&self) -> bool {
        self.code == SUCCESS_CODE
    }

    /// Whether `code` denotes an authentication failure.
    pub fn is_unauthorized(&self) -> bool {
        self.code == UNAUTHORIZED_CODE
    }

    /// The message, or `fallback` when it is absent or empty.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.message.as_deref() {
            Some(m) if !m.is_empty() => m,
            _ => fallback,
        }
    }
}
