//! Request pipeline configuration.

use serde::{Deserialize, Serialize};

/// Settings for the shared HTTP client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Base URL every API path is joined onto.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds. A timed-out call fails as a transport error.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
    /// Response header that carries a silently rotated bearer token.
    #[serde(default = "default_refresh_header")]
    pub refresh_header: String,
    /// Substrings of an envelope `message` that mean the server considers
    /// the session expired even though `code` is not 401.
    #[serde(default = "default_expiry_markers")]
    pub expiry_markers: Vec<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            refresh_header: default_refresh_header(),
            expiry_markers: default_expiry_markers(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_refresh_header() -> String {
    "x-new-token".to_string()
}

fn default_expiry_markers() -> Vec<String> {
    ["登录已过期", "请重新登录", "token", "Token", "未登录", "身份验证"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
