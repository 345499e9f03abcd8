//! Route table and guard configuration.

use serde::{Deserialize, Serialize};

/// Navigation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Path of the login view; target of every authentication redirect.
    #[serde(default = "default_login_path")]
    pub login_path: String,
    /// Page title used when the target route declares none.
    #[serde(default = "default_title")]
    pub default_title: String,
    /// Maximum redirects followed for a single navigation.
    #[serde(default = "default_max_redirects")]
    pub max_redirects: usize,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            login_path: default_login_path(),
            default_title: default_title(),
            max_redirects: default_max_redirects(),
        }
    }
}

fn default_login_path() -> String {
    "/login".to_string()
}

fn default_title() -> String {
    "学生学籍管理系统".to_string()
}

fn default_max_redirects() -> usize {
    8
}
