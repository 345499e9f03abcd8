//! System notices and their read state.

use serde::{Deserialize, Serialize};

/// A notice addressed to one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub notice_id: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub notice_type: Option<String>,
    /// Recipient user ID.
    #[serde(default)]
    pub target_user: Option<String>,
    /// `student` or `advisor`.
    #[serde(default)]
    pub target_type: Option<String>,
    #[serde(default)]
    pub publish_user: Option<String>,
    #[serde(default)]
    pub publish_user_id: Option<String>,
    #[serde(default)]
    pub publish_time: Option<String>,
    /// `普通` or `重要`.
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub read_time: Option<String>,
}

/// Filters for `/notice/page`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticeQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_num: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice_type: Option<String>,
}
