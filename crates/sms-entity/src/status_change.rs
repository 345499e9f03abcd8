//! Academic status change applications (major transfer, suspension, ...).

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub change_id: String,
    pub stu_id: String,
    /// `转专业`, `交换`, `退学`, `休学`, `复学`, or `转学`.
    #[serde(default)]
    pub change_type: Option<String>,
    #[serde(default)]
    pub change_reason: Option<String>,
    #[serde(default)]
    pub current_school: Option<String>,
    #[serde(default)]
    pub current_college: Option<String>,
    #[serde(default)]
    pub current_major: Option<String>,
    #[serde(default)]
    pub target_school: Option<String>,
    #[serde(default)]
    pub target_college: Option<String>,
    #[serde(default)]
    pub target_major: Option<String>,
    #[serde(default)]
    pub apply_date: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub advisor_id: Option<String>,
    #[serde(default)]
    pub advisor_status: Option<String>,
    #[serde(default)]
    pub advisor_opinion: Option<String>,
    #[serde(default)]
    pub admin_id: Option<String>,
    #[serde(default)]
    pub admin_status: Option<String>,
    #[serde(default)]
    pub admin_opinion: Option<String>,
    #[serde(default)]
    pub apply_status: Option<String>,
}

/// Filters for `/statusChange/page`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangeQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_num: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stu_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_status: Option<String>,
}
