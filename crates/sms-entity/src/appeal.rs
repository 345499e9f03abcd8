//! Appeals against punishments.

use serde::{Deserialize, Serialize};

/// An appeal filed by a student against one punishment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appeal {
    pub appeal_id: String,
    pub punishment_id: String,
    pub stu_id: String,
    #[serde(default)]
    pub appeal_reason: Option<String>,
    #[serde(default)]
    pub appeal_date: Option<String>,
    #[serde(default)]
    pub advisor_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisor_opinion: Option<String>,
    #[serde(default)]
    pub admin_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_opinion: Option<String>,
    /// `受理中`, `已通过`, or `未通过`.
    #[serde(default)]
    pub appeal_status: Option<String>,
}

/// Filters for `/appeal/page`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppealQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_num: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stu_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appeal_status: Option<String>,
}
