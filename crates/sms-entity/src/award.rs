//! Award applications.
//!
//! An award passes two review stages: the advisor, then an administrator.
//! `award_status` is the overall outcome (`审批中`, `已通过`, `未通过`).

use serde::{Deserialize, Serialize};

/// An award application and its review trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    pub award_id: String,
    pub stu_id: String,
    #[serde(default)]
    pub award_type: Option<String>,
    #[serde(default)]
    pub award_level: Option<String>,
    #[serde(default)]
    pub award_name: Option<String>,
    #[serde(default)]
    pub award_amount: Option<f64>,
    #[serde(default)]
    pub issue_org: Option<String>,
    #[serde(default)]
    pub apply_date: Option<String>,
    #[serde(default)]
    pub award_date: Option<String>,
    #[serde(default)]
    pub advisor_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub advisor_opinion: Option<String>,
    #[serde(default)]
    pub admin_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_opinion: Option<String>,
    #[serde(default)]
    pub award_status: Option<String>,
}

/// Filters for `/award/page`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_num: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stu_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub award_status: Option<String>,
}
