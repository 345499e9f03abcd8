//! Leave-school procedures.
//!
//! Leaving requires sign-off from the dormitory, library and finance
//! administrators before the academic-affairs administrator closes it.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveSchool {
    pub leave_id: String,
    pub stu_id: String,
    /// `毕业`, `退学`, `休学`, `转学`, or `交换`.
    #[serde(default)]
    pub leave_type: Option<String>,
    #[serde(default)]
    pub leave_reason: Option<String>,
    #[serde(default)]
    pub apply_date: Option<String>,
    #[serde(default)]
    pub leave_date: Option<String>,
    #[serde(default)]
    pub dormitory_reviewer_id: Option<String>,
    #[serde(default)]
    pub dormitory_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dormitory_opinion: Option<String>,
    #[serde(default)]
    pub library_reviewer_id: Option<String>,
    #[serde(default)]
    pub library_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub library_opinion: Option<String>,
    #[serde(default)]
    pub finance_reviewer_id: Option<String>,
    #[serde(default)]
    pub finance_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finance_opinion: Option<String>,
    #[serde(default)]
    pub admin_id: Option<String>,
    #[serde(default)]
    pub admin_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_opinion: Option<String>,
    /// `审核中`, `已通过`, or `未通过`.
    #[serde(default)]
    pub overall_status: Option<String>,
}

/// Filters for `/leaveSchool/page`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveSchoolQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_num: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stu_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_status: Option<String>,
}
