//! Disciplinary punishments.

use serde::{Deserialize, Serialize};

/// A punishment record.
///
/// `punishment_status` moves through `审批中`, `已生效`, `申诉中`, `已撤销`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Punishment {
    pub punishment_id: String,
    pub stu_id: String,
    /// `警告`, `严重警告`, `记过`, `留校察看`, or `开除学籍`.
    #[serde(default)]
    pub punishment_type: Option<String>,
    #[serde(default)]
    pub punishment_reason: Option<String>,
    #[serde(default)]
    pub issue_org: Option<String>,
    #[serde(default)]
    pub apply_date: Option<String>,
    #[serde(default)]
    pub punishment_date: Option<String>,
    /// Who proposed the punishment.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applicant_role: Option<String>,
    #[serde(default)]
    pub admin_status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_opinion: Option<String>,
    #[serde(default)]
    pub punishment_status: Option<String>,
}

/// Filters for `/punishment/page`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PunishmentQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_num: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stu_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub punishment_status: Option<String>,
}
