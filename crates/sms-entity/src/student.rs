//! Student master data: basic personal info and academic status.

use serde::{Deserialize, Serialize};

/// Personal information of a student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentBasicInfo {
    /// Student number.
    pub stu_id: String,
    pub name: String,
    /// `男` or `女`.
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub id_card: Option<String>,
    #[serde(default)]
    pub birth_date: Option<String>,
    #[serde(default)]
    pub nationality: Option<String>,
    #[serde(default)]
    pub nation: Option<String>,
    #[serde(default)]
    pub native_place: Option<String>,
    /// `群众`, `共青团员`, `中共党员`, or `中共预备党员`.
    #[serde(default)]
    pub political_status: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// Academic standing of a student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStatusInfo {
    pub stu_id: String,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub major: Option<String>,
    #[serde(default)]
    pub class_name: Option<String>,
    /// `在读`, `毕业`, `退学`, `休学`, `转学`, or `保留学籍`.
    #[serde(default)]
    pub academic_status: Option<String>,
    #[serde(default)]
    pub admission_date: Option<String>,
    #[serde(default)]
    pub graduation_date: Option<String>,
    /// Academic warning: `无`, `一级`, `二级`, `三级`.
    #[serde(default)]
    pub warning_level: Option<String>,
    /// `已注册` or `未注册`.
    #[serde(default)]
    pub register_status: Option<String>,
    #[serde(default)]
    pub advisor_id: Option<String>,
    /// Advisor display name.
    #[serde(default)]
    pub advisor: Option<String>,
}

/// Filters for `/studentBasicInfo/page`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentBasicInfoQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_num: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    /// Matches student number or name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

/// Filters for `/studentStatusInfo/page`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentStatusInfoQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_num: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advisor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub academic_status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
}
