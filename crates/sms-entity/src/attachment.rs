//! File attachments linked to workflow records.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Metadata of an uploaded file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub attachment_id: String,
    pub file_name: String,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub file_size: u64,
    #[serde(default)]
    pub file_type: Option<String>,
    /// ID of the record the file belongs to.
    pub related_id: String,
    pub related_type: RelatedType,
    #[serde(default)]
    pub upload_user_id: Option<String>,
    #[serde(default)]
    pub upload_time: Option<String>,
}

/// Kind of record an attachment is linked to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelatedType {
    Award,
    Punishment,
    StatusChange,
    LeaveSchool,
}

impl RelatedType {
    /// Wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Award => "award",
            Self::Punishment => "punishment",
            Self::StatusChange => "statusChange",
            Self::LeaveSchool => "leaveSchool",
        }
    }
}

impl fmt::Display for RelatedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for RelatedType {
    type Err = sms_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "award" => Ok(Self::Award),
            "punishment" => Ok(Self::Punishment),
            "statusChange" => Ok(Self::StatusChange),
            "leaveSchool" => Ok(Self::LeaveSchool),
            _ => Err(sms_core::AppError::validation(format!(
                "Invalid attachment relation: '{s}'. Expected one of: award, punishment, statusChange, leaveSchool"
            ))),
        }
    }
}
